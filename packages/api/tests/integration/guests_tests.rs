use api::test_utils::TestContext;
use api::types::{GuestRsvp, MenuChoice, PlusOne};

fn plus_one(first: &str, menu: MenuChoice) -> PlusOne {
    PlusOne {
        first_name: first.to_string(),
        last_name: "Bianchi".to_string(),
        menu: Some(menu),
        dietary_restrictions: String::new(),
    }
}

fn attending(email: &str, plus_ones: Vec<PlusOne>) -> GuestRsvp {
    GuestRsvp {
        first_name: "Giulia".to_string(),
        last_name: "Verdi".to_string(),
        email: email.to_string(),
        attendance: Some(true),
        menu: Some(MenuChoice::Regular),
        dietary_restrictions: "none".to_string(),
        plus_ones,
    }
}

#[tokio::test]
async fn insert_then_list_keeps_plus_ones_in_order() {
    let ctx = TestContext::new().await;

    let rsvp = attending(
        "giulia@test.com",
        vec![
            plus_one("Sara", MenuChoice::Vegetarian),
            plus_one("Marco", MenuChoice::Regular),
        ],
    );
    let id = api::db::guests::insert_guest(&ctx.pool, &rsvp)
        .await
        .expect("Insert should succeed");

    let records = api::db::guests::list_guests(&ctx.pool)
        .await
        .expect("List should succeed");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id, id);
    assert!(record.attendance);
    assert_eq!(record.menu_choice.as_deref(), Some("regular"));
    assert!(record.created_at.is_some());
    let names: Vec<&str> = record
        .plus_ones
        .iter()
        .map(|p| p.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Sara", "Marco"]);
    assert_eq!(record.plus_ones[0].menu_choice.as_deref(), Some("vegetarian"));
}

#[tokio::test]
async fn list_is_newest_first() {
    let ctx = TestContext::new().await;

    api::db::guests::insert_guest(&ctx.pool, &attending("first@test.com", vec![]))
        .await
        .expect("Insert should succeed");
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    api::db::guests::insert_guest(&ctx.pool, &attending("second@test.com", vec![]))
        .await
        .expect("Insert should succeed");

    let records = api::db::guests::list_guests(&ctx.pool)
        .await
        .expect("List should succeed");
    let emails: Vec<&str> = records.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(emails, vec!["second@test.com", "first@test.com"]);
}

#[tokio::test]
async fn failed_plus_one_insert_leaves_no_orphan_guest() {
    let ctx = TestContext::new().await;

    sqlx::query("drop table plus_ones")
        .execute(&ctx.pool)
        .await
        .expect("Should drop plus_ones");

    let result = api::db::guests::insert_guest(
        &ctx.pool,
        &attending("orphan@test.com", vec![plus_one("Sara", MenuChoice::Regular)]),
    )
    .await;
    assert!(result.is_err(), "Plus-one insert should fail");

    let count = api::db::guests::count_guests(&ctx.pool)
        .await
        .expect("Count should succeed");
    assert_eq!(count, 0, "Guest row must be rolled back");
}

#[tokio::test]
async fn submit_rsvp_normalizes_declines() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let rsvp = GuestRsvp {
        first_name: " Dario ".to_string(),
        last_name: "Martin".to_string(),
        email: "dario@test.com".to_string(),
        attendance: Some(false),
        menu: Some(MenuChoice::Vegetarian),
        dietary_restrictions: String::new(),
        plus_ones: vec![PlusOne::default()],
    };
    api::submit_rsvp(rsvp).await.expect("Submit should succeed");

    let records = api::list_guests().await.expect("List should succeed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].first_name, "Dario");
    assert!(!records[0].attendance);
    assert_eq!(records[0].menu_choice, None);
    assert!(records[0].plus_ones.is_empty());
}

#[tokio::test]
async fn submit_rsvp_rejects_invalid_records() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let mut rsvp = attending("not-an-email", vec![]);
    rsvp.menu = None;

    let result = api::submit_rsvp(rsvp).await;
    assert!(result.is_err(), "Invalid RSVP should be rejected");
    let error = result.unwrap_err().to_string();
    assert!(error.contains("email"), "Error should name the email field");
    assert!(error.contains("menu"), "Error should name the menu field");

    let count = api::db::guests::count_guests(&ctx.pool)
        .await
        .expect("Count should succeed");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn stored_records_feed_the_dashboard() {
    let ctx = TestContext::new().await;

    api::db::seed::seed_database(&ctx.pool)
        .await
        .expect("Seed should succeed");

    let records = api::db::guests::list_guests(&ctx.pool)
        .await
        .expect("List should succeed");
    let totals = api::dashboard::summarize(&records);
    assert_eq!(totals.rsvps, 3);
    assert_eq!(totals.guests, 3);
    assert_eq!(totals.declined, 1);
    assert_eq!(totals.meals.regular, 1);
    assert_eq!(totals.meals.vegetarian, 2);
    assert_eq!(totals.meals.other, 0);
}
