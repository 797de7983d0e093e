use api::test_utils::TestContext;
use api::types::GuestRsvp;

#[tokio::test]
async fn health_is_ok() {
    assert_eq!(api::health_check().await.expect("health"), "OK");
}

#[tokio::test]
async fn detailed_health_reports_database_and_count() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let health = api::detailed_health_check().await.expect("health");
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["mode"], "Local");
    assert_eq!(health["backend"], "sqlite");
    assert_eq!(health["checks"]["database"], "ok");
    assert_eq!(health["checks"]["rsvps"], 0);

    api::submit_rsvp(GuestRsvp {
        first_name: "Elena".to_string(),
        last_name: "Neri".to_string(),
        email: "elena@example.com".to_string(),
        attendance: Some(false),
        ..GuestRsvp::default()
    })
    .await
    .expect("Declining RSVP should be stored");

    let health = api::detailed_health_check().await.expect("health");
    assert_eq!(health["checks"]["rsvps"], 1);
}
