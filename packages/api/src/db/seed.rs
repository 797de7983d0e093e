use crate::types::{GuestRsvp, MenuChoice, PlusOne};
use anyhow::{Context, Result};
use sqlx::{Any, Pool};

fn demo_guests() -> Vec<GuestRsvp> {
    vec![
        GuestRsvp {
            first_name: "Alice".to_string(),
            last_name: "Dupont".to_string(),
            email: "alice@local.dev".to_string(),
            attendance: Some(true),
            menu: Some(MenuChoice::Regular),
            dietary_restrictions: String::new(),
            plus_ones: vec![PlusOne {
                first_name: "Bruno".to_string(),
                last_name: "Dupont".to_string(),
                menu: Some(MenuChoice::Vegetarian),
                dietary_restrictions: "no nuts".to_string(),
            }],
        },
        GuestRsvp {
            first_name: "Chiara".to_string(),
            last_name: "Lefebvre".to_string(),
            email: "chiara@local.dev".to_string(),
            attendance: Some(true),
            menu: Some(MenuChoice::Vegetarian),
            dietary_restrictions: "lactose intolerant".to_string(),
            plus_ones: Vec::new(),
        },
        GuestRsvp {
            first_name: "Dario".to_string(),
            last_name: "Martin".to_string(),
            email: "dario@local.dev".to_string(),
            attendance: Some(false),
            menu: None,
            dietary_restrictions: String::new(),
            plus_ones: Vec::new(),
        },
    ]
}

pub async fn seed_database(pool: &Pool<Any>) -> Result<()> {
    tracing::info!("Starting database seeding...");

    let guests = demo_guests();
    for guest in &guests {
        super::guests::insert_guest(pool, guest)
            .await
            .with_context(|| format!("Failed to seed guest {}", guest.email))?;
    }

    tracing::info!("Created {} demo RSVPs", guests.len());
    Ok(())
}
