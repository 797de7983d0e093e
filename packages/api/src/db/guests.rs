//! Guest and plus-one rows.
//!
//! Ids and timestamps are stored as text so the same queries run on the
//! SQLite and PostgreSQL backends of the `Any` pool.

use crate::types::{attendance_as_db, attendance_from_db, GuestRecord, GuestRsvp, PlusOneRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{Any, Pool, Row};
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

fn uuid_from_db(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).with_context(|| format!("invalid uuid in database: {value}"))
}

fn datetime_from_db(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            warn!("db.guests: unparseable created_at {value:?}: {e}");
            None
        }
    }
}

/// Insert a guest and all its plus-ones in one transaction. Either every row
/// is written or none is.
pub async fn insert_guest(pool: &Pool<Any>, rsvp: &GuestRsvp) -> Result<Uuid> {
    let attending = rsvp
        .attendance
        .context("attendance must be chosen before storing an RSVP")?;
    let guest_id = Uuid::new_v4();
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let mut tx = pool.begin().await.context("Failed to open transaction")?;

    sqlx::query(
        r#"
        insert into guests (id, first_name, last_name, email, attendance, menu_choice, dietary_restrictions, created_at)
        values ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(guest_id.to_string())
    .bind(&rsvp.first_name)
    .bind(&rsvp.last_name)
    .bind(&rsvp.email)
    .bind(attendance_as_db(attending))
    .bind(rsvp.menu.map(|m| m.as_db().to_string()))
    .bind(&rsvp.dietary_restrictions)
    .bind(&created_at)
    .execute(&mut *tx)
    .await
    .context("Failed to insert guest")?;

    for (position, p) in rsvp.plus_ones.iter().enumerate() {
        sqlx::query(
            r#"
            insert into plus_ones (id, guest_id, position, first_name, last_name, menu_choice, dietary_restrictions)
            values ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(guest_id.to_string())
        .bind(position as i64)
        .bind(&p.first_name)
        .bind(&p.last_name)
        .bind(p.menu.map(|m| m.as_db().to_string()))
        .bind(&p.dietary_restrictions)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("Failed to insert plus-one #{position}"))?;
    }

    tx.commit().await.context("Failed to commit guest")?;

    info!(
        "db.guests.insert_guest: id={} attending={} plus_ones={}",
        guest_id,
        attending,
        rsvp.plus_ones.len()
    );
    Ok(guest_id)
}

/// All guests, newest first, each with plus-ones in the order they were entered.
pub async fn list_guests(pool: &Pool<Any>) -> Result<Vec<GuestRecord>> {
    let guest_rows = sqlx::query(
        r#"
        select id, first_name, last_name, email, attendance, menu_choice, dietary_restrictions, created_at
        from guests
        order by created_at desc
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to list guests")?;

    let plus_one_rows = sqlx::query(
        r#"
        select id, guest_id, first_name, last_name, menu_choice, dietary_restrictions
        from plus_ones
        order by guest_id, position
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to list plus-ones")?;

    let mut plus_ones: HashMap<String, Vec<PlusOneRecord>> = HashMap::new();
    for row in plus_one_rows {
        let guest_id: String = row.get("guest_id");
        plus_ones.entry(guest_id).or_default().push(PlusOneRecord {
            id: uuid_from_db(&row.get::<String, _>("id"))?,
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            menu_choice: row.get("menu_choice"),
            dietary_restrictions: row.get("dietary_restrictions"),
        });
    }

    let mut records = Vec::with_capacity(guest_rows.len());
    for row in guest_rows {
        let id: String = row.get("id");
        records.push(GuestRecord {
            id: uuid_from_db(&id)?,
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
            attendance: attendance_from_db(&row.get::<String, _>("attendance")),
            menu_choice: row.get("menu_choice"),
            dietary_restrictions: row.get("dietary_restrictions"),
            created_at: datetime_from_db(&row.get::<String, _>("created_at")),
            plus_ones: plus_ones.remove(&id).unwrap_or_default(),
        });
    }

    debug!("db.guests.list_guests: count={}", records.len());
    Ok(records)
}

pub async fn count_guests(pool: &Pool<Any>) -> Result<i64> {
    sqlx::query_scalar("select count(*) from guests")
        .fetch_one(pool)
        .await
        .context("Failed to count guests")
}
