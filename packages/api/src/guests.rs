use crate::types::{GuestRecord, GuestRsvp};
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, info, warn};
use uuid::Uuid;

#[cfg(feature = "server")]
fn email_label(email: &str) -> String {
    let domain = email.split('@').nth(1).unwrap_or("invalid");
    format!("{} (len={})", domain, email.len())
}

/// Store one RSVP together with its plus-ones.
///
/// The record is normalised and validated again here; an invalid record is
/// rejected without touching the database.
#[dioxus::prelude::post("/api/guests/submit")]
pub async fn submit_rsvp(rsvp: GuestRsvp) -> Result<Uuid, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = rsvp;
        Err(ServerFnError::new("submit_rsvp is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let rsvp = rsvp.normalized();
        debug!(
            "guests.submit_rsvp: email={} attendance={:?} plus_ones={}",
            email_label(&rsvp.email),
            rsvp.attendance,
            rsvp.plus_ones.len()
        );

        let errors = crate::validation::validate(&rsvp);
        if !errors.is_empty() {
            warn!("guests.submit_rsvp: rejected, {}", errors);
            return Err(ServerFnError::new(errors.to_string()));
        }

        let state = crate::state::AppState::global()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        let pool = state.db.pool().await;

        let id = crate::db::guests::insert_guest(pool, &rsvp)
            .await
            .map_err(|e| ServerFnError::new(format!("{e:#}")))?;
        info!("guests.submit_rsvp: stored id={}", id);
        Ok(id)
    }
}

/// Every stored RSVP, newest first.
#[dioxus::prelude::get("/api/guests/list")]
pub async fn list_guests() -> Result<Vec<GuestRecord>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("list_guests is server-only"))
    }

    #[cfg(feature = "server")]
    {
        debug!("guests.list_guests");
        let state = crate::state::AppState::global()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        let pool = state.db.pool().await;

        crate::db::guests::list_guests(pool)
            .await
            .map_err(|e| ServerFnError::new(format!("{e:#}")))
    }
}
