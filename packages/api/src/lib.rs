//! This crate contains the shared RSVP types, the validation and dashboard
//! logic used on both sides, and all fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod dashboard;
pub mod types;
pub mod validation;

#[cfg(feature = "server")]
pub mod db;

#[cfg(feature = "server")]
pub mod state;

mod access;
mod guests;


#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Health plus database reachability and RSVP count.
#[get("/api/health/detailed")]
pub async fn detailed_health_check() -> Result<serde_json::Value, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("detailed_health_check is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use serde_json::json;

        tracing::debug!("detailed_health_check");
        let (mode, backend, database, rsvps) = match state::AppState::global().await {
            Ok(state) => {
                let mode = format!("{:?}", state.config.mode);
                let backend = state.db.backend();
                match db::guests::count_guests(state.db.pool().await).await {
                    Ok(count) => (mode, backend, "ok", Some(count)),
                    Err(e) => {
                        tracing::warn!("detailed_health_check: {e:#}");
                        (mode, backend, "error", None)
                    }
                }
            }
            Err(e) => {
                tracing::error!("detailed_health_check: state unavailable: {e:#}");
                ("unknown".to_string(), "unknown", "unavailable", None)
            }
        };

        Ok(json!({
            "status": if database == "ok" { "healthy" } else { "degraded" },
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "mode": mode,
            "backend": backend,
            "checks": {
                "database": database,
                "rsvps": rsvps,
            }
        }))
    }
}

pub use access::{enter, public_config};
pub use guests::{list_guests, submit_rsvp};
