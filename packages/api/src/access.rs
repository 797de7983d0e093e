use crate::types::{PublicConfig, Role};
use dioxus::prelude::*;

/// Tell the client whether the landing page asks for a password.
#[dioxus::prelude::get("/api/config")]
pub async fn public_config() -> Result<PublicConfig, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("public_config is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("access.public_config");
        let state = crate::state::AppState::global()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        Ok(PublicConfig {
            password_gate: state.config.access.gate_enabled(),
        })
    }
}

/// Exchange a landing-page password for the view it unlocks.
#[dioxus::prelude::post("/api/access/enter")]
pub async fn enter(password: String) -> Result<Role, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = password;
        Err(ServerFnError::new("enter is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("access.enter: password_len={}", password.len());
        let state = crate::state::AppState::global()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        match state.config.access.role_for(&password) {
            Some(role) => {
                tracing::info!("access.enter: granted role={:?}", role);
                Ok(role)
            }
            None => {
                tracing::info!("access.enter: rejected");
                Err(ServerFnError::new("incorrect password"))
            }
        }
    }
}
