use crate::config::{AppConfig, AppMode, DatabaseConfig};
use crate::db::{Database, PostgresDatabase, SqliteDatabase};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Global application state containing all service implementations
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration
    ///
    /// Connects the database for the configured mode, applies migrations, and
    /// seeds an empty local database with demo RSVPs.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        // Required for sqlx::Any pools; without this, AnyPoolOptions panics at runtime.
        sqlx::any::install_default_drivers();

        match config.mode {
            AppMode::Local => tracing::info!("App Mode: LOCAL"),
            AppMode::Production => tracing::info!("App Mode: PRODUCTION"),
        }
        if config.access.gate_enabled() {
            tracing::info!("   Access: password gate");
        } else {
            tracing::info!("   Access: role buttons (no passwords configured)");
        }

        let db: Arc<dyn Database> = match &config.database {
            DatabaseConfig::PostgreSQL { url } => {
                tracing::info!("Connecting to PostgreSQL...");
                let postgres = PostgresDatabase::connect(url).await?;
                postgres.run_migrations().await?;
                tracing::info!("PostgreSQL connected and migrations applied");
                Arc::new(postgres)
            }
            DatabaseConfig::SQLite { path } => {
                tracing::info!("Connecting to SQLite: {}", path);
                let sqlite = SqliteDatabase::connect(path).await?;
                sqlite.run_migrations().await?;
                if config.mode == AppMode::Local {
                    sqlite.seed_if_empty().await?;
                }
                tracing::info!("SQLite connected and migrations applied");
                Arc::new(sqlite)
            }
        };

        Ok(Self { db, config })
    }

    /// Install a pre-built state. Fails if the global state is already set.
    pub fn set_global(state: Arc<Self>) -> Result<()> {
        STATE
            .set(state)
            .map_err(|_| anyhow!("AppState::set_global called more than once"))
    }

    /// Get the global AppState, building it from the environment on first use.
    pub async fn global() -> Result<Arc<Self>> {
        // In tests, check thread-local state first
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Ok(test_state);
        }

        STATE
            .get_or_try_init(|| async {
                let config = AppConfig::from_env().map_err(|e| anyhow!(e))?;
                Ok::<_, anyhow::Error>(Arc::new(Self::from_config(config).await?))
            })
            .await
            .cloned()
    }
}

/// Global state storage, initialised once per process
pub(crate) static STATE: OnceCell<Arc<AppState>> = OnceCell::const_new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
