use crate::config::{AccessConfig, AppConfig, AppMode, DatabaseConfig};
use crate::db::sqlite::SqliteDatabase;
use crate::db::Database;
use crate::state::AppState;
use sqlx::{Any, Pool};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

// Serialize tests that swap the thread-local AppState
static TEST_MUTEX: Mutex<()> = Mutex::new(());

pub struct TestContext {
    pub pool: Pool<Any>,
    pub state: Arc<AppState>,
    db_path: PathBuf,
    _guard: MutexGuard<'static, ()>,
}

impl TestContext {
    /// Fresh, empty, migrated SQLite database with no access passwords.
    pub async fn new() -> Self {
        Self::with_access(AccessConfig::default()).await
    }

    pub async fn with_access(access: AccessConfig) -> Self {
        let guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        // Install sqlx drivers for Any pool
        sqlx::any::install_default_drivers();

        let db_path = PathBuf::from(format!(".test-{}.db", Uuid::new_v4()));

        let database = SqliteDatabase::connect(&db_path.to_string_lossy())
            .await
            .expect("Failed to create test database");
        database
            .run_migrations()
            .await
            .expect("Failed to run migrations");

        let pool = database.pool().await.clone();

        let config = AppConfig {
            mode: AppMode::Local,
            database: DatabaseConfig::SQLite {
                path: db_path.to_string_lossy().to_string(),
            },
            access,
        };

        let state = Arc::new(AppState {
            db: Arc::new(database),
            config,
        });

        Self {
            pool,
            state,
            db_path,
            _guard: guard,
        }
    }

    pub fn set_global(&self) {
        // For tests, set thread-local state instead of global state
        // This allows each test to have its own isolated AppState
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = Some(self.state.clone());
        });
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = None;
        });

        let _ = std::fs::remove_file(&self.db_path);
    }
}
