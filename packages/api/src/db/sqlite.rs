use super::{seed, Database};
use anyhow::{Context, Result};
use sqlx::{Any, Pool};
use std::path::Path;

pub struct SqliteDatabase {
    pool: Pool<Any>,
}

impl SqliteDatabase {
    pub async fn connect(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context("Failed to create database directory")?;
            }
        }

        let url = format!("sqlite://{}?mode=rwc", path);
        let pool = sqlx::any::AnyPoolOptions::new()
            .max_connections(1) // single writer
            .connect(&url)
            .await
            .context("Failed to connect to SQLite")?;

        Ok(Self { pool })
    }

    pub async fn seed_if_empty(&self) -> Result<()> {
        let count = super::guests::count_guests(&self.pool).await?;
        if count == 0 {
            tracing::info!("Database is empty, seeding with demo RSVPs...");
            seed::seed_database(&self.pool).await?;
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl Database for SqliteDatabase {
    async fn pool(&self) -> &Pool<Any> {
        &self.pool
    }

    async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run SQLite migrations")?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
