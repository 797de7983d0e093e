use super::Database;
use anyhow::{Context, Result};
use sqlx::any::AnyPoolOptions;
use sqlx::{Any, Pool};
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 5;

pub struct PostgresDatabase {
    pool: Pool<Any>,
}

impl PostgresDatabase {
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = AnyPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(10))
            .connect(url)
            .await
            .context("Failed to connect to PostgreSQL")?;
        tracing::debug!("db.postgres: pool ready, max_connections={MAX_CONNECTIONS}");

        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl Database for PostgresDatabase {
    async fn pool(&self) -> &Pool<Any> {
        &self.pool
    }

    async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run PostgreSQL migrations")?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
