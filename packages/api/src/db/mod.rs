//! Storage backends for RSVPs. Both speak through a `sqlx::Any` pool so the
//! queries in [`guests`] run unchanged on either.

use anyhow::Result;
use sqlx::{Any, Pool};

pub mod guests;
pub mod postgres;
pub mod seed;
pub mod sqlite;

#[async_trait::async_trait]
pub trait Database: Send + Sync {
    async fn pool(&self) -> &Pool<Any>;

    async fn run_migrations(&self) -> Result<()>;

    /// Short backend label for logs and health reports.
    fn backend(&self) -> &'static str;
}

pub use postgres::PostgresDatabase;
pub use sqlite::SqliteDatabase;
