//! Persistence for Aethera: JSON blobs in a local SQLite key-value table,
//! loaded once into a [`Store`] and rewritten in full on every mutation.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod error;
pub mod kv;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::DbError;
pub use store::{Store, StoreState};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the file if needed.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Limited to one connection that is never recycled, since every new
/// connection to `:memory:` would see an empty database.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
