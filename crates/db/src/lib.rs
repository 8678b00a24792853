pub mod models;
pub mod repositories;
pub mod schema;

use std::str::FromStr;

use eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

pub type DbPool = Pool<Sqlite>;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Opens a private in-memory database.
///
/// Every SQLite connection to `:memory:` gets its own database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn create_memory_pool() -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}
