//! Postgres connection pool.

use std::time::Duration;

use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool};
use tracing::{debug, info};

use crate::{DbConfig, DbError};

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// Create a new connection pool from the given `database_url`.
///
/// A single direct connection is opened and pinged first, so an unreachable
/// database fails immediately with the underlying cause (e.g. connection
/// refused) instead of a pool timeout.  `max_connections` caps the pool and
/// `acquire_timeout` bounds how long later queries wait for a connection.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, DbError> {
    debug!("Connecting to database (max_connections={})", max_connections);

    let mut conn = PgConnection::connect(database_url).await?;
    conn.ping().await?;
    conn.close().await?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)?;

    info!(
        "Connected to database (max_connections={}, acquire_timeout={:?})",
        max_connections, acquire_timeout
    );
    Ok(pool)
}

/// Open a pool using the settings in `config`.
pub async fn connect(config: &DbConfig) -> Result<DbPool, DbError> {
    create_pool(&config.database_url, config.max_connections, config.acquire_timeout).await
}

/// Read [`DbConfig`] from the environment and open a pool with it.
pub async fn connect_from_env() -> Result<DbPool, DbError> {
    let config = DbConfig::from_env()?;
    connect(&config).await
}
