//! Connection settings loaded from the environment.
//!
//! A `.env` file in the working directory is honoured when present, but real
//! environment variables always win.

use std::env;
use std::time::Duration;

use crate::DbError;

/// Primary connection URL variable.
pub const URL_VAR: &str = "POSTGRES_URL";
/// Fallback URL variable, also read by `sqlx` tooling.
pub const FALLBACK_URL_VAR: &str = "DATABASE_URL";
/// Optional pool ceiling.
pub const MAX_CONNECTIONS_VAR: &str = "POSTGRES_MAX_CONNECTIONS";

/// Optional pool acquire timeout, in whole seconds.
pub const ACQUIRE_TIMEOUT_VAR: &str = "POSTGRES_ACQUIRE_TIMEOUT_SECS";

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything needed to open the shared pool.
#[derive(Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// How long a query waits for a free pooled connection.
    pub acquire_timeout: Duration,
}

// The URL usually embeds a password.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("database_url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DbConfig {
    /// Load configuration from the process environment (after `.env`).
    pub fn from_env() -> Result<Self, DbError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// # Errors
    /// [`DbError::Config`] if no URL is set or a numeric setting is not a
    /// positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup(FALLBACK_URL_VAR).filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| {
                DbError::Config(format!("{URL_VAR} (or {FALLBACK_URL_VAR}) is required"))
            })?;

        let max_connections =
            positive_u32(&lookup, MAX_CONNECTIONS_VAR)?.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let acquire_timeout = positive_u32(&lookup, ACQUIRE_TIMEOUT_VAR)?
            .map(|secs| Duration::from_secs(u64::from(secs)))
            .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT);

        Ok(Self { database_url, max_connections, acquire_timeout })
    }
}

/// Blank counts as unset; anything else must be an integer above zero.
fn positive_u32<F>(lookup: &F, key: &str) -> Result<Option<u32>, DbError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(DbError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
