//! Database configuration loaded from the environment.

/// Default pool size when `DATABASE_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load config from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
    ///
    /// A `.env` file is honored for local development. A malformed
    /// `DATABASE_MAX_CONNECTIONS` falls back to the default.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        Ok(Self {
            database_url,
            max_connections,
        })
    }
}
