use dolls_db::PoolConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Per-call store deadline in seconds (default: `3`). A policy value,
    /// not a structural one, hence configuration-driven.
    pub store_timeout_secs: u64,
    /// Connection-pool limits.
    pub pool: PoolConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `5000`    |
    /// | `STORE_TIMEOUT_SECS`   | `3`       |
    /// | `DB_MAX_CONNECTIONS`   | `10`      |
    /// | `DB_IDLE_TIMEOUT_SECS` | `180`     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let store_timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "3".into())
            .parse()
            .expect("STORE_TIMEOUT_SECS must be a valid u64");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let idle_timeout_secs: u64 = std::env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "180".into())
            .parse()
            .expect("DB_IDLE_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            store_timeout_secs,
            pool: PoolConfig {
                max_connections,
                idle_timeout_secs,
            },
        }
    }
}
