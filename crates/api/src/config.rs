/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Shared-cache policy for capacity reads.
    pub cache: CacheConfig,
}

/// Cache-control policy advertised on successful capacity reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Lifetime in shared caches (`s-maxage`).
    pub s_maxage_secs: u64,
    /// Window in which a stale response may be served while revalidating.
    pub stale_while_revalidate_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            s_maxage_secs: 30,
            stale_while_revalidate_secs: 60,
        }
    }
}

impl CacheConfig {
    /// The `Cache-Control` header value for cacheable responses.
    ///
    /// Browsers always revalidate (`max-age=0`); shared caches may keep the
    /// response briefly and refresh it in the background.
    pub fn header_value(&self) -> String {
        format!(
            "public, max-age=0, s-maxage={}, stale-while-revalidate={}",
            self.s_maxage_secs, self.stale_while_revalidate_secs
        )
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                             | Default                 |
    /// |-------------------------------------|-------------------------|
    /// | `HOST`                              | `0.0.0.0`               |
    /// | `PORT`                              | `3000`                  |
    /// | `CORS_ORIGINS`                      | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`              | `30`                    |
    /// | `DATABASE_MAX_CONNECTIONS`          | `20`                    |
    /// | `CACHE_S_MAXAGE_SECS`               | `30`                    |
    /// | `CACHE_STALE_WHILE_REVALIDATE_SECS` | `60`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let s_maxage_secs: u64 = std::env::var("CACHE_S_MAXAGE_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("CACHE_S_MAXAGE_SECS must be a valid u64");

        let stale_while_revalidate_secs: u64 = std::env::var("CACHE_STALE_WHILE_REVALIDATE_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("CACHE_STALE_WHILE_REVALIDATE_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            cache: CacheConfig {
                s_maxage_secs,
                stale_while_revalidate_secs,
            },
        }
    }
}
