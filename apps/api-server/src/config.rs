//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use postbox_infra::database::DatabaseConfig;

/// Which storage backend serves the posts contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StorageBackend,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = Self::database_url().map(|url| DatabaseConfig {
            url,
            max_connections: env_parsed("DB_MAX_CONNECTIONS", 100),
            min_connections: env_parsed("DB_MIN_CONNECTIONS", 10),
            connect_attempts: env_parsed("DB_CONNECT_ATTEMPTS", 5),
            connect_backoff: Duration::from_secs(env_parsed("DB_CONNECT_BACKOFF_SECS", 2)),
        });

        let backend = match env::var("STORAGE_BACKEND").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            Ok("postgres") => StorageBackend::Postgres,
            Ok(other) => {
                tracing::warn!("Unknown STORAGE_BACKEND '{}', selecting by config", other);
                Self::default_backend(database.is_some())
            }
            Err(_) => Self::default_backend(database.is_some()),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parsed("PORT", 8080),
            backend,
            database,
        }
    }

    fn default_backend(database_configured: bool) -> StorageBackend {
        if database_configured {
            StorageBackend::Postgres
        } else {
            tracing::warn!("No database configured; serving posts from the in-memory backend");
            StorageBackend::Memory
        }
    }

    /// The database URL, either given directly or composed from discrete
    /// credential variables (DB_HOST, DB_NAME, DB_USER, DB_PASSWORD).
    fn database_url() -> Option<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Some(url);
        }

        let host = env::var("DB_HOST").ok()?;
        let name = env::var("DB_NAME").ok()?;
        let user = env::var("DB_USER").ok()?;
        let password = env::var("DB_PASSWORD").ok()?;

        Some(format!("postgres://{user}:{password}@{host}/{name}"))
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
