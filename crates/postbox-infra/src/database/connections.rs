use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How many times to try establishing the pool at startup before
    /// giving up. The first try counts as an attempt.
    pub connect_attempts: u32,
    /// Delay before the second attempt; doubles after each failure.
    pub connect_backoff: Duration,
}

/// Connection manager for the posts database.
///
/// Requests draw connections from the pool per statement and return them
/// deterministically, replacing the single shared cursor this service
/// descends from.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(not(feature = "postgres"))]
pub struct DatabaseConnections;

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Initialize the connection pool from configuration.
    ///
    /// Retries a bounded number of times with doubling backoff, then fails
    /// startup with the last connection error.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let attempts = config.connect_attempts.max(1);
        let mut backoff = config.connect_backoff;

        for attempt in 1..=attempts {
            match Database::connect(opts.clone()).await {
                Ok(main) => {
                    tracing::info!(
                        "Database connected (pool: {}, attempt: {})",
                        config.max_connections,
                        attempt
                    );
                    return Ok(Self { main });
                }
                Err(e) if attempt < attempts => {
                    tracing::warn!(
                        "Database connection failed (attempt {}/{}): {}. Retrying in {:?}",
                        attempt,
                        attempts,
                        e,
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(e) => {
                    tracing::error!(
                        "Database connection failed after {} attempts: {}",
                        attempts,
                        e
                    );
                    return Err(e);
                }
            }
        }

        unreachable!("connect loop always returns")
    }
}
