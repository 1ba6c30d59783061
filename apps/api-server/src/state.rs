//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use postbox_core::ports::PostRepository;
use postbox_infra::memory::MemoryPostRepository;

use crate::config::{AppConfig, StorageBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    ///
    /// A postgres backend that cannot connect within its bounded retry
    /// budget is a startup failure, not a silent fallback.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        let posts: Arc<dyn PostRepository> = match config.backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage backend (seeded)");
                Arc::new(MemoryPostRepository::seeded())
            }
            StorageBackend::Postgres => Self::postgres_repository(config).await?,
        };

        tracing::info!("Application state initialized");

        Ok(Self { posts })
    }

    /// Wrap an arbitrary repository; used by tests.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    #[cfg(feature = "postgres")]
    async fn postgres_repository(config: &AppConfig) -> io::Result<Arc<dyn PostRepository>> {
        use postbox_infra::database::{DatabaseConnections, PostgresPostRepository};

        let db_config = config.database.as_ref().ok_or_else(|| {
            io::Error::other(
                "postgres backend selected but no database configured \
                 (set DATABASE_URL or DB_HOST/DB_NAME/DB_USER/DB_PASSWORD)",
            )
        })?;

        let connections = DatabaseConnections::init(db_config)
            .await
            .map_err(io::Error::other)?;

        Ok(Arc::new(PostgresPostRepository::new(connections.main)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn postgres_repository(_config: &AppConfig) -> io::Result<Arc<dyn PostRepository>> {
        Err(io::Error::other(
            "postgres backend selected but this build has no postgres support",
        ))
    }
}
