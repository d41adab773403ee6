//! Application state - shared across all handlers.

use std::sync::Arc;

use postdesk_core::ports::PostRepository;
use postdesk_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use postdesk_infra::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
///
/// The post repository is built once at startup and handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    ///
    /// Falls back to the in-memory store when no database is configured or
    /// the database cannot be reached.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => Arc::new(PostgresPostRepository::new(connections.main)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self::with_repository(posts)
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
