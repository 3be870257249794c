//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "database")]
use blog_infra::database::{DatabaseConnections, SeaOrmPostRepository};

/// Where posts are stored.
#[derive(Clone)]
pub enum Storage {
    InMemory,
    #[cfg(feature = "database")]
    Database(Arc<DatabaseConnections>),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Falls back to the in-memory store when no database is configured or it cannot be reached.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "database")]
        let state = match db_config {
            Some(config) => match connect(config).await {
                Ok(connections) => Self::with_database(Arc::new(connections)),
                Err(e) => {
                    tracing::error!(
                        "Failed to prepare database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "database"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without database feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            storage: Storage::InMemory,
        }
    }

    /// State backed by an already connected (and migrated) database.
    #[cfg(feature = "database")]
    pub fn with_database(connections: Arc<DatabaseConnections>) -> Self {
        Self {
            posts: Arc::new(SeaOrmPostRepository::new(connections.main.clone())),
            storage: Storage::Database(connections),
        }
    }
}

/// Connect and apply pending migrations if configured to.
#[cfg(feature = "database")]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnections, migration::DbErr> {
    use migration::{Migrator, MigratorTrait};

    let connections = DatabaseConnections::init(config).await?;
    if config.auto_migrate {
        Migrator::up(&connections.main, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(connections)
}
