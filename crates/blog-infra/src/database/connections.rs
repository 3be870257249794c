#[cfg(feature = "database")]
use std::time::Duration;

#[cfg(feature = "database")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations on start-up.
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 10,
            auto_migrate: true,
        }
    }

    pub fn with_pool(mut self, min_connections: u32, max_connections: u32) -> Self {
        self.min_connections = min_connections;
        self.max_connections = max_connections;
        self
    }

    /// Name of the backend from the URL scheme, without credentials.
    pub fn backend_name(&self) -> &str {
        self.url.split(':').next().unwrap_or("unknown")
    }
}

/// Connection pool to the posts database.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&DatabaseConfig::new("postgres://...")).await?;
/// let posts = SeaOrmPostRepository::new(db.main.clone());
/// ```
#[cfg(feature = "database")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "database")]
impl DatabaseConnections {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!(
            backend = config.backend_name(),
            "Initializing database connection..."
        );

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { main })
    }

    /// Check the database is reachable.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }

    /// Close the pool, waiting for in-flight connections to be released.
    pub async fn close(self) -> Result<(), DbErr> {
        self.main.close().await
    }
}
