//! Test harness: an isolated, seeded database and a running server per test.
//!
//! `TEST_DATABASE_URL` selects the test database (for example a dedicated
//! PostgreSQL instance; run with `--test-threads=1` when it is shared).
//! When unset, every test gets its own throw-away SQLite file.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use tempfile::TempDir;

use blog_api::state::{self, AppState};
use blog_api::telemetry::init_test_telemetry;
use blog_core::domain::Post;
use blog_core::ports::PostRepository;
use blog_fixtures::PostGenerator;
use blog_infra::database::{DatabaseConfig, DatabaseConnections};

/// Seed used when a test does not need a specific one.
pub const DEFAULT_SEED: u64 = 0x5EED;

pub struct TestContext {
    pub address: String,
    pub client: reqwest::Client,
    /// Direct access to storage, bypassing HTTP.
    pub posts: Arc<dyn PostRepository>,
    /// Posts inserted during setup, in insertion order.
    pub seeded: Vec<Post>,
    connections: Arc<DatabaseConnections>,
    server: ServerHandle,
    _db_dir: Option<TempDir>,
}

impl TestContext {
    pub async fn setup() -> Self {
        Self::setup_with_seed(DEFAULT_SEED).await
    }

    /// Migrate and seed the test database, then start a server on an ephemeral port.
    pub async fn setup_with_seed(seed: u64) -> Self {
        dotenvy::dotenv().ok();
        init_test_telemetry();

        let (config, db_dir) = test_database_config();
        let connections = Arc::new(
            state::connect(&config)
                .await
                .expect("test database should be reachable"),
        );
        let app_state = AppState::with_database(connections.clone());

        // Leftovers from an aborted run on a shared database.
        app_state
            .posts
            .delete_all()
            .await
            .expect("failed to clear test database");

        let seeded = seed_posts(app_state.posts.as_ref(), seed).await;

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
        let port = listener.local_addr().expect("listener has an address").port();
        let server =
            blog_api::run(listener, app_state.clone(), 1).expect("failed to start server");
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            posts: app_state.posts,
            seeded,
            connections,
            server: handle,
            _db_dir: db_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Any seeded post.
    pub fn some_post(&self) -> &Post {
        &self.seeded[0]
    }

    /// Stop the server and drop every post.
    pub async fn teardown(self) {
        drop(self.client);
        self.server.stop(false).await;

        self.posts
            .delete_all()
            .await
            .expect("failed to clear test database");

        if let Ok(connections) = Arc::try_unwrap(self.connections) {
            connections.close().await.ok();
        }
    }
}

async fn seed_posts(posts: &dyn PostRepository, seed: u64) -> Vec<Post> {
    tracing::info!("Seeding blog data");

    let batch: Vec<Post> = PostGenerator::seeded(seed)
        .seed_batch()
        .into_iter()
        .map(Post::new)
        .collect();

    posts
        .insert_many(batch.clone())
        .await
        .expect("failed to seed posts");

    batch
}

fn test_database_config() -> (DatabaseConfig, Option<TempDir>) {
    if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
        return (DatabaseConfig::new(url).with_pool(1, 5), None);
    }

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("blog.db").display());
    (DatabaseConfig::new(url).with_pool(1, 5), Some(dir))
}
