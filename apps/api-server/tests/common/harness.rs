//! Test harness that runs the real server for black-box API tests.
//!
//! Every test gets its own server on an ephemeral port backed by a fresh
//! SQLite in-memory database, seeded with `SEED_COUNT` random posts.
//! Set `TEST_DATABASE_URL` to run against another database instead; shared
//! databases need `--test-threads=1` since teardown drops every post.

use std::sync::Arc;

use anyhow::{Context, Result};
use api_server::{AppConfig, RunningServer, run_server};
use quill_core::domain::Post;
use quill_core::ports::PostStore;
use quill_infra::DatabaseConfig;
use test_context::AsyncTestContext;
use uuid::Uuid;

use super::seed_data;

/// Test harness that manages the server lifecycle and seed data.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[actix_web::test]
/// async fn my_test(ctx: &TestHarness) {
///     let res = ctx.client.get(ctx.url("/posts")).send().await.unwrap();
/// }
/// ```
pub struct TestHarness {
    pub server: RunningServer,
    /// HTTP client for driving the API.
    pub client: reqwest::Client,
    /// Posts inserted before the test ran.
    pub seeded: Vec<Post>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::start().await.expect("Failed to start test harness")
    }

    async fn teardown(self) {
        self.stop().await.expect("Failed to stop test harness");
    }
}

impl TestHarness {
    /// Start a server and seed the database.
    pub async fn start() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite::memory:".to_string());

        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: Some(1),
            database: Some(DatabaseConfig::new(database_url).with_pool(1, 1)),
        };

        let server = run_server(config)
            .await
            .context("Failed to start server")?;

        tracing::info!("seeding blog data");
        let seeded = server
            .store()
            .insert_many(seed_data())
            .await
            .context("Failed to seed posts")?;

        Ok(Self {
            server,
            client: reqwest::Client::new(),
            seeded,
        })
    }

    /// Drop all posts, then stop the server and close its connection.
    pub async fn stop(self) -> Result<()> {
        tracing::warn!("Deleting database");
        self.server
            .store()
            .drop_all()
            .await
            .context("Failed to drop posts")?;

        self.server.close().await
    }

    /// Absolute URL for a path on the running server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }

    /// Direct store access for assertions behind the API's back.
    pub fn store(&self) -> Arc<dyn PostStore> {
        self.server.store()
    }

    /// Look a post up in the store by the id string the API returned.
    pub async fn stored_post(&self, id: &str) -> Option<Post> {
        let id = Uuid::parse_str(id).expect("API returned a non-UUID id");
        self.store()
            .find_by_id(id)
            .await
            .expect("Store lookup failed")
    }
}
