//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Result;
use quill_core::ports::PostStore;
use quill_infra::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "database")]
use anyhow::Context;
#[cfg(feature = "database")]
use quill_infra::DatabasePostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Open the post store described by the configuration.
    ///
    /// With a database configured, a failed connection is a startup error.
    /// Without one, posts live in memory.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Result<Self> {
        let posts: Arc<dyn PostStore> = match db_config {
            #[cfg(feature = "database")]
            Some(config) => {
                let store = DatabasePostStore::connect(config)
                    .await
                    .context("Failed to connect to database")?;
                Arc::new(store)
            }
            #[cfg(not(feature = "database"))]
            Some(_) => {
                tracing::warn!(
                    "DATABASE_URL set but the database feature is disabled - using in-memory store"
                );
                Arc::new(InMemoryPostStore::new())
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostStore::new())
            }
        };

        tracing::info!(store = posts.backend(), "Application state initialized");

        Ok(Self::new(posts))
    }
}
