//! Process lifecycle: open the store, serve HTTP, shut both down.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use quill_core::ports::PostStore;

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::request_id::propagate_request_id;
use crate::state::AppState;

/// A started server. Dropping it does not stop the server; call
/// [`RunningServer::close`] or [`RunningServer::run_until_stopped`].
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
    state: AppState,
}

/// Bind the listener, open the post store and start serving in the background.
///
/// Port 0 binds an ephemeral port; the bound address is available from
/// [`RunningServer::addr`]. Must be called from within an actix runtime.
pub async fn run_server(config: AppConfig) -> Result<RunningServer> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    let state = AppState::connect(config.database.as_ref()).await?;
    let data = web::Data::new(state.clone());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(propagate_request_id))
            .wrap(TracingLogger::default())
            .app_data(data.clone())
            .configure(handlers::configure_routes)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server
        .listen(listener)
        .context("Failed to start HTTP server")?
        .run();
    let handle = server.handle();
    let task = actix_web::rt::spawn(server);

    tracing::info!(%addr, store = state.posts.backend(), "Quill API listening");

    Ok(RunningServer {
        addr,
        handle,
        task,
        state,
    })
}

impl RunningServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for clients, e.g. `http://127.0.0.1:8080`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The store behind the running server.
    pub fn store(&self) -> Arc<dyn PostStore> {
        Arc::clone(&self.state.posts)
    }

    /// Gracefully stop the listener, then close the store connection.
    pub async fn close(self) -> Result<()> {
        tracing::info!(addr = %self.addr, "Stopping server");

        self.handle.stop(true).await;
        let served = self.task.await;

        self.state
            .posts
            .close()
            .await
            .context("Failed to close post store")?;

        served
            .context("Server task panicked")?
            .context("Server exited with error")
    }

    /// Serve until the server exits on its own (e.g. Ctrl-C), then close the store.
    pub async fn run_until_stopped(self) -> Result<()> {
        let served = self.task.await;

        self.state
            .posts
            .close()
            .await
            .context("Failed to close post store")?;

        served
            .context("Server task panicked")?
            .context("Server exited with error")
    }
}
