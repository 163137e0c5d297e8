//! # Quill API Server
//!
//! actix-web application serving the `/posts` resource.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod validation;

pub use config::AppConfig;
pub use server::{RunningServer, run_server};
