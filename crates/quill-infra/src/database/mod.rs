//! Database connection management and the SeaORM-backed post store.

mod connections;

#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod post_store;

pub use connections::DatabaseConfig;

#[cfg(feature = "database")]
pub use post_store::DatabasePostStore;
