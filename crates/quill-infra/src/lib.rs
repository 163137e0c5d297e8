//! # Quill Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `database` (default) - SQL database support via SeaORM. Without it only
//!   the in-memory store is available.

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostStore;

#[cfg(feature = "database")]
pub use database::DatabasePostStore;
