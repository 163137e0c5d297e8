//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod post_store;

pub use post_store::PostStore;
