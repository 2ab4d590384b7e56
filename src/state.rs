//! Shared application state for Axum handlers.
//!
//! The state is cloned per request handler; all contents are behind `Arc`,
//! so clones are cheap. The store's own lock serializes mutations (see
//! `store.rs`).

use std::sync::Arc;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state for Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory product store
    pub store: Arc<ProductStore>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state from a store and configuration.
    pub fn new(store: ProductStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
