//! Application state.

use std::sync::Arc;

use salesboard_store::RocksStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The store handle is opened once at startup and passed to every handler;
/// no other shared mutable state exists in the process.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<RocksStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<RocksStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
