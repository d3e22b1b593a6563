// Application state
// Created once at startup and cloned into each handler by axum

use crate::contacts::{ContactStore, InMemoryContactStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Contact storage used by the API handlers
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    /// Create state around an existing store
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryContactStore::new()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
