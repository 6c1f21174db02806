//! Shared application state.

use stride_core::store::DocumentStore;

/// State handed to every request handler.
///
/// Holds the one store handle for the process; cloning shares the
/// underlying backend.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: DocumentStore,
}

impl AppState {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}
