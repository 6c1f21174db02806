//! The shared document store handle.
//!
//! [`DocumentStore`] wraps a backend behind an `Arc` so it can be created
//! once at startup and handed to every request handler through application
//! state - there is no process-wide global. Cloning is cheap and clones
//! share the same backend.

use std::sync::Arc;

use crate::{
    backend::StoreBackend,
    collection::{Collection, TypedCollection},
    error::StoreResult,
    record::Record,
};

/// A document store bound to some backend implementation.
///
/// # Example
///
/// ```ignore
/// let store = DocumentStore::new(backend);
/// let products = store.collection("shoeproduct");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentStore {
    backend: Arc<dyn StoreBackend>,
}

impl DocumentStore {
    /// Creates a new document store owning the given backend.
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Gets an untyped collection handle with the given name.
    pub fn collection(&self, name: &str) -> Collection<'_> {
        Collection::new(name.to_string(), self.backend.as_ref())
    }

    /// Gets a typed collection handle for the specified record type.
    ///
    /// The collection name comes from the record's `collection_name()`.
    pub fn typed_collection<R: Record>(&self) -> TypedCollection<'_, R> {
        TypedCollection::new(R::collection_name().to_string(), self.backend.as_ref())
    }

    /// Lists all collections in the store.
    ///
    /// Doubles as the liveness probe for the diagnostic endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the store is unreachable.
    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.backend.list_collections().await
    }
}
