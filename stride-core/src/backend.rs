//! Storage backend abstraction for the document store.
//!
//! The [`StoreBackend`] trait is the contract every storage implementation
//! satisfies. It is deliberately append-only: this system never updates or
//! deletes a document, so the trait exposes exactly the operations the
//! request handlers need - insert, filtered query, point lookup, count, and
//! collection listing (which doubles as the liveness probe for the
//! diagnostic endpoint).
//!
//! The trait is object-safe; the server holds a single `Arc<dyn
//! StoreBackend>` for the life of the process and shares it across
//! requests. The store itself is responsible for concurrency control on
//! documents - no locking or transactions happen in this layer.

use async_trait::async_trait;
use bson::Bson;
use std::fmt::Debug;

use crate::{
    error::StoreResult,
    query::{Filter, Query},
};

/// Abstract interface for document storage backends.
///
/// Implementations must be thread-safe and support concurrent access from
/// multiple async tasks. Operations return
/// [`StoreResult<T>`](crate::error::StoreResult); a failed store call
/// surfaces immediately to the caller - nothing in this layer retries.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts a single document and returns the store-assigned id.
    ///
    /// The id is always reported as a string, whatever the store's native
    /// identifier representation is. The collection is created on first
    /// use if the backend distinguishes that case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDocument`](crate::error::StoreError)
    /// if `document` is not a BSON document, or a backend error if the
    /// insert fails.
    async fn insert_document(&self, document: Bson, collection: &str) -> StoreResult<String>;

    /// Queries documents matching `query`, up to its limit.
    ///
    /// Result order is not guaranteed beyond the store's default. Every
    /// returned document carries its identifier under the string-typed
    /// `id` key in place of any store-native identifier field.
    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>>;

    /// Looks up a single document by its string id.
    ///
    /// A malformed id is treated as "not found", never as an error: point
    /// lookups answer `Ok(None)` for ids the store cannot even parse.
    async fn find_document_by_id(&self, id: &str, collection: &str) -> StoreResult<Option<Bson>>;

    /// Counts the documents matching `filter`.
    async fn count_documents(&self, filter: Filter, collection: &str) -> StoreResult<u64>;

    /// Lists the names of all collections in the store.
    ///
    /// Also serves as the store liveness probe: a healthy backend answers,
    /// an unreachable one reports the failure.
    async fn list_collections(&self) -> StoreResult<Vec<String>>;
}

/// Factory trait for creating backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> StoreResult<Self::Backend>;
}
