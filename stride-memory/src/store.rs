//! In-memory storage implementation of the store backend.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use bson::Bson;
use mea::rwlock::RwLock;
use uuid::Uuid;

use stride_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
    query::{Filter, Query},
};

use crate::evaluator::PredicateEvaluator;

type CollectionMap = HashMap<String, bson::Document>;
type StoreMap = HashMap<String, CollectionMap>;

/// Thread-safe in-memory document storage backend.
///
/// Documents are BSON documents indexed by a generated UUID string. The
/// instance is cloneable and uses `Arc`-wrapped internal state, so clones
/// share the same underlying data - the handler tests keep one clone to
/// inspect what the API persisted.
///
/// Queries scan the whole collection; fine for the data sizes the tests
/// and local development use.
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection name -> (document id -> document)
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self { store: Arc::new(RwLock::new(StoreMap::new())) }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    fn with_id(id: &str, document: &bson::Document) -> Bson {
        let mut result = document.clone();
        result.insert("id", id.to_string());
        Bson::Document(result)
    }
}

#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn insert_document(&self, document: Bson, collection: &str) -> StoreResult<String> {
        let document = document
            .as_document()
            .cloned()
            .ok_or_else(|| StoreError::InvalidDocument("expected a document".into()))?;

        let mut store = self.store.write().await;
        let collection_map = store
            .entry(collection.to_string())
            .or_default();

        let id = Uuid::new_v4().to_string();
        collection_map.insert(id.clone(), document);

        Ok(id)
    }

    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>> {
        let store = self.store.read().await;
        let collection_map = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        let limit = query.limit.unwrap_or(usize::MAX);
        let mut results = Vec::new();
        for (id, document) in collection_map {
            if results.len() >= limit {
                break;
            }
            if PredicateEvaluator::new(document).matches(&query.filter) {
                results.push(Self::with_id(id, document));
            }
        }

        Ok(results)
    }

    async fn find_document_by_id(&self, id: &str, collection: &str) -> StoreResult<Option<Bson>> {
        let store = self.store.read().await;

        // An id that was never issued, malformed or not, is just a missed
        // lookup here.
        Ok(store
            .get(collection)
            .and_then(|col| col.get(id))
            .map(|document| Self::with_id(id, document)))
    }

    async fn count_documents(&self, filter: Filter, collection: &str) -> StoreResult<u64> {
        let store = self.store.read().await;
        let collection_map = match store.get(collection) {
            Some(col) => col,
            None => return Ok(0),
        };

        let mut count = 0;
        for document in collection_map.values() {
            if PredicateEvaluator::new(document).matches(&filter) {
                count += 1;
            }
        }

        Ok(count)
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .store
            .read()
            .await
            .keys()
            .cloned()
            .collect())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`]. Always succeeds.
    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(InMemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use stride_core::query::Query;

    fn review(name: &str, rating: f64) -> Bson {
        Bson::Document(doc! { "name": name, "rating": rating })
    }

    #[tokio::test]
    async fn insert_assigns_distinct_string_ids() {
        let store = InMemoryStore::new();
        let first = store
            .insert_document(review("Aarav", 5.0), "sitereview")
            .await
            .unwrap();
        let second = store
            .insert_document(review("Isha", 4.5), "sitereview")
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count_documents(Filter::new(), "sitereview").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn inserting_a_non_document_is_rejected() {
        let store = InMemoryStore::new();
        let result = store
            .insert_document(Bson::String("not a document".into()), "sitereview")
            .await;
        assert!(matches!(result, Err(StoreError::InvalidDocument(_))));
    }

    #[tokio::test]
    async fn find_by_id_returns_the_document_with_its_id() {
        let store = InMemoryStore::new();
        let id = store
            .insert_document(review("Kabir", 4.8), "sitereview")
            .await
            .unwrap();

        let found = store
            .find_document_by_id(&id, "sitereview")
            .await
            .unwrap()
            .expect("document should exist");
        let document = found.as_document().unwrap();
        assert_eq!(document.get_str("id").unwrap(), id);
        assert_eq!(document.get_str("name").unwrap(), "Kabir");
    }

    #[tokio::test]
    async fn unknown_and_malformed_ids_read_as_absent() {
        let store = InMemoryStore::new();
        store
            .insert_document(review("Aarav", 5.0), "sitereview")
            .await
            .unwrap();

        let missing = Uuid::new_v4().to_string();
        assert!(store.find_document_by_id(&missing, "sitereview").await.unwrap().is_none());
        assert!(store.find_document_by_id("not-an-id", "sitereview").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn queries_filter_and_cap_results() {
        let store = InMemoryStore::new();
        for rating in [3.0, 4.5, 4.8, 5.0] {
            store
                .insert_document(review("someone", rating), "sitereview")
                .await
                .unwrap();
        }

        let high = store
            .query_documents(
                Query::builder()
                    .filter(Filter::new().range("rating", Some(4.5), None))
                    .build(),
                "sitereview",
            )
            .await
            .unwrap();
        assert_eq!(high.len(), 3);

        let capped = store
            .query_documents(Query::builder().limit(2).build(), "sitereview")
            .await
            .unwrap();
        assert_eq!(capped.len(), 2);

        // Every result carries its id as a string field.
        for item in capped {
            assert!(item.as_document().unwrap().get_str("id").is_ok());
        }
    }

    #[tokio::test]
    async fn querying_an_absent_collection_is_empty_not_an_error() {
        let store = InMemoryStore::new();
        assert!(store.query_documents(Query::new(), "order").await.unwrap().is_empty());
        assert_eq!(store.count_documents(Filter::new(), "order").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn builder_yields_an_empty_store() {
        let store = InMemoryStore::builder().build().await.unwrap();
        assert!(store.list_collections().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryStore::new();
        let clone = store.clone();
        store
            .insert_document(review("Aarav", 5.0), "sitereview")
            .await
            .unwrap();

        assert_eq!(clone.count_documents(Filter::new(), "sitereview").await.unwrap(), 1);
        assert_eq!(clone.list_collections().await.unwrap(), vec!["sitereview".to_string()]);
    }
}
