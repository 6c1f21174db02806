//! MongoDB implementation of the store backend.

use async_trait::async_trait;
use bson::{Bson, Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{
    Client, Collection as MongoCollection,
    options::{ClientOptions, FindOptions},
};

use stride_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
    query::{Filter, Query},
};

use crate::query::MongoQueryTranslator;

/// MongoDB-backed document store.
///
/// Wraps a shared driver client plus a database name. The driver manages
/// its own connection pool, so one instance serves the whole process.
#[derive(Debug)]
pub struct MongoDbStore {
    client: Client,
    database: String,
}

impl MongoDbStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoDbStoreBuilder {
        MongoDbStoreBuilder::new(dsn, database)
    }

    fn get_collection(&self, collection_name: &str) -> MongoCollection<Document> {
        self.client
            .database(&self.database)
            .collection(collection_name)
    }

    /// Maps the store-native `_id` to the wire-facing string `id` field.
    fn restore_document(&self, document: &Document) -> Bson {
        let mut restored = Document::new();
        for (key, value) in document {
            if key == "_id" {
                restored.insert("id", Self::id_to_string(value));
            } else {
                restored.insert(key.clone(), value.clone());
            }
        }

        Bson::Document(restored)
    }

    fn id_to_string(id: &Bson) -> String {
        match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
impl StoreBackend for MongoDbStore {
    async fn insert_document(&self, document: Bson, collection: &str) -> StoreResult<String> {
        let document = document
            .as_document()
            .cloned()
            .ok_or_else(|| StoreError::InvalidDocument("expected a document".into()))?;

        let result = self
            .get_collection(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(Self::id_to_string(&result.inserted_id))
    }

    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>> {
        let mut options = FindOptions::default();
        if let Some(limit) = query.limit {
            options.limit = Some(limit as i64);
        }

        Ok(self
            .get_collection(collection)
            .find(MongoQueryTranslator.translate(&query.filter)?)
            .with_options(options)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .iter()
            .map(|document| self.restore_document(document))
            .collect())
    }

    async fn find_document_by_id(&self, id: &str, collection: &str) -> StoreResult<Option<Bson>> {
        // An id that does not even parse as an ObjectId is "not found",
        // not an error.
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self
            .get_collection(collection)
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .map(|document| self.restore_document(&document)))
    }

    async fn count_documents(&self, filter: Filter, collection: &str) -> StoreResult<u64> {
        self.get_collection(collection)
            .count_documents(MongoQueryTranslator.translate(&filter)?)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.client
            .database(&self.database)
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

/// Builder holding the connection string and database name.
pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
        }
    }
}

#[async_trait]
impl StoreBackendBuilder for MongoDbStoreBuilder {
    type Backend = MongoDbStore;

    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(MongoDbStore::new(
            Client::with_options(
                ClientOptions::parse(&self.dsn)
                    .await
                    .map_err(|e| StoreError::Initialization(e.to_string()))?,
            )
            .map_err(|e| StoreError::Initialization(e.to_string()))?,
            self.database,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_ids_render_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(MongoDbStore::id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
    }

    #[tokio::test]
    async fn restore_renames_the_native_id() {
        let store = MongoDbStore {
            client: Client::with_options(
                ClientOptions::builder()
                    .hosts(vec![mongodb::options::ServerAddress::Tcp {
                        host: "localhost".into(),
                        port: None,
                    }])
                    .build(),
            )
            .expect("client options should be valid"),
            database: "premium_shoes".into(),
        };

        let oid = ObjectId::new();
        let restored = store.restore_document(&doc! { "_id": oid, "title": "Puma Elite 2" });
        let document = restored.as_document().unwrap();

        assert_eq!(document.get_str("id").unwrap(), oid.to_hex());
        assert_eq!(document.get_str("title").unwrap(), "Puma Elite 2");
        assert!(!document.contains_key("_id"));
    }
}
