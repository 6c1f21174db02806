//! Per-collection handles for document store operations.
//!
//! Two views of the same collection:
//!
//! - [`Collection`] - raw reads and counts; documents come back as BSON so
//!   the read path tolerates documents written under an older schema
//! - [`TypedCollection`] - writes of validated record types
//!
//! Writes are typed because they pass through schema validation at the
//! system boundary; reads stay untyped because fields missing from old
//! documents are absent, not errors.

use std::marker::PhantomData;

use bson::Bson;

use crate::{
    backend::StoreBackend,
    error::StoreResult,
    query::{Filter, Query},
    record::{Record, RecordExt},
};

/// An untyped collection handle for reads and counts.
#[derive(Debug)]
pub struct Collection<'a> {
    name: String,
    backend: &'a dyn StoreBackend,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(name: String, backend: &'a dyn StoreBackend) -> Self {
        Self { name, backend }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Queries documents in the collection.
    ///
    /// Every result carries a string-typed `id` field.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the operation fails.
    pub async fn find(&self, query: Query) -> StoreResult<Vec<Bson>> {
        self.backend
            .query_documents(query, &self.name)
            .await
    }

    /// Looks up one document by id; malformed ids read as absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the operation fails.
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<Bson>> {
        self.backend
            .find_document_by_id(id, &self.name)
            .await
    }

    /// Counts the documents matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the operation fails.
    pub async fn count(&self, filter: Filter) -> StoreResult<u64> {
        self.backend
            .count_documents(filter, &self.name)
            .await
    }
}

/// A typed collection handle for inserting records.
#[derive(Debug)]
pub struct TypedCollection<'a, R: Record> {
    name: String,
    backend: &'a dyn StoreBackend,
    _marker: PhantomData<R>,
}

impl<'a, R: Record> TypedCollection<'a, R> {
    pub(crate) fn new(name: String, backend: &'a dyn StoreBackend) -> Self {
        Self { name, backend, _marker: PhantomData }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a record and returns the store-assigned id.
    ///
    /// A single atomic insert; there is no partial success.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if serialization
    /// or the insert fails.
    pub async fn insert(&self, record: R) -> StoreResult<String> {
        self.backend
            .insert_document(record.to_bson()?, &self.name)
            .await
    }
}
