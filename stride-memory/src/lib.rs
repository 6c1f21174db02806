//! In-memory document storage backend.
//!
//! A thread-safe, in-memory implementation of the `StoreBackend` trait,
//! used by the handler test-suite and for running the API without a
//! database. Documents are stored as BSON values in HashMaps behind an
//! async-aware read-write lock.
//!
//! # Quick Start
//!
//! ```ignore
//! use stride_core::store::DocumentStore;
//! use stride_memory::InMemoryStore;
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! ```

#[allow(unused_extern_crates)]
extern crate self as stride_memory;

pub mod evaluator;
pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
