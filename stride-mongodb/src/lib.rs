//! MongoDB backend for the Premium Shoes document store.
//!
//! Implements the `StoreBackend` trait on top of the official async
//! MongoDB driver. The connection is lazy: building the store only parses
//! the connection string, so the API process starts even when the database
//! is down and the diagnostic endpoint reports the failure instead.
//!
//! # Connection
//!
//! ```ignore
//! use stride_core::backend::StoreBackendBuilder;
//! use stride_mongodb::MongoDbStore;
//!
//! let backend = MongoDbStore::builder("mongodb://localhost:27017", "premium_shoes")
//!     .build()
//!     .await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as stride_mongodb;

pub mod query;
pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
