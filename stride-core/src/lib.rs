//! Store-agnostic contract layer for the Premium Shoes backend.
//!
//! This crate defines everything the HTTP surface and the storage backends
//! agree on:
//!
//! - **Record traits** ([`record`]) - Marker trait tying a schema type to its collection
//! - **Store backend abstraction** ([`backend`]) - The operations a document store must provide
//! - **Filter and query model** ([`query`]) - A closed set of predicate kinds composed by conjunction
//! - **Collections interface** ([`collection`]) - Per-collection handles for reads and typed writes
//! - **Document store** ([`store`]) - The shared handle passed into request handlers
//! - **Wire conversion** ([`wire`]) - Stored documents to plain JSON responses
//! - **Error handling** ([`error`]) - Store error and result types
//!
//! Backends interpret filters through [`query::PredicateVisitor`], so the
//! predicate set stays closed and translation to a store's native query
//! form happens at the backend boundary only.

#[allow(unused_extern_crates)]
extern crate self as stride_core;

pub mod backend;
pub mod collection;
pub mod error;
pub mod query;
pub mod record;
pub mod store;
pub mod wire;
