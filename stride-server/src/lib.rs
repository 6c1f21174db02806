//! Premium Shoes backend - public storefront API.
//!
//! Serves catalogue browsing, checkout, contact messages, testimonials,
//! and a sample-data seed endpoint over a document store. The binary in
//! `main.rs` wires the MongoDB backend in; the handler test-suite drives
//! the same [`app`] against the in-memory backend.

#[allow(unused_extern_crates)]
extern crate self as stride_server;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assembles the application router with its middleware stack.
///
/// The storefront frontend lives on another origin; mirror its allow-all
/// CORS posture.
pub fn app(state: AppState) -> Router {
    routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
