//! API route modules.
//!
//! - [`health`] - readiness marker and store diagnostics
//! - [`products`] - catalogue browsing
//! - [`reviews`] - testimonials
//! - [`contact`] - contact form submissions
//! - [`orders`] - checkout
//! - [`seed`] - sample-data bootstrap

pub mod contact;
pub mod health;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod seed;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/test", get(health::diagnostics))
        .route("/api/products", get(products::list))
        .route("/api/products/{id}", get(products::get_by_id))
        .route("/api/reviews", get(reviews::list))
        .route("/api/contact", post(contact::create))
        .route("/api/orders", post(orders::create))
        .route("/api/seed", post(seed::run))
}
