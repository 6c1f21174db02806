//! Readiness marker and store diagnostics.

use std::env;

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Value, json};

use crate::state::AppState;

/// How much of a store error the diagnostic response carries.
const ERROR_PREVIEW_CHARS: usize = 80;

/// GET / - static readiness marker.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Premium Shoes Backend Running" }))
}

/// Diagnostic snapshot returned by `GET /test`.
///
/// The marker strings ("✅ Running", "❌ Not Set", ...) are part of the
/// contract with the storefront's status page.
#[derive(Debug, Serialize)]
pub struct DiagReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET /test - probes the store and reports connection configuration.
///
/// A store failure is summarized into the report rather than raised;
/// this endpoint always answers 200.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagReport> {
    let mut report = DiagReport {
        backend: "✅ Running".into(),
        database: "❌ Not Available".into(),
        database_url: env_flag("DATABASE_URL"),
        database_name: env_flag("DATABASE_NAME"),
        connection_status: "Not Connected".into(),
        collections: Vec::new(),
    };

    match state.store.list_collections().await {
        Ok(collections) => {
            report.connection_status = "Connected".into();
            report.collections = collections;
            report.database = "✅ Connected & Working".into();
        }
        Err(err) => {
            report.database = format!("⚠️ {}", truncate(&err.to_string(), ERROR_PREVIEW_CHARS));
        }
    }

    Json(report)
}

fn env_flag(name: &str) -> String {
    let flag = if env::var(name).is_ok() { "✅ Set" } else { "❌ Not Set" };
    flag.into()
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
