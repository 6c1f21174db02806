//! Testimonial listing.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use stride_core::{query::Query as DocumentQuery, record::Record, wire::to_wire_json};

use crate::{error::ApiResult, models::SiteReview, state::AppState};

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ReviewListParams {
    pub limit: Option<usize>,
}

/// GET /api/reviews - unfiltered testimonial listing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> ApiResult<Json<Vec<Value>>> {
    let documents = state
        .store
        .collection(SiteReview::collection_name())
        .find(
            DocumentQuery::builder()
                .limit(params.limit.unwrap_or(DEFAULT_LIMIT))
                .build(),
        )
        .await?;

    Ok(Json(documents.iter().map(to_wire_json).collect()))
}
