//! Catalogue browsing handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use stride_core::{
    query::{Filter, Query as DocumentQuery},
    record::Record,
    wire::to_wire_json,
};

use crate::{
    error::{ApiError, ApiResult},
    models::Product,
    state::AppState,
};

/// Result cap applied when the caller does not supply one.
const DEFAULT_LIMIT: usize = 60;

/// Optional filter parameters of `GET /api/products`.
///
/// Every parameter is three-valued: absent means "no constraint", which
/// for the boolean flags is not the same thing as `false`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub brand: Option<String>,
    pub size: Option<i32>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
    pub color: Option<String>,
    #[serde(rename = "new")]
    pub is_new: Option<bool>,
    pub best: Option<bool>,
    pub limit: Option<usize>,
}

impl ProductListParams {
    /// Builds the store query: supplied parameters AND together, omitted
    /// ones impose nothing. Empty-string brand/color read as absent.
    fn build_query(&self) -> DocumentQuery {
        let mut filter = Filter::new();
        if let Some(brand) = self.brand.as_deref().filter(|b| !b.is_empty()) {
            filter = filter.eq("brand", brand);
        }
        if let Some(size) = self.size {
            filter = filter.contains("sizes", size);
        }
        if let Some(color) = self.color.as_deref().filter(|c| !c.is_empty()) {
            filter = filter.contains("colors", color);
        }
        filter = filter.range("price", self.min_price, self.max_price);
        if let Some(flag) = self.is_new {
            filter = filter.flag("is_new", flag);
        }
        if let Some(flag) = self.best {
            filter = filter.flag("is_best_seller", flag);
        }

        DocumentQuery::builder()
            .filter(filter)
            .limit(self.limit.unwrap_or(DEFAULT_LIMIT))
            .build()
    }
}

/// GET /api/products - filtered catalogue listing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> ApiResult<Json<Vec<Value>>> {
    let documents = state
        .store
        .collection(Product::collection_name())
        .find(params.build_query())
        .await?;

    Ok(Json(documents.iter().map(to_wire_json).collect()))
}

/// GET /api/products/{id} - point lookup.
///
/// Answers 404 for unknown ids and for ids the store cannot parse.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let document = state
        .store
        .collection(Product::collection_name())
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    Ok(Json(to_wire_json(&document)))
}
