//! Contact form handler.

use axum::{Json, extract::State};
use serde::Serialize;
use validator::Validate;

use crate::{error::ApiResult, models::ContactMessage, state::AppState};

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub id: String,
    pub status: &'static str,
}

/// POST /api/contact - validate and persist a contact message.
pub async fn create(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> ApiResult<Json<ContactReceipt>> {
    message.validate()?;

    let id = state
        .store
        .typed_collection::<ContactMessage>()
        .insert(message)
        .await?;

    Ok(Json(ContactReceipt { id, status: "received" }))
}
