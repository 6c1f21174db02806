//! API error handling.
//!
//! One error enum covers the whole taxonomy: validation failures (422,
//! with field-level detail, rejected before any store access), missing
//! resources (404, including malformed ids on point lookups), and store
//! failures (500 with a generic body; details go to the log, not the
//! client). The diagnostic endpoint handles store failures itself and
//! never goes through this type.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use stride_core::error::StoreError;

/// Application error enum.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed schema validation (422).
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// Point lookup missed, or the id was malformed (404).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The document store call failed (500).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A specialized `Result` type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: self.to_string(),
                    fields: Some(field_details(errors)),
                },
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorBody { error: self.to_string(), fields: None },
            ),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "document store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody { error: "internal server error".into(), fields: None },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens validation errors into a `field path -> messages` map.
///
/// Nested records contribute dotted paths, list entries indexed ones
/// (`items[0].price`).
fn field_details(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut details = BTreeMap::new();
    collect_field_errors("", errors, &mut details);
    details
}

fn collect_field_errors(
    prefix: &str,
    errors: &ValidationErrors,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.insert(
                    path,
                    field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(ToString::to_string)
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect(),
                );
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct Inner {
        #[validate(range(min = 1))]
        quantity: u32,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Outer {
        #[validate(email)]
        email: String,
        #[validate(nested)]
        items: Vec<Inner>,
    }

    #[test]
    fn field_details_flatten_nested_paths() {
        let outer = Outer {
            email: "not-an-email".into(),
            items: vec![Inner { quantity: 1 }, Inner { quantity: 0 }],
        };

        let errors = outer.validate().expect_err("validation should fail");
        let details = field_details(&errors);

        assert!(details.contains_key("email"));
        assert!(details.contains_key("items[1].quantity"));
        assert!(!details.contains_key("items[0].quantity"));
    }
}
