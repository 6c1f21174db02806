//! Site testimonial schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use stride_core::record::Record;

/// A landing-page testimonial. Collection: `sitereview`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SiteReview {
    pub name: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    pub comment: String,
}

impl Record for SiteReview {
    fn collection_name() -> &'static str {
        "sitereview"
    }
}
