//! Contact message schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use stride_core::record::Record;

/// A storefront contact form submission. Collection: `contactmessage`.
///
/// Write-only: no endpoint reads these back.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub message: String,
}

impl Record for ContactMessage {
    fn collection_name() -> &'static str {
        "contactmessage"
    }
}
