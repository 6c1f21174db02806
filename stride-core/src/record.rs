//! Core traits for record types and their document serialization.
//!
//! A [`Record`] is a schema type that lives in a named collection.
//! Identity is store-assigned at insert time, so records carry no id field
//! themselves; the stores hand ids back as strings.

use bson::{Bson, de::deserialize_from_bson, ser::serialize_to_bson};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Trait implemented by every schema type persisted in the document store.
///
/// # Example
///
/// ```ignore
/// use stride_core::record::Record;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct SiteReview {
///     pub name: String,
///     pub rating: f64,
///     pub comment: String,
/// }
///
/// impl Record for SiteReview {
///     fn collection_name() -> &'static str {
///         "sitereview"
///     }
/// }
/// ```
pub trait Record: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {
    /// Returns the name of the collection this record belongs to.
    ///
    /// This should be a static, lowercase identifier (e.g. "shoeproduct").
    fn collection_name() -> &'static str;
}

/// Extension trait providing BSON conversion for records.
///
/// Automatically implemented for all [`Record`] types.
pub trait RecordExt: Record {
    /// Converts this record to a BSON value for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_bson(&self) -> StoreResult<Bson>;

    /// Creates a record from a BSON value.
    ///
    /// Fields absent from the stored document fall back to the schema's
    /// defaults, so documents written before a schema gained a field
    /// still deserialize.
    fn from_bson(bson: Bson) -> StoreResult<Self>;
}

impl<R: Record> RecordExt for R {
    fn to_bson(&self) -> StoreResult<Bson> {
        Ok(serialize_to_bson(self)?)
    }

    fn from_bson(bson: Bson) -> StoreResult<Self> {
        Ok(deserialize_from_bson(bson)?)
    }
}
