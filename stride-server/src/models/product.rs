//! The catalogue product schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use stride_core::record::Record;

/// The fixed set of brand names carried by the catalogue.
///
/// Serialized spellings are part of the API contract (`"New Balance"`,
/// `"ASICS"`), so renames are explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brand {
    Nike,
    Jordan,
    Adidas,
    Puma,
    Gucci,
    Reebok,
    #[serde(rename = "New Balance")]
    NewBalance,
    #[serde(rename = "ASICS")]
    Asics,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    Men,
    Women,
    #[default]
    Unisex,
}

/// A shoe in the catalogue. Collection: `shoeproduct`.
///
/// Created by the seed routine (or, in principle, an admin write path);
/// read-only from the public API and never deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,
    pub brand: Brand,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Available color names.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Available sizes (EU/US simplified).
    #[serde(default)]
    pub sizes: Vec<i32>,
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, ordered for the gallery.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub gender: Gender,
    /// Primary upper material, e.g. Leather, Mesh, Knit.
    #[serde(default)]
    pub material: Option<String>,
    /// Derived score for sorting by popularity.
    #[serde(default)]
    pub popularity: u32,
}

fn default_rating() -> f64 {
    4.5
}

impl Record for Product {
    fn collection_name() -> &'static str {
        "shoeproduct"
    }
}
