//! Order and order-item schemas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use stride_core::record::Record;

/// Supported mock payment providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UpiProvider {
    #[default]
    PhonePe,
    Paytm,
    #[serde(rename = "Google Pay")]
    GooglePay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

/// One line of an order. Embedded in [`Order`]; no independent lifecycle.
///
/// `product_id` is an opaque reference - it is not checked against the
/// product collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    pub product_id: String,
    pub title: String,
    pub brand: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub size: i32,
    pub color: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// A checkout order. Collection: `order`.
///
/// Created once per checkout and never mutated afterwards - status
/// transitions have no endpoint. `subtotal` and `total` are recomputed
/// by the handler before persisting, whatever the client sent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Order {
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub subtotal: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub shipping: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub total: f64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub upi_provider: Option<UpiProvider>,
    #[serde(default)]
    pub upi_id: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Record for Order {
    fn collection_name() -> &'static str {
        "order"
    }
}
