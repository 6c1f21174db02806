//! Record schemas for the Premium Shoes catalogue.
//!
//! One module per collection. Every schema derives `Validate`; validation
//! runs once at the system boundary, when a document arrives on a write
//! request, before any store access. Read paths return raw documents
//! instead of these types so documents written under an older schema keep
//! working.

pub mod contact;
pub mod order;
pub mod product;
pub mod review;

pub use contact::ContactMessage;
pub use order::{Order, OrderItem, OrderStatus, UpiProvider};
pub use product::{Brand, Gender, Product};
pub use review::SiteReview;
