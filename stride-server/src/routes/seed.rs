//! Sample-data bootstrap.
//!
//! Idempotent by count, per collection independently: a collection is
//! seeded only while it is completely empty. There is no partial top-up
//! and no content-based deduplication - a second call is a no-op.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::info;

use stride_core::{query::Filter, record::Record};

use crate::{
    error::ApiResult,
    models::{Brand, Product, SiteReview},
    state::AppState,
};

const BRANDS: [Brand; 5] = [Brand::Nike, Brand::Jordan, Brand::Adidas, Brand::Puma, Brand::Gucci];

/// Premium surcharge applied to the luxury brand's price formula.
const GUCCI_SURCHARGE: f64 = 300.0;

/// Counts of newly inserted documents (0 for a skipped collection).
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub products: u64,
    pub reviews: u64,
}

/// POST /api/seed - populate empty collections with deterministic
/// sample data.
pub async fn run(State(state): State<AppState>) -> ApiResult<Json<SeedReport>> {
    let store = &state.store;
    let mut report = SeedReport { products: 0, reviews: 0 };

    if store
        .collection(Product::collection_name())
        .count(Filter::new())
        .await?
        == 0
    {
        let products = store.typed_collection::<Product>();
        for product in sample_products() {
            products.insert(product).await?;
            report.products += 1;
        }
    }

    if store
        .collection(SiteReview::collection_name())
        .count(Filter::new())
        .await?
        == 0
    {
        let reviews = store.typed_collection::<SiteReview>();
        for review in sample_reviews() {
            reviews.insert(review).await?;
            report.reviews += 1;
        }
    }

    info!(products = report.products, reviews = report.reviews, "seed finished");

    Ok(Json(report))
}

/// Six products per brand with deterministic titles, prices, and flags.
fn sample_products() -> Vec<Product> {
    let mut products = Vec::new();
    for brand in BRANDS {
        for n in 1..=6 {
            let mut price = 99.0 + 20.0 * f64::from(n);
            if brand == Brand::Gucci {
                price += GUCCI_SURCHARGE;
            }

            products.push(Product {
                title: format!("{} Elite {n}", brand_name(brand)),
                brand,
                price,
                colors: vec!["Black".into(), "White".into(), "Red".into()],
                sizes: (38..=44).collect(),
                description: Some(format!(
                    "Premium {} sneaker crafted for comfort and performance.",
                    brand_name(brand)
                )),
                images: vec![brand_image(brand).into()],
                is_new: n >= 5,
                is_best_seller: n % 2 == 0,
                rating: 4.5,
                reviews_count: 120 + n as u32,
                gender: Default::default(),
                material: None,
                popularity: 0,
            });
        }
    }

    products
}

fn sample_reviews() -> Vec<SiteReview> {
    vec![
        SiteReview {
            name: "Aarav".into(),
            rating: 5.0,
            comment: "Top-notch quality and super fast delivery!".into(),
        },
        SiteReview {
            name: "Isha".into(),
            rating: 4.5,
            comment: "Loved the comfort. The packaging felt premium.".into(),
        },
        SiteReview {
            name: "Kabir".into(),
            rating: 4.8,
            comment: "Great prices for authentic sneakers.".into(),
        },
    ]
}

fn brand_name(brand: Brand) -> &'static str {
    match brand {
        Brand::Nike => "Nike",
        Brand::Jordan => "Jordan",
        Brand::Adidas => "Adidas",
        Brand::Puma => "Puma",
        Brand::Gucci => "Gucci",
        Brand::Reebok => "Reebok",
        Brand::NewBalance => "New Balance",
        Brand::Asics => "ASICS",
        Brand::Other => "Other",
    }
}

fn brand_image(brand: Brand) -> &'static str {
    match brand {
        Brand::Jordan => {
            "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1200&auto=format&fit=crop"
        }
        Brand::Adidas => {
            "https://images.unsplash.com/photo-1523381210434-271e8be1f52b?q=80&w=1200&auto=format&fit=crop"
        }
        Brand::Puma => {
            "https://images.unsplash.com/photo-1542291026-787b19a2f5b6?q=80&w=1200&auto=format&fit=crop"
        }
        Brand::Gucci => {
            "https://images.unsplash.com/photo-1584735175315-9d5df6c7e8a0?q=80&w=1200&auto=format&fit=crop"
        }
        _ => {
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1200&auto=format&fit=crop"
        }
    }
}
