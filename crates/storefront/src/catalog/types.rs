//! Wire payloads for the catalog API.
//!
//! The catalog speaks snake_case JSON. These types mirror that shape exactly;
//! `conversions` turns them into the normalized camelCase records from
//! `trellis_core`. Nothing outside the catalog module should touch them.

use serde::Deserialize;

/// One product as the catalog sends it.
///
/// The detail endpoint nests `similar_products` entries of the same shape
/// (without further nesting); list endpoints omit the field entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub id: i64,
    pub title: String,
    pub brand: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub rating: f64,
    pub availability: String,
    pub total_reviews: u64,
    pub style: String,
    #[serde(default)]
    pub similar_products: Vec<ProductPayload>,
}

/// Response body of `GET /products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListPayload {
    pub products: Vec<ProductPayload>,
}
