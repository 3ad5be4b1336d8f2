//! Normalized catalog product records.
//!
//! The upstream catalog API speaks snake_case JSON (`image_url`,
//! `total_reviews`). The storefront converts those wire payloads into the
//! records here, which serialize with camelCase names (`imageUrl`,
//! `totalReviews`) - the normalized shape the view layer and any embedded
//! JSON consumers see.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A single normalized product record.
///
/// Immutable once built; constructed only by the catalog conversion layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub brand: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub rating: f64,
    pub availability: String,
    pub total_reviews: u64,
    pub style: String,
}

/// Everything the product-detail view needs, assembled atomically on a
/// successful fetch.
///
/// Never partially populated: either the whole bundle exists or the fetch
/// failed. Similar-product ordering is preserved from the source sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsBundle {
    pub main_product: ProductRecord,
    pub similar_products: Vec<ProductRecord>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: ProductId::new(16),
            title: "Wide Bottle".to_string(),
            brand: "Aqua".to_string(),
            description: "A wide-mouth bottle.".to_string(),
            image_url: "http://x/a.png".to_string(),
            price: 1299.0,
            rating: 4.3,
            availability: "In Stock".to_string(),
            total_reviews: 821,
            style: "Classic".to_string(),
        }
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["imageUrl"], "http://x/a.png");
        assert_eq!(value["totalReviews"], 821);
        // Snake case names must not leak through.
        assert!(value.get("image_url").is_none());
        assert!(value.get("total_reviews").is_none());
    }

    #[test]
    fn test_bundle_serializes_camel_case() {
        let bundle = ProductDetailsBundle {
            main_product: record(),
            similar_products: vec![record()],
        };
        let value = serde_json::to_value(bundle).unwrap();
        assert!(value.get("mainProduct").is_some());
        assert_eq!(value["similarProducts"].as_array().unwrap().len(), 1);
    }
}
