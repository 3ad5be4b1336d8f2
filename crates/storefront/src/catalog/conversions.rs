//! Conversions from catalog wire payloads to normalized core records.

use trellis_core::{ProductDetailsBundle, ProductId, ProductRecord};

use super::types::ProductPayload;

/// Convert a single wire payload into a normalized record.
///
/// Any nested `similar_products` are dropped here; bundle assembly handles
/// them separately.
pub(super) fn convert_product(payload: ProductPayload) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(payload.id),
        title: payload.title,
        brand: payload.brand,
        description: payload.description,
        image_url: payload.image_url,
        price: payload.price,
        rating: payload.rating,
        availability: payload.availability,
        total_reviews: payload.total_reviews,
        style: payload.style,
    }
}

/// Assemble a complete detail bundle from the detail-endpoint payload.
///
/// The main record and every similar entry are converted together, so the
/// bundle is never partially populated. Similar-product order is preserved.
pub(super) fn convert_bundle(mut payload: ProductPayload) -> ProductDetailsBundle {
    let similar = std::mem::take(&mut payload.similar_products);
    ProductDetailsBundle {
        main_product: convert_product(payload),
        similar_products: similar.into_iter().map(convert_product).collect(),
    }
}
