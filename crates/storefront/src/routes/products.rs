//! Product route handlers.
//!
//! The detail page renders in two steps: the shell answers immediately with
//! the loading view, then an HTMX fragment request (`hx-trigger="load"`)
//! performs the catalog fetch and swaps in whichever view the lifecycle
//! resolved to. The lifecycle itself lives in `trellis_core::view_state`;
//! handlers only feed it events and match on the result.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;
use trellis_core::{
    DetailEvent, DetailView, OrderQuantity, ProductDetailState, ProductId, ProductRecord,
};

use crate::error::Result;
use crate::filters;
use crate::middleware::VisitorToken;
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// Main product display data for templates.
#[derive(Clone)]
pub struct ProductDetailView {
    pub title: String,
    pub brand: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
    pub rating: f64,
    pub availability: String,
    pub total_reviews: u64,
}

/// Compact product display data for cards: listing entries and similar
/// products. Keyed by `id` for stable identity in rendered lists.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub brand: String,
    pub image_url: String,
    pub price: String,
    pub rating: f64,
}

/// Format a catalog price for display.
fn format_price(price: f64) -> String {
    format!("Rs {price:.0}/-")
}

impl From<&ProductRecord> for ProductDetailView {
    fn from(record: &ProductRecord) -> Self {
        Self {
            title: record.title.clone(),
            brand: record.brand.clone(),
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            price: format_price(record.price),
            rating: record.rating,
            availability: record.availability.clone(),
            total_reviews: record.total_reviews,
        }
    }
}

impl From<&ProductRecord> for ProductCardView {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            brand: record.brand.clone(),
            image_url: record.image_url.clone(),
            price: format_price(record.price),
            rating: record.rating,
        }
    }
}

/// Map records to display cards, preserving source order.
fn card_views(records: &[ProductRecord]) -> Vec<ProductCardView> {
    records.iter().map(ProductCardView::from).collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCardView>,
}

/// Product detail page shell: loading view plus the deferred fragment hook.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product_id: ProductId,
}

/// Resolved detail fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_detail.html")]
pub struct ProductDetailTemplate {
    pub product: ProductDetailView,
    pub similar: Vec<ProductCardView>,
    pub quantity: OrderQuantity,
}

/// Loading indicator fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/loader.html")]
pub struct LoaderTemplate;

/// Failure view fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_not_found.html")]
pub struct ProductNotFoundTemplate;

/// Order quantity counter fragment template (HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quantity.html")]
pub struct QuantityTemplate {
    pub quantity: OrderQuantity,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product listing page.
#[instrument(skip(state, token))]
pub async fn index(
    State(state): State<AppState>,
    token: VisitorToken,
) -> Result<ProductsIndexTemplate> {
    let records = state.catalog().list_products(token.secret()).await?;

    Ok(ProductsIndexTemplate {
        products: card_views(&records),
    })
}

/// Display the product detail shell.
///
/// The shell always renders the loading view; the fragment request it
/// triggers on load resolves the lifecycle.
#[instrument]
pub async fn show(Path(id): Path<ProductId>) -> ProductShowTemplate {
    ProductShowTemplate { product_id: id }
}

/// Resolve the catalog fetch and render the resulting view (HTMX).
///
/// One fetch per view instance. Every catalog error - non-ok status,
/// transport failure, bad payload - collapses to the failure view; no detail
/// reaches the user beyond the "Product Not Found" message.
#[instrument(skip(state, token), fields(product_id = %id))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    token: VisitorToken,
) -> Response {
    let mounted = ProductDetailState::new();

    let event = match state.catalog().product_details(token.secret(), id).await {
        Ok(bundle) => DetailEvent::FetchSucceeded(bundle),
        Err(e) => {
            tracing::warn!(error = %e, "Product fetch failed");
            DetailEvent::FetchFailed
        }
    };

    let resolved = mounted.apply(event);
    match resolved.view() {
        DetailView::Loading => LoaderTemplate.into_response(),
        DetailView::Success(bundle) => ProductDetailTemplate {
            product: ProductDetailView::from(&bundle.main_product),
            similar: card_views(&bundle.similar_products),
            quantity: resolved.order_quantity(),
        }
        .into_response(),
        DetailView::Failure => ProductNotFoundTemplate.into_response(),
    }
}

/// Quantity adjustment operation.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityOp {
    Increment,
    Decrement,
}

/// Quantity adjustment form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub quantity: u32,
    pub op: QuantityOp,
}

/// Adjust the order quantity counter (HTMX).
///
/// Pure and synchronous: independent of the fetch lifecycle, floor of 1
/// enforced on both the submitted value and the decrement.
#[instrument]
pub async fn quantity(Form(form): Form<QuantityForm>) -> QuantityTemplate {
    let current = OrderQuantity::clamped(form.quantity);
    let quantity = match form.op {
        QuantityOp::Increment => current.increment(),
        QuantityOp::Decrement => current.decrement(),
    };

    QuantityTemplate { quantity }
}

/// Failure-view action: back to the listing, replacing the history entry.
///
/// Not an HTTP redirect: HTMX's XHR follows a 3xx transparently, so headers
/// on the intermediate response would never reach HTMX. Instead a 200 carries
/// `HX-Location` to navigate to the listing client-side and `HX-Replace-Url`
/// to replace the current history entry instead of pushing, so back
/// navigation skips the failed detail page.
#[instrument]
pub async fn continue_shopping() -> impl IntoResponse {
    AppendHeaders([
        ("HX-Location", r#"{"path":"/products","target":"body"}"#),
        ("HX-Replace-Url", "/products"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ProductId;

    fn record(id: i64, title: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            title: title.to_string(),
            brand: "Aqua".to_string(),
            description: "desc".to_string(),
            image_url: format!("http://x/{id}.png"),
            price: 1299.0,
            rating: 4.3,
            availability: "In Stock".to_string(),
            total_reviews: 10,
            style: "Classic".to_string(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1299.0), "Rs 1299/-");
        assert_eq!(format_price(400.0), "Rs 400/-");
    }

    #[test]
    fn test_card_views_preserve_order() {
        let records = vec![record(3, "c"), record(1, "a"), record(2, "b")];
        let cards = card_views(&records);
        let ids: Vec<i64> = cards.iter().map(|c| c.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_detail_view_formats_price() {
        let view = ProductDetailView::from(&record(1, "Bottle"));
        assert_eq!(view.price, "Rs 1299/-");
        assert_eq!(view.total_reviews, 10);
    }
}
