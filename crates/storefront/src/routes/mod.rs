//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the product listing
//! GET  /health                 - Health check (wired in main)
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/{id}          - Product detail shell (loading view)
//! GET  /products/{id}/detail   - Resolved detail fragment (HTMX)
//! POST /products/quantity      - Order quantity counter fragment (HTMX)
//! POST /products/continue      - Failure-view action: replace history with /products
//! ```

pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Redirect the root path to the product listing.
async fn root() -> Redirect {
    Redirect::to("/products")
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/quantity", post(products::quantity))
        .route("/continue", post(products::continue_shopping))
        .route("/{id}", get(products::show))
        .route("/{id}/detail", get(products::detail))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .nest("/products", product_routes())
}
