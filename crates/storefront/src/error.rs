//! Unified error handling.
//!
//! Provides the `AppError` type for route handlers that surface errors as
//! HTTP responses. The product-detail fragment does NOT use it for fetch
//! failures - those collapse to the failure view - but server pages like the
//! listing return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        // Don't expose internal error details to clients
        (StatusCode::BAD_GATEWAY, "External service error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Catalog(CatalogError::Status(reqwest::StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "Catalog error: catalog returned 404 Not Found");
    }

    #[test]
    fn test_catalog_errors_hide_detail_from_clients() {
        let response =
            AppError::Catalog(CatalogError::Status(reqwest::StatusCode::UNAUTHORIZED))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
