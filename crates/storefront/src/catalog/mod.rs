//! Upstream catalog API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest` - one GET per page render, no local sync
//! - The visitor's bearer token (when present) authenticates each request
//! - Wire payloads are snake_case JSON; `conversions` normalizes them into
//!   [`trellis_core`] records before anything else sees them
//!
//! No retry, no explicit timeout, no response caching: the detail view either
//! resolves to a complete bundle or collapses to its failure state.

mod client;
mod conversions;
pub mod types;

pub use client::CatalogClient;

use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
///
/// The detail view does not distinguish between these: every variant
/// collapses to the failure view. The listing page surfaces them as a 502.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog answered with a non-success status.
    #[error("catalog returned {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "catalog returned 404 Not Found");
    }
}
