//! Catalog API client implementation.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};
use trellis_core::{ProductDetailsBundle, ProductId, ProductRecord};

use crate::config::CatalogConfig;

use super::CatalogError;
use super::conversions::{convert_bundle, convert_product};
use super::types::{ProductListPayload, ProductPayload};

/// Client for the upstream catalog API.
///
/// Cheaply cloneable; one instance lives in the application state.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Fetch the detail bundle for one product.
    ///
    /// Issues a single `GET {base}/products/{id}` with the visitor's bearer
    /// token when one is available. The bundle is assembled atomically from
    /// the response; a non-success status yields `CatalogError::Status` with
    /// nothing retained from the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the catalog answers non-2xx,
    /// or the payload does not parse.
    #[instrument(skip(self, token), fields(product_id = %id))]
    pub async fn product_details(
        &self,
        token: Option<&SecretString>,
        id: ProductId,
    ) -> Result<ProductDetailsBundle, CatalogError> {
        let url = format!("{}/products/{id}", self.inner.base_url);
        let payload: ProductPayload = self.get_json(&url, token).await?;
        debug!("Fetched product detail");
        Ok(convert_bundle(payload))
    }

    /// Fetch the product listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the catalog answers non-2xx,
    /// or the payload does not parse.
    #[instrument(skip(self, token))]
    pub async fn list_products(
        &self,
        token: Option<&SecretString>,
    ) -> Result<Vec<ProductRecord>, CatalogError> {
        let url = format!("{}/products", self.inner.base_url);
        let payload: ProductListPayload = self.get_json(&url, token).await?;
        debug!(count = payload.products.len(), "Fetched product listing");
        Ok(payload.products.into_iter().map(convert_product).collect())
    }

    /// Issue an authenticated GET and parse the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&SecretString>,
    ) -> Result<T, CatalogError> {
        let mut request = self.inner.client.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "Catalog returned non-success status");
            return Err(CatalogError::Status(status));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }
}
