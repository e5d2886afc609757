//! Catalog data API client implementation.
//!
//! Speaks PostgREST-style filtered selects with `reqwest` and caches
//! per-product row sets using `moka` (5-minute TTL).

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use marigold_core::types::{ImageRow, ProductId, VariantRow};

use crate::config::CatalogApiConfig;

use super::CatalogError;
use super::cache::{CacheKey, CacheValue};
use super::types::ProductRow;

/// Client for the catalog data API.
///
/// Provides read access to product, variant, and image rows. Row sets
/// are cached for 5 minutes; every fetch returns the full set for one
/// product so the engine always sees a consistent snapshot.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog data API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                api_key: config.api_key.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Execute a filtered select against one table.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &str,
    ) -> Result<Vec<T>, CatalogError> {
        let url = format!("{}/{table}?{filter}", self.inner.base_url);

        let response = self
            .inner
            .client
            .get(&url)
            .header("apikey", &self.inner.api_key)
            .header("Authorization", format!("Bearer {}", self.inner.api_key))
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Unexpected(status.as_u16()));
        }

        match serde_json::from_str(&body) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to decode catalog API response"
                );
                Err(CatalogError::Decode(e))
            }
        }
    }

    /// Get the product row, if the product exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails; an unknown product is
    /// `Ok(None)`, not an error.
    #[instrument(skip(self), fields(product = %product_id))]
    pub async fn product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRow>, CatalogError> {
        let key = CacheKey::Product(product_id);
        if let Some(CacheValue::Product(row)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for product row");
            return Ok(Some((*row).clone()));
        }

        let filter = format!("select=*&id=eq.{product_id}&limit=1");
        let rows: Vec<ProductRow> = self.select("products", &filter).await?;
        let row = rows.into_iter().next();

        if let Some(row) = &row {
            self.inner
                .cache
                .insert(key, CacheValue::Product(Arc::new(row.clone())))
                .await;
        }

        Ok(row)
    }

    /// Get every variant row for a product.
    ///
    /// Order is whatever the store returns; the aggregation engine
    /// stabilizes it with first-seen-ordered maps.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails. A product with no
    /// variant rows yields an empty list.
    #[instrument(skip(self), fields(product = %product_id))]
    pub async fn variant_rows(
        &self,
        product_id: ProductId,
    ) -> Result<Arc<Vec<VariantRow>>, CatalogError> {
        let key = CacheKey::Variants(product_id);
        if let Some(CacheValue::Variants(rows)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for variant rows");
            return Ok(rows);
        }

        let filter = format!("select=*&product_id=eq.{product_id}");
        let rows = Arc::new(self.select::<VariantRow>("product_variants", &filter).await?);

        self.inner
            .cache
            .insert(key, CacheValue::Variants(Arc::clone(&rows)))
            .await;

        Ok(rows)
    }

    /// Get every image row for a product, sorted by display order (with
    /// URL as tiebreak) so the resolver's first-occurrence ties reflect
    /// curatorial intent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails. A product with no
    /// image rows yields an empty list.
    #[instrument(skip(self), fields(product = %product_id))]
    pub async fn image_rows(
        &self,
        product_id: ProductId,
    ) -> Result<Arc<Vec<ImageRow>>, CatalogError> {
        let key = CacheKey::Images(product_id);
        if let Some(CacheValue::Images(rows)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for image rows");
            return Ok(rows);
        }

        let filter = format!(
            "select=*&product_id=eq.{product_id}&order=display_order.asc,image_url.asc"
        );
        let rows = Arc::new(self.select::<ImageRow>("product_images", &filter).await?);

        self.inner
            .cache
            .insert(key, CacheValue::Images(Arc::clone(&rows)))
            .await;

        Ok(rows)
    }

    /// Cheap reachability probe for the readiness endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the data API cannot be reached or responds
    /// with a non-success status.
    pub async fn ping(&self) -> Result<(), CatalogError> {
        let url = format!("{}/products?select=id&limit=1", self.inner.base_url);

        let response = self
            .inner
            .client
            .get(&url)
            .header("apikey", &self.inner.api_key)
            .header("Authorization", format!("Bearer {}", self.inner.api_key))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(CatalogError::Unexpected(status.as_u16()))
        }
    }
}
