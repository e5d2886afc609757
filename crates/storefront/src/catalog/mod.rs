//! Catalog data API client.
//!
//! # Architecture
//!
//! - The catalog store exposes PostgREST-style filtered selects over
//!   HTTP; this module is the only fetch path for product, variant, and
//!   image rows
//! - The store is source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for per-product row sets (5 minute TTL)
//!
//! Each fetch returns the complete row set for one product in a single
//! call, so the aggregation engine always sees a consistent snapshot -
//! it never has to reconcile partial or racing updates.
//!
//! # Example
//!
//! ```rust,ignore
//! use marigold_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! let variants = client.variant_rows(product_id).await?;
//! let images = client.image_rows(product_id).await?;
//! let selection = VariantSelection::from_rows(&variants);
//! ```

mod cache;
mod client;
pub mod types;

pub use client::CatalogClient;

use thiserror::Error;

/// Errors that can occur when talking to the catalog data API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rate limited by the data API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Unexpected HTTP status from the data API.
    #[error("Unexpected status {0}")]
    Unexpected(u16),
}
