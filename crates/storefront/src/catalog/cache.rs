//! Cache types for catalog data API responses.

use std::sync::Arc;

use marigold_core::types::{ImageRow, ProductId, VariantRow};

use super::types::ProductRow;

/// Cache key for per-product row sets.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Product(ProductId),
    Variants(ProductId),
    Images(ProductId),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Arc<ProductRow>),
    Variants(Arc<Vec<VariantRow>>),
    Images(Arc<Vec<ImageRow>>),
}
