//! Row types owned by the catalog data API.
//!
//! The variant and image rows the engine consumes live in
//! `marigold-core`; this module only adds the parent product row the
//! storefront needs around the engine.

use marigold_core::types::ProductId;
use serde::{Deserialize, Serialize};

/// The product row itself, parent of the variant and image rows.
///
/// Only the fields the storefront reads: the thumbnail is the gallery
/// fallback for products that have no image rows at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Single fallback image shown when no image rows exist.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}
