//! Raw catalog rows as fetched from the data store.
//!
//! One [`VariantRow`] per size×color SKU and one [`ImageRow`] per image
//! asset. The rows are denormalized and hand-maintained, so they carry a
//! few historical quirks (comma-packed size lists, missing flags,
//! negative stock counts). The defaulting rules for those quirks live
//! here as named methods so the rest of the engine never repeats them.

use serde::{Deserialize, Serialize};

use crate::color;
use crate::types::id::ProductId;

/// Swatch hex used when a variant row carries no `color_hex`.
pub const DEFAULT_COLOR_HEX: &str = "#000000";

/// One size×color stock record for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRow {
    /// Product this SKU belongs to.
    pub product_id: ProductId,
    /// Size label. Historical rows may pack several sizes into one row,
    /// separated by commas (e.g. `"XS, S, M"`): the row covers all of
    /// them at this color and stock level.
    pub size: String,
    /// Display-cased color label (e.g. `"Navy Blue"`).
    pub color: String,
    /// Optional swatch hex for the color.
    #[serde(default)]
    pub color_hex: Option<String>,
    /// On-hand quantity. Old rows occasionally go negative.
    #[serde(default)]
    pub stock: i64,
    /// Null means the SKU was never explicitly disabled.
    #[serde(default)]
    pub is_available: Option<bool>,
}

impl VariantRow {
    /// Whether this SKU can currently be sold.
    ///
    /// A missing `is_available` flag counts as available; non-positive
    /// stock (including negative counts) never counts as in stock.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.is_available.unwrap_or(true) && self.stock > 0
    }

    /// Swatch hex for this row, defaulting to black.
    #[must_use]
    pub fn hex(&self) -> &str {
        self.color_hex.as_deref().unwrap_or(DEFAULT_COLOR_HEX)
    }
}

/// One image asset for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRow {
    /// Product this image belongs to.
    pub product_id: ProductId,
    /// Image URL; the unique identity used for deduplication.
    pub image_url: String,
    /// Color this image was shot for; null when not tied to one color.
    #[serde(default)]
    pub color: Option<String>,
    /// When true the image is shown regardless of the selected color,
    /// independent of the `color` field.
    #[serde(default)]
    pub is_common: Option<bool>,
    /// Curatorial hero flag, consumed by the gallery UI.
    #[serde(default)]
    pub is_primary: bool,
    /// Sort key applied by the fetch layer before rows reach the
    /// resolver; the resolver itself only preserves row order.
    #[serde(default)]
    pub display_order: i32,
}

impl ImageRow {
    /// Whether this image is shown for every color selection.
    #[must_use]
    pub fn shared(&self) -> bool {
        self.is_common.unwrap_or(false)
    }

    /// Canonical matching key for this image's color tag.
    ///
    /// Untagged images yield the empty key and never match a selection.
    #[must_use]
    pub fn color_key(&self) -> String {
        self.color.as_deref().map(color::normalize).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variant_row_deserializes_missing_fields() {
        let row: VariantRow = serde_json::from_value(json!({
            "product_id": 1,
            "size": "M",
            "color": "Navy Blue"
        }))
        .unwrap();

        assert_eq!(row.color_hex, None);
        assert_eq!(row.stock, 0);
        assert_eq!(row.is_available, None);
    }

    #[test]
    fn test_variant_row_deserializes_null_fields() {
        let row: VariantRow = serde_json::from_value(json!({
            "product_id": 1,
            "size": "M",
            "color": "Navy Blue",
            "color_hex": null,
            "stock": 3,
            "is_available": null
        }))
        .unwrap();

        assert_eq!(row.hex(), DEFAULT_COLOR_HEX);
        assert!(row.in_stock());
    }

    #[test]
    fn test_missing_availability_counts_as_available() {
        let row = VariantRow {
            product_id: ProductId::new(1),
            size: "M".to_string(),
            color: "Red".to_string(),
            color_hex: None,
            stock: 5,
            is_available: None,
        };
        assert!(row.in_stock());
    }

    #[test]
    fn test_explicitly_disabled_row_is_not_in_stock() {
        let row = VariantRow {
            product_id: ProductId::new(1),
            size: "M".to_string(),
            color: "Red".to_string(),
            color_hex: None,
            stock: 5,
            is_available: Some(false),
        };
        assert!(!row.in_stock());
    }

    #[test]
    fn test_negative_stock_is_never_in_stock() {
        let row = VariantRow {
            product_id: ProductId::new(1),
            size: "M".to_string(),
            color: "Red".to_string(),
            color_hex: None,
            stock: -4,
            is_available: Some(true),
        };
        assert!(!row.in_stock());
    }

    #[test]
    fn test_hex_defaults_to_black() {
        let row = VariantRow {
            product_id: ProductId::new(1),
            size: "M".to_string(),
            color: "Red".to_string(),
            color_hex: None,
            stock: 1,
            is_available: None,
        };
        assert_eq!(row.hex(), "#000000");

        let row = VariantRow {
            color_hex: Some("#aa0000".to_string()),
            ..row
        };
        assert_eq!(row.hex(), "#aa0000");
    }

    #[test]
    fn test_image_row_deserializes_missing_fields() {
        let row: ImageRow = serde_json::from_value(json!({
            "product_id": 1,
            "image_url": "https://cdn.example.com/a.jpg"
        }))
        .unwrap();

        assert!(!row.shared());
        assert!(!row.is_primary);
        assert_eq!(row.display_order, 0);
        assert_eq!(row.color_key(), "");
    }

    #[test]
    fn test_image_color_key_is_normalized() {
        let row: ImageRow = serde_json::from_value(json!({
            "product_id": 1,
            "image_url": "https://cdn.example.com/a.jpg",
            "color": "  Navy   Blue "
        }))
        .unwrap();

        assert_eq!(row.color_key(), "navy-blue");
    }
}
