//! Stock status derived from all variants of a product.

use serde::{Deserialize, Serialize};

/// Three-valued stock health indicator for a whole product.
///
/// Derived from every variant row of the product, not a single SKU: one
/// low-stock SKU is enough to flag the product as low stock even when
/// other SKUs are healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// At least one SKU is sellable and none of the sellable SKUs are low.
    InStock,
    /// At least one sellable SKU is below the low-stock threshold.
    LowStock,
    /// No SKU is sellable.
    #[default]
    OutOfStock,
}

impl StockStatus {
    /// String form matching the serialized representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&StockStatus::InStock).unwrap(),
            "\"in-stock\""
        );
        assert_eq!(
            serde_json::to_string(&StockStatus::LowStock).unwrap(),
            "\"low-stock\""
        );
        assert_eq!(
            serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
            "\"out-of-stock\""
        );
    }

    #[test]
    fn test_stock_status_display_matches_serde() {
        for status in [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json.trim_matches('"'), status.to_string());
        }
    }

    #[test]
    fn test_stock_status_default_is_out_of_stock() {
        assert_eq!(StockStatus::default(), StockStatus::OutOfStock);
    }
}
