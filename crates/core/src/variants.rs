//! Variant aggregation: flat SKU rows into selectable sizes and colors.
//!
//! The catalog stores one row per size×color SKU, so the same size shows
//! up once per color and the same color once per size. The aggregator
//! folds those rows into deduplicated picker options with merged
//! availability, plus an overall stock classification for the product.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color;
use crate::types::{StockStatus, VariantRow};

/// Any sellable SKU below this quantity flags the product as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A selectable size with merged availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Stable value the size picker submits back.
    pub value: String,
    /// Display text; identical to `value` for sizes.
    pub label: String,
    /// True if any SKU covering this size is in stock.
    pub in_stock: bool,
}

/// A selectable color with merged swatch and availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    /// Canonical matching key (see [`crate::color::normalize`]); also
    /// the join key against image rows.
    pub value: String,
    /// Display text of the first row seen for this color.
    pub label: String,
    /// Swatch hex fixed by the first row seen for this color.
    pub hex: String,
    /// True if any SKU of this color is in stock.
    pub in_stock: bool,
}

/// Aggregated variant data for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VariantSelection {
    /// Distinct sizes in first-seen order.
    pub sizes: Vec<SizeOption>,
    /// Distinct colors in first-seen order.
    pub colors: Vec<ColorOption>,
    /// Overall stock classification across every row.
    pub stock_status: StockStatus,
    /// False when the product has no variant rows at all.
    pub has_variants: bool,
}

impl VariantSelection {
    /// Aggregate the raw SKU rows for one product.
    ///
    /// Rows are folded in input order. Both emitted lists are
    /// deduplicated with stable first-seen ordering, and availability
    /// merges with OR: a key that was ever in stock never downgrades.
    #[must_use]
    pub fn from_rows(rows: &[VariantRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        Self {
            sizes: collect_sizes(rows),
            colors: collect_colors(rows),
            stock_status: classify_stock(rows),
            has_variants: true,
        }
    }

    /// Color a product page should open on: the first in-stock color,
    /// falling back to the first color when everything is sold out.
    #[must_use]
    pub fn default_color(&self) -> Option<&ColorOption> {
        self.colors
            .iter()
            .find(|c| c.in_stock)
            .or_else(|| self.colors.first())
    }
}

/// Fold size fragments into first-seen-ordered options.
///
/// A row's `size` may pack several sizes separated by commas; fragments
/// are trimmed and empty ones (from stray separators) contribute nothing.
fn collect_sizes(rows: &[VariantRow]) -> Vec<SizeOption> {
    let mut sizes: Vec<SizeOption> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let in_stock = row.in_stock();
        for fragment in row.size.split(',') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            if let Some(&idx) = seen.get(fragment) {
                if let Some(existing) = sizes.get_mut(idx) {
                    existing.in_stock = existing.in_stock || in_stock;
                }
            } else {
                seen.insert(fragment.to_string(), sizes.len());
                sizes.push(SizeOption {
                    value: fragment.to_string(),
                    label: fragment.to_string(),
                    in_stock,
                });
            }
        }
    }

    sizes
}

/// Fold color rows into first-seen-ordered options keyed by the
/// canonical color key, so case/spacing variants of one label collapse
/// into a single entry. The first row seen for a key fixes the display
/// label and swatch hex permanently; later rows only merge availability.
fn collect_colors(rows: &[VariantRow]) -> Vec<ColorOption> {
    let mut colors: Vec<ColorOption> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let in_stock = row.in_stock();
        let key = color::normalize(&row.color);
        if let Some(&idx) = seen.get(&key) {
            if let Some(existing) = colors.get_mut(idx) {
                existing.in_stock = existing.in_stock || in_stock;
            }
        } else {
            seen.insert(key.clone(), colors.len());
            colors.push(ColorOption {
                value: key,
                label: row.color.clone(),
                hex: row.hex().to_string(),
                in_stock,
            });
        }
    }

    colors
}

/// Classify overall stock across every row.
///
/// One low-stock SKU flags the whole product: the classification is a
/// warning triggered by presence, not an average.
fn classify_stock(rows: &[VariantRow]) -> StockStatus {
    let mut has_stock = false;
    let mut low_stock = false;

    for row in rows {
        if row.in_stock() {
            has_stock = true;
            if row.stock < LOW_STOCK_THRESHOLD {
                low_stock = true;
            }
        }
    }

    if !has_stock {
        StockStatus::OutOfStock
    } else if low_stock {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}
