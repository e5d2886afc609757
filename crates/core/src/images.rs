//! Gallery resolution: raw image rows plus a selected color into an
//! ordered, deduplicated URL sequence.
//!
//! Colors without dedicated photography fall back to every non-common
//! image rather than an empty gallery, so a colorway added before its
//! photo shoot still renders. DESIGN.md flags this policy for review.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::color;
use crate::types::ImageRow;

/// Ordered, deduplicated gallery for one product and color selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResolvedImages {
    /// Gallery URLs: color-specific shots first, common shots appended.
    pub urls: Vec<String>,
    /// False when the product has no image rows at all; the caller then
    /// falls back to the product's thumbnail.
    pub has_images: bool,
}

/// Resolve the gallery for a product and an optional selected color.
///
/// The cascade, evaluated in strict order:
///
/// 1. non-common rows whose color matches the selection (compared via
///    canonical keys),
/// 2. if nothing matches - or there is no usable selection - every
///    non-common row,
/// 3. common rows appended last.
///
/// Row order is preserved inside each bucket and duplicate URLs are
/// dropped, first occurrence winning. The function is total and
/// deterministic; resolving twice with the same input yields the same
/// sequence.
#[must_use]
pub fn resolve(rows: &[ImageRow], selected_color: Option<&str>) -> ResolvedImages {
    let common: Vec<&ImageRow> = rows.iter().filter(|r| r.shared()).collect();
    let specific: Vec<&ImageRow> = rows.iter().filter(|r| !r.shared()).collect();

    let selected_key = selected_color.map(color::normalize).unwrap_or_default();
    let matches: Vec<&ImageRow> = if selected_key.is_empty() {
        Vec::new()
    } else {
        specific
            .iter()
            .copied()
            .filter(|r| r.color_key() == selected_key)
            .collect()
    };

    // A color with no dedicated shots gets every non-common image
    // instead of an empty gallery.
    let color_bucket = if matches.is_empty() { specific } else { matches };

    let mut seen: HashSet<&str> = HashSet::new();
    let urls = color_bucket
        .into_iter()
        .chain(common)
        .filter(|r| seen.insert(r.image_url.as_str()))
        .map(|r| r.image_url.clone())
        .collect();

    ResolvedImages {
        urls,
        has_images: !rows.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn color_image(url: &str, color: &str) -> ImageRow {
        ImageRow {
            product_id: ProductId::new(1),
            image_url: url.to_string(),
            color: Some(color.to_string()),
            is_common: None,
            is_primary: false,
            display_order: 0,
        }
    }

    fn common_image(url: &str) -> ImageRow {
        ImageRow {
            product_id: ProductId::new(1),
            image_url: url.to_string(),
            color: None,
            is_common: Some(true),
            is_primary: false,
            display_order: 0,
        }
    }

    fn fixture() -> Vec<ImageRow> {
        vec![
            color_image("a", "Red"),
            common_image("b"),
            color_image("c", "Blue"),
        ]
    }

    #[test]
    fn test_matched_color_then_common() {
        let resolved = resolve(&fixture(), Some("Red"));
        assert_eq!(resolved.urls, vec!["a", "b"]);
        assert!(resolved.has_images);
    }

    #[test]
    fn test_unmatched_color_falls_back_to_all_non_common() {
        let resolved = resolve(&fixture(), Some("Green"));
        assert_eq!(resolved.urls, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_no_selection_shows_all_non_common_then_common() {
        let resolved = resolve(&fixture(), None);
        assert_eq!(resolved.urls, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_blank_selection_behaves_like_no_selection() {
        let resolved = resolve(&fixture(), Some("   "));
        assert_eq!(resolved.urls, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_matching_ignores_case_and_spacing() {
        let rows = vec![color_image("a", "Navy  Blue"), common_image("b")];
        let resolved = resolve(&rows, Some("navy blue"));
        assert_eq!(resolved.urls, vec!["a", "b"]);
    }

    #[test]
    fn test_common_only_product_with_selection() {
        let rows = vec![common_image("b"), common_image("d")];
        let resolved = resolve(&rows, Some("Red"));
        assert_eq!(resolved.urls, vec!["b", "d"]);
    }

    #[test]
    fn test_duplicate_url_across_buckets_appears_once() {
        // "a" is tagged Red and also flagged common by inconsistent data.
        let rows = vec![
            color_image("a", "Red"),
            common_image("a"),
            common_image("b"),
        ];
        let resolved = resolve(&rows, Some("Red"));
        assert_eq!(resolved.urls, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_url_within_bucket_keeps_first() {
        let rows = vec![
            color_image("a", "Red"),
            color_image("a", "Red"),
            color_image("c", "Red"),
        ];
        let resolved = resolve(&rows, Some("Red"));
        assert_eq!(resolved.urls, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_rows() {
        let resolved = resolve(&[], Some("Red"));
        assert!(resolved.urls.is_empty());
        assert!(!resolved.has_images);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let rows = fixture();
        assert_eq!(resolve(&rows, Some("Red")), resolve(&rows, Some("Red")));
        assert_eq!(resolve(&rows, None), resolve(&rows, None));
    }

    #[test]
    fn test_bucket_order_preserves_row_order() {
        let rows = vec![
            color_image("one", "Red"),
            color_image("two", "Red"),
            common_image("three"),
            color_image("four", "Red"),
        ];
        let resolved = resolve(&rows, Some("Red"));
        assert_eq!(resolved.urls, vec!["one", "two", "four", "three"]);
    }

    #[test]
    fn test_untagged_non_common_rows_never_match_a_selection() {
        let mut untagged = color_image("a", "Red");
        untagged.color = None;
        let rows = vec![untagged, color_image("c", "Blue")];

        // "Blue" matches only the tagged row.
        let resolved = resolve(&rows, Some("Blue"));
        assert_eq!(resolved.urls, vec!["c"]);
    }
}
