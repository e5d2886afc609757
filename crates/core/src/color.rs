//! Canonical matching keys for color labels.
//!
//! The variant table and the image table are both edited by hand and
//! routinely disagree on case and spacing (`"Navy Blue"` vs `"navy
//! blue"`). Every comparison between the two goes through one canonical
//! key built here.

/// Build the canonical matching key for a color label.
///
/// ASCII lower-cases the label and collapses every run of whitespace to
/// a single hyphen; leading and trailing whitespace contribute nothing.
/// Empty or whitespace-only input yields the empty string. Locale-aware
/// case folding is deliberately not applied - the catalog's labels are
/// ASCII.
///
/// # Examples
///
/// ```rust
/// use marigold_core::color::normalize;
///
/// assert_eq!(normalize("Navy Blue"), "navy-blue");
/// assert_eq!(normalize("  Forest   green "), "forest-green");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("RED"), "red");
        assert_eq!(normalize("Burnt Orange"), "burnt-orange");
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize("navy   blue"), "navy-blue");
        assert_eq!(normalize("navy\t blue"), "navy-blue");
        assert_eq!(normalize("navy\nblue"), "navy-blue");
    }

    #[test]
    fn test_normalize_trims_edges() {
        assert_eq!(normalize("  navy blue  "), "navy-blue");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_normalize_is_idempotent_on_keys() {
        let key = normalize("Navy Blue");
        assert_eq!(normalize(&key), key);
    }

    #[test]
    fn test_case_and_spacing_variants_share_a_key() {
        assert_eq!(normalize("Navy Blue"), normalize("navy blue"));
        assert_eq!(normalize("Navy Blue"), normalize("NAVY   BLUE"));
    }
}
