//! Field rules that depend on Scholar's markup conventions.

use crate::models::NO_CITATIONS;

/// Authors and venue read from the gray description blocks of a row.
///
/// Scholar renders two `.gs_gray` blocks under the title: the author list
/// first, the venue second. Nothing in the markup distinguishes them, so
/// this rule is purely positional and will silently mislabel fields if the
/// page ever reorders or drops one of them:
///
/// | blocks | authors    | venue      |
/// |--------|------------|------------|
/// | 0      | `""`       | `""`       |
/// | 1      | block 0    | `""`       |
/// | 2+     | block 0    | block 1    |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorsVenue {
    /// First block.
    pub authors: String,
    /// Second block.
    pub venue: String,
}

impl AuthorsVenue {
    /// Apply the positional rule to the blocks in document order.
    #[must_use]
    pub fn from_blocks(blocks: &[String]) -> Self {
        let mut blocks = blocks.iter().cloned();
        let authors = blocks.next().unwrap_or_default();
        let venue = blocks.next().unwrap_or_default();
        Self { authors, venue }
    }
}

/// Two-step citation lookup with a default.
///
/// 1. `primary`: text of the citation anchor, if the anchor exists.
/// 2. Otherwise `fallback`: text of the citation cell, if the cell exists.
/// 3. Missing or empty text becomes `"0"`.
///
/// The fallback is only evaluated when the anchor is absent. An anchor that
/// exists but is empty yields `"0"` without consulting the cell.
#[must_use]
pub fn resolve_citations(
    primary: Option<String>,
    fallback: impl FnOnce() -> Option<String>,
) -> String {
    match primary.or_else(fallback) {
        Some(t) if !t.is_empty() => t,
        _ => NO_CITATIONS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_authors_venue_two_blocks() {
        let av = AuthorsVenue::from_blocks(&blocks(&["A Smith, B Jones", "Nature 1 (2), 3-4"]));
        assert_eq!(av.authors, "A Smith, B Jones");
        assert_eq!(av.venue, "Nature 1 (2), 3-4");
    }

    #[test]
    fn test_authors_venue_single_block_is_authors() {
        let av = AuthorsVenue::from_blocks(&blocks(&["A Smith"]));
        assert_eq!(av.authors, "A Smith");
        assert_eq!(av.venue, "");
    }

    #[test]
    fn test_authors_venue_no_blocks() {
        assert_eq!(AuthorsVenue::from_blocks(&[]), AuthorsVenue::default());
    }

    #[test]
    fn test_authors_venue_extra_blocks_ignored() {
        let av = AuthorsVenue::from_blocks(&blocks(&["a", "v", "extra"]));
        assert_eq!(av, AuthorsVenue { authors: "a".into(), venue: "v".into() });
    }

    #[test]
    fn test_citations_primary_wins() {
        let result = resolve_citations(Some("17".into()), || panic!("fallback must not run"));
        assert_eq!(result, "17");
    }

    #[test]
    fn test_citations_fallback_when_anchor_missing() {
        assert_eq!(resolve_citations(None, || Some("42".into())), "42");
    }

    #[test]
    fn test_citations_default() {
        assert_eq!(resolve_citations(None, || None), "0");
        assert_eq!(resolve_citations(None, || Some(String::new())), "0");
        assert_eq!(resolve_citations(Some(String::new()), || Some("9".into())), "0");
    }
}
