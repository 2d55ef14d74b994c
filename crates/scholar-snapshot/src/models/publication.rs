//! Publication record extracted from one profile row.

use serde::{Deserialize, Serialize};

/// Citation count recorded when a row shows none.
pub const NO_CITATIONS: &str = "0";

/// One publication as rendered on a Scholar profile.
///
/// Every text field holds the trimmed text of its element, or an empty
/// string when the element is missing from the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Publication title.
    pub title: String,

    /// Author list as rendered by the page (may be truncated with "...").
    pub authors: String,

    /// Venue descriptor (journal, volume, pages, year).
    pub venue: String,

    /// Publication year. Kept as text because the page may mark it up.
    pub year: String,

    /// Citation count as text; `"0"` when absent.
    pub citations: String,

    /// Absolute link to the publication's Scholar page.
    pub scholar_link: Option<String>,
}

impl Default for PublicationRecord {
    fn default() -> Self {
        Self {
            title: String::new(),
            authors: String::new(),
            venue: String::new(),
            year: String::new(),
            citations: NO_CITATIONS.to_string(),
            scholar_link: None,
        }
    }
}
