//! Publication extraction from Scholar profile HTML.
//!
//! Uses the `scraper` crate for CSS selector-based parsing. The page has no
//! semantic markup, so every field is located by class marker (see
//! [`crate::config::selectors`]). Missing sub-elements degrade to empty
//! fields; they are never errors.

mod rules;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::{api, selectors};
use crate::models::PublicationRecord;

pub use rules::{AuthorsVenue, resolve_citations};

/// What a fetched page looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A citations profile (publication table or rows present).
    Profile,
    /// A bot check / CAPTCHA page served with a success status.
    Interstitial,
    /// Neither; the markup may have changed.
    Unrecognized,
}

impl PageKind {
    /// Human-readable explanation for logs and errors.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Profile => "profile page",
            Self::Interstitial => "page looks like a bot check (CAPTCHA) interstitial",
            Self::Unrecognized => "page has no publication table; the markup may have changed",
        }
    }
}

/// Result of parsing one page.
#[derive(Debug, Clone)]
pub struct ParsedProfile {
    /// Records in document order.
    pub records: Vec<PublicationRecord>,
    /// Page classification.
    pub kind: PageKind,
}

/// Compiled selectors.
#[derive(Debug, Clone)]
struct Selectors {
    row: Selector,
    title_link: Selector,
    description_blocks: Selector,
    year: Selector,
    citation_link: Selector,
    citation_cell: Selector,
    publication_table: Selector,
    interstitial: Selector,
}

impl Selectors {
    fn compile() -> Self {
        let parse = |css: &str| Selector::parse(css).expect("valid selector constant");
        Self {
            row: parse(selectors::ROW),
            title_link: parse(selectors::TITLE_LINK),
            description_blocks: parse(selectors::DESCRIPTION_BLOCKS),
            year: parse(selectors::YEAR),
            citation_link: parse(selectors::CITATION_LINK),
            citation_cell: parse(selectors::CITATION_CELL),
            publication_table: parse(selectors::PUBLICATION_TABLE),
            interstitial: parse(selectors::INTERSTITIAL),
        }
    }
}

/// Extracts publication records from profile HTML.
#[derive(Debug, Clone)]
pub struct ProfileParser {
    selectors: Selectors,
    link_base: Url,
}

impl ProfileParser {
    /// Create a parser resolving links against `link_base`.
    ///
    /// # Errors
    ///
    /// Returns error if `link_base` is not an absolute URL.
    pub fn new(link_base: &str) -> Result<Self, url::ParseError> {
        Ok(Self { selectors: Selectors::compile(), link_base: Url::parse(link_base)? })
    }

    /// Parse a page into records plus its classification.
    #[must_use]
    pub fn parse(&self, html: &str) -> ParsedProfile {
        let document = Html::parse_document(html);
        let records: Vec<_> =
            document.select(&self.selectors.row).map(|row| self.record(row)).collect();
        let kind = self.classify(&document, records.len());

        tracing::debug!(rows = records.len(), ?kind, "Parsed profile page");
        ParsedProfile { records, kind }
    }

    /// Extract records only.
    #[must_use]
    pub fn extract_records(&self, html: &str) -> Vec<PublicationRecord> {
        self.parse(html).records
    }

    fn record(&self, row: ElementRef<'_>) -> PublicationRecord {
        let s = &self.selectors;

        let title_link = row.select(&s.title_link).next();
        let title = title_link.map(text_of).unwrap_or_default();
        let scholar_link = self.resolve_link(title_link.and_then(|a| a.value().attr("href")));

        let blocks: Vec<String> = row.select(&s.description_blocks).map(text_of).collect();
        let AuthorsVenue { authors, venue } = AuthorsVenue::from_blocks(&blocks);

        let year = row.select(&s.year).next().map(text_of).unwrap_or_default();

        let primary = row.select(&s.citation_link).next().map(text_of);
        let fallback = || row.select(&s.citation_cell).next().map(text_of);
        let citations = resolve_citations(primary, fallback);

        PublicationRecord { title, authors, venue, year, citations, scholar_link }
    }

    /// Resolve an `href` to an absolute URL. Absent or empty means no link.
    fn resolve_link(&self, href: Option<&str>) -> Option<String> {
        let href = href.filter(|h| !h.is_empty())?;
        match self.link_base.join(href) {
            Ok(url) => Some(url.into()),
            Err(err) => {
                tracing::debug!(href, error = %err, "Dropping unresolvable link");
                None
            }
        }
    }

    fn classify(&self, document: &Html, rows: usize) -> PageKind {
        if rows > 0 || document.select(&self.selectors.publication_table).next().is_some() {
            return PageKind::Profile;
        }

        let captcha_markup = document.select(&self.selectors.interstitial).next().is_some();
        let captcha_text = document
            .root_element()
            .text()
            .collect::<String>()
            .to_lowercase()
            .contains("unusual traffic");

        if captcha_markup || captcha_text { PageKind::Interstitial } else { PageKind::Unrecognized }
    }

    /// Classify a page without keeping its records.
    #[must_use]
    pub fn classify_page(&self, html: &str) -> PageKind {
        self.parse(html).kind
    }
}

impl Default for ProfileParser {
    fn default() -> Self {
        Self::new(api::BASE_URL).expect("valid base URL constant")
    }
}

/// Extract records from `html`, resolving links against Google Scholar.
#[must_use]
pub fn extract_records(html: &str) -> Vec<PublicationRecord> {
    ProfileParser::default().extract_records(html)
}

/// Trimmed text content of an element, descendants included.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
