//! Configuration for the profile snapshot builder.

use std::time::Duration;

/// Upstream endpoint constants.
pub mod api {
    use std::time::Duration;

    /// Public base URL of Google Scholar. Publication links are resolved against it.
    pub const BASE_URL: &str = "https://scholar.google.com";

    /// Path of the citations profile page.
    pub const PROFILE_PATH: &str = "/citations";

    /// Interface language requested from the profile page.
    pub const LANGUAGE: &str = "en";

    /// Number of publication rows requested (the page's maximum).
    pub const PAGE_SIZE: u32 = 100;

    /// Browser-like identifying header. Scholar serves a bot check to unknown agents.
    pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/115.0 Safari/537.36";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// CSS selectors for the profile page markup.
///
/// Scholar's markup carries no semantic tags, only these class markers.
/// Every selector the parser uses lives here.
pub mod selectors {
    /// One publication row.
    pub const ROW: &str = ".gsc_a_tr";

    /// Title anchor inside a row (text = title, `href` = link).
    pub const TITLE_LINK: &str = ".gsc_a_t a";

    /// Gray descriptive blocks inside the title cell (authors, then venue).
    pub const DESCRIPTION_BLOCKS: &str = ".gsc_a_t .gs_gray";

    /// Publication year.
    pub const YEAR: &str = ".gsc_a_y .gsc_a_h";

    /// Citation count anchor (primary lookup).
    pub const CITATION_LINK: &str = ".gsc_a_c a";

    /// Citation cell (fallback lookup when the anchor is missing).
    pub const CITATION_CELL: &str = ".gsc_a_c";

    /// Body of the publication table, present on every profile page.
    pub const PUBLICATION_TABLE: &str = "#gsc_a_b";

    /// Markers of a bot-check / CAPTCHA interstitial.
    pub const INTERSTITIAL: &str = "#gs_captcha_f, #captcha-form, .g-recaptcha";
}

/// Builder configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL requests are sent to (overridable for mirrors and mock servers).
    pub base_url: String,

    /// Base URL publication links are resolved against.
    pub link_base_url: String,

    /// Rows requested per page.
    pub page_size: u32,

    /// `User-Agent` header value.
    pub user_agent: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Fail instead of warning when a non-profile page yields zero rows.
    pub strict: bool,
}

impl Config {
    /// Create the default configuration pointing at Google Scholar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            link_base_url: api::BASE_URL.to_string(),
            page_size: api::PAGE_SIZE,
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            strict: false,
        }
    }

    /// Create a test configuration pointed at a mock server.
    ///
    /// Links still resolve against the public Scholar base.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new()
        }
    }

    /// Override the request base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Enable or disable strict zero-row handling.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
