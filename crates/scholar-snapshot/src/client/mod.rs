//! Google Scholar profile page client.
//!
//! A single GET per run:
//! - Browser-like `User-Agent` (Scholar serves a bot check otherwise)
//! - Bounded request and connect timeouts
//! - No retries; any non-2xx status is an error

use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

/// HTTP client for Scholar profile pages.
#[derive(Clone)]
pub struct ScholarClient {
    /// HTTP client.
    client: Client,

    /// Base URL requests are sent to.
    base_url: String,

    /// Rows requested per page.
    page_size: u32,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails (e.g. an invalid
    /// `User-Agent` value).
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.base_url.clone(), page_size: config.page_size })
    }

    /// Build the profile URL for `user_id`.
    ///
    /// The identifier is percent-encoded as a query value.
    ///
    /// # Errors
    ///
    /// Returns error if the configured base URL is not a valid URL.
    pub fn profile_url(&self, user_id: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, api::PROFILE_PATH))?;
        url.query_pairs_mut()
            .append_pair("user", user_id)
            .append_pair("hl", api::LANGUAGE)
            .append_pair("pagesize", &self.page_size.to_string());
        Ok(url)
    }

    /// Fetch the raw HTML of a profile page.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or any non-success status.
    pub async fn fetch_profile_html(&self, user_id: &str) -> ClientResult<String> {
        let url = self.profile_url(user_id)?;
        tracing::debug!(%url, "Requesting profile page");

        let response = self.client.get(url).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.text().await?;

        tracing::debug!(bytes = body.len(), "Received profile page");
        Ok(body)
    }

    /// Handle response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Profile page responded");

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            StatusCode::NOT_FOUND => Err(ClientError::not_found(response.url().to_string())),
            s if s.is_server_error() => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(s.as_u16(), text))
            }
            s => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: s.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}
