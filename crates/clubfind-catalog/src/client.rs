use std::time::Duration;

use reqwest::Client;

use crate::error::CatalogError;
use crate::extract::parse_listing;
use crate::types::ExtractionResult;

/// HTTP client for the catalog website.
///
/// One bounded-timeout GET per listing page, with a fixed identifying
/// `User-Agent`. There are no automatic retries: the request timeout is
/// the only latency bound, and every failure degrades at the
/// [`CatalogClient::extract`] boundary.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one listing page and returns its raw HTML.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] — HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`CatalogError::Http`] — network, TLS, or timeout failure.
    pub async fn fetch(&self, url: &str) -> Result<String, CatalogError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches and parses one listing page.
    ///
    /// Never fails: any fetch error degrades to [`ExtractionResult::empty`]
    /// (logged at `error`), whose `total_count` of `None` means "could not
    /// determine" — distinct from a confirmed-empty page, which parses
    /// normally with `no_results=true`.
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        match self.fetch(url).await {
            Ok(html) => parse_listing(&html, url),
            Err(e) => {
                tracing::error!(url, error = %e, "catalog fetch failed, returning empty result");
                ExtractionResult::empty()
            }
        }
    }
}
