//! randomuser.me source over HTTP.

use crate::model::{Category, FetchError, PageNumber};
use crate::source::{dto, PageBatch, RecordFetch};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Connection settings for [`RandomUserClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// API endpoint, e.g. `https://randomuser.me/api/`.
    pub base_url: String,
    /// Records requested per page (`results` query parameter).
    pub page_size: u32,
    /// Fixed seed so that page N is stable across requests.
    /// Without it every page is freshly random and may repeat records.
    pub seed: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://randomuser.me/api/".to_string(),
            page_size: 10,
            seed: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Build the request URL for one page.
///
/// Query: `page`, `results`, then `gender` unless unfiltered, then `seed`
/// when configured.
///
/// # Errors
///
/// Returns `InvalidRequest` if `base_url` does not parse, cannot carry a
/// query, or `page_size` is zero.
pub fn build_page_url(
    base_url: &str,
    page: PageNumber,
    filter: Category,
    page_size: u32,
    seed: Option<&str>,
) -> Result<Url, FetchError> {
    if page_size == 0 {
        return Err(FetchError::invalid_request("page size must be positive"));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| FetchError::invalid_request(format!("base url {base_url:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::invalid_request(format!(
            "base url {base_url:?} cannot carry a query"
        )));
    }

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &page.get().to_string());
        query.append_pair("results", &page_size.to_string());
        if let Some(gender) = filter.query_value() {
            query.append_pair("gender", gender);
        }
        if let Some(seed) = seed {
            query.append_pair("seed", seed);
        }
    }

    Ok(url)
}

/// HTTP client for the randomuser.me API.
pub struct RandomUserClient {
    client: Client,
    config: SourceConfig,
}

impl RandomUserClient {
    /// Create a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the underlying HTTP client cannot be built.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ruv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::invalid_request(format!("http client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

#[async_trait]
impl RecordFetch for RandomUserClient {
    async fn fetch(&self, page: PageNumber, filter: Category) -> Result<PageBatch, FetchError> {
        let url = build_page_url(
            &self.config.base_url,
            page,
            filter,
            self.config.page_size,
            self.config.seed.as_deref(),
        )?;
        debug!(%url, "Requesting page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::network(format!("HTTP status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        dto::decode_page(&body)
    }
}
