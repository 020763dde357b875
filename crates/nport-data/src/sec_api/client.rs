//! sec-api.io search client.

use super::payload::{RawSearchResponse, SearchQuery};
use crate::config::SecApiConfig;
use crate::error::{NportError, Result};
use async_trait::async_trait;

/// User agent sent with every upstream request
const USER_AGENT: &str = concat!("nport/", env!("CARGO_PKG_VERSION"));

/// Path of the N-PORT full-text search endpoint
const FORM_NPORT_PATH: &str = "/form-nport";

/// Something that can answer an N-PORT search query.
#[async_trait]
pub trait FilingSource: Send + Sync {
    /// Run a search and return the decoded, not yet validated, response.
    ///
    /// # Errors
    /// [`NportError::UpstreamUnavailable`] on transport failure or a non-2xx
    /// status, [`NportError::MalformedResult`] if the body is not the
    /// expected JSON.
    async fn search(&self, query: &SearchQuery) -> Result<RawSearchResponse>;
}

/// HTTP client for the sec-api.io `form-nport` endpoint.
pub struct SecApiClient {
    client: reqwest::Client,
    config: SecApiConfig,
}

impl SecApiClient {
    /// Build a client from resolved configuration.
    ///
    /// # Example
    /// ```no_run
    /// use nport_data::config::SecApiConfig;
    /// use nport_data::sec_api::SecApiClient;
    ///
    /// # fn example() -> nport_data::Result<()> {
    /// let client = SecApiClient::new(SecApiConfig::from_env()?)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: SecApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| NportError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Full URL of the search endpoint, without the token.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.config.base_url, FORM_NPORT_PATH)
    }
}

#[async_trait]
impl FilingSource for SecApiClient {
    async fn search(&self, query: &SearchQuery) -> Result<RawSearchResponse> {
        tracing::debug!(url = %self.search_url(), query = %query.query, "searching N-PORT filings");

        let response = self
            .client
            .post(self.search_url())
            .query(&[("token", self.config.api_key())])
            .json(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NportError::UpstreamUnavailable(format!("HTTP {status}")));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl std::fmt::Debug for SecApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
