//! Filing lookup: build the query, call the upstream, reshape the answer.

use crate::config::SecApiConfig;
use crate::error::Result;
use crate::filing::{FilingSummary, summarize};
use crate::sec_api::{FilingSource, SearchQuery, SecApiClient};

/// Stateless lookup of the most recent N-PORT filing for a CIK.
///
/// Each call performs exactly one upstream search. Nothing is cached or
/// retried, so the service can be shared freely between concurrent requests.
#[derive(Debug)]
pub struct FilingLookupService<S = SecApiClient> {
    source: S,
}

impl FilingLookupService<SecApiClient> {
    /// Build a service backed by sec-api.io.
    pub fn from_config(config: SecApiConfig) -> Result<Self> {
        Ok(Self::new(SecApiClient::new(config)?))
    }
}

impl<S: FilingSource> FilingLookupService<S> {
    /// Build a service on top of any [`FilingSource`].
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch and reshape the most recent filing for `cik`.
    ///
    /// The identifier is forwarded as-is; whether it names a real filer is
    /// decided by the upstream API.
    ///
    /// # Errors
    /// [`NportError::UpstreamUnavailable`](crate::NportError::UpstreamUnavailable)
    /// when the search call fails, and
    /// [`NportError::MalformedResult`](crate::NportError::MalformedResult)
    /// when the response is empty or not shaped like a filing.
    pub async fn get_recent_filing(&self, cik: &str) -> Result<FilingSummary> {
        let query = SearchQuery::latest_for_cik(cik);
        let response = self.source.search(&query).await?;
        let summary = summarize(cik, response)?;

        tracing::info!(
            cik,
            registrant = %summary.registrant_name,
            holdings = summary.holdings.len(),
            total_value = summary.total_value(),
            "resolved most recent N-PORT filing"
        );

        Ok(summary)
    }
}
