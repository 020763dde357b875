//! Error types for filing lookups.

use thiserror::Error;

/// Result type for filing lookups.
pub type Result<T> = std::result::Result<T, NportError>;

/// Errors that can occur while looking up and reshaping a filing.
#[derive(Debug, Error)]
pub enum NportError {
    /// The upstream API could not be reached or answered with a non-success status.
    #[error("Failed to fetch filing: {0}")]
    UpstreamUnavailable(String),

    /// The upstream payload did not have the expected shape.
    #[error("{0}")]
    MalformedResult(String),

    /// Required credential missing from the environment
    #[error("Missing required configuration: {0} is not set")]
    MissingCredential(&'static str),

    /// Configuration value could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NportError {
    /// Shorthand for a [`NportError::MalformedResult`].
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResult(detail.into())
    }

    /// Whether this error was produced by the upstream transport rather than the payload.
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_))
    }
}

impl From<reqwest::Error> for NportError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API token as a query parameter.
        Self::UpstreamUnavailable(with_causes(&err.without_url()))
    }
}

/// Render an error followed by its `source()` chain, joined with `": "`.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<serde_json::Error> for NportError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResult(format!("Unexpected upstream payload: {err}"))
    }
}
