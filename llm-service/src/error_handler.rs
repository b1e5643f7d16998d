//! Unified error handling for `llm-service`.
//!
//! A single top-level [`LlmError`] for the whole crate, with provider failures
//! grouped in [`ProviderError`]. Transport failures come straight from
//! `reqwest` so callers can use `?` everywhere.

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::llm_provider::LlmProvider;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Top-level error for the `llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider-specific failure (construction or protocol level).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error.
    #[error("llm transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// A provider failure, tagged with which provider produced it.
#[derive(Debug, Error)]
#[error("{provider:?}: {kind}")]
pub struct ProviderError {
    /// Provider that produced the failure.
    pub provider: LlmProvider,
    /// Failure detail.
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(provider: LlmProvider, kind: ProviderErrorKind) -> Self {
        Self { provider, kind }
    }
}

/// Detailed provider failure kinds.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderErrorKind {
    /// The config carries a different provider than the service expects.
    #[error("config targets a different provider")]
    InvalidProvider,

    /// The provider requires an API key and none was configured.
    #[error("missing api key")]
    MissingApiKey,

    /// The endpoint is empty or does not start with http/https.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error("http {status}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Short trimmed snippet of the response body.
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Trim a response body down to a short, log-friendly snippet.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        return trimmed.to_string();
    }
    let mut cut = MAX;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…", &trimmed[..cut])
}
