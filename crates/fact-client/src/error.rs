//! Fact client error types.

use std::time::Duration;

use domain::FactOutcome;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the upstream fact API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Upstream did not answer in time.
    #[error("Upstream request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, TLS or transfer error.
    #[error("Upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    /// Body was not valid JSON.
    #[error("Upstream body is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),

    /// Body was JSON but not shaped as expected.
    #[error("Upstream body is malformed: {0}")]
    Malformed(&'static str),
}

impl FetchError {
    /// Maps the error onto the fallback taxonomy.
    pub fn outcome(&self) -> FactOutcome {
        match self {
            FetchError::Timeout(_) => FactOutcome::TimedOut,
            _ => FactOutcome::Unavailable,
        }
    }
}

/// Convenience type alias for fact client results.
pub type Result<T> = std::result::Result<T, FetchError>;
