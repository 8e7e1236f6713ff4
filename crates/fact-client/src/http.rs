//! reqwest-backed fact source.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use domain::FactOutcome;
use serde_json::Value;

use crate::error::{FetchError, Result};
use crate::source::FactSource;

/// Default upstream endpoint.
pub const DEFAULT_URL: &str = "https://catfact.ninja/fact";

/// Default bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches facts with one GET per call, bounded by a timeout that covers
/// connecting, waiting for headers and reading the body.
#[derive(Debug, Clone)]
pub struct HttpFactSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpFactSource {
    /// Creates a source for the given URL and timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn request(&self) -> Result<Option<String>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        parse_fact(&body)
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(err)
        }
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> FactOutcome {
        tracing::info!("fetching fact from upstream");
        let start = Instant::now();

        let outcome = match self.request().await {
            Ok(Some(fact)) => {
                tracing::info!("fetched fact from upstream");
                FactOutcome::Found(fact)
            }
            Ok(None) => {
                tracing::info!("upstream response has no fact field");
                FactOutcome::Missing
            }
            Err(err) => {
                tracing::error!(error = %err, "fact request failed");
                err.outcome()
            }
        };

        metrics::histogram!("fact_fetch_duration_seconds").record(start.elapsed().as_secs_f64());
        metrics::counter!("fact_fetch_total", "outcome" => outcome.label()).increment(1);

        outcome
    }
}

/// Extracts the `fact` string from an upstream body.
///
/// Returns `Ok(None)` when the body is a JSON object without a `fact` key or
/// with `"fact": null`.
pub fn parse_fact(body: &[u8]) -> Result<Option<String>> {
    let Value::Object(mut object) = serde_json::from_slice::<Value>(body)? else {
        return Err(FetchError::Malformed("body is not a JSON object"));
    };

    match object.remove("fact") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(fact)) => Ok(Some(fact)),
        Some(_) => Err(FetchError::Malformed("`fact` is not a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fact_string() {
        let fact = parse_fact(br#"{"fact":"Cats sleep 70% of their lives.","length":30}"#).unwrap();
        assert_eq!(fact.as_deref(), Some("Cats sleep 70% of their lives."));
    }

    #[test]
    fn test_parse_missing_fact() {
        assert_eq!(parse_fact(br#"{"length":30}"#).unwrap(), None);
        assert_eq!(parse_fact(br#"{"fact":null}"#).unwrap(), None);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_fact(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Body(_)));
        assert_eq!(err.outcome(), FactOutcome::Unavailable);
    }

    #[test]
    fn test_parse_non_object() {
        let err = parse_fact(br#"["fact"]"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_parse_non_string_fact() {
        let err = parse_fact(br#"{"fact":42}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_new_keeps_configuration() {
        let source = HttpFactSource::new(DEFAULT_URL, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(source.url(), "https://catfact.ninja/fact");
        assert_eq!(source.timeout(), Duration::from_secs(5));
    }
}
