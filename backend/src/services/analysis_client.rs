//! Client for the remote AI analysis service
//!
//! The service accepts `POST /api/analyze` with `{healthData, userProfile}`
//! and answers with an `AnalysisResult` body. Failures are classified so
//! the gateway can tell "unreachable" apart from "answered with an error".

use async_trait::async_trait;
use healthsync_shared::{AnalysisRequest, AnalysisResult, HealthEntry, UserProfile};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Path of the analysis endpoint, relative to the service base URL
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Longest slice of an error body kept in a failure message
const MAX_ERROR_BODY: usize = 500;

/// Why a remote analysis call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, unreachable or timed out. Recoverable locally.
    TransportUnavailable,
    /// The service answered badly: error status, malformed body, bad request
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::TransportUnavailable => f.write_str("transport unavailable"),
            FailureKind::Other => f.write_str("remote error"),
        }
    }
}

#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct RemoteFailure {
    pub kind: FailureKind,
    pub status: Option<u16>,
    pub message: String,
}

impl RemoteFailure {
    pub fn new(kind: FailureKind, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
        }
    }

    pub fn timed_out(after: Duration) -> Self {
        Self::new(
            FailureKind::TransportUnavailable,
            None,
            format!("no response within {}ms", after.as_millis()),
        )
    }

    #[inline]
    pub fn is_transport_unavailable(&self) -> bool {
        self.kind == FailureKind::TransportUnavailable
    }
}

impl From<reqwest::Error> for RemoteFailure {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_connect() || err.is_timeout() {
            FailureKind::TransportUnavailable
        } else {
            FailureKind::Other
        };
        Self::new(kind, err.status().map(|s| s.as_u16()), err.to_string())
    }
}

/// A source of remote health analyses
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(
        &self,
        entries: &[HealthEntry],
        profile: &UserProfile,
    ) -> Result<AnalysisResult, RemoteFailure>;
}

/// HTTP implementation backed by a pooled `reqwest` client
#[derive(Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    /// Create a client for the service at `base_url`
    ///
    /// The timeout covers the whole exchange, including reading the body.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(
        &self,
        entries: &[HealthEntry],
        profile: &UserProfile,
    ) -> Result<AnalysisResult, RemoteFailure> {
        debug!(endpoint = %self.endpoint, entries = entries.len(), "Requesting remote analysis");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalysisRequest::borrowed(entries, profile))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(RemoteFailure::new(
                FailureKind::Other,
                Some(status.as_u16()),
                format!("analysis service returned {status}: {body}"),
            ));
        }

        Ok(response.json::<AnalysisResult>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://ai:8000", "http://ai:8000/api/analyze")]
    #[case("http://ai:8000/", "http://ai:8000/api/analyze")]
    #[case("https://ai.example.com/v2", "https://ai.example.com/v2/api/analyze")]
    fn test_endpoint_joins_base_url(#[case] base: &str, #[case] expected: &str) {
        let client = HttpAnalysisClient::new(base, Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), expected);
    }

    #[test]
    fn test_timeout_failure_is_transport() {
        let failure = RemoteFailure::timed_out(Duration::from_secs(10));
        assert!(failure.is_transport_unavailable());
        assert_eq!(failure.to_string(), "transport unavailable: no response within 10000ms");
    }

    #[test]
    fn test_other_failure_is_not_transport() {
        let failure = RemoteFailure::new(FailureKind::Other, Some(500), "boom");
        assert!(!failure.is_transport_unavailable());
        assert_eq!(failure.to_string(), "remote error: boom");
    }
}
