//! Analysis gateway
//!
//! Makes a single attempt at the remote analysis service:
//! - success: the remote result is returned as-is
//! - unreachable or timed out: the rule-based fallback score is returned
//! - any other failure: the error is propagated
//!
//! There are no retries. The timeout is enforced here as well as in the
//! HTTP client so that no client implementation can stall a request.

use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::services::analysis_client::{AnalysisClient, HttpAnalysisClient, RemoteFailure};
use healthsync_shared::{
    compute_fallback_with, AnalysisResult, HealthEntry, LatestEntry, UserProfile,
};
use std::time::Duration;
use tracing::{error, info, warn};

/// Default upper bound on a remote analysis call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote-first analysis with a local fallback
pub struct AnalysisGateway<C = HttpAnalysisClient> {
    client: C,
    timeout: Duration,
    latest_entry: LatestEntry,
}

impl AnalysisGateway<HttpAnalysisClient> {
    /// Build a gateway talking HTTP to the configured service
    pub fn from_config(config: &AppConfig) -> Result<Self, AnalysisError> {
        let timeout = config.ai.timeout();
        let client =
            HttpAnalysisClient::new(&config.ai.service_url, timeout).map_err(AnalysisError::Client)?;
        info!(endpoint = %client.endpoint(), timeout_ms = timeout.as_millis() as u64, "Analysis gateway ready");

        Ok(Self::new(client)
            .with_timeout(timeout)
            .with_latest_entry(config.analysis.latest_entry))
    }
}

impl<C: AnalysisClient> AnalysisGateway<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
            latest_entry: LatestEntry::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Policy used to pick the scored entry when falling back
    pub fn with_latest_entry(mut self, latest_entry: LatestEntry) -> Self {
        self.latest_entry = latest_entry;
        self
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[inline]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Analyze health entries (ascending by date) for a user
    pub async fn get_analysis(
        &self,
        entries: &[HealthEntry],
        profile: &UserProfile,
    ) -> Result<AnalysisResult, AnalysisError> {
        let outcome = tokio::time::timeout(self.timeout, self.client.analyze(entries, profile))
            .await
            .unwrap_or_else(|_| Err(RemoteFailure::timed_out(self.timeout)));

        match outcome {
            Ok(result) => {
                metrics::counter!("analysis_remote_success_total").increment(1);
                Ok(result)
            }
            Err(failure) if failure.is_transport_unavailable() => {
                warn!(error = %failure, "AI service unavailable, using fallback calculation");
                metrics::counter!("analysis_fallback_total").increment(1);
                Ok(compute_fallback_with(entries, self.latest_entry))
            }
            Err(failure) => {
                error!(error = %failure, status = ?failure.status, "AI service error");
                metrics::counter!("analysis_remote_error_total").increment(1);
                Err(AnalysisError::Remote(failure))
            }
        }
    }
}
