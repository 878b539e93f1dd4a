//! Analysis error handling
//!
//! Transport failures never surface here: the gateway recovers from them
//! with the fallback score. Everything else is propagated to the caller.

use crate::services::analysis_client::RemoteFailure;
use healthsync_shared::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Analysis service error: {0}")]
    Remote(#[from] RemoteFailure),

    #[error("Not enough health data to generate analysis. Please log at least one day of data.")]
    NoHealthData,

    #[error("Analysis window of {days} days reaches outside the supported date range")]
    InvalidWindow { days: u32 },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl AnalysisError {
    /// HTTP status returned by the remote service, if it answered at all
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            AnalysisError::Remote(failure) => failure.status,
            _ => None,
        }
    }
}
