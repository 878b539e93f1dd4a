//! Business logic services
//!
//! Services encapsulate analysis logic and coordinate between the
//! remote AI service and the local fallback scorer.

pub mod analysis_client;
pub mod gateway;
pub mod reports;

pub use analysis_client::{AnalysisClient, FailureKind, HttpAnalysisClient, RemoteFailure};
pub use gateway::AnalysisGateway;
pub use reports::ReportService;
