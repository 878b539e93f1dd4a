//! Report generation service
//!
//! Turns a user's logged entries into an immutable `AnalysisReport`:
//! - Selects the analysis window (last N days, starting at midnight UTC)
//! - Orders entries ascending by date
//! - Runs the analysis through the gateway
//! - Stamps the report with its data range and generation time

use crate::error::AnalysisError;
use crate::services::analysis_client::{AnalysisClient, HttpAnalysisClient};
use crate::services::gateway::AnalysisGateway;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use healthsync_shared::{AnalysisReport, DataRange, HealthEntry, UserProfile};
use tracing::info;
use uuid::Uuid;

/// Default number of days included in an analysis
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// First calendar day inside the analysis window ending at `now`
///
/// Returns `None` when the window reaches before the earliest representable date.
pub fn window_start(now: DateTime<Utc>, window_days: u32) -> Option<NaiveDate> {
    now.checked_sub_signed(Duration::days(i64::from(window_days)))
        .map(|start| start.date_naive())
}

/// Keep entries on or after `start`, ordered ascending by date
pub fn select_window(entries: Vec<HealthEntry>, start: NaiveDate) -> Vec<HealthEntry> {
    let mut selected: Vec<HealthEntry> = entries.into_iter().filter(|e| e.date >= start).collect();
    // Stable sort keeps caller order for duplicate days
    selected.sort_by_key(|e| e.date);
    selected
}

/// Report generation service
pub struct ReportService<C = HttpAnalysisClient> {
    gateway: AnalysisGateway<C>,
    window_days: u32,
}

impl<C: AnalysisClient> ReportService<C> {
    pub fn new(gateway: AnalysisGateway<C>, window_days: u32) -> Self {
        Self {
            gateway,
            window_days,
        }
    }

    /// Generate a report for `user_id` over the configured window
    pub async fn generate(
        &self,
        user_id: Uuid,
        entries: Vec<HealthEntry>,
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.generate_for_days(user_id, entries, profile, self.window_days, now)
            .await
    }

    /// Generate a report covering the last `window_days` days
    ///
    /// Fails with `NoHealthData` when nothing falls inside the window.
    pub async fn generate_for_days(
        &self,
        user_id: Uuid,
        entries: Vec<HealthEntry>,
        profile: &UserProfile,
        window_days: u32,
        now: DateTime<Utc>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let start = window_start(now, window_days)
            .ok_or(AnalysisError::InvalidWindow { days: window_days })?;
        let window = select_window(entries, start);

        if window.is_empty() {
            return Err(AnalysisError::NoHealthData);
        }

        let result = self.gateway.get_analysis(&window, profile).await?;

        let data_range = DataRange {
            start_date: start.and_time(NaiveTime::MIN).and_utc(),
            end_date: now,
        };
        let report = AnalysisReport::new(user_id, result, data_range, now);

        info!(
            user_id = %user_id,
            report_id = %report.id,
            window_days,
            entries = window.len(),
            health_score = report.health_score,
            "Generated health analysis report"
        );

        Ok(report)
    }
}
