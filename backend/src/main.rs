//! HealthSync analysis CLI
//!
//! Reads `{userId?, days?, healthData, userProfile}` as JSON from a file (first
//! argument) or stdin, generates a health report and prints it to stdout.
//!
//! The remote AI service is tried first; when it cannot be reached the
//! rule-based fallback score is used instead.

use anyhow::{Context, Result};
use chrono::Utc;
use healthsync_backend::{
    config,
    services::{AnalysisGateway, ReportService},
};
use healthsync_shared::{validation, AnalysisRequest};
use serde::Deserialize;
use std::io::Read;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// CLI input: an analysis request plus the owning user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportInput {
    #[serde(default)]
    user_id: Option<Uuid>,
    /// Overrides `analysis.window_days` for this run
    #[serde(default)]
    days: Option<u32>,
    #[serde(flatten)]
    request: AnalysisRequest<'static>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        ai_service = %config.ai.service_url,
        "Starting HealthSync analysis"
    );

    let input = read_input(std::env::args().nth(1))?;
    let ReportInput {
        user_id,
        days,
        request,
    } = input;

    validation::validate_health_entries(&request.health_data)?;
    validation::validate_user_profile(&request.user_profile)?;

    let gateway = AnalysisGateway::from_config(&config)?;
    let service = ReportService::new(gateway, config.analysis.window_days);

    let report = service
        .generate_for_days(
            user_id.unwrap_or_else(Uuid::nil),
            request.health_data.into_owned(),
            &request.user_profile,
            days.unwrap_or(config.analysis.window_days),
            Utc::now(),
        )
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Parse the input document from `path`, or stdin when no path is given
fn read_input(path: Option<String>) -> Result<ReportInput> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Input is not a valid analysis request")
}

/// Initialize tracing/logging
///
/// Logs go to stderr so the report on stdout stays machine-readable.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "healthsync_backend=info,healthsync_analyze=info".into()
        } else {
            "healthsync_backend=debug,healthsync_analyze=debug,reqwest=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
