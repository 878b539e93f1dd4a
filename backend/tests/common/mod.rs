//! Common test utilities for integration tests
//!
//! Provides sample health data and gateways wired to a mock AI service.

#![allow(dead_code)]

use chrono::NaiveDate;
use healthsync_backend::config::AppConfig;
use healthsync_backend::services::AnalysisGateway;
use healthsync_shared::{Gender, HealthEntry, Mood, UserProfile};
use std::time::Duration;
use wiremock::MockServer;

/// Timeout used against the mock service to keep the suite fast
pub const TEST_TIMEOUT: Duration = Duration::from_millis(500);

/// Three ascending days ending in a poor one
pub fn sample_entries() -> Vec<HealthEntry> {
    let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
    vec![
        HealthEntry {
            steps: 11_000,
            sleep_hours: 8.0,
            water_intake: 2.8,
            calories: 2_100,
            mood: Mood::Good,
            ..HealthEntry::new(day(1))
        },
        HealthEntry {
            steps: 7_500,
            sleep_hours: 7.0,
            water_intake: 2.2,
            calories: 2_300,
            mood: Mood::Okay,
            ..HealthEntry::new(day(2))
        },
        HealthEntry {
            steps: 2_000,
            sleep_hours: 5.0,
            water_intake: 1.0,
            calories: 1_800,
            mood: Mood::Bad,
            ..HealthEntry::new(day(3))
        },
    ]
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        age: Some(29),
        gender: Some(Gender::Male),
        height: Some(180.0),
        weight: Some(78.5),
    }
}

/// Config pointing at `service_url` with the given timeout
pub fn test_config(service_url: &str, timeout: Duration) -> AppConfig {
    let mut config = AppConfig::default();
    config.ai.service_url = service_url.to_string();
    config.ai.timeout_ms = timeout.as_millis() as u64;
    config
}

/// Gateway talking to the mock server
pub fn gateway_for(server: &MockServer) -> AnalysisGateway {
    AnalysisGateway::from_config(&test_config(&server.uri(), TEST_TIMEOUT))
        .expect("Failed to build gateway")
}

/// Base URL of a local port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{addr}")
}
