//! Configuration management for the HealthSync backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HS__)

use anyhow::Result;
use healthsync_shared::LatestEntry;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ai: AiServiceConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Remote AI analysis service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiServiceConfig {
    /// Base address; requests go to `{service_url}/api/analyze`
    pub service_url: String,
    pub timeout_ms: u64,
}

impl AiServiceConfig {
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for AiServiceConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Report generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many days back (from today) entries are considered
    pub window_days: u32,
    pub latest_entry: LatestEntry,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            latest_entry: LatestEntry::LastInSequence,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HS__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(
                config::File::with_name(&config_file)
                    .required(false)
            )
            // Override with environment variables (HS__ prefix)
            // e.g., HS__AI__SERVICE_URL=http://ai:8000 sets ai.service_url
            .add_source(
                config::Environment::with_prefix("HS")
                    .separator("__")
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
