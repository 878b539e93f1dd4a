//! HealthSync Backend Library
//!
//! This library exposes the analysis core for use in tests and the CLI.

pub mod config;
pub mod error;
pub mod services;
