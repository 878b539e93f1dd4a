//! HealthSync Shared Library
//!
//! This crate contains the health data model, the rule-based health score
//! and input validation used by the backend and WASM modules.

pub mod errors;
pub mod health_score;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_score::{compute_fallback, compute_fallback_with};
pub use models::{Gender, HealthEntry, Mood, UserProfile};
pub use types::*;
