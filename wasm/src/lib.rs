//! HealthSync WASM Module
//!
//! This crate provides WebAssembly bindings so the frontend can show a
//! health score without a round trip, e.g. while offline.

use healthsync_shared::{compute_fallback, HealthEntry};
use wasm_bindgen::prelude::*;

/// Compute the rule-based health score
///
/// Takes a JSON array of health entries (ascending by date) and returns the
/// analysis result as JSON.
#[wasm_bindgen]
pub fn compute_fallback_score(entries_json: &str) -> Result<String, JsError> {
    let entries: Vec<HealthEntry> = serde_json::from_str(entries_json)?;
    let result = compute_fallback(&entries);
    Ok(serde_json::to_string(&result)?)
}
