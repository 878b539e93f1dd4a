//! Error types shared across HealthSync crates

use thiserror::Error;

/// A single invalid field in user-supplied health data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field with its position in a sequence, e.g. `healthData[2].steps`
    pub fn at_index(self, collection: &str, index: usize) -> Self {
        Self {
            field: format!("{collection}[{index}].{}", self.field),
            message: self.message,
        }
    }
}
