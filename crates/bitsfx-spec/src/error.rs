//! Error types for the parameter model.

use thiserror::Error;

/// Errors raised by fallible parameter lookups and persistence.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The uid is not part of the catalog.
    #[error("unknown parameter '{uid}'")]
    UnknownParam {
        /// The uid that failed to resolve.
        uid: String,
    },

    /// A persisted value is not a finite number.
    #[error("invalid value for parameter '{uid}': {value}")]
    InvalidValue {
        /// Parameter uid.
        uid: String,
        /// The rejected value.
        value: f32,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Creates an unknown parameter error.
    pub fn unknown_param(uid: impl Into<String>) -> Self {
        Self::UnknownParam { uid: uid.into() }
    }

    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::UnknownParam { .. } => "SPEC_001",
            SpecError::InvalidValue { .. } => "SPEC_002",
            SpecError::Json(_) => "SPEC_003",
        }
    }
}
