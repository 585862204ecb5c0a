//! Error types for the synthesizer.
//!
//! Synthesis itself cannot fail. Errors come from output configuration and
//! from the parameter model when a driver loads a parameter file.

use bitsfx_spec::SpecError;
use thiserror::Error;

/// Result type for synthesizer operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors raised while configuring output or loading parameters.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Unsupported output sample rate.
    #[error("unsupported sample rate: {rate} (expected 44100 or 22050)")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Unsupported output bit depth.
    #[error("unsupported bit depth: {bits} (expected 16 or 8)")]
    InvalidBitDepth {
        /// The rejected bit depth.
        bits: u16,
    },

    /// Parameter model error.
    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl SynthError {
    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidSampleRate { .. } => "SYNTH_001",
            SynthError::InvalidBitDepth { .. } => "SYNTH_002",
            SynthError::Spec(_) => "SYNTH_003",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            SynthError::InvalidSampleRate { rate: 48000 },
            SynthError::InvalidBitDepth { bits: 24 },
            SynthError::Spec(SpecError::unknown_param("nope")),
        ];
        let mut codes: Vec<_> = errors.iter().map(SynthError::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_spec_error_is_transparent() {
        let err: SynthError = SpecError::unknown_param("nope").into();
        assert_eq!(err.to_string(), "unknown parameter 'nope'");
    }
}
