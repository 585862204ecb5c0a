//! Render configuration.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::SynthResult;
use crate::pcm::{PcmFormat, NATIVE_SAMPLE_RATE};
use crate::rng::create_rng;

/// Seed and output format for a render.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
    /// Seed for the noise stages.
    pub seed: u32,
    /// Output sample rate (44100 or 22050).
    pub sample_rate: u32,
    /// Output bit depth (16 or 8).
    pub bit_depth: u16,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sample_rate: NATIVE_SAMPLE_RATE,
            bit_depth: 16,
        }
    }
}

impl SynthConfig {
    /// Default configuration with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Checks the output format.
    pub fn validate(&self) -> SynthResult<()> {
        self.format().map(|_| ())
    }

    /// The validated output format.
    pub fn format(&self) -> SynthResult<PcmFormat> {
        PcmFormat::new(self.sample_rate, self.bit_depth)
    }

    /// A fresh random source for this seed.
    pub fn rng(&self) -> Pcg32 {
        create_rng(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SynthConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.bit_depth, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SynthConfig = serde_json::from_str(r#"{"seed": 7, "bit_depth": 8}"#).unwrap();
        assert_eq!(
            config,
            SynthConfig {
                seed: 7,
                sample_rate: 44_100,
                bit_depth: 8,
            }
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<SynthConfig, _> = serde_json::from_str(r#"{"volume": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_rate() {
        let config = SynthConfig {
            sample_rate: 8_000,
            ..SynthConfig::with_seed(1)
        };
        assert_eq!(config.validate().unwrap_err().code(), "SYNTH_001");
    }
}
