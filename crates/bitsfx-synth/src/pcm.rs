//! PCM quantization and hashing.
//!
//! Converts the engine's float samples to raw little-endian PCM bytes. No
//! container is written; the bytes feed [`pcm_hash`] for determinism checks
//! and can be handed to any WAV writer.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Engine-native sample rate.
pub const NATIVE_SAMPLE_RATE: u32 = 44_100;
/// Half rate; consecutive sample pairs are averaged.
pub const HALF_SAMPLE_RATE: u32 = 22_050;

/// Scale applied to 16-bit samples. Leaves headroom below `i16::MAX`.
const PCM16_SCALE: f64 = 32_000.0;

/// Output sample format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcmFormat {
    /// 44100 or 22050.
    pub sample_rate: u32,
    /// 16 or 8.
    pub bit_depth: u16,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            sample_rate: NATIVE_SAMPLE_RATE,
            bit_depth: 16,
        }
    }
}

impl PcmFormat {
    /// Creates a validated format.
    pub fn new(sample_rate: u32, bit_depth: u16) -> SynthResult<Self> {
        let format = Self {
            sample_rate,
            bit_depth,
        };
        format.validate()?;
        Ok(format)
    }

    /// Checks the rate and depth against the supported set.
    pub fn validate(&self) -> SynthResult<()> {
        if self.sample_rate != NATIVE_SAMPLE_RATE && self.sample_rate != HALF_SAMPLE_RATE {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if self.bit_depth != 16 && self.bit_depth != 8 {
            return Err(SynthError::InvalidBitDepth {
                bits: self.bit_depth,
            });
        }
        Ok(())
    }

    /// Engine samples averaged into one output sample.
    pub fn decimation(&self) -> usize {
        if self.sample_rate == HALF_SAMPLE_RATE {
            2
        } else {
            1
        }
    }

    /// Bytes per output sample.
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bit_depth / 8)
    }

    /// Number of output samples produced from `samples` engine samples.
    pub fn output_len(&self, samples: usize) -> usize {
        samples / self.decimation()
    }
}

/// Quantizes engine samples to PCM bytes.
///
/// At 22050 Hz each output sample is the mean of two engine samples and a
/// trailing odd sample is dropped. Samples are clipped to `[-1, 1]` first.
///
/// # Arguments
/// * `samples` - Engine output at 44100 Hz
/// * `format` - Target format; assumed valid
///
/// # Returns
/// Little-endian PCM bytes
pub fn quantize(samples: &[f32], format: &PcmFormat) -> Vec<u8> {
    let step = format.decimation();
    let mut pcm = Vec::with_capacity(format.output_len(samples.len()) * format.bytes_per_sample());

    for chunk in samples.chunks_exact(step) {
        let sum: f64 = chunk.iter().map(|&s| f64::from(s)).sum();
        let sample = (sum / step as f64).clamp(-1.0, 1.0);

        if format.bit_depth == 16 {
            let value = (PCM16_SCALE * sample) as i16;
            pcm.extend_from_slice(&value.to_le_bytes());
        } else {
            let value = (sample * 127.0 + 128.0) as u8;
            pcm.push(value);
        }
    }

    pcm
}

/// BLAKE3 hex digest of PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = PcmFormat::default();
        assert!(format.validate().is_ok());
        assert_eq!(format.decimation(), 1);
        assert_eq!(format.bytes_per_sample(), 2);
    }

    #[test]
    fn test_rejects_unsupported_formats() {
        let err = PcmFormat::new(48_000, 16).unwrap_err();
        assert_eq!(err.code(), "SYNTH_001");
        let err = PcmFormat::new(44_100, 24).unwrap_err();
        assert_eq!(err.code(), "SYNTH_002");
    }

    #[test]
    fn test_pcm16_values() {
        let format = PcmFormat::new(44_100, 16).unwrap();
        let pcm = quantize(&[0.0, 0.5, -1.0, 2.0], &format);
        let values: Vec<i16> = pcm
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        assert_eq!(values, vec![0, 16_000, -32_000, 32_000]);
    }

    #[test]
    fn test_pcm8_values() {
        let format = PcmFormat::new(44_100, 8).unwrap();
        let pcm = quantize(&[0.0, 1.0, -1.0], &format);
        assert_eq!(pcm, vec![128, 255, 1]);
    }

    #[test]
    fn test_half_rate_averages_pairs() {
        let format = PcmFormat::new(22_050, 16).unwrap();
        let pcm = quantize(&[0.25, 0.75, -0.5, 0.5, 0.9], &format);
        assert_eq!(pcm.len(), 4);
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 16_000);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 0);
    }

    #[test]
    fn test_hash_is_stable() {
        let a = pcm_hash(&[1, 2, 3]);
        assert_eq!(a, pcm_hash(&[1, 2, 3]));
        assert_ne!(a, pcm_hash(&[1, 2, 4]));
        assert_eq!(a.len(), 64);
    }
}
