//! Whole-sound rendering.
//!
//! Drives an engine block by block from a full reset until its envelope
//! finishes, the way a caller caching a sound would.

use bitsfx_spec::SfxrParams;

use crate::config::SynthConfig;
use crate::engine::SfxrSynth;
use crate::error::SynthResult;
use crate::pcm::{pcm_hash, quantize, PcmFormat};
use crate::rng::UniformSource;

/// Samples generated per engine call.
pub const BLOCK_SIZE: usize = 500;

/// Output of [`render_with_config`].
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Engine samples at 44100 Hz.
    pub samples: Vec<f32>,
    /// Samples quantized to `format`.
    pub pcm: Vec<u8>,
    /// BLAKE3 hash of `pcm`.
    pub pcm_hash: String,
    /// The output format.
    pub format: PcmFormat,
}

impl RenderResult {
    /// Duration in seconds at the output rate.
    pub fn duration_seconds(&self) -> f64 {
        self.format.output_len(self.samples.len()) as f64 / f64::from(self.format.sample_rate)
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }
}

/// Fully resets `synth` and renders the whole sound.
///
/// Returns exactly the samples produced before the envelope finished.
pub fn render<R: UniformSource>(synth: &mut SfxrSynth<R>) -> Vec<f32> {
    synth.reset(true);

    // Each of the three stages runs one sample past its length.
    let mut samples = Vec::with_capacity(synth.envelope_full_length() as usize + 3);
    let mut block = [0.0f32; BLOCK_SIZE];
    loop {
        block.fill(0.0);
        let result = synth.synthesize_block(&mut block);
        samples.extend_from_slice(&block[..result.written]);
        if result.finished {
            break;
        }
    }

    tracing::debug!(samples = samples.len(), "render complete");
    samples
}

/// Renders `params` with a fresh engine seeded from `config`, then quantizes
/// and hashes the result.
pub fn render_with_config(params: &SfxrParams, config: &SynthConfig) -> SynthResult<RenderResult> {
    let format = config.format()?;
    let mut synth = SfxrSynth::new(params.clone(), config.rng());
    let samples = render(&mut synth);
    let pcm = quantize(&samples, &format);
    let pcm_hash = pcm_hash(&pcm);

    Ok(RenderResult {
        samples,
        pcm,
        pcm_hash,
        format,
    })
}

/// Parses a parameter file and renders it with [`render_with_config`].
///
/// Format problems are reported before the file is parsed.
pub fn render_json(params_json: &str, config: &SynthConfig) -> SynthResult<RenderResult> {
    config.validate()?;
    let params = SfxrParams::from_json(params_json)?;
    render_with_config(&params, config)
}
