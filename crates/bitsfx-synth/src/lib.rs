//! bitsfx Synthesizer
//!
//! This crate turns an [`SfxrParams`](bitsfx_spec::SfxrParams) store into a
//! retro sound effect, one sample at a time.
//!
//! # Overview
//!
//! [`SfxrSynth`] derives its run-state from the parameters on a full reset,
//! then generates mono float samples through a fixed pipeline: oscillator
//! with overtones and 8x oversampling, pitch slide, vibrato and pitch jumps,
//! attack/sustain/decay envelope, low-pass and high-pass filters, flanger,
//! bit-crush, and compression.
//!
//! # Determinism
//!
//! The only randomness is in the noise wave shapes, drawn from an explicit
//! [`UniformSource`]. Given the same parameters and the same seed the output
//! is bit-identical across runs.
//!
//! # Example
//!
//! ```
//! use bitsfx_spec::SfxrParams;
//! use bitsfx_synth::{create_rng, render, SfxrSynth};
//!
//! let mut params = SfxrParams::new();
//! params.set("slide", -0.2);
//!
//! let mut synth = SfxrSynth::new(params, create_rng(42));
//! let samples = render(&mut synth);
//! assert!(synth.is_finished());
//! // Without punch the envelope never exceeds 1.
//! assert!(samples.iter().all(|s| s.abs() <= 1.0));
//! ```
//!
//! Samples are not clamped: sustain punch can push the envelope to
//! `1 + 2 * punch`. [`quantize`] clips to `[-1, 1]` on conversion.
//!
//! # Crate Structure
//!
//! - [`engine`] - The synthesis engine and its stages
//! - [`pink`] - Voss-McCartney pink number generator
//! - [`rng`] - Injected random sources
//! - [`render`] - Whole-sound rendering
//! - [`pcm`] - PCM quantization and hashing
//! - [`config`] - Seed and output format

pub mod config;
pub mod engine;
pub mod error;
pub mod pcm;
pub mod pink;
pub mod render;
pub mod rng;

pub use config::SynthConfig;
pub use engine::{EnvelopeStage, SfxrSynth, SynthBlock};
pub use error::{SynthError, SynthResult};
pub use pcm::{pcm_hash, quantize, PcmFormat};
pub use pink::PinkNumber;
pub use render::{render, render_json, render_with_config, RenderResult};
pub use rng::{create_rng, UniformSource};
