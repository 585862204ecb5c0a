//! End-to-end engine scenarios.
//!
//! Drives [`SfxrSynth`] through whole sounds and checks envelope progress,
//! output levels, muting, and termination.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bitsfx-synth --test engine_scenarios
//! ```

use bitsfx_spec::{ParamId, SfxrParams, WaveType};
use bitsfx_synth::{create_rng, render, EnvelopeStage, SfxrSynth};
use proptest::prelude::*;

/// Sample count after which the envelope reports finished.
fn finishing_sample(params: &SfxrParams) -> usize {
    let lengths = params.envelope_times().stage_lengths();
    lengths.iter().map(|l| l.floor() as usize).sum::<usize>() + 3
}

fn plain_square() -> SfxrParams {
    let mut params = SfxrParams::new();
    params.set_wave_type(WaveType::Square);
    params.set("squareDuty", 0.0);
    params.set("masterVolume", 0.5);
    params.set("attackTime", 0.0);
    params.set("sustainTime", 0.3);
    params.set("decayTime", 0.4);
    params.set("compressionAmount", 0.0);
    params
}

// ============================================================================
// Square wave
// ============================================================================

#[test]
fn test_square_starts_in_attack() {
    let synth = SfxrSynth::new(plain_square(), create_rng(0));
    assert_eq!(synth.envelope_stage(), EnvelopeStage::Attack);
    assert_eq!(synth.envelope_volume(), 0.0);
}

#[test]
fn test_square_first_samples() {
    let mut synth = SfxrSynth::new(plain_square(), create_rng(0));
    let mut buffer = [0.0f32; 2];
    let finished = synth.synthesize(&mut buffer);

    assert!(!finished);
    // A zero-length attack moves straight to sustain.
    assert_eq!(synth.envelope_stage(), EnvelopeStage::Sustain);
    // The sample-and-hold latches on the second sample.
    assert_eq!(buffer[0], 0.0);
    // Eight +0.5 sub-samples at master volume 0.5^2 average to 0.125.
    assert_eq!(buffer[1], 0.125);
}

#[test]
fn test_square_level_is_bounded() {
    let mut synth = SfxrSynth::new(plain_square(), create_rng(0));
    let samples = render(&mut synth);
    assert!(samples.iter().all(|s| s.abs() <= 0.125));
    assert!(samples.iter().any(|&s| s > 0.1));
    assert!(samples.iter().any(|&s| s < -0.1));
}

// ============================================================================
// Muting
// ============================================================================

#[test]
fn test_min_frequency_mutes_for_good() {
    let mut params = SfxrParams::new();
    params.set("startFrequency", 0.3);
    params.set("slide", -0.5);
    params.set("minFrequency", 0.2);

    let mut synth = SfxrSynth::new(params, create_rng(5));
    let mut head = vec![0.0f32; 2_000];
    synth.synthesize(&mut head);
    assert!(synth.is_muted());
    assert!(head.iter().any(|&s| s != 0.0));

    let mut tail = vec![0.0f32; 5_000];
    synth.synthesize(&mut tail);
    assert!(tail.iter().all(|&s| s == 0.0));
    assert!(synth.is_muted());

    synth.reset(true);
    assert!(!synth.is_muted());
}

#[test]
fn test_default_sound_overshoots_ceil_length() {
    let params = SfxrParams::new();
    let mut synth = SfxrSynth::new(params.clone(), create_rng(0));
    let samples = render(&mut synth);
    let ceil = synth.envelope_full_length().ceil() as usize;
    // 0 + 9000 + 16010 stage lengths: two samples past the rounded-up length.
    assert_eq!(samples.len(), finishing_sample(&params));
    assert_eq!(samples.len(), ceil + 2);
}

#[test]
fn test_zero_min_frequency_never_mutes() {
    let mut params = SfxrParams::new();
    params.set("slide", -1.0);
    let mut synth = SfxrSynth::new(params, create_rng(5));
    render(&mut synth);
    assert!(!synth.is_muted());
}

// ============================================================================
// Wave shapes
// ============================================================================

#[test]
fn test_every_wave_renders() {
    for wave in WaveType::ALL {
        let mut params = SfxrParams::new();
        params.set_wave_type(wave);
        params.set("sustainTime", 0.1);
        params.set("decayTime", 0.1);
        let mut synth = SfxrSynth::new(params, create_rng(9));
        let samples = render(&mut synth);

        assert_eq!(synth.wave_type(), wave);
        assert!(samples.iter().all(|s| s.is_finite()), "{wave} produced non-finite samples");
        assert!(samples.iter().any(|&s| s != 0.0), "{wave} was silent");
    }
}

#[test]
fn test_effects_stay_finite() {
    let mut params = SfxrParams::new();
    for (id, value) in [
        (ParamId::VibratoDepth, 0.5),
        (ParamId::VibratoSpeed, 0.4),
        (ParamId::Overtones, 0.5),
        (ParamId::OvertoneFalloff, 0.3),
        (ParamId::ChangeAmount, 0.6),
        (ParamId::ChangeSpeed, 0.5),
        (ParamId::ChangeAmount2, -0.4),
        (ParamId::ChangeSpeed2, 0.7),
        (ParamId::ChangeRepeat, 0.5),
        (ParamId::RepeatSpeed, 0.4),
        (ParamId::FlangerOffset, -0.3),
        (ParamId::FlangerSweep, 0.2),
        (ParamId::LpFilterCutoff, 0.4),
        (ParamId::LpFilterCutoffSweep, -0.2),
        (ParamId::LpFilterResonance, 0.6),
        (ParamId::HpFilterCutoff, 0.1),
        (ParamId::HpFilterCutoffSweep, 0.1),
        (ParamId::BitCrush, 0.4),
        (ParamId::BitCrushSweep, 0.3),
        (ParamId::SustainPunch, 0.5),
    ] {
        params.set_value(id, value);
    }

    let mut synth = SfxrSynth::new(params, create_rng(11));
    let samples = render(&mut synth);
    assert!(!samples.is_empty());
    assert!(samples.iter().all(|s| s.is_finite()));
}

#[test]
fn test_punch_can_exceed_unit_range() {
    let mut params = SfxrParams::new();
    params.set("masterVolume", 1.0);
    params.set("sustainPunch", 1.0);
    params.set("compressionAmount", 0.0);
    let mut synth = SfxrSynth::new(params, create_rng(2));
    let samples = render(&mut synth);
    assert!(samples.iter().any(|s| s.abs() > 1.0));
}

// ============================================================================
// Termination
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Each stage lasts `floor(length) + 1` samples, so the sound finishes
    /// after exactly `floor(L0) + floor(L1) + floor(L2) + 3` samples.
    #[test]
    fn envelope_finishes_on_exact_sample(
        attack in 0.0f32..0.3,
        sustain in 0.0f32..0.3,
        decay in 0.0f32..0.3,
    ) {
        let mut params = SfxrParams::new();
        params.set("attackTime", attack);
        params.set("sustainTime", sustain);
        params.set("decayTime", decay);
        let expected = finishing_sample(&params);

        let mut synth = SfxrSynth::new(params, create_rng(1));
        let mut buffer = vec![0.0f32; expected + 100];
        let block = synth.synthesize_block(&mut buffer);

        prop_assert!(block.finished);
        prop_assert_eq!(synth.envelope_stage(), EnvelopeStage::Finished);
        prop_assert_eq!(block.written, expected);
    }
}
