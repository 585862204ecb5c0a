//! The synthesis engine.
//!
//! [`SfxrSynth`] owns a copy of the parameter store, a random source, and the
//! run-state derived from the store by [`reset`](SfxrSynth::reset). Each call
//! to [`synthesize`](SfxrSynth::synthesize) advances every stage one output
//! sample at a time, in a fixed order:
//!
//! 1. repeat reset, pitch-jump rewind and triggers, slide, min-frequency mute
//! 2. vibrato, duty sweep, envelope
//! 3. flanger and high-pass sweeps
//! 4. eight oscillator sub-samples, each filtered and flanged
//! 5. clip, volume, bit-crush, compression, mute
//!
//! Samples are added into the caller's buffer, never overwritten.
//!
//! Output is not clamped. The sustain envelope peaks at `1 + 2 * punch` and
//! compression lifts quiet samples, so with punch the magnitude can exceed 1;
//! [`quantize`](crate::pcm::quantize) clips to `[-1, 1]` when converting.

mod crush;
mod envelope;
mod filter;
mod flanger;
mod oscillator;
mod pitch_jump;

pub use envelope::EnvelopeStage;

use bitsfx_spec::{ParamId, SfxrParams, WaveType};
use rand_pcg::Pcg32;

use crate::pink::PinkNumber;
use crate::rng::UniformSource;

use crush::BitCrush;
use envelope::Envelope;
use filter::Filters;
use flanger::Flanger;
use oscillator::NoiseTables;
use pitch_jump::PitchJump;

/// Oscillator sub-samples per output sample.
const OVERSAMPLING: u32 = 8;
/// Smallest oscillator period, in sub-samples.
const MIN_PERIOD: u32 = 8;
/// Clip level for the summed sub-samples.
const SUPER_SAMPLE_CLIP: f64 = 8.0;

/// Outcome of one [`SfxrSynth::synthesize_block`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthBlock {
    /// Buffer slots that received a sample.
    pub written: usize,
    /// The envelope has finished; no more samples until a full reset.
    pub finished: bool,
}

/// Pitch, slide, duty, and pitch-jump state; rebuilt by every reset.
#[derive(Debug, Clone, PartialEq)]
struct PitchState {
    period: f64,
    max_period: f64,
    slide: f64,
    delta_slide: f64,
    square_duty: f64,
    duty_sweep: f64,
    change_period: f64,
    change_period_time: u32,
    jumps: [PitchJump; 2],
}

/// State rebuilt only by a full reset.
#[derive(Debug, Clone, PartialEq)]
struct RunState {
    master_volume: f64,
    wave: WaveType,
    min_frequency: f64,
    muted: bool,
    finished: bool,
    phase: u32,
    overtones: u32,
    overtone_falloff: f64,
    vibrato_phase: f64,
    vibrato_speed: f64,
    vibrato_amplitude: f64,
    compression_exponent: f64,
    repeat_time: u32,
    /// Samples between repeat resets; 0 disables repeating.
    repeat_limit: u32,
    envelope: Envelope,
    filters: Filters,
    flanger: Flanger,
    crush: BitCrush,
    noise: NoiseTables,
}

/// Stateful retro sound-effect generator.
///
/// The engine is single-threaded and mutates its run-state in place; run
/// independent sounds on independent engines.
#[derive(Debug, Clone)]
pub struct SfxrSynth<R = Pcg32> {
    params: SfxrParams,
    rng: R,
    pink: PinkNumber,
    pitch: PitchState,
    /// Pitch state as derived by the last full reset; repeat resets restore it.
    initial_pitch: PitchState,
    state: RunState,
}

impl<R: UniformSource> SfxrSynth<R> {
    /// Creates an engine for `params`, drawing noise from `rng`.
    ///
    /// The engine performs a full reset before returning, so its run-state is
    /// always valid.
    pub fn new(params: SfxrParams, mut rng: R) -> Self {
        let mut pink = PinkNumber::new(&mut rng);
        let pitch = PitchState::from_params(&params);
        let state = RunState::from_params(&params, &mut rng, &mut pink);
        let mut synth = Self {
            params,
            rng,
            pink,
            initial_pitch: pitch.clone(),
            pitch,
            state,
        };
        synth.params.mark_clean();
        synth
    }

    /// The engine's copy of the parameters.
    pub fn params(&self) -> &SfxrParams {
        &self.params
    }

    /// Replaces the parameters. Takes effect at the next full reset.
    pub fn set_params(&mut self, params: SfxrParams) {
        self.params = params;
    }

    /// True if the parameters changed since the last full reset.
    pub fn is_dirty(&self) -> bool {
        self.params.is_dirty()
    }

    /// Recomputes run-state from the parameters.
    ///
    /// A full reset (`total == true`) rebuilds everything: envelope, filters,
    /// flanger, bit-crush, noise tables, and clears the mute and finished
    /// flags. A partial reset only rebuilds pitch, slide, duty, and pitch-jump
    /// state, restoring it as the last full reset derived it; the engine does
    /// one automatically for the repeat effect. Parameters swapped in with
    /// [`set_params`](Self::set_params) are only read by a full reset.
    pub fn reset(&mut self, total: bool) {
        if total {
            self.initial_pitch = PitchState::from_params(&self.params);
            self.pitch = self.initial_pitch.clone();
            self.state = RunState::from_params(&self.params, &mut self.rng, &mut self.pink);
            self.params.mark_clean();
            tracing::debug!(
                wave = %self.state.wave,
                period = self.pitch.period,
                envelope_samples = self.state.envelope.full_length(),
                repeat_limit = self.state.repeat_limit,
                filters = self.state.filters.is_active(),
                flanger = self.state.flanger.is_active(),
                "full reset"
            );
        } else {
            self.pitch = self.initial_pitch.clone();
            tracing::trace!(period = self.pitch.period, "repeat reset");
        }
    }

    /// Adds samples into `buffer`, returning true once the sound has finished.
    ///
    /// When the envelope finishes partway through, the remaining slots are
    /// left untouched.
    pub fn synthesize(&mut self, buffer: &mut [f32]) -> bool {
        self.synthesize_block(buffer).finished
    }

    /// Like [`synthesize`](Self::synthesize), also reporting how many slots
    /// were written.
    pub fn synthesize_block(&mut self, buffer: &mut [f32]) -> SynthBlock {
        let mut written = 0;
        for slot in buffer.iter_mut() {
            if self.state.finished {
                break;
            }
            *slot += self.next_sample() as f32;
            written += 1;
        }
        SynthBlock {
            written,
            finished: self.state.finished,
        }
    }

    /// Current envelope stage.
    pub fn envelope_stage(&self) -> EnvelopeStage {
        self.state.envelope.stage()
    }

    /// Envelope volume of the last generated sample.
    pub fn envelope_volume(&self) -> f64 {
        self.state.envelope.volume()
    }

    /// Total envelope length in samples.
    pub fn envelope_full_length(&self) -> f64 {
        self.state.envelope.full_length()
    }

    /// True once the period passed the minimum frequency. Sticky until a
    /// full reset.
    pub fn is_muted(&self) -> bool {
        self.state.muted
    }

    /// True once the envelope has finished.
    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Wave shape captured at the last full reset.
    pub fn wave_type(&self) -> WaveType {
        self.state.wave
    }

    /// Current oscillator period in sub-samples.
    pub fn period(&self) -> f64 {
        self.pitch.period
    }

    fn next_sample(&mut self) -> f64 {
        let state = &mut self.state;

        if state.repeat_limit != 0 {
            state.repeat_time += 1;
            if state.repeat_time >= state.repeat_limit {
                state.repeat_time = 0;
                self.reset(false);
            }
        }

        let pitch = &mut self.pitch;
        let state = &mut self.state;

        pitch.change_period_time += 1;
        if f64::from(pitch.change_period_time) >= pitch.change_period {
            pitch.change_period_time = 0;
            for jump in pitch.jumps.iter_mut() {
                jump.rewind(&mut pitch.period);
            }
        }
        for jump in pitch.jumps.iter_mut() {
            jump.advance(&mut pitch.period);
        }

        pitch.slide += pitch.delta_slide;
        pitch.period *= pitch.slide;

        if pitch.period > pitch.max_period {
            pitch.period = pitch.max_period;
            if state.min_frequency > 0.0 {
                state.muted = true;
            }
        }

        let mut period_temp = pitch.period;
        if state.vibrato_amplitude > 0.0 {
            state.vibrato_phase += state.vibrato_speed;
            period_temp = pitch.period * (1.0 + state.vibrato_phase.sin() * state.vibrato_amplitude);
        }
        let period_temp = (period_temp as u32).max(MIN_PERIOD);

        if state.wave == WaveType::Square {
            pitch.square_duty = (pitch.square_duty + pitch.duty_sweep).clamp(0.0, 0.5);
        }

        let envelope_volume = state.envelope.advance();
        if state.envelope.is_finished() && !state.finished {
            state.finished = true;
            tracing::debug!("envelope finished");
        }

        state.flanger.sweep();
        state.filters.sweep_high_pass();

        let mut super_sample = 0.0;
        for _ in 0..OVERSAMPLING {
            state.phase += 1;
            if state.phase >= period_temp {
                state.phase -= period_temp;
                state.noise.refresh_for(state.wave, &mut self.rng, &mut self.pink);
            }

            let mut sample = 0.0;
            let mut strength = 1.0;
            for k in 0..=state.overtones {
                let harmonic_phase = (state.phase * (k + 1)) % period_temp;
                sample += strength
                    * oscillator::sample_wave(
                        state.wave,
                        harmonic_phase,
                        period_temp,
                        pitch.square_duty,
                        &state.noise,
                    );
                strength *= 1.0 - state.overtone_falloff;
            }

            let sample = state.filters.process(sample);
            super_sample += state.flanger.process(sample);
        }

        let super_sample = super_sample.clamp(-SUPER_SAMPLE_CLIP, SUPER_SAMPLE_CLIP);
        let scaled = state.master_volume * envelope_volume * super_sample / f64::from(OVERSAMPLING);
        let crushed = state.crush.process(scaled);
        let compressed = crush::compress(crushed, state.compression_exponent);

        if state.muted {
            0.0
        } else {
            compressed
        }
    }
}

impl PitchState {
    fn from_params(params: &SfxrParams) -> Self {
        let p = |id: ParamId| f64::from(params.value(id));
        let wave = params.wave_type();

        let start = p(ParamId::StartFrequency);
        let min = p(ParamId::MinFrequency);
        let slide = p(ParamId::Slide);
        let delta_slide = p(ParamId::DeltaSlide);
        let change_repeat = p(ParamId::ChangeRepeat);

        // Duty only means something for the square wave.
        let (square_duty, duty_sweep) = if wave == WaveType::Square {
            (0.5 - p(ParamId::SquareDuty) * 0.5, -p(ParamId::DutySweep) * 0.000_05)
        } else {
            (0.0, 0.0)
        };

        Self {
            period: 100.0 / (start * start + 0.001),
            max_period: 100.0 / (min * min + 0.001),
            slide: 1.0 - slide * slide * slide * 0.01,
            delta_slide: -delta_slide * delta_slide * delta_slide * 0.000_001,
            square_duty,
            duty_sweep,
            change_period: pitch_jump::change_period(change_repeat),
            change_period_time: 0,
            jumps: [
                PitchJump::new(p(ParamId::ChangeAmount), p(ParamId::ChangeSpeed), change_repeat),
                PitchJump::new(p(ParamId::ChangeAmount2), p(ParamId::ChangeSpeed2), change_repeat),
            ],
        }
    }
}

impl RunState {
    fn from_params(params: &SfxrParams, rng: &mut impl UniformSource, pink: &mut PinkNumber) -> Self {
        let p = |id: ParamId| f64::from(params.value(id));

        let master = p(ParamId::MasterVolume);
        let repeat_speed = p(ParamId::RepeatSpeed);
        let repeat_limit = if repeat_speed == 0.0 {
            0
        } else {
            ((1.0 - repeat_speed) * (1.0 - repeat_speed) * 20_000.0) as u32 + 32
        };
        let vibrato_speed = p(ParamId::VibratoSpeed);

        Self {
            master_volume: master * master,
            wave: params.wave_type(),
            min_frequency: p(ParamId::MinFrequency),
            muted: false,
            finished: false,
            phase: 0,
            overtones: (p(ParamId::Overtones) * 10.0) as u32,
            overtone_falloff: p(ParamId::OvertoneFalloff),
            vibrato_phase: 0.0,
            vibrato_speed: vibrato_speed * vibrato_speed * 0.01,
            vibrato_amplitude: p(ParamId::VibratoDepth) * 0.5,
            compression_exponent: crush::compression_exponent(p(ParamId::CompressionAmount)),
            repeat_time: 0,
            repeat_limit,
            envelope: Envelope::new(&params.envelope_times(), p(ParamId::SustainPunch)),
            filters: Filters::new(
                p(ParamId::LpFilterCutoff),
                p(ParamId::LpFilterCutoffSweep),
                p(ParamId::LpFilterResonance),
                p(ParamId::HpFilterCutoff),
                p(ParamId::HpFilterCutoffSweep),
            ),
            flanger: Flanger::new(p(ParamId::FlangerOffset), p(ParamId::FlangerSweep)),
            crush: BitCrush::new(p(ParamId::BitCrush), p(ParamId::BitCrushSweep)),
            noise: NoiseTables::new(rng, pink),
        }
    }
}
