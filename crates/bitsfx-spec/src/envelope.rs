//! Envelope timing derived from the attack/sustain/decay parameters.

use crate::param::ParamId;
use crate::store::SfxrParams;

/// Minimum `attack + sustain + decay`, in parameter units.
pub const MIN_TOTAL_TIME: f32 = 0.18;

/// Floor applied to `sustainTime`.
pub const MIN_SUSTAIN_TIME: f32 = 0.01;

/// Samples per squared parameter unit of stage length.
const STAGE_SCALE: f64 = 100_000.0;

/// Extra samples appended to the decay stage.
const DECAY_PAD: f64 = 10.0;

/// Envelope stage times after the sustain floor and minimum-length rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeTimes {
    /// Attack time (parameter units).
    pub attack: f32,
    /// Sustain time (parameter units).
    pub sustain: f32,
    /// Decay time (parameter units).
    pub decay: f32,
}

impl EnvelopeTimes {
    /// Derives the effective times from a store.
    ///
    /// Sustain is floored at [`MIN_SUSTAIN_TIME`]. If the three times sum to
    /// less than [`MIN_TOTAL_TIME`] they are scaled up proportionally.
    pub fn from_params(params: &SfxrParams) -> Self {
        let mut times = Self {
            attack: params.value(ParamId::AttackTime),
            sustain: params.value(ParamId::SustainTime).max(MIN_SUSTAIN_TIME),
            decay: params.value(ParamId::DecayTime),
        };

        let total = times.attack + times.sustain + times.decay;
        if total < MIN_TOTAL_TIME {
            let multiplier = MIN_TOTAL_TIME / total;
            times.attack = (times.attack * multiplier).min(1.0);
            times.sustain = (times.sustain * multiplier).min(1.0);
            times.decay = (times.decay * multiplier).min(1.0);
        }
        times
    }

    /// Stage lengths in samples: `[attack, sustain, decay]`.
    pub fn stage_lengths(&self) -> [f64; 3] {
        let square = |t: f32| f64::from(t) * f64::from(t) * STAGE_SCALE;
        [
            square(self.attack),
            square(self.sustain),
            square(self.decay) + DECAY_PAD,
        ]
    }

    /// Total envelope length in samples.
    pub fn full_length(&self) -> f64 {
        self.stage_lengths().iter().sum()
    }
}

impl SfxrParams {
    /// Effective envelope times for this store.
    pub fn envelope_times(&self) -> EnvelopeTimes {
        EnvelopeTimes::from_params(self)
    }

    /// Duration of the sound in seconds at `sample_rate`.
    pub fn length_seconds(&self, sample_rate: u32) -> f64 {
        self.envelope_times().full_length() / f64::from(sample_rate.max(1))
    }
}
