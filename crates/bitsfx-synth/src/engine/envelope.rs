//! Attack/sustain/decay volume envelope.

use bitsfx_spec::EnvelopeTimes;

/// Envelope stage. Stages only move forward; `Finished` is terminal until the
/// next full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    /// Volume ramps 0 -> 1.
    Attack,
    /// Volume starts at `1 + 2 * punch` and relaxes to 1.
    Sustain,
    /// Volume ramps 1 -> 0.
    Decay,
    /// Silent; the sound is over.
    Finished,
}

impl EnvelopeStage {
    fn next(self) -> Self {
        match self {
            EnvelopeStage::Attack => EnvelopeStage::Sustain,
            EnvelopeStage::Sustain => EnvelopeStage::Decay,
            EnvelopeStage::Decay | EnvelopeStage::Finished => EnvelopeStage::Finished,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Envelope {
    stage: EnvelopeStage,
    time: f64,
    /// Stage lengths in samples.
    lengths: [f64; 3],
    /// Reciprocals of `lengths`.
    over_lengths: [f64; 3],
    punch: f64,
    volume: f64,
}

impl Envelope {
    pub(crate) fn new(times: &EnvelopeTimes, punch: f64) -> Self {
        let lengths = times.stage_lengths();
        Self {
            stage: EnvelopeStage::Attack,
            time: 0.0,
            lengths,
            over_lengths: lengths.map(|length| 1.0 / length),
            punch,
            volume: 0.0,
        }
    }

    /// Advances one sample and returns the new volume.
    pub(crate) fn advance(&mut self) -> f64 {
        self.time += 1.0;
        if self.time > self.current_length() {
            self.time = 0.0;
            self.stage = self.stage.next();
        }

        self.volume = match self.stage {
            EnvelopeStage::Attack => self.time * self.over_lengths[0],
            EnvelopeStage::Sustain => {
                1.0 + (1.0 - self.time * self.over_lengths[1]) * 2.0 * self.punch
            }
            EnvelopeStage::Decay => 1.0 - self.time * self.over_lengths[2],
            EnvelopeStage::Finished => 0.0,
        };
        self.volume
    }

    fn current_length(&self) -> f64 {
        match self.stage {
            EnvelopeStage::Attack => self.lengths[0],
            EnvelopeStage::Sustain => self.lengths[1],
            // The finished stage keeps the decay length; it is never timed.
            EnvelopeStage::Decay | EnvelopeStage::Finished => self.lengths[2],
        }
    }

    pub(crate) fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    pub(crate) fn volume(&self) -> f64 {
        self.volume
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.stage == EnvelopeStage::Finished
    }

    pub(crate) fn full_length(&self) -> f64 {
        self.lengths.iter().sum()
    }
}
