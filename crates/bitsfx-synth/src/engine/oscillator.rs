//! Oscillator wave functions and per-period noise tables.

use std::f64::consts::PI;

use bitsfx_spec::WaveType;

use crate::pink::PinkNumber;
use crate::rng::UniformSource;

/// Slots in each noise table.
pub(crate) const NOISE_LEN: usize = 32;

/// Slots sharing one value in the lo-res noise table.
const LO_RES_NOISE_PERIOD: usize = 8;

/// Noise tables sampled across one oscillator period.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NoiseTables {
    white: [f64; NOISE_LEN],
    pink: [f64; NOISE_LEN],
    lo_res: [f64; NOISE_LEN],
}

impl NoiseTables {
    /// Allocates and fills all three tables.
    pub(crate) fn new(rng: &mut impl UniformSource, pink: &mut PinkNumber) -> Self {
        let mut tables = Self {
            white: [0.0; NOISE_LEN],
            pink: [0.0; NOISE_LEN],
            lo_res: [0.0; NOISE_LEN],
        };
        tables.refill_white(rng);
        tables.refill_pink(rng, pink);
        tables.refill_lo_res(rng);
        tables
    }

    pub(crate) fn refill_white(&mut self, rng: &mut impl UniformSource) {
        for slot in self.white.iter_mut() {
            *slot = rng.bipolar();
        }
    }

    pub(crate) fn refill_pink(&mut self, rng: &mut impl UniformSource, pink: &mut PinkNumber) {
        for slot in self.pink.iter_mut() {
            *slot = pink.next_value(rng);
        }
    }

    /// Step sample-and-hold: a fresh value every eighth slot.
    pub(crate) fn refill_lo_res(&mut self, rng: &mut impl UniformSource) {
        for n in 0..NOISE_LEN {
            self.lo_res[n] = if n % LO_RES_NOISE_PERIOD == 0 {
                rng.bipolar()
            } else {
                self.lo_res[n - 1]
            };
        }
    }

    /// Redraws the table the given wave shape reads on a period wrap.
    pub(crate) fn refresh_for(
        &mut self,
        wave: WaveType,
        rng: &mut impl UniformSource,
        pink: &mut PinkNumber,
    ) {
        match wave {
            WaveType::Noise => self.refill_white(rng),
            WaveType::PinkNoise => self.refill_pink(rng, pink),
            WaveType::Tan => self.refill_lo_res(rng),
            _ => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn lo_res(&self) -> &[f64; NOISE_LEN] {
        &self.lo_res
    }
}

/// Fast parabolic sine over one cycle; `pos` is the phase in `[0, 1)`.
pub(crate) fn fast_sine(pos: f64) -> f64 {
    let pos = if pos > 0.5 {
        (pos - 1.0) * 6.283_185_31
    } else {
        pos * 6.283_185_31
    };
    let sample = if pos < 0.0 {
        1.273_239_54 * pos + 0.405_284_735 * pos * pos
    } else {
        1.273_239_54 * pos - 0.405_284_735 * pos * pos
    };
    if sample < 0.0 {
        0.225 * (sample * -sample - sample) + sample
    } else {
        0.225 * (sample * sample - sample) + sample
    }
}

/// Evaluates one harmonic of `wave` at `phase` within a period of `period`
/// samples.
pub(crate) fn sample_wave(
    wave: WaveType,
    phase: u32,
    period: u32,
    square_duty: f64,
    noise: &NoiseTables,
) -> f64 {
    let t = f64::from(phase) / f64::from(period);
    match wave {
        WaveType::Square => {
            if t < square_duty {
                0.5
            } else {
                -0.5
            }
        }
        WaveType::Saw => 1.0 - t * 2.0,
        WaveType::Sine => fast_sine(t),
        WaveType::Noise => noise.white[noise_index(phase, period)],
        WaveType::Triangle => (1.0 - t * 2.0).abs() - 1.0,
        WaveType::PinkNoise => noise.pink[noise_index(phase, period)],
        WaveType::Tan => (PI * t).tan(),
        WaveType::Whistle => {
            // Quiet sine at twenty times the frequency on top of the base.
            let overtone = f64::from((phase * 20) % period) / f64::from(period);
            0.75 * fast_sine(t) + 0.25 * fast_sine(overtone)
        }
        WaveType::Breaker => (1.0 - t * t * 2.0).abs() - 1.0,
    }
}

fn noise_index(phase: u32, period: u32) -> usize {
    (phase as usize * NOISE_LEN / period as usize) % NOISE_LEN
}
