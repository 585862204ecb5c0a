//! Output stages: bit-crush sample-and-hold and the power-curve compressor.

/// Sample-and-hold downsampler.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BitCrush {
    freq: f64,
    freq_sweep: f64,
    phase: f64,
    last: f64,
}

impl BitCrush {
    pub(crate) fn new(bit_crush: f64, bit_crush_sweep: f64) -> Self {
        Self {
            freq: 1.0 - bit_crush.powf(1.0 / 3.0),
            freq_sweep: -bit_crush_sweep * 0.000_015,
            phase: 0.0,
            last: 0.0,
        }
    }

    /// Returns the held sample, latching `sample` whenever the phase
    /// accumulator passes 1.
    pub(crate) fn process(&mut self, sample: f64) -> f64 {
        self.phase += self.freq;
        if self.phase > 1.0 {
            self.phase = 0.0;
            self.last = sample;
        }
        self.freq = (self.freq + self.freq_sweep).clamp(0.0, 1.0);
        self.last
    }
}

/// Exponent for [`compress`] from the `compressionAmount` parameter.
pub(crate) fn compression_exponent(amount: f64) -> f64 {
    1.0 / (1.0 + 4.0 * amount)
}

/// Raises the magnitude to `exponent`, keeping the sign.
///
/// With `exponent < 1` this lifts quiet samples toward the loud ones.
pub(crate) fn compress(sample: f64, exponent: f64) -> f64 {
    if sample > 0.0 {
        sample.powf(exponent)
    } else {
        -(-sample).powf(exponent)
    }
}
