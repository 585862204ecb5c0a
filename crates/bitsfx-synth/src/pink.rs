//! Pink-number generator (Voss-McCartney).
//!
//! Five sub-band values are summed; a 5-bit counter decides which sub-bands
//! are redrawn on each step, so low bands change rarely and high bands often,
//! giving an approximately 1/f spectrum.

use crate::rng::UniformSource;

const BANDS: usize = 5;
const MAX_KEY: u8 = 0x1f;
/// Integer range of each sub-band draw (`128 / 5`, truncated).
const BAND_RANGE: u32 = 128 / BANDS as u32;

/// Correlated pseudo-random sequence approximating pink noise.
#[derive(Debug, Clone, PartialEq)]
pub struct PinkNumber {
    key: u8,
    white_values: [u32; BANDS],
}

impl PinkNumber {
    /// Creates a generator, drawing the initial value of every sub-band.
    pub fn new(rng: &mut impl UniformSource) -> Self {
        let mut white_values = [0; BANDS];
        for value in white_values.iter_mut() {
            *value = draw(rng);
        }
        Self {
            key: 0,
            white_values,
        }
    }

    /// Advances the generator and returns a value in `[-1, 1]`.
    pub fn next_value(&mut self, rng: &mut impl UniformSource) -> f64 {
        let last_key = self.key;
        self.key = if self.key >= MAX_KEY { 0 } else { self.key + 1 };

        // Set bits mark the sub-bands whose counter bit flipped.
        let diff = last_key ^ self.key;
        let mut sum = 0u32;
        for (band, value) in self.white_values.iter_mut().enumerate() {
            if diff & (1 << band) != 0 {
                *value = draw(rng);
            }
            sum += *value;
        }
        f64::from(sum) / 64.0 - 1.0
    }
}

fn draw(rng: &mut impl UniformSource) -> u32 {
    (rng.uniform() * f64::from(BAND_RANGE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_output_range() {
        let mut rng = create_rng(1234);
        let mut pink = PinkNumber::new(&mut rng);
        for _ in 0..10_000 {
            let value = pink.next_value(&mut rng);
            assert!((-1.0..=1.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_key_wraps_after_32_steps() {
        let mut rng = create_rng(5);
        let mut pink = PinkNumber::new(&mut rng);
        for _ in 0..32 {
            pink.next_value(&mut rng);
        }
        assert_eq!(pink.key, 0);
    }

    #[test]
    fn test_only_changed_bands_are_redrawn() {
        let mut rng = create_rng(99);
        let mut pink = PinkNumber::new(&mut rng);
        let before = pink.white_values;
        // Key 0 -> 1 flips only bit 0.
        pink.next_value(&mut rng);
        assert_eq!(pink.white_values[1..], before[1..]);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let run = |seed| {
            let mut rng = create_rng(seed);
            let mut pink = PinkNumber::new(&mut rng);
            (0..64).map(|_| pink.next_value(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(3), run(3));
        assert_ne!(run(3), run(4));
    }
}
