//! Random sources for the noise stages.
//!
//! All randomness in the synthesizer flows through [`UniformSource`], passed in
//! explicitly. Any `rand` generator qualifies; [`create_rng`] builds the PCG32
//! stream used by the render driver and the CLI.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniform samples in `[0, 1)`.
pub trait UniformSource {
    /// Returns the next uniform sample in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Returns the next sample mapped to `[-1, 1)`.
    fn bipolar(&mut self) -> f64 {
        self.uniform() * 2.0 - 1.0
    }
}

impl<R: RngCore> UniformSource for R {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}
