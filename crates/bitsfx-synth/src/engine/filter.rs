//! Resonant low-pass and one-pole high-pass filter pair.
//!
//! The low-pass is a damped leaky integrator on the wave position; the
//! high-pass runs on the change in the low-pass output. Both cutoffs can sweep.

const MAX_CUTOFF: f64 = 0.1;
const MIN_HP_CUTOFF: f64 = 0.000_01;
const MAX_LP_DAMPING: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Filters {
    /// Either filter deviates from pass-through.
    active: bool,
    lp_on: bool,
    lp_pos: f64,
    lp_delta_pos: f64,
    lp_cutoff: f64,
    lp_delta_cutoff: f64,
    lp_damping: f64,
    hp_pos: f64,
    hp_cutoff: f64,
    hp_delta_cutoff: f64,
}

impl Filters {
    /// Derives filter state from the cutoff, sweep, and resonance parameters.
    pub(crate) fn new(
        lp_cutoff: f64,
        lp_sweep: f64,
        lp_resonance: f64,
        hp_cutoff: f64,
        hp_sweep: f64,
    ) -> Self {
        let lp = lp_cutoff * lp_cutoff * lp_cutoff * 0.1;
        let damping = (5.0 / (1.0 + lp_resonance * lp_resonance * 20.0) * (0.01 + lp))
            .min(MAX_LP_DAMPING);

        Self {
            active: lp_cutoff != 1.0 || hp_cutoff != 0.0,
            lp_on: lp_cutoff != 1.0,
            lp_pos: 0.0,
            lp_delta_pos: 0.0,
            lp_cutoff: lp,
            lp_delta_cutoff: 1.0 + lp_sweep * 0.0001,
            lp_damping: 1.0 - damping,
            hp_pos: 0.0,
            hp_cutoff: hp_cutoff * hp_cutoff * 0.1,
            hp_delta_cutoff: 1.0 + hp_sweep * 0.0003,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Sweeps the high-pass cutoff; called once per output sample.
    pub(crate) fn sweep_high_pass(&mut self) {
        if self.active && self.hp_delta_cutoff != 0.0 {
            self.hp_cutoff = (self.hp_cutoff * self.hp_delta_cutoff).clamp(MIN_HP_CUTOFF, MAX_CUTOFF);
        }
    }

    /// Filters one sub-sample. Pass-through when inactive.
    pub(crate) fn process(&mut self, sample: f64) -> f64 {
        if !self.active {
            return sample;
        }

        let lp_old_pos = self.lp_pos;
        self.lp_cutoff = (self.lp_cutoff * self.lp_delta_cutoff).clamp(0.0, MAX_CUTOFF);

        if self.lp_on {
            self.lp_delta_pos += (sample - self.lp_pos) * self.lp_cutoff;
            self.lp_delta_pos *= self.lp_damping;
        } else {
            self.lp_pos = sample;
            self.lp_delta_pos = 0.0;
        }
        self.lp_pos += self.lp_delta_pos;

        self.hp_pos += self.lp_pos - lp_old_pos;
        self.hp_pos *= 1.0 - self.hp_cutoff;
        self.hp_pos
    }
}
