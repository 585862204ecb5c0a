//! Pitch-jump ("change") state machine.
//!
//! A jump multiplies the oscillator period once its onset time is reached.
//! The engine runs two of these and periodically rewinds both, undoing any
//! jump that fired, so the pattern repeats as an arpeggio.

/// Scale applied to jump onsets by `changeRepeat`.
pub(crate) fn repeat_scale(change_repeat: f64) -> f64 {
    (1.0 - change_repeat + 0.1) / 1.1
}

/// Samples between rewinds of both jumps.
pub(crate) fn change_period(change_repeat: f64) -> f64 {
    repeat_scale(change_repeat) * 20_000.0 + 32.0
}

/// One pitch jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PitchJump {
    amount: f64,
    /// Onset in samples; `None` never fires.
    limit: Option<u32>,
    time: u32,
    reached: bool,
}

impl PitchJump {
    /// Derives a jump from its amount and onset-speed parameters.
    ///
    /// Positive amounts shrink the period (toward 0.1x, pitch up); zero or
    /// negative amounts grow it (up to 11x, pitch down). A speed of exactly
    /// 1 disables the jump.
    pub(crate) fn new(amount: f64, speed: f64, change_repeat: f64) -> Self {
        let amount = if amount > 0.0 {
            1.0 - amount * amount * 0.9
        } else {
            1.0 + amount * amount * 10.0
        };

        let limit = if speed == 1.0 {
            None
        } else {
            let base = ((1.0 - speed) * (1.0 - speed) * 20_000.0 + 32.0) as u32;
            Some((f64::from(base) * repeat_scale(change_repeat)) as u32)
        };

        Self {
            amount,
            limit,
            time: 0,
            reached: false,
        }
    }

    /// Restarts the onset counter, undoing the jump if it fired.
    pub(crate) fn rewind(&mut self, period: &mut f64) {
        self.time = 0;
        if self.reached {
            *period /= self.amount;
            self.reached = false;
        }
    }

    /// Counts one sample and fires the jump when the onset is reached.
    pub(crate) fn advance(&mut self, period: &mut f64) {
        if self.reached {
            return;
        }
        let Some(limit) = self.limit else {
            return;
        };
        self.time += 1;
        if self.time >= limit {
            self.reached = true;
            *period *= self.amount;
        }
    }

    #[cfg(test)]
    pub(crate) fn amount(&self) -> f64 {
        self.amount
    }

    #[cfg(test)]
    pub(crate) fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_mapping() {
        assert!((PitchJump::new(1.0, 0.0, 0.0).amount() - 0.1).abs() < 1e-12);
        assert!((PitchJump::new(-1.0, 0.0, 0.0).amount() - 11.0).abs() < 1e-12);
        assert_eq!(PitchJump::new(0.0, 0.0, 0.0).amount(), 1.0);
    }

    #[test]
    fn test_speed_one_never_fires() {
        let mut jump = PitchJump::new(0.5, 1.0, 0.0);
        assert_eq!(jump.limit(), None);
        let mut period = 100.0;
        for _ in 0..100_000 {
            jump.advance(&mut period);
        }
        assert_eq!(period, 100.0);
    }

    #[test]
    fn test_fires_once_at_limit() {
        let mut jump = PitchJump::new(0.5, 0.9, 1.0);
        let limit = jump.limit().unwrap();
        let mut period = 100.0;
        for _ in 0..limit - 1 {
            jump.advance(&mut period);
        }
        assert_eq!(period, 100.0);
        jump.advance(&mut period);
        let jumped = 100.0 * jump.amount();
        assert_eq!(period, jumped);
        jump.advance(&mut period);
        assert_eq!(period, jumped, "fires only once per cycle");
    }

    #[test]
    fn test_rewind_undoes_jump() {
        let mut jump = PitchJump::new(-0.5, 0.9, 1.0);
        let mut period = 100.0;
        for _ in 0..jump.limit().unwrap() {
            jump.advance(&mut period);
        }
        assert!(period > 100.0);
        jump.rewind(&mut period);
        assert!((period - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_change_period() {
        assert!((change_period(0.0) - 20_032.0).abs() < 1e-9);
        assert!((change_period(1.0) - (0.1 / 1.1 * 20_000.0 + 32.0)).abs() < 1e-9);
    }
}
