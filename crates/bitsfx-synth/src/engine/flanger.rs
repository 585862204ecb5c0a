//! Flanger: the wave mixed with a swept, delayed copy of itself.

/// Delay-line length in sub-samples. Must be a power of two.
pub(crate) const FLANGER_LEN: usize = 1024;
const MASK: usize = FLANGER_LEN - 1;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Flanger {
    active: bool,
    offset: f64,
    delta_offset: f64,
    /// Integer delay in sub-samples. Only positive offsets are capped; the
    /// read index wraps for larger negative ones.
    delay: usize,
    pos: usize,
    buffer: Box<[f64; FLANGER_LEN]>,
}

impl Flanger {
    /// Derives flanger state from the offset and sweep parameters and
    /// allocates a zeroed delay line.
    pub(crate) fn new(offset: f64, sweep: f64) -> Self {
        let mut initial = offset * offset * 1020.0;
        if offset < 0.0 {
            initial = -initial;
        }
        Self {
            active: offset != 0.0 || sweep != 0.0,
            offset: initial,
            delta_offset: sweep * sweep * sweep * 0.2,
            delay: 0,
            pos: 0,
            buffer: Box::new([0.0; FLANGER_LEN]),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Sweeps the delay; called once per output sample.
    pub(crate) fn sweep(&mut self) {
        if !self.active {
            return;
        }
        self.offset += self.delta_offset;
        let offset = self.offset as i64;
        self.delay = if offset < 0 {
            offset.unsigned_abs() as usize
        } else {
            (offset as usize).min(MASK)
        };
    }

    /// Writes one sub-sample and returns it mixed with the delayed copy.
    pub(crate) fn process(&mut self, sample: f64) -> f64 {
        if !self.active {
            return sample;
        }
        self.buffer[self.pos & MASK] = sample;
        let read = self.pos.wrapping_add(FLANGER_LEN).wrapping_sub(self.delay) & MASK;
        let delayed = self.buffer[read];
        self.pos = (self.pos + 1) & MASK;
        sample + delayed
    }
}
