//! Oscillator wave shapes.

use std::fmt;

/// Number of wave shapes the oscillator supports.
pub const WAVE_TYPE_COUNT: usize = 9;

/// Oscillator wave shape, selected by the integer part of `waveType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaveType {
    /// Pulse wave with variable duty.
    #[default]
    Square,
    /// Falling sawtooth.
    Saw,
    /// Parabolic sine approximation.
    Sine,
    /// White noise, redrawn every period.
    Noise,
    /// Triangle.
    Triangle,
    /// Pink noise from the Voss-McCartney generator.
    PinkNoise,
    /// `tan` of the phase; harsh and detuned.
    Tan,
    /// Sine plus a quiet sine twenty times higher.
    Whistle,
    /// Inverted parabola.
    Breaker,
}

impl WaveType {
    /// All wave shapes in parameter order.
    pub const ALL: [WaveType; WAVE_TYPE_COUNT] = [
        WaveType::Square,
        WaveType::Saw,
        WaveType::Sine,
        WaveType::Noise,
        WaveType::Triangle,
        WaveType::PinkNoise,
        WaveType::Tan,
        WaveType::Whistle,
        WaveType::Breaker,
    ];

    /// Interprets a `waveType` parameter value by truncation.
    ///
    /// Values outside the catalog bounds saturate to the first or last shape.
    pub fn from_param(value: f32) -> Self {
        if value.is_nan() || value < 1.0 {
            return WaveType::Square;
        }
        let index = (value as usize).min(WAVE_TYPE_COUNT - 1);
        Self::ALL[index]
    }

    /// Returns the parameter value selecting this shape.
    pub fn as_param(self) -> f32 {
        self.index() as f32
    }

    /// Returns the zero-based shape index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns a lowercase display name.
    pub fn as_str(self) -> &'static str {
        match self {
            WaveType::Square => "square",
            WaveType::Saw => "saw",
            WaveType::Sine => "sine",
            WaveType::Noise => "noise",
            WaveType::Triangle => "triangle",
            WaveType::PinkNoise => "pink",
            WaveType::Tan => "tan",
            WaveType::Whistle => "whistle",
            WaveType::Breaker => "breaker",
        }
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
