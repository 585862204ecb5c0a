//! Parameter catalog.
//!
//! The catalog is closed: every parameter the synthesizer understands is a
//! [`ParamId`] variant, and [`CATALOG`] holds its display metadata and bounds
//! in the same order as the enum.

use std::fmt;
use std::str::FromStr;

use crate::error::SpecError;
use crate::wave::WAVE_TYPE_COUNT;

/// Static definition of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDef {
    /// Identifier this entry describes.
    pub id: ParamId,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description shown as a tooltip.
    pub description: &'static str,
    /// UI grouping id. The synthesizer ignores it.
    pub group: u8,
    /// Value a fresh store starts with.
    pub default: f32,
    /// Lower clamp bound.
    pub min: f32,
    /// Upper clamp bound.
    pub max: f32,
}

impl ParamDef {
    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }
}

macro_rules! param_ids {
    ($($variant:ident => $uid:literal,)+) => {
        /// Stable identifier of a synthesis parameter.
        ///
        /// Variants are declared in catalog order; `id as usize` indexes
        /// [`CATALOG`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ParamId {
            $(
                #[doc = concat!("`", $uid, "`")]
                $variant,
            )+
        }

        impl ParamId {
            /// Every identifier, in catalog order.
            pub const ALL: &'static [ParamId] = &[$(ParamId::$variant,)+];

            /// Returns the uid string used in persisted files and lookups.
            pub fn uid(self) -> &'static str {
                match self {
                    $(ParamId::$variant => $uid,)+
                }
            }
        }

        impl FromStr for ParamId {
            type Err = SpecError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($uid => Ok(ParamId::$variant),)+
                    _ => Err(SpecError::unknown_param(s)),
                }
            }
        }
    };
}

param_ids! {
    WaveType => "waveType",
    MasterVolume => "masterVolume",
    AttackTime => "attackTime",
    SustainTime => "sustainTime",
    SustainPunch => "sustainPunch",
    DecayTime => "decayTime",
    CompressionAmount => "compressionAmount",
    StartFrequency => "startFrequency",
    MinFrequency => "minFrequency",
    Slide => "slide",
    DeltaSlide => "deltaSlide",
    VibratoDepth => "vibratoDepth",
    VibratoSpeed => "vibratoSpeed",
    Overtones => "overtones",
    OvertoneFalloff => "overtoneFalloff",
    ChangeRepeat => "changeRepeat",
    ChangeAmount => "changeAmount",
    ChangeSpeed => "changeSpeed",
    ChangeAmount2 => "changeAmount2",
    ChangeSpeed2 => "changeSpeed2",
    SquareDuty => "squareDuty",
    DutySweep => "dutySweep",
    RepeatSpeed => "repeatSpeed",
    FlangerOffset => "flangerOffset",
    FlangerSweep => "flangerSweep",
    LpFilterCutoff => "lpFilterCutoff",
    LpFilterCutoffSweep => "lpFilterCutoffSweep",
    LpFilterResonance => "lpFilterResonance",
    HpFilterCutoff => "hpFilterCutoff",
    HpFilterCutoffSweep => "hpFilterCutoffSweep",
    BitCrush => "bitCrush",
    BitCrushSweep => "bitCrushSweep",
}

impl ParamId {
    /// Number of catalog entries.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the catalog definition for this identifier.
    pub fn def(self) -> &'static ParamDef {
        &CATALOG[self as usize]
    }

    /// True for parameters that only affect the square wave.
    pub fn is_square_only(self) -> bool {
        matches!(self, ParamId::SquareDuty | ParamId::DutySweep)
    }

    /// True for parameters editors keep out of the slider list.
    pub fn is_hidden(self) -> bool {
        matches!(self, ParamId::WaveType | ParamId::MasterVolume)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uid())
    }
}

const fn def(
    id: ParamId,
    name: &'static str,
    description: &'static str,
    group: u8,
    default: f32,
    min: f32,
    max: f32,
) -> ParamDef {
    ParamDef {
        id,
        name,
        description,
        group,
        default,
        min,
        max,
    }
}

/// The full parameter catalog, indexed by `ParamId as usize`.
pub static CATALOG: [ParamDef; ParamId::COUNT] = [
    // Integer parameter stored as a float; the max sits just under the count
    // so truncation never yields an out-of-range wave.
    def(ParamId::WaveType, "Wave Type", "Shape of the wave.", 0, 2.0, 0.0, WAVE_TYPE_COUNT as f32 - 0.0001),
    def(ParamId::MasterVolume, "Master Volume", "Overall volume of the sound.", 1, 0.5, 0.0, 1.0),
    def(ParamId::AttackTime, "Attack Time", "Length of the volume envelope attack.", 1, 0.0, 0.0, 1.0),
    def(ParamId::SustainTime, "Sustain Time", "Length of the volume envelope sustain.", 1, 0.3, 0.0, 1.0),
    def(ParamId::SustainPunch, "Punch", "Tilts the sustain envelope for more 'pop'.", 1, 0.0, 0.0, 1.0),
    def(ParamId::DecayTime, "Decay Time", "Length of the volume envelope decay.", 1, 0.4, 0.0, 1.0),
    def(
        ParamId::CompressionAmount,
        "Compression",
        "Pushes amplitudes together into a narrower range so the sound stands out against background music.",
        15,
        0.3,
        0.0,
        1.0,
    ),
    def(ParamId::StartFrequency, "Frequency", "Base note of the sound.", 2, 0.3, 0.0, 1.0),
    def(
        ParamId::MinFrequency,
        "Frequency Cutoff",
        "If sliding, the sound stops at this frequency to prevent really low notes.",
        2,
        0.0,
        0.0,
        1.0,
    ),
    def(ParamId::Slide, "Frequency Slide", "Slides the frequency up or down.", 3, 0.0, -1.0, 1.0),
    def(
        ParamId::DeltaSlide,
        "Delta Slide",
        "Accelerates the frequency slide. Can make the frequency change direction.",
        3,
        0.0,
        -1.0,
        1.0,
    ),
    def(ParamId::VibratoDepth, "Vibrato Depth", "Strength of the vibrato effect.", 4, 0.0, 0.0, 1.0),
    def(ParamId::VibratoSpeed, "Vibrato Speed", "Speed of the vibrato effect.", 4, 0.0, 0.0, 1.0),
    def(
        ParamId::Overtones,
        "Harmonics",
        "Overlays copies of the waveform at multiples of its frequency to thicken the texture.",
        13,
        0.0,
        0.0,
        1.0,
    ),
    def(ParamId::OvertoneFalloff, "Harmonics Falloff", "Rate at which higher overtones decay.", 13, 0.0, 0.0, 1.0),
    def(
        ParamId::ChangeRepeat,
        "Pitch Jump Repeat Speed",
        "Larger values mean more pitch jumps, useful for arpeggiation.",
        5,
        0.0,
        0.0,
        1.0,
    ),
    def(ParamId::ChangeAmount, "Pitch Jump Amount 1", "Jump in pitch, either up or down.", 5, 0.0, -1.0, 1.0),
    def(ParamId::ChangeSpeed, "Pitch Jump Onset 1", "How quickly the note shift happens.", 5, 0.0, 0.0, 1.0),
    def(ParamId::ChangeAmount2, "Pitch Jump Amount 2", "Jump in pitch, either up or down.", 5, 0.0, -1.0, 1.0),
    def(ParamId::ChangeSpeed2, "Pitch Jump Onset 2", "How quickly the note shift happens.", 5, 0.0, 0.0, 1.0),
    def(
        ParamId::SquareDuty,
        "Square Duty",
        "Square wave only: ratio between the up and down states, changing the timbre.",
        8,
        0.0,
        0.0,
        1.0,
    ),
    def(ParamId::DutySweep, "Duty Sweep", "Square wave only: sweeps the duty up or down.", 8, 0.0, -1.0, 1.0),
    def(
        ParamId::RepeatSpeed,
        "Repeat Speed",
        "Speed of the note repeating; pitch state is reset each time.",
        9,
        0.0,
        0.0,
        1.0,
    ),
    def(
        ParamId::FlangerOffset,
        "Flanger Offset",
        "Offsets a second copy of the wave by a small phase, changing the timbre.",
        10,
        0.0,
        -1.0,
        1.0,
    ),
    def(ParamId::FlangerSweep, "Flanger Sweep", "Sweeps the phase up or down.", 10, 0.0, -1.0, 1.0),
    def(
        ParamId::LpFilterCutoff,
        "LP Filter Cutoff",
        "Frequency at which the low-pass filter starts attenuating higher frequencies.",
        11,
        1.0,
        0.0,
        1.0,
    ),
    def(
        ParamId::LpFilterCutoffSweep,
        "LP Filter Cutoff Sweep",
        "Sweeps the low-pass cutoff up or down.",
        11,
        0.0,
        -1.0,
        1.0,
    ),
    def(
        ParamId::LpFilterResonance,
        "LP Filter Resonance",
        "Changes the attenuation rate of the low-pass filter, changing the timbre.",
        11,
        0.0,
        0.0,
        1.0,
    ),
    def(
        ParamId::HpFilterCutoff,
        "HP Filter Cutoff",
        "Frequency at which the high-pass filter starts attenuating lower frequencies.",
        12,
        0.0,
        0.0,
        1.0,
    ),
    def(
        ParamId::HpFilterCutoffSweep,
        "HP Filter Cutoff Sweep",
        "Sweeps the high-pass cutoff up or down.",
        12,
        0.0,
        -1.0,
        1.0,
    ),
    def(ParamId::BitCrush, "Bit Crush", "Resamples the audio at a lower frequency.", 14, 0.0, 0.0, 1.0),
    def(ParamId::BitCrushSweep, "Bit Crush Sweep", "Sweeps the bit crush up or down.", 14, 0.0, -1.0, 1.0),
];

/// Looks up a catalog entry by uid string.
pub fn find(uid: &str) -> Option<&'static ParamDef> {
    uid.parse::<ParamId>().ok().map(ParamId::def)
}
