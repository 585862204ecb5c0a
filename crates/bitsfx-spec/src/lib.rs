//! bitsfx Parameter Model
//!
//! This crate defines the closed catalog of synthesis parameters and the
//! [`SfxrParams`] store that holds their current values.
//!
//! # Overview
//!
//! - **Catalog**: [`ParamId`] names each parameter; [`CATALOG`] carries its
//!   display name, description, UI group, default, and clamp bounds.
//! - **Store**: [`SfxrParams`] clamps on every write, tracks advisory locks,
//!   and raises a dirty flag that the synthesizer lowers after a full reset.
//! - **Persistence**: [`ParamsFile`] is the JSON form of a store.
//!
//! # Example
//!
//! ```
//! use bitsfx_spec::{SfxrParams, WaveType};
//!
//! let mut params = SfxrParams::new();
//! params.set_wave_type(WaveType::Square);
//! params.set("slide", -0.3);
//! params.set("startFrequency", 4.0); // clamped to 1.0
//!
//! assert_eq!(params.get("startFrequency"), 1.0);
//! assert!(params.is_locked("masterVolume"));
//!
//! let json = params.to_json().unwrap();
//! assert_eq!(SfxrParams::from_json(&json).unwrap(), params);
//! ```

pub mod envelope;
pub mod error;
pub mod param;
pub mod persist;
pub mod store;
pub mod wave;

pub use envelope::{EnvelopeTimes, MIN_SUSTAIN_TIME, MIN_TOTAL_TIME};
pub use error::SpecError;
pub use param::{ParamDef, ParamId, CATALOG};
pub use persist::ParamsFile;
pub use store::SfxrParams;
pub use wave::{WaveType, WAVE_TYPE_COUNT};
