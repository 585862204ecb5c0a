//! JSON output types for machine-readable CLI output.
//!
//! Returned by the `--json` flag on `params` and `render`.

use serde::{Deserialize, Serialize};

use bitsfx_spec::ParamDef;

/// Error codes for CLI operations.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SYNTH_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates an error tied to a file.
    pub fn for_file(code: &str, message: impl Into<String>, file: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            file: Some(file.to_string()),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParamEntry {
    pub uid: String,
    pub name: String,
    pub description: String,
    pub group: u8,
    pub default: f32,
    pub min: f32,
    pub max: f32,
    /// Only affects the square wave.
    pub square_only: bool,
    /// Not offered for randomizing or per-sound editing.
    pub hidden: bool,
}

impl From<&ParamDef> for ParamEntry {
    fn from(def: &ParamDef) -> Self {
        Self {
            uid: def.id.uid().to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            group: def.group,
            default: def.default,
            min: def.min,
            max: def.max,
            square_only: def.id.is_square_only(),
            hidden: def.id.is_hidden(),
        }
    }
}

/// Statistics for one rendered sound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderStats {
    /// Engine samples produced at 44100 Hz.
    pub samples: usize,
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub duration_seconds: f64,
    pub peak: f32,
    pub pcm_bytes: usize,
    pub pcm_hash: String,
    pub seed: u32,
}

/// Output of `render --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RenderStats>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl RenderOutput {
    pub fn success(stats: RenderStats) -> Self {
        Self {
            success: true,
            stats: Some(stats),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            stats: None,
            errors: vec![error],
        }
    }
}
