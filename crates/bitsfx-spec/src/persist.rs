//! JSON persistence for parameter stores.
//!
//! The file format is a map of uid to value plus the list of locked uids:
//!
//! ```json
//! { "values": { "waveType": 0.0, "slide": -0.3 }, "locked": ["masterVolume"] }
//! ```
//!
//! Uids missing from `values` keep their defaults. Loading goes through the
//! store's clamping `set`, so out-of-range values are clamped, not rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::param::ParamId;
use crate::store::SfxrParams;

/// Serialized form of [`SfxrParams`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsFile {
    /// Parameter values keyed by uid.
    #[serde(default)]
    pub values: BTreeMap<String, f32>,
    /// Locked uids.
    #[serde(default)]
    pub locked: Vec<String>,
}

impl From<&SfxrParams> for ParamsFile {
    fn from(params: &SfxrParams) -> Self {
        Self {
            values: ParamId::ALL
                .iter()
                .map(|&id| (id.uid().to_string(), params.value(id)))
                .collect(),
            locked: params.locked_params().map(|id| id.uid().to_string()).collect(),
        }
    }
}

impl TryFrom<ParamsFile> for SfxrParams {
    type Error = SpecError;

    fn try_from(file: ParamsFile) -> Result<Self, Self::Error> {
        let mut params = SfxrParams::new();
        for (uid, value) in &file.values {
            let id = uid.parse::<ParamId>()?;
            if !value.is_finite() {
                return Err(SpecError::InvalidValue {
                    uid: uid.clone(),
                    value: *value,
                });
            }
            params.set_value(id, *value);
        }

        params.lock_all(false);
        for uid in &file.locked {
            let id = uid.parse::<ParamId>()?;
            params.lock_param(id, true);
        }
        Ok(params)
    }
}

impl SfxrParams {
    /// Serializes the store to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(&ParamsFile::from(self))?)
    }

    /// Parses a store from JSON. The result is dirty.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let file: ParamsFile = serde_json::from_str(json)?;
        SfxrParams::try_from(file)
    }
}
