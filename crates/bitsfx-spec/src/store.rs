//! Parameter store with clamping, advisory locks, and a dirty flag.

use crate::error::SpecError;
use crate::param::{self, ParamDef, ParamId, CATALOG};
use crate::wave::WaveType;

/// Current values for every catalog parameter.
///
/// The store is a plain value: clones are independent. Locks are advisory and
/// only consulted by callers that randomize or mutate parameters; `set` never
/// refuses a write. Every mutation raises the dirty flag; only the consumer of
/// the values (the synthesizer's full reset) lowers it via [`mark_clean`].
///
/// [`mark_clean`]: SfxrParams::mark_clean
#[derive(Debug, Clone, PartialEq)]
pub struct SfxrParams {
    values: [f32; ParamId::COUNT],
    locked: [bool; ParamId::COUNT],
    dirty: bool,
}

impl Default for SfxrParams {
    fn default() -> Self {
        Self::new()
    }
}

impl SfxrParams {
    /// Creates a store with every value at its default and only
    /// `masterVolume` locked.
    pub fn new() -> Self {
        let mut params = Self {
            values: [0.0; ParamId::COUNT],
            locked: [false; ParamId::COUNT],
            dirty: true,
        };
        params.reset_to_defaults();
        params
    }

    /// Returns every uid in catalog order.
    pub fn uids() -> impl Iterator<Item = &'static str> {
        ParamId::ALL.iter().map(|id| id.uid())
    }

    // ------------------------------------------------------------------
    // Typed access
    // ------------------------------------------------------------------

    /// Returns the current value of `id`.
    pub fn value(&self, id: ParamId) -> f32 {
        self.values[id as usize]
    }

    /// Clamps `value` to the bounds of `id` and stores it.
    ///
    /// NaN leaves the stored value untouched. The dirty flag is raised either
    /// way.
    pub fn set_value(&mut self, id: ParamId, value: f32) {
        if value.is_nan() {
            tracing::warn!("ignoring NaN for parameter {}", id);
        } else {
            self.values[id as usize] = id.def().clamp(value);
        }
        self.dirty = true;
    }

    /// Returns the wave shape selected by `waveType`.
    pub fn wave_type(&self) -> WaveType {
        WaveType::from_param(self.value(ParamId::WaveType))
    }

    /// Selects a wave shape.
    pub fn set_wave_type(&mut self, wave: WaveType) {
        self.set_value(ParamId::WaveType, wave.as_param());
    }

    /// Locks or unlocks `id`. The dirty flag is raised when the lock set changes.
    pub fn lock_param(&mut self, id: ParamId, locked: bool) {
        let slot = &mut self.locked[id as usize];
        if *slot != locked {
            *slot = locked;
            self.dirty = true;
        }
    }

    /// Returns true if `id` is locked.
    pub fn is_param_locked(&self, id: ParamId) -> bool {
        self.locked[id as usize]
    }

    /// Returns the locked identifiers in catalog order.
    pub fn locked_params(&self) -> impl Iterator<Item = ParamId> + '_ {
        ParamId::ALL
            .iter()
            .copied()
            .filter(move |id| self.locked[*id as usize])
    }

    // ------------------------------------------------------------------
    // Uid access
    // ------------------------------------------------------------------

    /// Returns the current value for `uid`, or `0.0` if the uid is unknown.
    pub fn get(&self, uid: &str) -> f32 {
        match uid.parse::<ParamId>() {
            Ok(id) => self.value(id),
            Err(_) => {
                tracing::warn!("get: unknown parameter '{}'", uid);
                0.0
            }
        }
    }

    /// Returns the current value for `uid`.
    pub fn try_get(&self, uid: &str) -> Result<f32, SpecError> {
        uid.parse::<ParamId>().map(|id| self.value(id))
    }

    /// Clamps and stores `value` for `uid`.
    ///
    /// Unknown uids are ignored, but the store is still marked dirty.
    pub fn set(&mut self, uid: &str, value: f32) {
        match uid.parse::<ParamId>() {
            Ok(id) => self.set_value(id, value),
            Err(_) => {
                tracing::warn!("set: unknown parameter '{}'", uid);
                self.dirty = true;
            }
        }
    }

    /// Clamps and stores `value` for `uid`, failing on unknown uids.
    pub fn try_set(&mut self, uid: &str, value: f32) -> Result<(), SpecError> {
        let id = uid.parse::<ParamId>()?;
        self.set_value(id, value);
        Ok(())
    }

    /// Locks or unlocks `uid`. Unknown uids are ignored.
    pub fn lock(&mut self, uid: &str, locked: bool) {
        match uid.parse::<ParamId>() {
            Ok(id) => self.lock_param(id, locked),
            Err(_) => tracing::warn!("lock: unknown parameter '{}'", uid),
        }
    }

    /// Returns true if `uid` is locked. Unknown uids are never locked.
    pub fn is_locked(&self, uid: &str) -> bool {
        uid.parse::<ParamId>()
            .map(|id| self.is_param_locked(id))
            .unwrap_or(false)
    }

    /// Locks or unlocks every parameter.
    pub fn lock_all(&mut self, locked: bool) {
        self.locked = [locked; ParamId::COUNT];
        self.dirty = true;
    }

    /// Restores every default, clears all locks except `masterVolume`.
    pub fn reset_to_defaults(&mut self) {
        for def in CATALOG.iter() {
            self.values[def.id as usize] = def.default;
        }
        self.locked = [false; ParamId::COUNT];
        self.locked[ParamId::MasterVolume as usize] = true;
        self.dirty = true;
    }

    // ------------------------------------------------------------------
    // Catalog metadata by uid
    // ------------------------------------------------------------------

    /// Display name for `uid`, or `""` if unknown.
    pub fn name(uid: &str) -> &'static str {
        param::find(uid).map(|def| def.name).unwrap_or_default()
    }

    /// Description for `uid`, or `""` if unknown.
    pub fn description(uid: &str) -> &'static str {
        param::find(uid).map(|def| def.description).unwrap_or_default()
    }

    /// Default value for `uid`, or `0.0` if unknown.
    pub fn default_value(uid: &str) -> f32 {
        Self::bound(uid, |def| def.default)
    }

    /// Lower bound for `uid`, or `0.0` if unknown.
    pub fn min(uid: &str) -> f32 {
        Self::bound(uid, |def| def.min)
    }

    /// Upper bound for `uid`, or `0.0` if unknown.
    pub fn max(uid: &str) -> f32 {
        Self::bound(uid, |def| def.max)
    }

    fn bound(uid: &str, field: impl Fn(&ParamDef) -> f32) -> f32 {
        param::find(uid).map(field).unwrap_or(0.0)
    }

    // ------------------------------------------------------------------
    // Dirty flag
    // ------------------------------------------------------------------

    /// True if values changed since the last full synthesizer reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Lowers the dirty flag. Called by the synthesizer after it has consumed
    /// the values.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
