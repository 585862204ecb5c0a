//! Property-based tests for the parameter store.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bitsfx-spec --test store_properties
//! ```

use bitsfx_spec::{ParamId, SfxrParams, CATALOG};
use proptest::prelude::*;

fn any_param() -> impl Strategy<Value = ParamId> {
    (0..ParamId::COUNT).prop_map(|index| ParamId::ALL[index])
}

proptest! {
    /// `get` after `set` returns the clamped value for every uid.
    #[test]
    fn set_then_get_clamps(id in any_param(), value in -10.0f32..10.0) {
        let mut params = SfxrParams::new();
        params.set(id.uid(), value);
        let def = id.def();
        prop_assert_eq!(params.get(id.uid()), value.clamp(def.min, def.max));
    }

    /// Values always stay inside their bounds, whatever is written.
    #[test]
    fn values_stay_in_bounds(writes in prop::collection::vec((any_param(), any::<f32>()), 0..64)) {
        let mut params = SfxrParams::new();
        for (id, value) in writes {
            params.set_value(id, value);
        }
        for def in CATALOG.iter() {
            let value = params.value(def.id);
            prop_assert!(def.min <= value && value <= def.max, "{} = {}", def.id, value);
        }
    }

    /// Unknown uids never panic and read as zero.
    #[test]
    fn unknown_uids_are_graceful(uid in "[a-zA-Z]{1,24}", value in any::<f32>()) {
        prop_assume!(uid.parse::<ParamId>().is_err());
        let mut params = SfxrParams::new();
        params.set(&uid, value);
        prop_assert_eq!(params.get(&uid), 0.0);
        prop_assert!(params.is_dirty());
    }

    /// Reset restores every default and the masterVolume-only lock set.
    #[test]
    fn reset_restores_defaults(writes in prop::collection::vec((any_param(), -2.0f32..2.0, any::<bool>()), 0..32)) {
        let mut params = SfxrParams::new();
        for (id, value, lock) in writes {
            params.set_value(id, value);
            params.lock_param(id, lock);
        }
        params.reset_to_defaults();
        for def in CATALOG.iter() {
            prop_assert_eq!(params.value(def.id), def.default);
            prop_assert_eq!(params.is_param_locked(def.id), def.id == ParamId::MasterVolume);
        }
    }

    /// JSON persistence reproduces the store exactly.
    #[test]
    fn json_round_trip(writes in prop::collection::vec((any_param(), -2.0f32..2.0), 0..32)) {
        let mut params = SfxrParams::new();
        for (id, value) in writes {
            params.set_value(id, value);
        }
        let restored = SfxrParams::from_json(&params.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored, params);
    }
}
