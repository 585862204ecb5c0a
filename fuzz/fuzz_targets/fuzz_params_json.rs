#![no_main]

use bitsfx_spec::{SfxrParams, CATALOG};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(params) = SfxrParams::from_json(text) else {
        return;
    };

    for def in CATALOG.iter() {
        let value = params.value(def.id);
        assert!(def.min <= value && value <= def.max);
    }

    let json = params.to_json().expect("store serializes");
    let again = SfxrParams::from_json(&json).expect("own output parses");
    assert_eq!(again, params);
});
