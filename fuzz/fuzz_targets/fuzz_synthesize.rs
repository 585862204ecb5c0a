#![no_main]

use bitsfx_spec::{ParamId, SfxrParams};
use bitsfx_synth::{create_rng, SfxrSynth};
use libfuzzer_sys::fuzz_target;

// Caps the work per input; the envelope can run for a few seconds of audio.
const MAX_SAMPLES: usize = 1 << 16;

fuzz_target!(|data: &[u8]| {
    let mut params = SfxrParams::new();
    for (id, chunk) in ParamId::ALL.iter().zip(data.chunks_exact(4)) {
        let bytes = [chunk[0], chunk[1], chunk[2], chunk[3]];
        params.set_value(*id, f32::from_le_bytes(bytes));
    }

    let mut synth = SfxrSynth::new(params, create_rng(0));
    let mut buffer = vec![0.0f32; 512];
    let mut produced = 0;
    while produced < MAX_SAMPLES {
        buffer.fill(0.0);
        let block = synth.synthesize_block(&mut buffer);
        assert!(buffer[..block.written].iter().all(|s| !s.is_nan()));
        produced += block.written;
        if block.finished {
            break;
        }
    }
});
