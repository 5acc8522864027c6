#[cfg(feature = "arbitrary")]
mod fuzz {
    use arbitrary::{Arbitrary, Unstructured};
    use chat_timeline::{sample, ChatError, ScriptRaw, Timeline};

    fn fill_deterministic(buf: &mut [u8], seed: u64) {
        let mut state = seed;
        for byte in buf.iter_mut() {
            // xorshift64*
            state ^= state >> 12;
            state ^= state << 25;
            state ^= state >> 27;
            state = state.wrapping_mul(0x2545_F491_4F6C_DD1D);
            *byte = (state & 0xFF) as u8;
        }
    }

    #[test]
    fn fuzz_validate_and_compile_raw_scripts() {
        let mut raw_data = [0u8; 1024 * 16];

        for i in 0..128u64 {
            fill_deterministic(&mut raw_data, 0xC4A7_7135u64 ^ i);
            let mut u = Unstructured::new(&raw_data);

            let Ok(raw) = ScriptRaw::arbitrary(&mut u) else {
                continue;
            };
            match raw.validate() {
                Ok(script) => {
                    let timeline = Timeline::compile(&script);
                    for pair in timeline.messages().windows(2) {
                        assert!(pair[0].end_frame <= pair[1].start_frame);
                    }
                    let total = timeline.total_duration_frames() as i64;
                    for frame in [-1, 0, total / 2, total, total + 1] {
                        let _ = sample(&timeline, frame);
                    }
                }
                Err(ChatError::MalformedScript(_)) | Err(ChatError::ResourceLimit(_)) => {}
                Err(other) => panic!("unexpected validation error: {other:?}"),
            }
        }
    }

    #[test]
    fn fuzz_json_roundtrip_stability() {
        let mut raw_data = [0u8; 1024 * 8];

        for i in 0..64u64 {
            fill_deterministic(&mut raw_data, 0x5EED_1234u64 ^ (i << 1));
            let mut u = Unstructured::new(&raw_data);
            if let Ok(script) = ScriptRaw::arbitrary(&mut u) {
                let json = script.to_json().expect("raw script serializes");
                let reparsed = ScriptRaw::from_json(&json).expect("own output parses");
                assert_eq!(reparsed, script);
            }
        }
    }
}
