#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::{decode_root_with_opts, from_bytes, to_bytes, DecodeOptions};

fuzz_target!(|data: &[u8]| {
    let opts = DecodeOptions::new().max_seq_len(10_000);
    if let Ok(tag) = decode_root_with_opts(data, opts) {
        // Compare bytes rather than trees, NaN floats are not equal to
        // themselves.
        let bs = to_bytes(&tag).unwrap();
        let again = to_bytes(&from_bytes(&bs).unwrap()).unwrap();
        assert_eq!(bs, again);
    }
});
