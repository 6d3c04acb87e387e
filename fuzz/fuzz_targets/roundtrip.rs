#![no_main]
use libfuzzer_sys::fuzz_target;
use safe_encoding::{facade, Radix64};

// Encode random input, and ensure that decoding the result matches the input.
fuzz_target!(|data: &[u8]| {
    let mut encoded = vec![0u8; facade::get_encoded_length::<Radix64>(data.len() as i64, false).unwrap() as usize];
    let n = facade::encode::<Radix64>(data, &mut encoded).expect("encode failed");
    let mut decoded = vec![0u8; data.len()];
    let m = facade::decode::<Radix64>(&encoded[..n], &mut decoded).expect("decode failed");
    assert_eq!(data, &decoded[..m]);
});
