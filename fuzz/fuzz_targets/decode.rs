#![no_main]
use libfuzzer_sys::fuzz_target;
use safe_encoding::{facade, Radix64};

// Attempt to decode random input. If successful, the decoded value should
// encode to exactly the input modulo whitespace/substitution, which we
// check by re-encoding and decoding again rather than byte-comparing
// against the fuzzer's arbitrary input (that input may contain whitespace
// or substitution characters the canonical re-encoding never produces).
fuzz_target!(|data: &[u8]| {
    let mut decoded = vec![0u8; facade::get_decoded_length::<Radix64>(data.len() as i64).unwrap() as usize];
    if let Ok(n) = facade::decode::<Radix64>(data, &mut decoded) {
        let decoded = &decoded[..n];
        let mut reencoded =
            vec![0u8; facade::get_encoded_length::<Radix64>(n as i64, false).unwrap() as usize];
        let m = facade::encode::<Radix64>(decoded, &mut reencoded).expect("re-encode failed");
        let mut redecoded = vec![0u8; n];
        let k = facade::decode::<Radix64>(&reencoded[..m], &mut redecoded).expect("re-decode failed");
        assert_eq!(decoded, &redecoded[..k]);
    }
});
