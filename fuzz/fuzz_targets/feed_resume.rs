#![no_main]
//! Feeds random input through `DecodeReader` at random read-buffer
//! boundaries and checks the result matches the one-shot façade, exercising
//! spec §8.1's streaming-equals-one-shot and resume-safety properties at
//! boundaries a fixed unit test wouldn't think to try.
use libfuzzer_sys::fuzz_target;
use safe_encoding::facade;
use safe_encoding::io::DecodeReader;
use safe_encoding::Radix64;
use std::io::Read;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, boundary_bytes) = input;
    if data.is_empty() || boundary_bytes.is_empty() {
        return;
    }

    let mut whole =
        vec![0u8; facade::get_encoded_length::<Radix64>(data.len() as i64, false).unwrap() as usize];
    let whole_len = facade::encode::<Radix64>(&data, &mut whole).expect("encode failed");
    let whole = &whole[..whole_len];

    // Read `whole` back through randomly-sized read buffers. DecodeReader
    // carries partial-group state across calls internally, so any buffer
    // size, including ones smaller than a single group, must make progress.
    let mut reader = DecodeReader::<Radix64, _>::new(whole);
    let mut out = Vec::new();
    let mut boundary_idx = 0;
    loop {
        let dst_len = 1 + (boundary_bytes[boundary_idx % boundary_bytes.len()] as usize % 16);
        boundary_idx += 1;
        let mut dst = vec![0u8; dst_len];
        let n = reader.read(&mut dst).expect("unexpected error resuming decode");
        if n == 0 {
            break;
        }
        out.extend_from_slice(&dst[..n]);
    }
    assert_eq!(out, data);
});
