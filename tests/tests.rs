//! Property-based tests of the universal codec invariants, run against
//! every one of the five radixes.

use proptest::prelude::*;
use safe_encoding::facade;
use safe_encoding::{Radix16, Radix32, Radix64, Radix80, Radix85, RadixDescriptor};

/// Generates a round-trip, canonical-output, whitespace-neutrality,
/// streaming-vs-one-shot, and resume-safety property module for `$radix`.
macro_rules! tests_for_radix {
    ($name:ident, $radix:ty) => {
        mod $name {
            use super::*;

            fn encode(input: &[u8]) -> Vec<u8> {
                let len = facade::get_encoded_length::<$radix>(input.len() as i64, false).unwrap();
                let mut dst = vec![0u8; len as usize];
                let n = facade::encode::<$radix>(input, &mut dst).unwrap();
                dst.truncate(n);
                dst
            }

            fn decode(input: &[u8]) -> Vec<u8> {
                let len = facade::get_decoded_length::<$radix>(input.len() as i64).unwrap();
                let mut dst = vec![0u8; len as usize];
                let n = facade::decode::<$radix>(input, &mut dst).unwrap();
                dst.truncate(n);
                dst
            }

            proptest! {
                #[test]
                fn round_trip(input in prop::collection::vec(any::<u8>(), 0..512)) {
                    let encoded = encode(&input);
                    prop_assert_eq!(decode(&encoded), input);
                }

                #[test]
                fn length_prefixed_round_trip(input in prop::collection::vec(any::<u8>(), 0..512)) {
                    let len = facade::get_encoded_length::<$radix>(input.len() as i64, true).unwrap();
                    let mut encoded = vec![0u8; len as usize];
                    let n = facade::l_encode::<$radix>(&input, &mut encoded).unwrap();
                    let mut decoded = vec![0u8; input.len()];
                    let m = facade::l_decode::<$radix>(&encoded[..n], &mut decoded).unwrap();
                    prop_assert_eq!(&decoded[..m], input.as_slice());
                }

                #[test]
                fn canonical_output_only_uses_encode_table(input in prop::collection::vec(any::<u8>(), 0..256)) {
                    let encoded = encode(&input);
                    let table = <$radix as RadixDescriptor>::encode_table();
                    for &byte in &encoded {
                        prop_assert!(table.contains(&byte));
                    }
                }

                #[test]
                fn whitespace_insertion_is_neutral(
                    input in prop::collection::vec(any::<u8>(), 0..64),
                    mut positions in prop::collection::vec(0usize..64, 0..8),
                ) {
                    let encoded = encode(&input);
                    let mut with_whitespace = encoded.clone();
                    // Insert back to front so earlier insertions don't
                    // invalidate later indices.
                    positions.sort_unstable();
                    for &pos in positions.iter().rev() {
                        let pos = pos.min(with_whitespace.len());
                        with_whitespace.insert(pos, b' ');
                    }
                    prop_assert_eq!(decode(&with_whitespace), decode(&encoded));
                }

                #[test]
                fn streaming_matches_one_shot(
                    input in prop::collection::vec(any::<u8>(), 0..256),
                    src_chunk_size in 1usize..17,
                ) {
                    use std::io::Write;
                    let whole = encode(&input);

                    // Write in arbitrarily-sized pieces through EncodeWriter,
                    // which carries partial-group state across writes via
                    // feed.rs exactly as a real caller would; the result
                    // must match encoding the whole input in one call.
                    let mut output = Vec::new();
                    {
                        let mut writer = safe_encoding::io::EncodeWriter::<$radix, _>::new(&mut output);
                        for chunk in input.chunks(src_chunk_size.max(1)) {
                            writer.write_all(chunk).unwrap();
                        }
                        writer.finish().unwrap();
                    }
                    prop_assert_eq!(output, whole);
                }

                #[test]
                fn resume_after_partially_complete_loses_nothing(
                    input in prop::collection::vec(any::<u8>(), 0..256),
                    dst_chunk_size in 1usize..17,
                ) {
                    use std::io::Read;
                    let encoded = encode(&input);

                    // Read the encoded form back through DecodeReader in
                    // arbitrarily small pieces. Internally this drives
                    // decode_feed call after call, honouring the
                    // NotEnoughRoom/PartiallyComplete resume protocol; the
                    // concatenated reads must reproduce the original input.
                    let mut reader = safe_encoding::io::DecodeReader::<$radix, _>::new(encoded.as_slice());
                    let mut out = Vec::new();
                    let mut buf = vec![0u8; dst_chunk_size];
                    loop {
                        let n = reader.read(&mut buf).unwrap();
                        if n == 0 {
                            break;
                        }
                        out.extend_from_slice(&buf[..n]);
                    }
                    prop_assert_eq!(out, input);
                }

                #[test]
                fn size_functions_round_trip(n in 0i64..4096) {
                    let encoded_len = facade::get_encoded_length::<$radix>(n, false).unwrap();
                    let decoded_len = facade::get_decoded_length::<$radix>(encoded_len).unwrap();
                    prop_assert_eq!(decoded_len, n);
                }
            }

            #[test]
            fn negative_lengths_are_rejected() {
                assert!(facade::get_encoded_length::<$radix>(-1, false).is_err());
                assert!(facade::get_decoded_length::<$radix>(-1).is_err());
            }
        }
    };
}

tests_for_radix!(radix16, Radix16);
tests_for_radix!(radix32, Radix32);
tests_for_radix!(radix64, Radix64);
tests_for_radix!(radix80, Radix80);
tests_for_radix!(radix85, Radix85);

/// Substitution idempotence (spec §8.1) only applies to radix 16 and 32,
/// the only radixes with decode-time substitutions.
mod substitution_idempotence {
    use super::*;

    proptest! {
        #[test]
        fn radix16_uppercase_is_equivalent_to_lowercase(input in prop::collection::vec(any::<u8>(), 0..64)) {
            let len = facade::get_encoded_length::<Radix16>(input.len() as i64, false).unwrap();
            let mut encoded = vec![0u8; len as usize];
            let n = facade::encode::<Radix16>(&input, &mut encoded).unwrap();
            encoded.truncate(n);
            let substituted: Vec<u8> = encoded.iter().map(|b| b.to_ascii_uppercase()).collect();

            let mut a = vec![0u8; input.len()];
            let mut b = vec![0u8; input.len()];
            let na = facade::decode::<Radix16>(&encoded, &mut a).unwrap();
            let nb = facade::decode::<Radix16>(&substituted, &mut b).unwrap();
            prop_assert_eq!(&a[..na], &b[..nb]);
        }

        #[test]
        fn radix32_uppercase_is_equivalent_to_lowercase(input in prop::collection::vec(any::<u8>(), 0..64)) {
            let len = facade::get_encoded_length::<Radix32>(input.len() as i64, false).unwrap();
            let mut encoded = vec![0u8; len as usize];
            let n = facade::encode::<Radix32>(&input, &mut encoded).unwrap();
            encoded.truncate(n);

            // Uppercasing every letter is one of the substitutions the
            // decode table treats as a no-op per spec §4.1.
            let substituted: Vec<u8> = encoded.iter().map(|b| b.to_ascii_uppercase()).collect();

            let mut a = vec![0u8; input.len()];
            let mut b = vec![0u8; input.len()];
            let na = facade::decode::<Radix32>(&encoded, &mut a).unwrap();
            let nb = facade::decode::<Radix32>(&substituted, &mut b).unwrap();
            prop_assert_eq!(&a[..na], &b[..nb]);
        }
    }
}
