//! The group transform: packing/unpacking whole or partial groups of bytes
//! into/out of chunk values.
//!
//! A full group is `BYTES_PER_GROUP` bytes encoded as `CHUNKS_PER_GROUP`
//! chunks; the final group of a payload is usually partial, with fewer
//! bytes and therefore fewer chunks. A partial group is handled by padding
//! the accumulator as if the missing bytes (when encoding) or missing
//! chunks (when decoding) were zero, then only emitting the chunks/bytes
//! that actually carry data. Padding a byte
//! accumulator is always a left-shift, since raw bytes accumulate the same
//! way under both algebras; padding a chunk accumulator goes through
//! [`GroupAlgebra::accumulate_chunk`] with a zero value, so it inherits
//! whichever algebra the radix uses.

use crate::descriptor::{GroupAlgebra, RadixDescriptor};

/// Encode up to `R::BYTES_PER_GROUP` bytes into `out`, returning how many
/// chunk values were written. `out` must be at least `R::CHUNKS_PER_GROUP`
/// long. Written values are chunk values in `[0, R::RADIX)`, not yet mapped
/// through the encode table.
pub(crate) fn encode_group<R: RadixDescriptor>(bytes: &[u8], out: &mut [u8]) -> usize {
    debug_assert!(bytes.len() <= R::BYTES_PER_GROUP);
    debug_assert!(!bytes.is_empty());

    let mut acc: u128 = 0;
    for &byte in bytes {
        acc = (acc << 8) | byte as u128;
    }
    let missing_bytes = R::BYTES_PER_GROUP - bytes.len();
    acc <<= 8 * missing_bytes as u32;

    let chunk_count = R::byte_to_chunk_count(bytes.len());
    for (i, slot) in out.iter_mut().enumerate().take(chunk_count) {
        *slot = R::Algebra::extract_chunk(acc, i, R::CHUNKS_PER_GROUP, R::RADIX);
    }
    chunk_count
}

/// Decode up to `R::CHUNKS_PER_GROUP` chunk values (already mapped through
/// the decode table, in `[0, R::RADIX)`) into `out`, returning how many
/// bytes were written. `out` must be at least `R::BYTES_PER_GROUP` long.
pub(crate) fn decode_group<R: RadixDescriptor>(values: &[u8], out: &mut [u8]) -> usize {
    debug_assert!(values.len() <= R::CHUNKS_PER_GROUP);
    debug_assert!(!values.is_empty());

    let mut acc: u128 = 0;
    for &value in values {
        acc = R::Algebra::accumulate_chunk(acc, value, R::RADIX);
    }
    let missing_chunks = R::CHUNKS_PER_GROUP - values.len();
    for _ in 0..missing_chunks {
        acc = R::Algebra::accumulate_chunk(acc, 0, R::RADIX);
    }

    let byte_count = R::chunk_to_byte_count(values.len());
    for (i, slot) in out.iter_mut().enumerate().take(byte_count) {
        let shift = 8 * (R::BYTES_PER_GROUP - i - 1) as u32;
        *slot = ((acc >> shift) & 0xff) as u8;
    }
    byte_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Radix16, Radix32, Radix64, Radix80, Radix85};

    fn round_trip<R: RadixDescriptor>(bytes: &[u8]) {
        let mut chunks = [0u8; 32];
        let chunk_count = encode_group::<R>(bytes, &mut chunks);
        let mut decoded = [0u8; 32];
        let byte_count = decode_group::<R>(&chunks[..chunk_count], &mut decoded);
        assert_eq!(&decoded[..byte_count], bytes);
    }

    #[test]
    fn full_and_partial_groups_round_trip() {
        for len in 1..=Radix64::BYTES_PER_GROUP {
            let bytes: Vec<u8> = (0..len as u8).map(|i| i.wrapping_mul(37).wrapping_add(5)).collect();
            round_trip::<Radix64>(&bytes);
        }
        for len in 1..=Radix32::BYTES_PER_GROUP {
            let bytes: Vec<u8> = (0..len as u8).collect();
            round_trip::<Radix32>(&bytes);
        }
        for len in 1..=Radix16::BYTES_PER_GROUP {
            let bytes: Vec<u8> = (0..len as u8).collect();
            round_trip::<Radix16>(&bytes);
        }
        for len in 1..=Radix80::BYTES_PER_GROUP {
            let bytes: Vec<u8> = (0..len as u8).map(|i| i.wrapping_mul(53)).collect();
            round_trip::<Radix80>(&bytes);
        }
        for len in 1..=Radix85::BYTES_PER_GROUP {
            let bytes: Vec<u8> = (0..len as u8).map(|i| i.wrapping_mul(61)).collect();
            round_trip::<Radix85>(&bytes);
        }
    }

    #[test]
    fn all_bytes_survive_radix64() {
        let bytes: Vec<u8> = (0..=255u8).collect();
        for chunk in bytes.chunks(Radix64::BYTES_PER_GROUP) {
            round_trip::<Radix64>(chunk);
        }
    }

    #[test]
    fn zero_bytes_encode_to_zero_chunks() {
        let mut chunks = [0u8; 32];
        let n = encode_group::<Radix80>(&[0; 15], &mut chunks);
        assert!(chunks[..n].iter().all(|&v| v == 0));
    }
}
