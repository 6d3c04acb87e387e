//! The length-field codec (C3): a variable-width unsigned integer written
//! as a most-significant-chunk-first stream over the same alphabet as the
//! payload, one continuation bit per chunk.
//!
//! Each chunk carries `BITS_PER_LENGTH_CHUNK` payload bits in its low bits
//! plus a continuation flag one bit up; the chunk is then looked up in the
//! same `encode_table`/`decode_table` the group transform uses, since
//! `2 * 2^BITS_PER_LENGTH_CHUNK` never exceeds `RADIX` for any of the five
//! radixes.

use crate::descriptor::RadixDescriptor;
use crate::error::CodecError;
use crate::tables::{INVALID, WHITESPACE};

/// Maximum accumulator value per the read contract's overflow check: the
/// length must fit in 63 bits, leaving the top bit of a `u64` as headroom
/// against the final shift.
const MAX_ACCUMULATOR_BITS: u32 = 63;

/// Write `length`'s minimal chunk encoding to `out`, returning the number
/// of chunks written. At least one chunk is always written, even for
/// `length == 0`.
pub fn write_length_field<R: RadixDescriptor>(
    length: u64,
    out: &mut [u8],
) -> Result<usize, CodecError> {
    let bits = R::BITS_PER_LENGTH_CHUNK;
    let payload_mask: u64 = (1 << bits) - 1;
    let continuation_bit: u8 = 1 << bits;

    // Count chunks first so we know we fit before writing anything.
    let chunk_count = length_chunk_count::<R>(length);
    if out.len() < chunk_count {
        return Err(CodecError::NotEnoughRoom {
            last_committed_src: 0,
        });
    }

    let table = R::encode_table();
    for (i, slot) in out.iter_mut().enumerate().take(chunk_count) {
        let shift = bits * (chunk_count - i - 1) as u32;
        let payload = ((length >> shift) & payload_mask) as u8;
        let is_last = i + 1 == chunk_count;
        let value = payload | if is_last { 0 } else { continuation_bit };
        *slot = table[value as usize];
    }
    Ok(chunk_count)
}

/// Number of chunks `write_length_field` would emit for `length`.
pub(crate) fn length_chunk_count<R: RadixDescriptor>(length: u64) -> usize {
    let bits = R::BITS_PER_LENGTH_CHUNK as u64;
    let mut remaining = length >> bits;
    let mut count = 1usize;
    while remaining > 0 {
        remaining >>= bits;
        count += 1;
    }
    count
}

/// Read a length field from the start of `src`, skipping whitespace,
/// returning the decoded length and how many bytes of `src` were consumed.
pub fn read_length_field<R: RadixDescriptor>(src: &[u8]) -> Result<(u64, usize), CodecError> {
    let bits = R::BITS_PER_LENGTH_CHUNK;
    let continuation_bit: u8 = 1 << bits;
    let payload_mask: u8 = continuation_bit - 1;
    let decode_table = R::decode_table();

    let mut acc: u64 = 0;
    let mut consumed = 0;
    loop {
        if consumed >= src.len() {
            return Err(CodecError::UnterminatedLengthField);
        }
        let byte = src[consumed];
        consumed += 1;
        let decoded = decode_table[byte as usize];
        if decoded == WHITESPACE {
            continue;
        }
        if decoded == INVALID || decoded & !(continuation_bit | payload_mask) != 0 {
            return Err(CodecError::InvalidSourceData {
                index: consumed - 1,
            });
        }
        if acc != 0 && (u64::BITS - acc.leading_zeros()) + bits > MAX_ACCUMULATOR_BITS {
            return Err(CodecError::InvalidSourceData {
                index: consumed - 1,
            });
        }
        acc = (acc << bits) | (decoded & payload_mask) as u64;
        if decoded & continuation_bit == 0 {
            return Ok((acc, consumed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Radix16, Radix32, Radix64, Radix80, Radix85};

    fn round_trip<R: RadixDescriptor>(length: u64) {
        let mut buf = [0u8; 32];
        let written = write_length_field::<R>(length, &mut buf).unwrap();
        let (decoded, consumed) = read_length_field::<R>(&buf[..written]).unwrap();
        assert_eq!(decoded, length);
        assert_eq!(consumed, written);
    }

    #[test]
    fn zero_takes_one_chunk() {
        let mut buf = [0u8; 4];
        let written = write_length_field::<Radix64>(0, &mut buf).unwrap();
        assert_eq!(written, 1);
    }

    #[test]
    fn round_trips_across_radixes() {
        for &n in &[0u64, 1, 15, 16, 127, 128, 1_000_000, u32::MAX as u64] {
            round_trip::<Radix16>(n);
            round_trip::<Radix32>(n);
            round_trip::<Radix64>(n);
            round_trip::<Radix80>(n);
            round_trip::<Radix85>(n);
        }
    }

    #[test]
    fn unterminated_field_is_reported() {
        // A chunk with the continuation bit set and nothing following it.
        let table = Radix64::encode_table();
        let continuation_value = 1u8 << Radix64::BITS_PER_LENGTH_CHUNK;
        let buf = [table[continuation_value as usize]];
        assert_eq!(
            read_length_field::<Radix64>(&buf).unwrap_err(),
            CodecError::UnterminatedLengthField
        );
    }

    #[test]
    fn whitespace_between_chunks_is_skipped() {
        let mut buf = [0u8; 32];
        let written = write_length_field::<Radix64>(1_000_000, &mut buf).unwrap();
        let mut with_space = Vec::new();
        with_space.push(b' ');
        with_space.extend_from_slice(&buf[..written]);
        with_space.push(b' ');
        let (decoded, consumed) = read_length_field::<Radix64>(&with_space).unwrap();
        assert_eq!(decoded, 1_000_000);
        assert_eq!(consumed, written + 1);
    }
}
