//! Radix descriptors: the per-radix constants and group algebra that every
//! other module is generic over.
//!
//! The five radixes differ only in a handful of constants and in whether
//! chunk accumulation is done with shifts or multiplication. Here that's one
//! sealed trait plus a two-variant algebra, so `group.rs`, `length.rs` and
//! `feed.rs` are written once and instantiated five times.

use crate::tables;

/// How a group's chunks combine into the accumulator that bytes are
/// extracted from (decoding), and how bytes combine into the accumulator
/// that chunks are extracted from (encoding).
///
/// Byte accumulation is `acc * 256 + byte` for every radix, and chunk
/// extraction from a byte-built accumulator is a plain big-endian bit-shift
/// for every radix too, since an [`IntegerMultiply`] accumulator built from
/// bytes is numerically identical to the big-endian integer the bytes spell
/// out. The two algebras only disagree on how a *chunk* is folded into an
/// accumulator being decoded, and how a chunk is pulled back out of one
/// being encoded.
pub trait GroupAlgebra {
    /// Fold one more chunk value (`< RADIX`) onto an accumulator being built
    /// up from decoded input, most-significant chunk first.
    fn accumulate_chunk(acc: u128, value: u8, radix: u128) -> u128;

    /// Pull the chunk at `index` (0 = most significant) out of an
    /// accumulator holding `chunk_count` chunks worth of value.
    fn extract_chunk(acc: u128, index: usize, chunk_count: usize, radix: u128) -> u8;
}

/// Chunk values are packed bits: extraction/accumulation with shifts and
/// masks. Used by radixes that are powers of two (16, 32, 64).
pub struct BitPacked;

impl GroupAlgebra for BitPacked {
    #[inline]
    fn accumulate_chunk(acc: u128, value: u8, radix: u128) -> u128 {
        let bits = radix.trailing_zeros();
        (acc << bits) | value as u128
    }

    #[inline]
    fn extract_chunk(acc: u128, index: usize, chunk_count: usize, radix: u128) -> u8 {
        let bits = radix.trailing_zeros();
        let shift = bits * (chunk_count - index - 1) as u32;
        ((acc >> shift) & (radix - 1)) as u8
    }
}

/// Chunk values are digits of a base-`radix` integer: extraction/
/// accumulation with multiply and divmod. Used by radixes that aren't
/// powers of two (80, 85).
pub struct IntegerMultiply;

impl GroupAlgebra for IntegerMultiply {
    #[inline]
    fn accumulate_chunk(acc: u128, value: u8, radix: u128) -> u128 {
        acc * radix + value as u128
    }

    #[inline]
    fn extract_chunk(acc: u128, index: usize, chunk_count: usize, radix: u128) -> u8 {
        let place = radix.pow((chunk_count - index - 1) as u32);
        ((acc / place) % radix) as u8
    }
}

/// The constants and tables that fully describe one radix.
///
/// Sealed: the five marker types in this module are the only
/// implementations, so `group.rs`/`length.rs`/`feed.rs` can rely on every
/// `R: RadixDescriptor` being one of the five supported radixes.
pub trait RadixDescriptor: sealed::Sealed + Copy + Clone + std::fmt::Debug {
    /// The size of this radix's alphabet, and the base its length field and
    /// group transform operate in.
    const RADIX: u128;
    /// How many whole bytes fit in one maximal group.
    const BYTES_PER_GROUP: usize;
    /// How many chunks a maximal group encodes to.
    const CHUNKS_PER_GROUP: usize;
    /// Data bits carried by one length-field chunk. A length chunk's value
    /// occupies the bottom `BITS_PER_LENGTH_CHUNK` bits of its encoded
    /// chunk value, with the next bit up used as the continuation flag, so
    /// the chunk value space `2^(BITS_PER_LENGTH_CHUNK + 1)` always fits
    /// under `RADIX` even for the two radixes that aren't powers of two:
    /// it's one less than the bit-width of the largest power of two that
    /// fits in `RADIX`.
    const BITS_PER_LENGTH_CHUNK: u32;

    /// The group transform algebra this radix uses.
    type Algebra: GroupAlgebra;

    /// Number of whole bytes produced by decoding `chunks` trailing chunks
    /// of a partial (non-maximal) group. Indexed `0..=CHUNKS_PER_GROUP`.
    fn chunk_to_byte_count(chunks: usize) -> usize;
    /// Number of chunks produced by encoding `bytes` trailing bytes of a
    /// partial (non-maximal) group. Indexed `0..=BYTES_PER_GROUP`.
    fn byte_to_chunk_count(bytes: usize) -> usize;

    /// Encode table: `RADIX` printable ASCII bytes, value-indexed.
    fn encode_table() -> &'static [u8];
    /// Decode table: 256 entries, byte-indexed, values in `[0, RADIX)` or
    /// one of [`tables::INVALID`] / [`tables::WHITESPACE`].
    fn decode_table() -> &'static [u8; 256];
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! define_radix {
    (
        $name:ident,
        radix = $radix:expr,
        bytes_per_group = $bpg:expr,
        chunks_per_group = $cpg:expr,
        bits_per_length_chunk = $bplc:expr,
        algebra = $algebra:ty,
        chunk_to_byte_count = $c2b:expr,
        byte_to_chunk_count = $b2c:expr,
        encode_table = $enc:expr,
        decode_table = $dec:expr,
    ) => {
        #[doc = concat!("Marker type for the base-", stringify!($radix), " radix.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl RadixDescriptor for $name {
            const RADIX: u128 = $radix;
            const BYTES_PER_GROUP: usize = $bpg;
            const CHUNKS_PER_GROUP: usize = $cpg;
            const BITS_PER_LENGTH_CHUNK: u32 = $bplc;

            type Algebra = $algebra;

            #[inline]
            fn chunk_to_byte_count(chunks: usize) -> usize {
                const TABLE: &[usize] = &$c2b;
                TABLE[chunks]
            }

            #[inline]
            fn byte_to_chunk_count(bytes: usize) -> usize {
                const TABLE: &[usize] = &$b2c;
                TABLE[bytes]
            }

            #[inline]
            fn encode_table() -> &'static [u8] {
                $enc
            }

            #[inline]
            fn decode_table() -> &'static [u8; 256] {
                &$dec
            }
        }
    };
}

define_radix!(
    Radix16,
    radix = 16,
    bytes_per_group = 1,
    chunks_per_group = 2,
    bits_per_length_chunk = 3,
    algebra = BitPacked,
    chunk_to_byte_count = [0, 0, 1],
    byte_to_chunk_count = [0, 2],
    encode_table = tables::RADIX16_ENCODE,
    decode_table = tables::RADIX16_DECODE,
);

define_radix!(
    Radix32,
    radix = 32,
    bytes_per_group = 5,
    chunks_per_group = 8,
    bits_per_length_chunk = 4,
    algebra = BitPacked,
    chunk_to_byte_count = [0, 0, 1, 1, 2, 3, 3, 4, 5],
    byte_to_chunk_count = [0, 2, 4, 5, 7, 8],
    encode_table = tables::RADIX32_ENCODE,
    decode_table = tables::RADIX32_DECODE,
);

define_radix!(
    Radix64,
    radix = 64,
    bytes_per_group = 3,
    chunks_per_group = 4,
    bits_per_length_chunk = 5,
    algebra = BitPacked,
    chunk_to_byte_count = [0, 0, 1, 2, 3],
    byte_to_chunk_count = [0, 2, 3, 4],
    encode_table = tables::RADIX64_ENCODE,
    decode_table = tables::RADIX64_DECODE,
);

define_radix!(
    Radix80,
    radix = 80,
    bytes_per_group = 15,
    chunks_per_group = 19,
    bits_per_length_chunk = 5,
    algebra = IntegerMultiply,
    chunk_to_byte_count = [
        0, 0, 1, 2, 3, 3, 4, 5, 6, 7, 7, 8, 9, 10, 11, 11, 12, 13, 14, 15
    ],
    byte_to_chunk_count = [0, 2, 3, 4, 6, 7, 8, 9, 11, 12, 13, 14, 16, 17, 18, 19],
    encode_table = tables::RADIX80_ENCODE,
    decode_table = tables::RADIX80_DECODE,
);

define_radix!(
    Radix85,
    radix = 85,
    bytes_per_group = 4,
    chunks_per_group = 5,
    bits_per_length_chunk = 5,
    algebra = IntegerMultiply,
    // The classic Ascii85 grouping: 85^5 is the smallest power of 85 that
    // exceeds 256^4, so 4 bytes pack into 5 chunks with a little room to
    // spare, same margin the other four radixes keep.
    chunk_to_byte_count = [0, 0, 1, 2, 3, 4],
    byte_to_chunk_count = [0, 2, 3, 4, 5],
    encode_table = tables::RADIX85_ENCODE,
    decode_table = tables::RADIX85_DECODE,
);
