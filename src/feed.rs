//! The streaming feed engine (C4): resumable encode/decode over caller-owned
//! buffer slices.
//!
//! A pointer-pair, mutate-by-reference cursor API could resume mid-group
//! using state kept in the caller's variables across calls. A slice-based
//! API can't borrow across calls that way, so here a call either commits a
//! whole group or none of it: on suspension the returned `src_consumed`
//! rewinds to the start of the first un-emitted group, and the caller
//! simply re-feeds that group's bytes again (now with more destination
//! room, or more source data appended).

use crate::descriptor::RadixDescriptor;
use crate::error::CodecError;
use crate::group;
use crate::tables::{INVALID, WHITESPACE};

/// Largest `CHUNKS_PER_GROUP` across the five supported radixes (radix 80's
/// 19), used to size a stack buffer for in-progress chunk values.
const MAX_CHUNKS_PER_GROUP: usize = 19;

/// Negotiation flags passed to [`decode_feed`], controlling which side of
/// the stream (source or destination) is treated as authoritative when it
/// runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamFlags(u8);

impl StreamFlags {
    /// No promises made about either endpoint.
    pub const NONE: StreamFlags = StreamFlags(0);
    /// The destination is the authoritative terminator: reaching its end
    /// should be treated as success, and running out of source first is a
    /// truncation. Used by the length-prefixed decode variant.
    pub const EXPECT_DST_TO_END: StreamFlags = StreamFlags(1);
    /// No more source bytes/characters will arrive after this call.
    pub const SRC_AT_END: StreamFlags = StreamFlags(2);
    /// No more destination capacity will be provided after this call.
    pub const DST_AT_END: StreamFlags = StreamFlags(4);

    #[inline]
    const fn contains(self, other: StreamFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for StreamFlags {
    type Output = StreamFlags;

    #[inline]
    fn bitor(self, rhs: StreamFlags) -> StreamFlags {
        StreamFlags(self.0 | rhs.0)
    }
}

/// Outcome of a feed call. Unlike the one-shot façade, a feed call never
/// panics or returns a bare `Result`: success and failure share one
/// enumeration, and the caller's outer loop is expected to branch on all
/// of them uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// All available input was consumed per the call's end-of-stream flags.
    Ok,
    /// A whole group could not be emitted or accumulated because a buffer
    /// ran out; resume with `src_consumed`/`dst_written`.
    PartiallyComplete,
    /// A hard error; see [`CodecError`].
    Error(CodecError),
}

/// Result of a feed call: how the call ended, and how far each cursor
/// advanced. `dst_written` and `src_consumed` are meaningful even when
/// `status` is [`FeedStatus::Error`], since a group may have been emitted
/// before the error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedResult {
    pub status: FeedStatus,
    pub src_consumed: usize,
    pub dst_written: usize,
}

/// Encode as much of `src` into `dst` as fits in whole groups, padding and
/// flushing a final partial group if `is_end_of_data` is set.
pub fn encode_feed<R: RadixDescriptor>(
    src: &[u8],
    dst: &mut [u8],
    is_end_of_data: bool,
) -> FeedResult {
    let mut src_pos = 0;
    let mut dst_pos = 0;
    let encode_table = R::encode_table();

    while src.len() - src_pos >= R::BYTES_PER_GROUP {
        if dst.len() - dst_pos < R::CHUNKS_PER_GROUP {
            return FeedResult {
                status: FeedStatus::PartiallyComplete,
                src_consumed: src_pos,
                dst_written: dst_pos,
            };
        }
        let group = &src[src_pos..src_pos + R::BYTES_PER_GROUP];
        let n = group::encode_group::<R>(group, &mut dst[dst_pos..]);
        map_chunks_to_chars(&mut dst[dst_pos..dst_pos + n], encode_table);
        dst_pos += n;
        src_pos += R::BYTES_PER_GROUP;
    }

    let remaining = src.len() - src_pos;
    if remaining > 0 {
        if !is_end_of_data {
            return FeedResult {
                status: FeedStatus::Ok,
                src_consumed: src_pos,
                dst_written: dst_pos,
            };
        }
        let chunk_count = R::byte_to_chunk_count(remaining);
        if dst.len() - dst_pos < chunk_count {
            return FeedResult {
                status: FeedStatus::PartiallyComplete,
                src_consumed: src_pos,
                dst_written: dst_pos,
            };
        }
        let n = group::encode_group::<R>(&src[src_pos..], &mut dst[dst_pos..]);
        map_chunks_to_chars(&mut dst[dst_pos..dst_pos + n], encode_table);
        dst_pos += n;
        src_pos = src.len();
    }

    FeedResult {
        status: FeedStatus::Ok,
        src_consumed: src_pos,
        dst_written: dst_pos,
    }
}

#[inline]
fn map_chunks_to_chars(values: &mut [u8], encode_table: &[u8]) {
    for slot in values {
        *slot = encode_table[*slot as usize];
    }
}

/// Decode as much of `src` into `dst` as fits, honouring whitespace,
/// substitution (already folded into `R::decode_table()`), and the
/// end-of-stream negotiation described by `flags`.
pub fn decode_feed<R: RadixDescriptor>(
    src: &[u8],
    dst: &mut [u8],
    flags: StreamFlags,
) -> FeedResult {
    let decode_table = R::decode_table();
    let mut values = [0u8; MAX_CHUNKS_PER_GROUP];
    let mut count = 0usize;
    let mut src_pos = 0usize;
    let mut dst_pos = 0usize;
    let mut last_committed_src = 0usize;

    while src_pos < src.len() {
        let decoded = decode_table[src[src_pos] as usize];
        if decoded == WHITESPACE {
            src_pos += 1;
            if count == 0 {
                last_committed_src = src_pos;
            }
            continue;
        }
        if decoded == INVALID {
            return FeedResult {
                status: FeedStatus::Error(CodecError::InvalidSourceData { index: src_pos }),
                src_consumed: src_pos,
                dst_written: dst_pos,
            };
        }

        values[count] = decoded;
        count += 1;
        src_pos += 1;

        let tentative_bytes = R::chunk_to_byte_count(count);
        if dst.len() - dst_pos < tentative_bytes {
            // Backpressure: this chunk pushed the pending group past what
            // dst can hold. Break instead of returning immediately so the
            // end-of-stream negotiation below decides the outcome — a
            // caller that declared `DST_AT_END` gets a terminal
            // `NotEnoughRoom` here instead of an always-resumable status.
            break;
        }

        if count == R::CHUNKS_PER_GROUP {
            let n = group::decode_group::<R>(&values[..count], &mut dst[dst_pos..]);
            dst_pos += n;
            count = 0;
            last_committed_src = src_pos;
        }
    }

    let src_at_end = flags.contains(StreamFlags::SRC_AT_END) && src_pos >= src.len();
    let tail_bytes = R::chunk_to_byte_count(count);
    let dst_at_end = flags.contains(StreamFlags::DST_AT_END) && dst_pos + tail_bytes >= dst.len();

    if count > 0 && (src_at_end || dst_at_end) && dst.len() - dst_pos >= tail_bytes {
        let n = group::decode_group::<R>(&values[..count], &mut dst[dst_pos..]);
        dst_pos += n;
        last_committed_src = src_pos;
        count = 0;
    }

    let status = match (flags.contains(StreamFlags::EXPECT_DST_TO_END), src_at_end, dst_at_end) {
        (false, true, _) => FeedStatus::Ok,
        (false, false, true) => FeedStatus::Error(CodecError::NotEnoughRoom { last_committed_src }),
        (true, _, true) => FeedStatus::Ok,
        (true, true, false) => FeedStatus::Error(CodecError::TruncatedData),
        (_, false, false) => FeedStatus::PartiallyComplete,
    };

    FeedResult {
        status,
        src_consumed: last_committed_src,
        dst_written: dst_pos,
    }
}
