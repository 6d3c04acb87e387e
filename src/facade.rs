//! The one-shot façade (C5): convenience operations that drive the feed
//! engine exactly once with both endpoints marked terminal, plus the
//! length-prefixed `l_encode`/`l_decode` variants that compose the
//! length-field codec (C3) with the payload feed (C4).

use crate::descriptor::RadixDescriptor;
use crate::error::CodecError;
use crate::feed::{self, FeedStatus, StreamFlags};
use crate::length;

/// The crate's semantic version, as published to crates.io.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The method-call form of this module's free functions, implemented for
/// every [`RadixDescriptor`] marker type: `Radix64.encode(src, dst)` reads
/// the same as `facade::encode::<Radix64>(src, dst)`, the way the teacher's
/// `Config::encode` lets a caller write `Std.encode(&data)`. There's nothing
/// to implement per radix — every method just forwards to this module's
/// free function of the same name, so a single blanket `impl` covers all
/// five marker types.
pub trait RadixCodec: RadixDescriptor {
    /// See [`version`].
    fn version(self) -> &'static str {
        version()
    }

    /// See [`get_decoded_length`].
    fn get_decoded_length(self, encoded_len: i64) -> Result<i64, CodecError> {
        get_decoded_length::<Self>(encoded_len)
    }

    /// See [`get_encoded_length`].
    fn get_encoded_length(self, decoded_len: i64, include_length_field: bool) -> Result<i64, CodecError> {
        get_encoded_length::<Self>(decoded_len, include_length_field)
    }

    /// See [`encode`].
    fn encode(self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        encode::<Self>(src, dst)
    }

    /// See [`decode`].
    fn decode(self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        decode::<Self>(src, dst)
    }

    /// See [`l_encode`].
    fn l_encode(self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        l_encode::<Self>(src, dst)
    }

    /// See [`l_decode`].
    fn l_decode(self, src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
        l_decode::<Self>(src, dst)
    }

    /// See [`crate::length::write_length_field`].
    fn write_length_field(self, length: u64, dst: &mut [u8]) -> Result<usize, CodecError> {
        length::write_length_field::<Self>(length, dst)
    }

    /// See [`crate::length::read_length_field`].
    fn read_length_field(self, src: &[u8]) -> Result<(u64, usize), CodecError> {
        length::read_length_field::<Self>(src)
    }

    /// See [`encode_to_string`].
    #[cfg(feature = "std")]
    fn encode_to_string(self, src: &[u8]) -> String {
        encode_to_string::<Self>(src)
    }

    /// See [`decode_to_vec`].
    #[cfg(feature = "std")]
    fn decode_to_vec(self, src: &[u8]) -> Result<Vec<u8>, CodecError> {
        decode_to_vec::<Self>(src)
    }

    /// See [`l_encode_to_string`].
    #[cfg(feature = "std")]
    fn l_encode_to_string(self, src: &[u8]) -> String {
        l_encode_to_string::<Self>(src)
    }

    /// See [`l_decode_to_vec`].
    #[cfg(feature = "std")]
    fn l_decode_to_vec(self, src: &[u8]) -> Result<Vec<u8>, CodecError> {
        l_decode_to_vec::<Self>(src)
    }
}

impl<R: RadixDescriptor> RadixCodec for R {}

/// Upper bound on the number of octets `decode` would produce from
/// `encoded_len` encoded chunks. Whitespace in the actual input can only
/// shrink the real output, never grow it, so this is exact only when the
/// input contains no whitespace.
pub fn get_decoded_length<R: RadixDescriptor>(encoded_len: i64) -> Result<i64, CodecError> {
    if encoded_len < 0 {
        return Err(CodecError::InvalidLength);
    }
    let encoded_len = encoded_len as u64 as usize;
    let full_groups = encoded_len / R::CHUNKS_PER_GROUP;
    let tail_chunks = encoded_len % R::CHUNKS_PER_GROUP;
    let len = full_groups * R::BYTES_PER_GROUP + R::chunk_to_byte_count(tail_chunks);
    Ok(len as i64)
}

/// Exact number of encoded chunks `encode` would produce from `decoded_len`
/// octets, optionally including a length-field prefix.
pub fn get_encoded_length<R: RadixDescriptor>(
    decoded_len: i64,
    include_length_field: bool,
) -> Result<i64, CodecError> {
    if decoded_len < 0 {
        return Err(CodecError::InvalidLength);
    }
    let decoded_len = decoded_len as u64 as usize;
    let full_groups = decoded_len / R::BYTES_PER_GROUP;
    let tail_bytes = decoded_len % R::BYTES_PER_GROUP;
    let mut len = full_groups * R::CHUNKS_PER_GROUP + R::byte_to_chunk_count(tail_bytes);
    if include_length_field {
        len += length::length_chunk_count::<R>(decoded_len as u64);
    }
    Ok(len as i64)
}

/// Encode all of `src` into `dst`, returning the number of chunks written.
pub fn encode<R: RadixDescriptor>(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
    let result = feed::encode_feed::<R>(src, dst, true);
    match result.status {
        FeedStatus::Ok => Ok(result.dst_written),
        FeedStatus::PartiallyComplete => Err(CodecError::NotEnoughRoom {
            last_committed_src: result.src_consumed,
        }),
        FeedStatus::Error(e) => Err(e),
    }
}

/// Decode all of `src` into `dst`, returning the number of octets written.
pub fn decode<R: RadixDescriptor>(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
    let flags = StreamFlags::SRC_AT_END | StreamFlags::DST_AT_END;
    let result = feed::decode_feed::<R>(src, dst, flags);
    match result.status {
        FeedStatus::Ok => Ok(result.dst_written),
        FeedStatus::PartiallyComplete => Err(CodecError::NotEnoughRoom {
            last_committed_src: result.src_consumed,
        }),
        FeedStatus::Error(e) => Err(e),
    }
}

/// Encode all of `src`, allocating a freshly sized `String` for the result.
///
/// This is the allocating entry point most callers reach for first;
/// [`encode`] is the `no_std`-compatible slice form this is built on.
#[cfg(feature = "std")]
pub fn encode_to_string<R: RadixDescriptor>(src: &[u8]) -> String {
    let mut dst = vec![0u8; get_encoded_length::<R>(src.len() as i64, false).unwrap() as usize];
    let n = encode::<R>(src, &mut dst).expect("buffer sized by get_encoded_length");
    dst.truncate(n);
    // encode_table only ever emits printable ASCII.
    String::from_utf8(dst).expect("encode table is ASCII")
}

/// Decode all of `src`, allocating a `Vec<u8>` sized from the upper bound
/// in [`get_decoded_length`].
#[cfg(feature = "std")]
pub fn decode_to_vec<R: RadixDescriptor>(src: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut dst = vec![0u8; get_decoded_length::<R>(src.len() as i64).unwrap() as usize];
    let n = decode::<R>(src, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}

/// Length-prefixed encode of all of `src`, allocating the result.
#[cfg(feature = "std")]
pub fn l_encode_to_string<R: RadixDescriptor>(src: &[u8]) -> String {
    let mut dst =
        vec![0u8; get_encoded_length::<R>(src.len() as i64, true).unwrap() as usize];
    let n = l_encode::<R>(src, &mut dst).expect("buffer sized by get_encoded_length");
    dst.truncate(n);
    String::from_utf8(dst).expect("encode table is ASCII")
}

/// Length-prefixed decode of all of `src`, allocating the result from the
/// length the prefix declares rather than a conservative upper bound.
#[cfg(feature = "std")]
pub fn l_decode_to_vec<R: RadixDescriptor>(src: &[u8]) -> Result<Vec<u8>, CodecError> {
    let (specified_length, _) = length::read_length_field::<R>(src)?;
    let mut dst = vec![0u8; specified_length as usize];
    let n = l_decode::<R>(src, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}

/// Write a length field for `src.len()` octets, then encode `src`, into the
/// head of `dst`. Returns the total number of chunks written.
pub fn l_encode<R: RadixDescriptor>(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
    let length_chunks = length::write_length_field::<R>(src.len() as u64, dst)?;
    let payload_written = encode::<R>(src, &mut dst[length_chunks..])?;
    Ok(length_chunks + payload_written)
}

/// Read a length field from the head of `src`, then decode exactly that
/// many octets into `dst`. Fails with [`CodecError::TruncatedData`] if
/// fewer octets were available than the length field declared.
pub fn l_decode<R: RadixDescriptor>(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
    let (specified_length, length_field_size) = length::read_length_field::<R>(src)?;
    let specified_length = specified_length as usize;
    if dst.len() < specified_length {
        return Err(CodecError::NotEnoughRoom {
            last_committed_src: length_field_size,
        });
    }
    let flags = StreamFlags::SRC_AT_END | StreamFlags::DST_AT_END | StreamFlags::EXPECT_DST_TO_END;
    let result = feed::decode_feed::<R>(
        &src[length_field_size..],
        &mut dst[..specified_length],
        flags,
    );
    match result.status {
        FeedStatus::Ok if result.dst_written == specified_length => Ok(result.dst_written),
        FeedStatus::Ok => Err(CodecError::TruncatedData),
        FeedStatus::PartiallyComplete => Err(CodecError::NotEnoughRoom {
            last_committed_src: length_field_size + result.src_consumed,
        }),
        FeedStatus::Error(e) => Err(e),
    }
}
