//! Per-radix free-function modules, one per supported radix.
//!
//! This mirrors the C reference library's per-radix function prefix
//! (`safe64_encode`, `safe80_decode`, ...) as a second, non-generic entry
//! point alongside the generic [`crate::facade`]/[`crate::RadixCodec`]
//! surface: a caller who only ever needs one radix can write
//! `safe_encoding::radix64::encode(...)` instead of
//! `facade::encode::<Radix64>(...)`. Every function here is a thin
//! monomorphizing wrapper around the corresponding generic one; the radix
//! descriptor and group/length/feed logic live exactly once, in
//! `descriptor.rs`/`group.rs`/`length.rs`/`feed.rs`.

use crate::facade;
use crate::length;
use crate::{CodecError, FeedResult, StreamFlags};

macro_rules! define_radix_module {
    ($module:ident, $radix:ty, $doc:expr) => {
        #[doc = $doc]
        pub mod $module {
            use super::*;

            /// This crate's semantic version, as published to crates.io.
            pub fn version() -> &'static str {
                facade::version()
            }

            /// See [`facade::get_decoded_length`].
            pub fn get_decoded_length(encoded_len: i64) -> Result<i64, CodecError> {
                facade::get_decoded_length::<$radix>(encoded_len)
            }

            /// See [`facade::get_encoded_length`].
            pub fn get_encoded_length(
                decoded_len: i64,
                include_length_field: bool,
            ) -> Result<i64, CodecError> {
                facade::get_encoded_length::<$radix>(decoded_len, include_length_field)
            }

            /// See [`facade::encode`].
            pub fn encode(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
                facade::encode::<$radix>(src, dst)
            }

            /// See [`facade::decode`].
            pub fn decode(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
                facade::decode::<$radix>(src, dst)
            }

            /// See [`facade::l_encode`].
            pub fn l_encode(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
                facade::l_encode::<$radix>(src, dst)
            }

            /// See [`facade::l_decode`].
            pub fn l_decode(src: &[u8], dst: &mut [u8]) -> Result<usize, CodecError> {
                facade::l_decode::<$radix>(src, dst)
            }

            /// See [`crate::feed::encode_feed`].
            pub fn encode_feed(src: &[u8], dst: &mut [u8], is_end_of_data: bool) -> FeedResult {
                crate::feed::encode_feed::<$radix>(src, dst, is_end_of_data)
            }

            /// See [`crate::feed::decode_feed`].
            pub fn decode_feed(src: &[u8], dst: &mut [u8], flags: StreamFlags) -> FeedResult {
                crate::feed::decode_feed::<$radix>(src, dst, flags)
            }

            /// See [`crate::length::write_length_field`].
            pub fn write_length_field(length: u64, dst: &mut [u8]) -> Result<usize, CodecError> {
                length::write_length_field::<$radix>(length, dst)
            }

            /// See [`crate::length::read_length_field`].
            pub fn read_length_field(src: &[u8]) -> Result<(u64, usize), CodecError> {
                length::read_length_field::<$radix>(src)
            }

            /// See [`facade::encode_to_string`].
            #[cfg(feature = "std")]
            pub fn encode_to_string(src: &[u8]) -> String {
                facade::encode_to_string::<$radix>(src)
            }

            /// See [`facade::decode_to_vec`].
            #[cfg(feature = "std")]
            pub fn decode_to_vec(src: &[u8]) -> Result<Vec<u8>, CodecError> {
                facade::decode_to_vec::<$radix>(src)
            }

            /// See [`facade::l_encode_to_string`].
            #[cfg(feature = "std")]
            pub fn l_encode_to_string(src: &[u8]) -> String {
                facade::l_encode_to_string::<$radix>(src)
            }

            /// See [`facade::l_decode_to_vec`].
            #[cfg(feature = "std")]
            pub fn l_decode_to_vec(src: &[u8]) -> Result<Vec<u8>, CodecError> {
                facade::l_decode_to_vec::<$radix>(src)
            }
        }
    };
}

define_radix_module!(
    radix16,
    crate::Radix16,
    "Free-function surface for the base-16 radix."
);
define_radix_module!(
    radix32,
    crate::Radix32,
    "Free-function surface for the base-32 (Crockford-style) radix."
);
define_radix_module!(
    radix64,
    crate::Radix64,
    "Free-function surface for the base-64 radix."
);
define_radix_module!(
    radix80,
    crate::Radix80,
    "Free-function surface for the base-80 radix."
);
define_radix_module!(
    radix85,
    crate::Radix85,
    "Free-function surface for the base-85 radix."
);
