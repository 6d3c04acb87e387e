//! A family of safe text encodings: binary-to-text codecs designed so their
//! output survives terminals, editors, clipboards, URLs, filenames, and
//! markup without escaping.
//!
//! Five radixes are provided, each a self-contained codec sharing one
//! streaming protocol:
//!
//! | Radix | Alphabet                                    | Notes                                |
//! | ----- | -------------------------------------------- | ------------------------------------- |
//! | 16    | `0-9a-f`                                     | case-insensitive, hyphens ignored     |
//! | 32    | Crockford base32                             | visually-confusable letters aliased   |
//! | 64    | `-0-9A-Z_a-z`                                 | URL- and filename-safe                |
//! | 80    | ASCII punctuation + alphanumerics            | densest radix without escaping risk   |
//! | 85    | the radix 80 set plus five more punctuation  | densest provided                      |
//!
//! # Quick examples
//!
//! One-shot encode/decode into caller-provided buffers:
//! ```
//! use safe_encoding::{Radix64, facade};
//!
//! let mut encoded = [0u8; 8];
//! let n = facade::encode::<Radix64>(b"ab", &mut encoded).unwrap();
//! assert_eq!(&encoded[..n], b"NL7");
//!
//! let mut decoded = [0u8; 8];
//! let n = facade::decode::<Radix64>(b"NL7", &mut decoded).unwrap();
//! assert_eq!(&decoded[..n], b"ab");
//! ```
//!
//! A length-prefixed round trip, which lets a decoder detect truncated
//! input instead of silently returning a short result:
//! ```
//! use safe_encoding::{Radix32, facade};
//!
//! let mut encoded = [0u8; 16];
//! let n = facade::l_encode::<Radix32>(b"hi", &mut encoded).unwrap();
//! let mut decoded = [0u8; 8];
//! let n = facade::l_decode::<Radix32>(&encoded[..n], &mut decoded).unwrap();
//! assert_eq!(&decoded[..n], b"hi");
//! ```
//!
//! # Streaming
//!
//! [`feed::encode_feed`]/[`feed::decode_feed`] drive the codec across
//! caller-owned buffers that don't need to hold an entire message at once;
//! [`io::EncodeWriter`]/[`io::DecodeReader`] adapt those to
//! `std::io::Write`/`std::io::Read`.
//!
//! # Choosing a radix
//!
//! Five marker types implement [`RadixDescriptor`]: [`Radix16`], [`Radix32`],
//! [`Radix64`], [`Radix80`], [`Radix85`]. Every codec function in this crate
//! is generic over `R: RadixDescriptor`, so picking a radix is a type
//! parameter, not a runtime branch.
//!
//! The same operations are reachable two ways, mirroring the C reference
//! library's per-radix function prefix (`safe64_encode`, `safe80_decode`,
//! ...):
//! - as free functions in a per-radix module, e.g. [`radix64::encode`], for
//!   a call site that only ever needs one radix;
//! - as methods on the marker type itself, via [`RadixCodec`], e.g.
//!   `Radix64.encode(src, dst)`, for call sites that stay generic over `R`.

#![deny(missing_docs)]

mod descriptor;
pub mod display;
mod error;
pub mod facade;
pub mod feed;
mod group;
pub mod io;
pub mod length;
mod per_radix;
mod tables;

pub use descriptor::{GroupAlgebra, Radix16, Radix32, Radix64, Radix80, Radix85, RadixDescriptor};
pub use error::CodecError;
pub use facade::RadixCodec;
pub use feed::{FeedResult, FeedStatus, StreamFlags};
pub use per_radix::{radix16, radix32, radix64, radix80, radix85};

/// This crate's semantic version, as published to crates.io.
pub fn version() -> &'static str {
    facade::version()
}
