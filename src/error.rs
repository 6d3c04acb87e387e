use std::{error, fmt};

/// Errors that can occur while encoding or decoding a safe-encoding sequence.
///
/// Each variant carries whatever index the caller needs to resume or
/// report a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The source data contained a character that is neither part of the
    /// radix's alphabet nor a whitespace character. The contained index is
    /// the offset of the offending byte within the slice that was passed in.
    InvalidSourceData {
        /// Offset of the first invalid byte.
        index: usize,
    },
    /// The source data ended while a length field was still being read, and
    /// the last chunk consumed had its continuation bit set.
    UnterminatedLengthField,
    /// A length-prefixed payload was shorter than the length field claimed.
    TruncatedData,
    /// A negative length was supplied where a length must be non-negative.
    InvalidLength,
    /// The destination buffer did not have enough room to hold the result.
    /// The contained index is the last source offset that was fully
    /// consumed before room ran out, so a retry with a bigger buffer can
    /// skip already-processed groups.
    NotEnoughRoom {
        /// Offset of the start of the last un-emitted group.
        last_committed_src: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CodecError::InvalidSourceData { index } => {
                write!(f, "invalid source data at byte offset {}", index)
            }
            CodecError::UnterminatedLengthField => {
                write!(f, "length field ended before its continuation bit cleared")
            }
            CodecError::TruncatedData => {
                write!(f, "decoded data is shorter than its length prefix claims")
            }
            CodecError::InvalidLength => write!(f, "length argument must not be negative"),
            CodecError::NotEnoughRoom {
                last_committed_src, ..
            } => write!(
                f,
                "destination buffer has no room left after consuming {} source bytes",
                last_committed_src
            ),
        }
    }
}

impl error::Error for CodecError {
    fn cause(&self) -> Option<&dyn error::Error> {
        None
    }
}
