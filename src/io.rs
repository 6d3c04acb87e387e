//! Utilities for encoding and decoding from `std::io::Read` and
//! `std::io::Write`.
//!
//! Both adapters are thin buffering wrappers around the feed engine
//! (`feed.rs`): [`DecodeReader`] repeatedly calls [`crate::feed::decode_feed`]
//! against an internal read buffer, stashing any bytes decoded beyond what
//! the caller's output slice can hold; [`EncodeWriter`] buffers incoming
//! octets until it has a whole group, then calls
//! [`crate::feed::encode_feed`] and writes the result straight through.
//!
//! ### Receive encoded data from stdin, decode it, and print it to stdout.
//! ```
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use safe_encoding::{Radix64, io::DecodeReader};
//! use std::io;
//!
//! let mut dst = io::stdout();
//! let mut src = DecodeReader::<Radix64, _>::new(io::stdin());
//! io::copy(&mut src, &mut dst)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Receive data from stdin, encode it, and print it to stdout.
//! ```
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use safe_encoding::{Radix64, io::EncodeWriter};
//! use std::io;
//! let mut dst = EncodeWriter::<Radix64, _>::new(io::stdout());
//! let mut src = io::stdin();
//! io::copy(&mut src, &mut dst)?;
//! dst.finish().map_err(|e| e.into_error())?;
//! # Ok(())
//! # }
//! ```

use crate::descriptor::RadixDescriptor;
use crate::error::CodecError;
use crate::feed::{self, FeedStatus, StreamFlags};
use std::fmt;
use std::io::{self, Read, Write};
use std::marker::PhantomData;

/// Largest `BYTES_PER_GROUP` across the five builtin radixes (radix 80's
/// 15), used to size the scratch buffer a decoded group lands in, and the
/// scratch buffer unencoded leftover input accumulates in.
const MAX_BYTES_PER_GROUP: usize = 15;
/// Largest `CHUNKS_PER_GROUP` across the five builtin radixes (radix 80's
/// 19), used to size the scratch buffer one encoded group's characters
/// land in.
const MAX_CHUNKS_PER_GROUP: usize = 19;
/// Size of the buffer `DecodeReader` reads raw source characters into.
const SRC_BUF_LEN: usize = 4096;
/// Size of the buffer `EncodeWriter` accumulates encoded characters in
/// before flushing to the inner writer.
const ENCODED_BUF_LEN: usize = 4096;

fn into_io_err(err: CodecError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// Decode chunk characters read from an inner [`Read`], yielding the
/// original octets.
pub struct DecodeReader<R, Rd> {
    _radix: PhantomData<R>,
    inner: Rd,
    src: [u8; SRC_BUF_LEN],
    src_pos: usize,
    src_len: usize,
    eof: bool,
    // A decoded group can be larger than the caller's output slice; the
    // excess is held here until the next `read` call drains it.
    scratch: [u8; MAX_BYTES_PER_GROUP],
    scratch_pos: usize,
    scratch_len: usize,
}

impl<R, Rd> DecodeReader<R, Rd>
where
    R: RadixDescriptor,
    Rd: Read,
{
    /// Wrap `inner`, decoding everything subsequently read from it.
    pub fn new(inner: Rd) -> Self {
        DecodeReader {
            _radix: PhantomData,
            inner,
            src: [0; SRC_BUF_LEN],
            src_pos: 0,
            src_len: 0,
            eof: false,
            scratch: [0; MAX_BYTES_PER_GROUP],
            scratch_pos: 0,
            scratch_len: 0,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        self.src.copy_within(self.src_pos..self.src_len, 0);
        self.src_len -= self.src_pos;
        self.src_pos = 0;
        let n = self.inner.read(&mut self.src[self.src_len..])?;
        if n == 0 {
            self.eof = true;
        } else {
            self.src_len += n;
        }
        Ok(())
    }

    fn drain_scratch(&mut self, output: &mut [u8]) -> usize {
        let n = std::cmp::min(self.scratch_len - self.scratch_pos, output.len());
        output[..n].copy_from_slice(&self.scratch[self.scratch_pos..self.scratch_pos + n]);
        self.scratch_pos += n;
        n
    }
}

impl<R, Rd> Read for DecodeReader<R, Rd>
where
    R: RadixDescriptor,
    Rd: Read,
{
    fn read(&mut self, output: &mut [u8]) -> io::Result<usize> {
        if self.scratch_pos < self.scratch_len {
            return Ok(self.drain_scratch(output));
        }

        loop {
            if self.src_pos == self.src_len && !self.eof {
                self.fill()?;
            }
            let flags = if self.eof {
                StreamFlags::SRC_AT_END
            } else {
                StreamFlags::NONE
            };
            let result =
                feed::decode_feed::<R>(&self.src[self.src_pos..self.src_len], &mut self.scratch, flags);
            if let FeedStatus::Error(e) = result.status {
                return Err(into_io_err(e));
            }
            self.src_pos += result.src_consumed;
            self.scratch_len = result.dst_written;
            self.scratch_pos = 0;
            if self.scratch_len > 0 || self.eof {
                return Ok(self.drain_scratch(output));
            }
            // No whole group could be committed yet and we're not at EOF:
            // read more source data before trying again.
        }
    }
}

/// Encode octets written to this, writing the resulting characters to an
/// inner [`Write`]. Buffers a partial trailing group across `write` calls;
/// call [`EncodeWriter::finish`] to flush it (padding per the group
/// transform) and recover the inner writer. Also flushed on drop, silently
/// discarding any error, the same contract `std::io::BufWriter` follows.
pub struct EncodeWriter<R, W>
where
    R: RadixDescriptor,
    W: Write,
{
    _radix: PhantomData<R>,
    inner: Option<W>,
    pending_input: [u8; MAX_BYTES_PER_GROUP],
    pending_input_len: usize,
    pending_output: [u8; ENCODED_BUF_LEN],
    pending_output_len: usize,
    panicked: bool,
}

impl<R, W> EncodeWriter<R, W>
where
    R: RadixDescriptor,
    W: Write,
{
    /// Create a new `EncodeWriter` that wraps the provided writer.
    pub fn new(inner: W) -> Self {
        EncodeWriter {
            _radix: PhantomData,
            inner: Some(inner),
            pending_input: [0; MAX_BYTES_PER_GROUP],
            pending_input_len: 0,
            pending_output: [0; ENCODED_BUF_LEN],
            pending_output_len: 0,
            panicked: false,
        }
    }

    fn write_to_inner(&mut self, range: std::ops::Range<usize>) -> io::Result<usize> {
        self.panicked = true;
        let res = self.inner.as_mut().unwrap().write(&self.pending_output[range]);
        self.panicked = false;
        res
    }

    fn flush_pending_output(&mut self) -> io::Result<()> {
        let mut written = 0;
        while written < self.pending_output_len {
            match self.write_to_inner(written..self.pending_output_len) {
                Ok(0) => return Err(io::Error::new(io::ErrorKind::WriteZero, "write returned 0")),
                Ok(n) => written += n,
                Err(err) => {
                    self.pending_output.copy_within(written..self.pending_output_len, 0);
                    self.pending_output_len -= written;
                    return Err(err);
                }
            }
        }
        self.pending_output_len = 0;
        Ok(())
    }

    fn encode_pending_input(&mut self, is_end_of_data: bool) -> io::Result<()> {
        if self.pending_input_len == 0 {
            return Ok(());
        }
        let mut chars = [0u8; MAX_CHUNKS_PER_GROUP];
        let result =
            feed::encode_feed::<R>(&self.pending_input[..self.pending_input_len], &mut chars, is_end_of_data);
        debug_assert_eq!(result.src_consumed, self.pending_input_len);
        self.pending_input_len = 0;
        self.queue_output(&chars[..result.dst_written])
    }

    fn queue_output(&mut self, chars: &[u8]) -> io::Result<()> {
        for chunk in chars.chunks(self.pending_output.len()) {
            if self.pending_output_len + chunk.len() > self.pending_output.len() {
                self.flush_pending_output()?;
            }
            self.pending_output[self.pending_output_len..self.pending_output_len + chunk.len()]
                .copy_from_slice(chunk);
            self.pending_output_len += chunk.len();
        }
        Ok(())
    }

    fn do_finish(&mut self) -> io::Result<()> {
        self.encode_pending_input(true)?;
        self.flush_pending_output()
    }

    /// Flush any buffered partial group, padding it per the group
    /// transform, and return the inner writer. On error the `EncodeWriter`
    /// is recoverable from the returned [`FinishError`].
    pub fn finish(mut self) -> Result<W, FinishError<Self>> {
        match self.do_finish() {
            Ok(()) => Ok(self.inner.take().unwrap()),
            Err(err) => Err(FinishError(self, err)),
        }
    }
}

impl<R, W> Write for EncodeWriter<R, W>
where
    R: RadixDescriptor,
    W: Write,
{
    fn write(&mut self, input: &[u8]) -> io::Result<usize> {
        let total_in = input.len();
        let mut input = input;

        if self.pending_input_len > 0 {
            let need = R::BYTES_PER_GROUP - self.pending_input_len;
            let take = std::cmp::min(need, input.len());
            self.pending_input[self.pending_input_len..self.pending_input_len + take]
                .copy_from_slice(&input[..take]);
            self.pending_input_len += take;
            input = &input[take..];
            if self.pending_input_len == R::BYTES_PER_GROUP {
                self.encode_pending_input(false)?;
            } else {
                return Ok(total_in);
            }
        }

        while input.len() >= R::BYTES_PER_GROUP {
            let mut chars = [0u8; MAX_CHUNKS_PER_GROUP];
            let result = feed::encode_feed::<R>(input, &mut chars, false);
            if result.src_consumed == 0 {
                break;
            }
            self.queue_output(&chars[..result.dst_written])?;
            input = &input[result.src_consumed..];
        }

        self.pending_input[..input.len()].copy_from_slice(input);
        self.pending_input_len = input.len();

        Ok(total_in)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_pending_output()?;
        self.inner.as_mut().unwrap().flush()
    }
}

impl<R, W> Drop for EncodeWriter<R, W>
where
    R: RadixDescriptor,
    W: Write,
{
    fn drop(&mut self) {
        if self.inner.is_some() && !self.panicked {
            let _ = self.do_finish();
        }
    }
}

impl<R, W> fmt::Debug for EncodeWriter<R, W>
where
    R: RadixDescriptor,
    W: Write,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeWriter")
            .field("pending_input_len", &self.pending_input_len)
            .field("pending_output_len", &self.pending_output_len)
            .field("panicked", &self.panicked)
            .finish()
    }
}

/// Returned from [`EncodeWriter::finish`] when the underlying writer
/// returns an error while flushing the final group. Recover the writer
/// with [`FinishError::into_encode_writer`] to retry.
#[derive(Debug)]
pub struct FinishError<T>(T, io::Error);

impl<T> FinishError<T> {
    /// The I/O error that aborted `finish`.
    pub fn error(&self) -> &io::Error {
        &self.1
    }

    /// Unwrap the I/O error, discarding the recoverable writer.
    pub fn into_error(self) -> io::Error {
        self.1
    }

    /// Recover the writer to retry `finish`.
    pub fn into_encode_writer(self) -> T {
        self.0
    }
}

impl<T: fmt::Debug> fmt::Display for FinishError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.1, f)
    }
}

impl<T: fmt::Debug> std::error::Error for FinishError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.1)
    }
}
