//! A zero-allocation `fmt::Display` wrapper for encoding a byte slice
//! directly into a formatter, without an intermediate `String`.

use crate::descriptor::RadixDescriptor;
use crate::feed;
use std::fmt;
use std::marker::PhantomData;

/// Largest `CHUNKS_PER_GROUP` across the five builtin radixes, used to size
/// the on-stack encode buffer this writes through in a loop.
const CHUNK_BUF_LEN: usize = 1024;

/// Wraps a byte slice, providing a `Display` impl that encodes it on the
/// fly as `R`.
pub struct Display<'a, R> {
    _radix: PhantomData<R>,
    data: &'a [u8],
}

impl<'a, R> Display<'a, R>
where
    R: RadixDescriptor,
{
    /// Wrap `data`, to be encoded as `R` when formatted.
    pub fn new<T>(data: &'a T) -> Self
    where
        T: AsRef<[u8]> + ?Sized,
    {
        Display {
            _radix: PhantomData,
            data: data.as_ref(),
        }
    }
}

impl<'a, R> fmt::Display for Display<'a, R>
where
    R: RadixDescriptor,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = [0u8; CHUNK_BUF_LEN];
        let mut input = self.data;
        while !input.is_empty() {
            let result = feed::encode_feed::<R>(input, &mut buffer, true);
            input = &input[result.src_consumed..];
            // The encode tables only ever emit printable ASCII, so the
            // written prefix is always valid UTF-8.
            let output_str = unsafe { std::str::from_utf8_unchecked(&buffer[..result.dst_written]) };
            f.write_str(output_str)?;
            if result.src_consumed == 0 {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Radix16, Radix64};

    #[test]
    fn displays_encoded_bytes() {
        let data = [0xffu8, 0x71, 0xdd];
        assert_eq!(Display::<Radix16>::new(&data).to_string(), "ff71dd");
    }

    #[test]
    fn displays_empty_slice_as_empty_string() {
        let data: [u8; 0] = [];
        assert_eq!(Display::<Radix64>::new(&data).to_string(), "");
    }
}
