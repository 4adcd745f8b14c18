//! Source bytes with a zero sentinel.
//!
//! A `0x00` always follows the last source byte and the allocation is
//! rounded up to a whole cache line. Scanning loops stop on the sentinel;
//! [`Cursor`] lookahead is bounds-checked and reads `0` past the buffer.

use crate::Cursor;

const ALIGN: usize = 64;

#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `source ++ [0] ++ zero padding`
    bytes: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    /// Oversized inputs saturate `len`; the parser facade rejects them
    /// before any scan.
    pub fn new(source: &str) -> Self {
        let len = source.len();
        let mut bytes = source.as_bytes().to_vec();
        bytes.resize((len + 1).next_multiple_of(ALIGN), 0);
        SourceBuffer {
            bytes,
            len: u32::try_from(len).unwrap_or(u32::MAX),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }
}
