//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! EOF is `pos >= source_len`. Lookahead goes through a checked read that
//! yields `0` past the end of the buffer, so it agrees with the zero sentinel
//! and never panics, whatever the padding.

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!((source_len as usize) < buf.len(), "sentinel must be in bounds");
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// `0` for any position past the buffer.
    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    /// Byte at the cursor, `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Unscanned source bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let end = self.source_len as usize;
        self.buf.get(self.pos as usize..end).unwrap_or(&[])
    }

    /// Jump to the end of the source.
    #[inline]
    pub fn eat_to_eof(&mut self) {
        self.pos = self.pos.max(self.source_len);
    }

    /// Advance to the next byte that can start a comment or string: `/`,
    /// `"` or `'`. Returns that byte, or `0` at EOF.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len, a u32"
    )]
    pub fn skip_to_comment_or_quote(&mut self) -> u8 {
        match memchr::memchr3(b'/', b'"', b'\'', self.rest()) {
            Some(off) => {
                self.pos += off as u32;
                self.current()
            }
            None => {
                self.eat_to_eof();
                0
            }
        }
    }
}
