//! Low-level scanning shared by the lexer and the standalone comment
//! extractor.
//!
//! Two layers:
//!
//! - Boundary functions ([`string_end`], [`line_comment_end`],
//!   [`block_comment_end`]) that decide where a string literal or comment
//!   ends, given the bytes after its opening delimiter. The logos lexer in
//!   `sol_lexer` calls these from its callbacks, so both scanners agree on
//!   every boundary by construction.
//! - [`scan_comments`], a memchr-driven pass over a [`SourceBuffer`] that
//!   yields only comments, skipping string literals so that `"//"` is never
//!   mistaken for one.

mod comments;
mod cursor;
mod source_buffer;

pub use comments::{scan_comments, RawComment, RawCommentKind};
pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;

/// Length of a string literal body, closing quote included.
///
/// `rest` starts just after the opening `quote`. A backslash escapes the
/// following byte (so `\"` and a backslash-newline continuation do not end
/// the literal). Returns `None` if a raw `\n`, `\r` or the end of input is
/// reached first.
pub fn string_end(rest: &[u8], quote: u8) -> Option<usize> {
    let mut pos = 0;
    loop {
        let off = memchr::memchr3(quote, b'\\', b'\n', &rest[pos..]);
        let cr = memchr::memchr(b'\r', &rest[pos..]);
        let off = match (off, cr) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => return None,
        };
        pos += off;
        match rest[pos] {
            b'\\' => {
                if pos + 1 >= rest.len() {
                    return None;
                }
                pos += 2;
            }
            b'\n' | b'\r' => return None,
            _ => return Some(pos + 1),
        }
    }
}

/// Length of a line comment body. `rest` starts just after `//`; the
/// comment stops before the next `\n` or `\r`.
pub fn line_comment_end(rest: &[u8]) -> usize {
    memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len())
}

/// Length of a block comment body, closing `*/` included. `rest` starts
/// just after `/*`. Returns `None` when the comment is never closed.
pub fn block_comment_end(rest: &[u8]) -> Option<usize> {
    memchr::memmem::find(rest, b"*/").map(|i| i + 2)
}
