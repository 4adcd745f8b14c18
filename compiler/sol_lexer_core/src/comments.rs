//! Comment-only scan.

use crate::{block_comment_end, line_comment_end, string_end, SourceBuffer};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawCommentKind {
    Line,
    Block,
}

/// A comment's kind and byte range, delimiters included.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawComment {
    pub kind: RawCommentKind,
    pub start: u32,
    pub end: u32,
}

/// Every comment in `buf`, in source order.
///
/// Jumps between `/`, `"` and `'` bytes with memchr. Strings are skipped
/// with the same boundary rule the lexer uses: an unterminated quote skips
/// only the quote itself. An unterminated `/*` swallows the rest of the input
/// and yields no comment.
#[expect(
    clippy::cast_possible_truncation,
    reason = "comment and string lengths are bounded by source_len, a u32"
)]
pub fn scan_comments(buf: &SourceBuffer) -> Vec<RawComment> {
    let mut comments = Vec::new();
    let mut cursor = buf.cursor();

    loop {
        match cursor.skip_to_comment_or_quote() {
            0 => break,
            b'/' => {
                let start = cursor.pos();
                match cursor.peek() {
                    b'/' => {
                        cursor.advance_n(2);
                        cursor.advance_n(line_comment_end(cursor.rest()) as u32);
                        comments.push(RawComment {
                            kind: RawCommentKind::Line,
                            start,
                            end: cursor.pos(),
                        });
                    }
                    b'*' => {
                        cursor.advance_n(2);
                        let Some(len) = block_comment_end(cursor.rest()) else {
                            cursor.eat_to_eof();
                            break;
                        };
                        cursor.advance_n(len as u32);
                        comments.push(RawComment {
                            kind: RawCommentKind::Block,
                            start,
                            end: cursor.pos(),
                        });
                    }
                    _ => cursor.advance(),
                }
            }
            quote => {
                cursor.advance();
                if let Some(len) = string_end(cursor.rest(), quote) {
                    cursor.advance_n(len as u32);
                }
            }
        }
    }

    comments
}
