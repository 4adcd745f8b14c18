//! Parser snapshots for speculative parsing.
//!
//! A snapshot is the cursor position plus the context flags. Restoring one
//! rewinds the parser but deliberately leaves the furthest-failure tracker
//! alone: failures seen inside an abandoned alternative still decide where
//! the final syntax error is reported.
//!
//! Prefer plain lookahead (`peek_kind`) when one or two tokens decide the
//! production. Use `Parser::attempt` when only a full parse can tell, as with
//! `a.b[1] x;` (a declaration) versus `a.b[1] = x;` (an expression).

use crate::context::ParseContext;

#[derive(Clone, Copy, Debug)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
    pub(crate) context: ParseContext,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(cursor_pos: usize, context: ParseContext) -> Self {
        Self {
            cursor_pos,
            context,
        }
    }
}
