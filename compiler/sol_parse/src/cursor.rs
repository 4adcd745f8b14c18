//! Token cursor for navigating the token stream.
//!
//! Pure navigation: nothing here records expectations. The `Parser` wraps
//! `check`/`expect` so that every terminal it tries is fed to the furthest
//! failure tracker.

use sol_ir::{Span, Token, TokenKind, TokenList};

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `tokens`, which must end in `Eof`.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current token index.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Jump to a token index previously obtained from [`Self::position`].
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len().max(1),
            "cursor position {pos} out of bounds"
        );
        self.pos = pos;
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.tokens.kind(self.pos)
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens.span(self.pos)
    }

    /// Source text of the current token.
    pub fn current_text(&self) -> &'a str {
        self.current_span().slice(self.source)
    }

    /// Span of the last consumed token, or the empty span at offset 0.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens.span(self.pos - 1)
        } else {
            Span::point(0)
        }
    }

    pub fn token_at(&self, pos: usize) -> Option<&'a Token> {
        self.tokens.get(pos)
    }

    /// Kind of the token `n` positions ahead (`0` is the current one).
    #[inline]
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens.kind(self.pos + n)
    }

    /// Source text of the token `n` positions ahead.
    pub fn peek_text(&self, n: usize) -> &'a str {
        self.tokens.span(self.pos + n).slice(self.source)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Is the current token the identifier `text`?
    ///
    /// Solidity has many contextual keywords (`error`, `revert`, `receive`,
    /// `from`, `global`, ...) that lex as plain identifiers.
    #[inline]
    pub fn check_ident_text(&self, text: &str) -> bool {
        self.check(TokenKind::Ident) && self.current_text() == text
    }

    /// Move to the next token. Never moves past `Eof`.
    #[inline]
    pub fn advance(&mut self) -> Span {
        let span = self.current_span();
        if !self.is_at_end() {
            self.pos += 1;
        }
        span
    }
}
