//! Backtracking recursive descent parser for Solidity.
//!
//! Grammar rules are ordered choices in the PEG sense. Rules that can be
//! decided by their first token return a [`ParseOutcome`] and compose with
//! [`one_of!`]; ambiguous ones (declaration versus expression statement) go
//! through `Parser::attempt`, which rewinds on any failure.
//!
//! Errors are reported the PEG way: every failed terminal or named rule is
//! recorded against its token position, and when the whole parse fails the
//! single [`SyntaxError`] describes the furthest position any alternative
//! reached.
//!
//! In tolerant mode, a statement inside a function-like body that cannot be
//! parsed is skipped and replaced by an `IncompleteStatement` node, as long
//! as the end of the enclosing block can still be found.

mod context;
mod cursor;
mod error;
mod furthest;
mod grammar;
mod imports;
mod literal;
mod outcome;
mod recovery;
mod snapshot;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, SyntaxError};
pub use imports::scan_imports;
pub use outcome::ParseOutcome;
pub use recovery::{Rule, TokenSet};

use sol_ir::ast::{Expression, Program, Statement};
use sol_ir::{check_source_len, LineOffsetTable, Location, Span, TokenKind, TokenList};
use tracing::{debug, trace};

use context::ParseContext;
use furthest::FurthestFailure;
use snapshot::ParserSnapshot;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    context: ParseContext,
    furthest: FurthestFailure,
    tolerant: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str, tolerant: bool) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            context: ParseContext::new(),
            furthest: FurthestFailure::new(),
            tolerant,
        }
    }

    // Cursor delegation

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.cursor.position()
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    pub(crate) fn current_text(&self) -> &'a str {
        self.cursor.current_text()
    }

    #[inline]
    pub(crate) fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    pub(crate) fn peek_kind(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind(n)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    pub(crate) fn source(&self) -> &'a str {
        self.cursor.source()
    }

    #[inline]
    pub(crate) fn advance(&mut self) -> Span {
        self.cursor.advance()
    }

    /// Does the current token have `kind`? A miss is recorded as an
    /// expected token at this position.
    #[inline]
    pub(crate) fn check(&mut self, kind: TokenKind) -> bool {
        if self.cursor.check(kind) {
            true
        } else {
            self.furthest.record_token(self.position(), kind);
            false
        }
    }

    /// Is the current token the contextual keyword `text`? Not recorded.
    #[inline]
    pub(crate) fn check_ident_text(&self, text: &str) -> bool {
        self.cursor.check_ident_text(text)
    }

    /// Consume the current token if it has `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<Span> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here())
        }
    }

    /// Consume an identifier and return its text.
    pub(crate) fn expect_ident(&mut self) -> Result<(String, Span), ParseError> {
        let text = self.current_text();
        let span = self.expect(TokenKind::Ident)?;
        Ok((text.to_string(), span))
    }

    /// Consume the contextual keyword `text` (an identifier).
    pub(crate) fn expect_ident_text(&mut self, text: &str) -> Result<Span, ParseError> {
        if self.check_ident_text(text) {
            Ok(self.advance())
        } else {
            self.furthest.record_token(self.position(), TokenKind::Ident);
            Err(ParseError::new(
                format!("Expected `{text}` but {} found.", self.found_at(self.position())),
                self.current_span(),
            ))
        }
    }

    // Spans

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    pub(crate) fn span_from(&self, start: Span) -> Span {
        let end = self.previous_span().end.max(start.start);
        Span::new(start.start, end)
    }

    // Speculation

    #[inline]
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.position(), self.context)
    }

    #[inline]
    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.context = snapshot.context;
    }

    /// Run `f` speculatively. Any failure rewinds to the starting position
    /// and is reported as `EmptyErr`, so the caller can try another
    /// alternative.
    pub(crate) fn attempt<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseOutcome<T>,
    ) -> ParseOutcome<T> {
        let snapshot = self.snapshot();
        self.context = self.context.with(ParseContext::SPECULATIVE);
        let outcome = f(self);
        self.context = snapshot.context;
        match outcome {
            ok @ (ParseOutcome::ConsumedOk { .. } | ParseOutcome::EmptyOk { .. }) => ok,
            ParseOutcome::ConsumedErr { error, .. } => {
                trace!(at = snapshot.cursor_pos, error = %error.message, "attempt rewound");
                self.restore(snapshot);
                ParseOutcome::empty_err(TokenSet::new(), snapshot.cursor_pos)
            }
            ParseOutcome::EmptyErr { expected, .. } => {
                self.restore(snapshot);
                ParseOutcome::empty_err(expected, snapshot.cursor_pos)
            }
        }
    }

    /// Run `f` as the named rule `rule`: if it fails without consuming, the
    /// terminals it tried are reported as the rule's name instead.
    pub(crate) fn labeled<T>(
        &mut self,
        rule: Rule,
        f: impl FnOnce(&mut Self) -> ParseOutcome<T>,
    ) -> ParseOutcome<T> {
        let start = self.position();
        let before = self.furthest;
        let outcome = f(self);
        if outcome.failed_without_progress() {
            self.furthest.collapse_into(start, before, rule);
        }
        outcome
    }

    /// `Result`-returning counterpart of [`Self::labeled`].
    pub(crate) fn labeled_result<T>(
        &mut self,
        rule: Rule,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let start = self.position();
        let before = self.furthest;
        let result = f(self);
        if result.is_err() {
            self.furthest.collapse_into(start, before, rule);
        }
        result
    }

    /// Run `f` with extra context flags, restoring the previous flags after.
    pub(crate) fn with_context<T>(
        &mut self,
        flag: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = self.context.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Lift a `Result` rule into a `ParseOutcome` using the cursor's progress
    /// since `start`.
    pub(crate) fn outcome_from<T>(
        &self,
        start: usize,
        result: Result<T, ParseError>,
    ) -> ParseOutcome<T> {
        let consumed = self.position() > start;
        match result {
            Ok(value) if consumed => ParseOutcome::consumed_ok(value),
            Ok(value) => ParseOutcome::empty_ok(value),
            Err(error) if consumed => {
                let span = error.span;
                ParseOutcome::consumed_err(error, span)
            }
            Err(_) => ParseOutcome::empty_err(TokenSet::new(), start),
        }
    }

    /// Is tolerant recovery allowed at this point?
    pub(crate) fn recovery_enabled(&self) -> bool {
        self.tolerant && self.context.in_function_body() && !self.context.is_speculative()
    }

    // Errors

    /// Describe the token at `position` for an error message.
    pub(crate) fn found_at(&self, position: usize) -> String {
        match self.cursor.token_at(position) {
            None => "end of input".to_string(),
            Some(token) => match token.kind {
                TokenKind::Eof => "end of input".to_string(),
                TokenKind::Error => {
                    let text = token.text(self.source());
                    let first = text.chars().next().map(String::from).unwrap_or_default();
                    format!("`{first}`")
                }
                _ => format!("`{}`", token.text(self.source())),
            },
        }
    }

    fn span_at(&self, position: usize) -> Span {
        self.cursor
            .token_at(position)
            .map_or_else(|| self.current_span(), |token| token.span)
    }

    /// Error for a mismatch at the current token, listing everything
    /// recorded as expected here.
    pub(crate) fn error_here(&self) -> ParseError {
        self.expected_error(&TokenSet::new(), self.position())
    }

    /// Error for a mismatch at `position`, expecting `expected` plus whatever
    /// the tracker already holds for that position.
    pub(crate) fn expected_error(&self, expected: &TokenSet, position: usize) -> ParseError {
        let mut tokens = *expected;
        let mut rules = recovery::RuleSet::new();
        if self.furthest.position() == position {
            tokens.union_with(self.furthest.expected());
            rules = *self.furthest.rules();
        }
        ParseError::expected(&tokens, &rules, &self.found_at(position), self.span_at(position))
    }

    /// Turn a failed parse into the caller-facing error, located at the
    /// furthest failure position.
    pub(crate) fn syntax_error(&self, error: &ParseError) -> SyntaxError {
        let table = LineOffsetTable::build(self.source());
        if self.furthest.is_empty() {
            return SyntaxError {
                message: error.message.clone(),
                location: table.locate(error.span.start),
            };
        }
        let position = self.furthest.position();
        let message = error::expected_message(
            self.furthest.expected(),
            self.furthest.rules(),
            &self.found_at(position),
        );
        SyntaxError {
            message,
            location: table.locate(self.span_at(position).start),
        }
    }

    /// Convert an outcome that must have succeeded into a `Result`.
    pub(crate) fn finish<T>(&self, outcome: ParseOutcome<T>) -> Result<T, ParseError> {
        match outcome {
            ParseOutcome::ConsumedOk { value } | ParseOutcome::EmptyOk { value } => Ok(value),
            ParseOutcome::ConsumedErr { error, .. } => Err(error),
            ParseOutcome::EmptyErr { expected, position } => {
                Err(self.expected_error(&expected, position))
            }
        }
    }

    /// Require the whole input to have been consumed.
    pub(crate) fn expect_end(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Eof).map(|_| ())
    }
}

fn source_too_large(source: &str) -> Result<(), SyntaxError> {
    check_source_len(source).map_err(|err| SyntaxError {
        message: err.to_string(),
        location: Location {
            line: 1,
            column: 1,
            offset: 0,
        },
    })
}

/// Parse a complete source unit.
///
/// With `tolerant`, statements that cannot be parsed inside function-like
/// bodies become `IncompleteStatement` nodes instead of failing the parse.
pub fn parse(source: &str, tolerant: bool) -> Result<Program, SyntaxError> {
    source_too_large(source)?;
    let lexed = sol_lexer::lex(source);
    let mut parser = Parser::new(&lexed.tokens, source, tolerant);
    let result = parser.parse_program();
    match result {
        Ok(program) => {
            debug!(tolerant, units = program.body.len(), "parsed program");
            Ok(program)
        }
        Err(error) => {
            let syntax_error = parser.syntax_error(&error);
            debug!(
                message = %syntax_error.message,
                line = syntax_error.location.line,
                column = syntax_error.location.column,
                "parse failed"
            );
            Err(syntax_error)
        }
    }
}

/// Parse a single expression spanning the whole input.
pub fn parse_expression(source: &str) -> Result<Expression, SyntaxError> {
    source_too_large(source)?;
    let lexed = sol_lexer::lex(source);
    let mut parser = Parser::new(&lexed.tokens, source, false);
    let result = parser.parse_expr().and_then(|expr| {
        parser.expect_end()?;
        Ok(expr)
    });
    result.map_err(|error| parser.syntax_error(&error))
}

/// Parse a single statement spanning the whole input.
pub fn parse_statement(source: &str) -> Result<Statement, SyntaxError> {
    source_too_large(source)?;
    let lexed = sol_lexer::lex(source);
    let mut parser = Parser::new(&lexed.tokens, source, false);
    let outcome = parser.parse_statement();
    let result = parser.finish(outcome).and_then(|stmt| {
        parser.expect_end()?;
        Ok(stmt)
    });
    result.map_err(|error| parser.syntax_error(&error))
}

#[cfg(test)]
mod tests;
