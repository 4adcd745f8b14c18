//! Lexer for Solidity source, built on logos.
//!
//! [`lex`] produces the parser's [`TokenList`] plus the comments it skipped.
//! [`lex_comments`] is the lightweight path for callers that only want
//! comments: it never runs the logos automaton.
//!
//! Malformed input never fails at this level. Unrecognised characters,
//! unterminated strings and unclosed block comments become
//! [`TokenKind::Error`] tokens that the parser reports.

mod raw_token;

use logos::Logos;
use sol_ir::{Comment, CommentKind, CommentList, Span, Token, TokenKind, TokenList};
use sol_lexer_core::{RawCommentKind, SourceBuffer};
use tracing::debug;

use raw_token::RawToken;

/// Tokens and comments of one source text.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub comments: CommentList,
}

/// Tokenize `source`.
///
/// The token list always ends with a single `Eof` token whose span is the
/// empty span at `source.len()`.
pub fn lex(source: &str) -> LexOutput {
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    let mut comments = CommentList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(RawToken::LineComment) => {
                comments.push(Comment::from_source(CommentKind::Line, span, source));
                continue;
            }
            Ok(RawToken::BlockComment) => {
                comments.push(Comment::from_source(CommentKind::Block, span, source));
                continue;
            }
            Ok(RawToken::Ident) => {
                TokenKind::from_keyword(logos.slice()).unwrap_or(TokenKind::Ident)
            }
            Ok(RawToken::Number) => TokenKind::Number,
            Ok(RawToken::HexNumber) => TokenKind::HexNumber,
            Ok(RawToken::String) => TokenKind::String,
            Ok(RawToken::HexString) => TokenKind::HexString,
            Ok(RawToken::UnicodeString) => TokenKind::UnicodeString,
            Ok(RawToken::Symbol(kind)) => kind,
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));

    debug!(
        tokens = tokens.len(),
        comments = comments.len(),
        "lexed source"
    );
    LexOutput { tokens, comments }
}

/// Extract comments only, without tokenizing.
///
/// Agrees with the comments returned by [`lex`] for every input.
pub fn lex_comments(source: &str) -> CommentList {
    let buf = SourceBuffer::new(source);
    sol_lexer_core::scan_comments(&buf)
        .into_iter()
        .map(|raw| {
            let kind = match raw.kind {
                RawCommentKind::Line => CommentKind::Line,
                RawCommentKind::Block => CommentKind::Block,
            };
            Comment::from_source(kind, Span::new(raw.start, raw.end), source)
        })
        .collect::<Vec<_>>()
        .into()
}
