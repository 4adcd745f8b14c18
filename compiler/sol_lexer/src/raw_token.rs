//! The logos-derived token enum.
//!
//! Fixed-spelling symbols carry their [`TokenKind`] directly; keywords are
//! lexed as identifiers and classified afterwards. Comment and string bodies
//! are delimited by `sol_lexer_core` so the standalone comment scanner agrees
//! with this lexer on every boundary.

use logos::{Lexer, Logos};
use sol_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0C]+")]
pub(crate) enum RawToken {
    #[token("//", line_comment)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\"", |lex| string_body(lex, b'"'))]
    #[token("'", |lex| string_body(lex, b'\''))]
    String,

    #[token("hex\"", |lex| string_body(lex, b'"'))]
    #[token("hex'", |lex| string_body(lex, b'\''))]
    HexString,

    #[token("unicode\"", |lex| string_body(lex, b'"'))]
    #[token("unicode'", |lex| string_body(lex, b'\''))]
    UnicodeString,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9][0-9_]*)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    Number,

    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    HexNumber,

    #[regex(r"[a-zA-Z$_][a-zA-Z0-9$_]*")]
    Ident,

    #[token("(", |_| TokenKind::LParen)]
    #[token(")", |_| TokenKind::RParen)]
    #[token("[", |_| TokenKind::LBracket)]
    #[token("]", |_| TokenKind::RBracket)]
    #[token("{", |_| TokenKind::LBrace)]
    #[token("}", |_| TokenKind::RBrace)]
    #[token(";", |_| TokenKind::Semicolon)]
    #[token(",", |_| TokenKind::Comma)]
    #[token(".", |_| TokenKind::Dot)]
    #[token("?", |_| TokenKind::Question)]
    #[token(":", |_| TokenKind::Colon)]
    #[token("=>", |_| TokenKind::FatArrow)]
    #[token("->", |_| TokenKind::Arrow)]
    #[token(":=", |_| TokenKind::ColonEq)]
    #[token("=", |_| TokenKind::Eq)]
    #[token("==", |_| TokenKind::EqEq)]
    #[token("!=", |_| TokenKind::NotEq)]
    #[token("<", |_| TokenKind::Lt)]
    #[token("<=", |_| TokenKind::LtEq)]
    #[token(">", |_| TokenKind::Gt)]
    #[token(">=", |_| TokenKind::GtEq)]
    #[token("<<", |_| TokenKind::Shl)]
    #[token(">>", |_| TokenKind::Shr)]
    #[token(">>>", |_| TokenKind::Sar)]
    #[token("+", |_| TokenKind::Plus)]
    #[token("-", |_| TokenKind::Minus)]
    #[token("*", |_| TokenKind::Star)]
    #[token("/", |_| TokenKind::Slash)]
    #[token("%", |_| TokenKind::Percent)]
    #[token("**", |_| TokenKind::StarStar)]
    #[token("++", |_| TokenKind::PlusPlus)]
    #[token("--", |_| TokenKind::MinusMinus)]
    #[token("!", |_| TokenKind::Bang)]
    #[token("~", |_| TokenKind::Tilde)]
    #[token("&", |_| TokenKind::Amp)]
    #[token("|", |_| TokenKind::Pipe)]
    #[token("^", |_| TokenKind::Caret)]
    #[token("&&", |_| TokenKind::AmpAmp)]
    #[token("||", |_| TokenKind::PipePipe)]
    #[token("+=", |_| TokenKind::PlusEq)]
    #[token("-=", |_| TokenKind::MinusEq)]
    #[token("*=", |_| TokenKind::StarEq)]
    #[token("/=", |_| TokenKind::SlashEq)]
    #[token("%=", |_| TokenKind::PercentEq)]
    #[token("|=", |_| TokenKind::PipeEq)]
    #[token("&=", |_| TokenKind::AmpEq)]
    #[token("^=", |_| TokenKind::CaretEq)]
    #[token("<<=", |_| TokenKind::ShlEq)]
    #[token(">>=", |_| TokenKind::ShrEq)]
    #[token(">>>=", |_| TokenKind::SarEq)]
    Symbol(TokenKind),
}

fn line_comment(lex: &mut Lexer<'_, RawToken>) {
    let len = sol_lexer_core::line_comment_end(lex.remainder().as_bytes());
    lex.bump(len);
}

/// An unclosed `/*` becomes one error token running to the end of input.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    match sol_lexer_core::block_comment_end(rest.as_bytes()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

/// An unterminated string leaves just the opening quote as an error token.
fn string_body(lex: &mut Lexer<'_, RawToken>, quote: u8) -> bool {
    match sol_lexer_core::string_end(lex.remainder().as_bytes(), quote) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}
