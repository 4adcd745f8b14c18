//! Shared data types for the Solidity front end.
//!
//! - [`Span`] byte ranges and [`LineOffsetTable`] line/column lookup
//! - [`Token`], [`TokenKind`] and [`TokenList`] produced by the lexer
//! - [`Comment`] and [`CommentList`], kept beside the token stream
//! - [`ast`] node types, all `serde::Serialize`
//! - [`visitor`] for read-only traversal
//!
//! Nothing here depends on the lexer or parser.

pub mod ast;
mod comment;
mod location;
mod span;
mod token;
pub mod visitor;

pub use comment::{Comment, CommentKind, CommentList};
pub use location::{LineOffsetTable, Location};
pub use span::{check_source_len, Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
