//! Import-only scan.
//!
//! Reads `import` directives with the same rule the full grammar uses and
//! skips every other top-level unit as a balanced token run, so nothing in a
//! contract body is ever mistaken for an import and no AST is built for it.

use sol_ir::TokenKind;
use tracing::debug;

use crate::{source_too_large, ParseError, Parser, SyntaxError};

/// Paths of all top-level `import` directives, in source order.
pub fn scan_imports(source: &str) -> Result<Vec<String>, SyntaxError> {
    source_too_large(source)?;
    let lexed = sol_lexer::lex(source);
    let mut parser = Parser::new(&lexed.tokens, source, false);
    let result = parser.scan_import_paths();
    match result {
        Ok(paths) => {
            debug!(imports = paths.len(), "scanned imports");
            Ok(paths)
        }
        Err(error) => Err(parser.syntax_error(&error)),
    }
}

impl Parser<'_> {
    fn scan_import_paths(&mut self) -> Result<Vec<String>, ParseError> {
        let mut paths = Vec::new();
        while !self.check(TokenKind::Eof) {
            if self.current_kind() == TokenKind::Import {
                let outcome = self.parse_import();
                paths.push(self.finish(outcome)?.from);
            } else {
                self.skip_unit()?;
            }
        }
        Ok(paths)
    }

    /// Skip one top-level unit: tokens up to a `;` outside any brackets, or
    /// up to the `}` closing an outermost brace group.
    fn skip_unit(&mut self) -> Result<(), ParseError> {
        let mut closers: Vec<TokenKind> = Vec::new();
        loop {
            let kind = self.current_kind();
            match kind {
                TokenKind::Eof => {
                    self.check(closers.last().copied().unwrap_or(TokenKind::Semicolon));
                    return Err(self.error_here());
                }
                TokenKind::LParen => closers.push(TokenKind::RParen),
                TokenKind::LBracket => closers.push(TokenKind::RBracket),
                TokenKind::LBrace => closers.push(TokenKind::RBrace),
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    match closers.last().copied() {
                        Some(expected) if expected == kind => {
                            closers.pop();
                        }
                        Some(expected) => {
                            self.check(expected);
                            return Err(self.error_here());
                        }
                        None => return Err(self.error_here()),
                    }
                }
                _ => {}
            }
            self.advance();
            if closers.is_empty() && matches!(kind, TokenKind::Semicolon | TokenKind::RBrace) {
                return Ok(());
            }
        }
    }
}
