//! Grammar rules, one `impl Parser` extension block per area.
//!
//! - `item.rs`: pragmas, imports, contracts and their members
//! - `stmt.rs`: statements, blocks and tolerant recovery
//! - `ty.rs`: type names
//! - `expr/`: expressions

mod expr;
mod item;
mod stmt;
mod ty;

use sol_ir::ast::{Parameter, Program, StateMutability, StorageLocation, Visibility};
use sol_ir::{Span, TokenKind};

use crate::error::ErrorContext;
use crate::recovery::Rule;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Entry rule: `source-unit* EOF`.
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.check(TokenKind::Eof) {
            let outcome = self.parse_source_unit();
            body.push(self.finish(outcome)?);
        }
        let end = u32::try_from(self.source().len()).unwrap_or(u32::MAX);
        Ok(Program {
            body,
            span: Span::new(0, end),
        })
    }

    /// Comma-separated items up to and including `close`. The opening
    /// delimiter has already been consumed. Empty lists are allowed.
    pub(crate) fn series<T>(
        &mut self,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if self.eat(close).is_some() {
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(close)?;
        Ok(items)
    }

    /// `( [parameter {, parameter}] )`.
    ///
    /// Event parameters may be marked `indexed`.
    pub(crate) fn parse_parameter_list(
        &mut self,
        allow_indexed: bool,
    ) -> Result<Vec<Parameter>, ParseError> {
        self.expect(TokenKind::LParen)?;
        self.series(TokenKind::RParen, |p| p.parse_parameter(allow_indexed))
            .map_err(|err| err.with_context(ErrorContext::Parameters))
    }

    /// `type-name [storage-location] [indexed] [name]`.
    fn parse_parameter(&mut self, allow_indexed: bool) -> Result<Parameter, ParseError> {
        self.labeled_result(Rule::Parameter, |p| {
            let start = p.current_span();
            let outcome = p.parse_type_name();
            let type_name = p.finish(outcome)?;
            let storage_location = p.parse_storage_location();
            let is_indexed = allow_indexed && p.eat(TokenKind::Indexed).is_some();
            let name = p.eat_ident();
            Ok(Parameter {
                type_name,
                storage_location,
                name,
                is_indexed,
                span: p.span_from(start),
            })
        })
    }

    /// Consume an identifier if present.
    pub(crate) fn eat_ident(&mut self) -> Option<String> {
        let text = self.current_text();
        self.eat(TokenKind::Ident).map(|_| text.to_string())
    }

    pub(crate) fn parse_storage_location(&mut self) -> Option<StorageLocation> {
        if self.eat(TokenKind::Memory).is_some() {
            Some(StorageLocation::Memory)
        } else if self.eat(TokenKind::Storage).is_some() {
            Some(StorageLocation::Storage)
        } else if self.eat(TokenKind::Calldata).is_some() {
            Some(StorageLocation::Calldata)
        } else {
            None
        }
    }

    /// Visibility keyword at the current token, consumed if present.
    pub(crate) fn parse_visibility(&mut self) -> Option<Visibility> {
        let visibility = match self.current_kind() {
            TokenKind::Public => Visibility::Public,
            TokenKind::Private => Visibility::Private,
            TokenKind::Internal => Visibility::Internal,
            TokenKind::External => Visibility::External,
            _ => return None,
        };
        self.advance();
        Some(visibility)
    }

    /// State mutability keyword at the current token, consumed if present.
    pub(crate) fn parse_state_mutability(&mut self) -> Option<StateMutability> {
        let mutability = match self.current_kind() {
            TokenKind::Pure => StateMutability::Pure,
            TokenKind::View => StateMutability::View,
            TokenKind::Payable => StateMutability::Payable,
            TokenKind::Constant => StateMutability::Constant,
            _ => return None,
        };
        self.advance();
        Some(mutability)
    }
}
