//! Type names: elementary and user-defined names, mappings, function types
//! and arrays of any of those.

use sol_ir::ast::{
    is_elementary_type_name, ArrayTypeName, ElementaryTypeName, FunctionTypeName, Mapping,
    StateMutability, TypeName, UserDefinedTypeName,
};
use sol_ir::{Span, TokenKind};

use crate::error::ErrorContext;
use crate::recovery::{Rule, TokenSet};
use crate::{chain, committed, one_of, require, ParseOutcome, Parser};

impl Parser<'_> {
    /// `(elementary | user-path | mapping | function-type) {[ [expr] ]}`
    pub(crate) fn parse_type_name(&mut self) -> ParseOutcome<TypeName> {
        self.labeled(Rule::TypeName, |p| {
            let start = p.current_span();
            let base = chain!(
                p,
                one_of!(
                    p,
                    p.parse_named_type(),
                    p.parse_mapping(),
                    p.parse_function_type()
                )
            );
            p.parse_array_suffixes(start, base)
        })
    }

    /// `uint256`, `address payable`, `IERC20`, `Lib.Inner`.
    fn parse_named_type(&mut self) -> ParseOutcome<TypeName> {
        let start = self.current_span();
        if !self.check(TokenKind::Ident) {
            return ParseOutcome::empty_err(TokenSet::single(TokenKind::Ident), self.position());
        }
        let first = self.current_text();
        self.advance();

        if is_elementary_type_name(first) {
            let state_mutability = (first == "address"
                && self.eat(TokenKind::Payable).is_some())
            .then_some(StateMutability::Payable);
            return ParseOutcome::consumed_ok(TypeName::Elementary(ElementaryTypeName {
                name: first.to_string(),
                state_mutability,
                span: self.span_from(start),
            }));
        }

        let mut name_path = first.to_string();
        while self.current_kind() == TokenKind::Dot && self.peek_kind(1) == TokenKind::Ident {
            self.advance();
            name_path.push('.');
            name_path.push_str(self.current_text());
            self.advance();
        }
        ParseOutcome::consumed_ok(TypeName::UserDefined(UserDefinedTypeName {
            name_path,
            span: self.span_from(start),
        }))
    }

    /// `mapping ( key [name] => value [name] )`
    fn parse_mapping(&mut self) -> ParseOutcome<TypeName> {
        let start = self.current_span();
        if !self.check(TokenKind::Mapping) {
            return ParseOutcome::empty_err(TokenSet::single(TokenKind::Mapping), self.position());
        }
        self.advance();
        committed!(self.expect(TokenKind::LParen));
        let key_type = require!(self, self.parse_type_name(), ErrorContext::TypeName);
        let key_name = self.eat_ident();
        committed!(self.expect(TokenKind::FatArrow));
        let value_type = require!(self, self.parse_type_name(), ErrorContext::TypeName);
        let value_name = self.eat_ident();
        committed!(self.expect(TokenKind::RParen));

        ParseOutcome::consumed_ok(TypeName::Mapping(Mapping {
            key_type: Box::new(key_type),
            key_name,
            value_type: Box::new(value_type),
            value_name,
            span: self.span_from(start),
        }))
    }

    /// `function (params) {visibility | mutability} [returns (params)]`
    fn parse_function_type(&mut self) -> ParseOutcome<TypeName> {
        let start = self.current_span();
        if !self.check(TokenKind::Function) {
            return ParseOutcome::empty_err(TokenSet::single(TokenKind::Function), self.position());
        }
        self.advance();
        let parameters = committed!(self.parse_parameter_list(false));

        let mut visibility = None;
        let mut state_mutability = None;
        loop {
            if let Some(v) = self.parse_visibility() {
                visibility = Some(v);
            } else if let Some(m) = self.parse_state_mutability() {
                state_mutability = Some(m);
            } else {
                break;
            }
        }

        let return_parameters = if self.eat(TokenKind::Returns).is_some() {
            committed!(self.parse_parameter_list(false))
        } else {
            Vec::new()
        };

        ParseOutcome::consumed_ok(TypeName::Function(FunctionTypeName {
            parameters,
            return_parameters,
            visibility,
            state_mutability,
            span: self.span_from(start),
        }))
    }

    /// Wrap `base` in one array type per trailing `[]` or `[length]`.
    fn parse_array_suffixes(&mut self, start: Span, base: TypeName) -> ParseOutcome<TypeName> {
        let mut type_name = base;
        while self.current_kind() == TokenKind::LBracket {
            self.advance();
            let length = if self.eat(TokenKind::RBracket).is_some() {
                None
            } else {
                let length = committed!(self.parse_expr());
                committed!(self.expect(TokenKind::RBracket));
                Some(Box::new(length))
            };
            type_name = TypeName::Array(ArrayTypeName {
                base_type: Box::new(type_name),
                length,
                span: self.span_from(start),
            });
        }
        ParseOutcome::consumed_ok(type_name)
    }
}
