//! Primary expressions: literals, identifiers, tuples, inline arrays, `new`.

use sol_ir::ast::{
    BooleanLiteral, Expression, Identifier, NewExpression, NumberLiteral, StringLiteral,
    TupleExpression,
};
use sol_ir::TokenKind;
use tracing::trace;

use crate::error::ErrorContext;
use crate::literal::{is_subdenomination, number_value, string_value};
use crate::recovery::Rule;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let start = self.current_span();
        match self.current_kind() {
            TokenKind::Ident => {
                let name = self.current_text().to_string();
                self.advance();
                Ok(Expression::Identifier(Identifier { name, span: start }))
            }
            // `payable(x)` and `type(C)` behave like calls to builtins.
            TokenKind::Payable | TokenKind::Type if self.peek_kind(1) == TokenKind::LParen => {
                let name = self.current_text().to_string();
                self.advance();
                Ok(Expression::Identifier(Identifier { name, span: start }))
            }
            TokenKind::Number | TokenKind::HexNumber => Ok(self.parse_number()),
            TokenKind::String | TokenKind::HexString | TokenKind::UnicodeString => {
                Ok(self.parse_string())
            }
            TokenKind::True | TokenKind::False => {
                let value = self.current_kind() == TokenKind::True;
                self.advance();
                Ok(Expression::BooleanLiteral(BooleanLiteral { value, span: start }))
            }
            TokenKind::LParen => self.parse_tuple(false),
            TokenKind::LBracket => self.parse_tuple(true),
            TokenKind::New => self.parse_new(),
            _ => {
                trace!(at = self.position(), "no primary expression");
                self.furthest.record_rule(self.position(), Rule::Expression);
                Err(self.error_here().with_context(ErrorContext::Expression))
            }
        }
    }

    /// Number with an optional unit: `1 ether`, `2 days`.
    fn parse_number(&mut self) -> Expression {
        let start = self.current_span();
        let raw = self.current_text();
        self.advance();

        let subdenomination = if self.current_kind() == TokenKind::Ident
            && is_subdenomination(self.current_text())
        {
            let unit = self.current_text().to_string();
            self.advance();
            Some(unit)
        } else {
            None
        };

        Expression::NumberLiteral(NumberLiteral {
            value: number_value(raw),
            raw: raw.to_string(),
            subdenomination,
            span: self.span_from(start),
        })
    }

    /// One or more adjacent string literals, concatenated: `"a" "b"`.
    fn parse_string(&mut self) -> Expression {
        let start = self.current_span();
        let (kind, mut value) = string_value(self.current_text());
        self.advance();

        while matches!(
            self.current_kind(),
            TokenKind::String | TokenKind::HexString | TokenKind::UnicodeString
        ) {
            let (_, more) = string_value(self.current_text());
            value.push_str(&more);
            self.advance();
        }

        Expression::StringLiteral(StringLiteral {
            value,
            kind,
            span: self.span_from(start),
        })
    }

    /// `( [expr] {, [expr]} )` or `[ expr {, expr} ]`.
    ///
    /// Parenthesised tuples may leave slots empty, as in `(, b)` on the
    /// left of a destructuring assignment; inline arrays may not.
    fn parse_tuple(&mut self, is_array: bool) -> Result<Expression, ParseError> {
        let close = if is_array {
            TokenKind::RBracket
        } else {
            TokenKind::RParen
        };
        let start = self.advance();
        let mut components = Vec::new();

        if self.eat(close).is_none() {
            loop {
                let empty_slot = !is_array
                    && matches!(self.current_kind(), TokenKind::Comma | TokenKind::RParen);
                if empty_slot {
                    components.push(None);
                } else {
                    components.push(Some(self.parse_expr()?));
                }
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(close)?;
        }

        Ok(Expression::Tuple(TupleExpression {
            components,
            is_array,
            span: self.span_from(start),
        }))
    }

    /// `new TypeName`; arguments follow as an ordinary call.
    fn parse_new(&mut self) -> Result<Expression, ParseError> {
        let start = self.advance();
        let outcome = self.parse_type_name();
        let type_name = self
            .finish(outcome)
            .map_err(|err| err.with_context(ErrorContext::TypeName))?;
        Ok(Expression::New(NewExpression {
            type_name,
            span: self.span_from(start),
        }))
    }
}
