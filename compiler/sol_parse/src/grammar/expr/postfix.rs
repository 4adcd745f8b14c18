//! Postfix expressions: member access, index and slice, calls, call
//! options, and postfix `++`/`--`.

use sol_ir::ast::{
    CallArguments, CallExpression, CallOptionsExpression, Expression, Identifier,
    IndexExpression, IndexRangeExpression, MemberExpression, NamedArgument, Spanned, UnaryOp,
};
use sol_ir::{Span, TokenKind};

use super::postfix_unary;
use crate::error::ErrorContext;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_postfix_expr(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            expr = match self.current_kind() {
                TokenKind::Dot => self.parse_member(expr)?,
                TokenKind::LBracket => self.parse_index(expr)?,
                TokenKind::LParen => self.parse_call(expr)?,
                TokenKind::LBrace if self.at_call_options() => self.parse_call_options(expr)?,
                TokenKind::PlusPlus => {
                    let end = self.advance().end;
                    postfix_unary(UnaryOp::Increment, expr, end)
                }
                TokenKind::MinusMinus => {
                    let end = self.advance().end;
                    postfix_unary(UnaryOp::Decrement, expr, end)
                }
                _ => break,
            };
        }

        Ok(expr)
    }

    /// `{` directly followed by `name :` starts call options. Anything else
    /// after an expression (a block after `try f()`) is left alone.
    fn at_call_options(&self) -> bool {
        self.peek_kind(1) == TokenKind::Ident && self.peek_kind(2) == TokenKind::Colon
    }

    fn parse_member(&mut self, object: Expression) -> Result<Expression, ParseError> {
        self.advance();
        let (name, name_span) = self.expect_ident()?;
        let span = object.span().merge(name_span);
        Ok(Expression::Member(MemberExpression {
            object: Box::new(object),
            property: Identifier {
                name,
                span: name_span,
            },
            span,
        }))
    }

    /// `[index]`, `[]` (array type in expression position), or a slice
    /// `[start:end]` with either bound optional.
    fn parse_index(&mut self, object: Expression) -> Result<Expression, ParseError> {
        let start = object.span();
        self.advance();

        if self.eat(TokenKind::RBracket).is_some() {
            return Ok(Expression::Index(IndexExpression {
                object: Box::new(object),
                index: None,
                span: self.span_from(start),
            }));
        }

        let index_start = if self.current_kind() == TokenKind::Colon {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };

        if self.eat(TokenKind::Colon).is_some() {
            let index_end = if self.current_kind() == TokenKind::RBracket {
                None
            } else {
                Some(Box::new(self.parse_expr()?))
            };
            self.expect(TokenKind::RBracket)?;
            return Ok(Expression::IndexRange(IndexRangeExpression {
                object: Box::new(object),
                index_start,
                index_end,
                span: self.span_from(start),
            }));
        }

        self.expect(TokenKind::RBracket)?;
        Ok(Expression::Index(IndexExpression {
            object: Box::new(object),
            index: index_start,
            span: self.span_from(start),
        }))
    }

    /// `(a, b)` or `({name: a, other: b})`.
    fn parse_call(&mut self, callee: Expression) -> Result<Expression, ParseError> {
        let start = callee.span();
        self.advance();

        let arguments = if self.current_kind() == TokenKind::LBrace {
            self.advance();
            let named = self.parse_named_arguments()?;
            self.expect(TokenKind::RParen)?;
            CallArguments::Named(named)
        } else {
            let positional = self
                .series(TokenKind::RParen, Self::parse_expr)
                .map_err(|err| err.with_context(ErrorContext::Arguments))?;
            CallArguments::Positional(positional)
        };

        Ok(Expression::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
            span: self.span_from(start),
        }))
    }

    /// `f{value: 1, gas: 2}`.
    fn parse_call_options(&mut self, callee: Expression) -> Result<Expression, ParseError> {
        let start = callee.span();
        self.advance();
        let options = self.parse_named_arguments()?;
        Ok(Expression::CallOptions(CallOptionsExpression {
            callee: Box::new(callee),
            options,
            span: self.span_from(start),
        }))
    }

    /// `name: expr {, name: expr} }` after the opening brace.
    fn parse_named_arguments(&mut self) -> Result<Vec<NamedArgument>, ParseError> {
        self.series(TokenKind::RBrace, |p| {
            let (name, name_span) = p.expect_ident()?;
            p.expect(TokenKind::Colon)?;
            let value = p.parse_expr()?;
            let span = Span::new(name_span.start, value.span().end);
            Ok(NamedArgument { name, value, span })
        })
    }
}
