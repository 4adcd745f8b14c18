//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Literals, identifiers, tuples, inline arrays, `new`
//! - `postfix.rs`: Member access, index and slice, calls, call options
//!
//! Precedence, loosest first: assignment and `?:` (right-associative),
//! `||`, `&&`, `== !=`, `< > <= >=`, `|`, `^`, `&`, `<< >> >>>`, `+ -`,
//! `* / %`, `**` (right-associative), prefix operators, postfix.

mod operators;
mod postfix;
mod primary;

use sol_ir::ast::{
    AssignmentExpression, BinaryExpression, BinaryOp, ConditionalExpression, Expression, Spanned,
    UnaryExpression, UnaryOp,
};
use sol_ir::TokenKind;
use sol_stack::ensure_sufficient_stack;

use crate::recovery::Rule;
use crate::{ParseError, Parser};

fn binary(operator: BinaryOp, left: Expression, right: Expression) -> Expression {
    let span = left.span().merge(right.span());
    Expression::Binary(BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        span,
    })
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot overflow
    /// the stack.
    pub(crate) fn parse_expr(&mut self) -> Result<Expression, ParseError> {
        ensure_sufficient_stack(|| self.labeled_result(Rule::Expression, Self::parse_assignment))
    }

    /// `conditional (assign-op assignment)?`
    fn parse_assignment(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_conditional()?;

        if let Some(operator) = self.match_assign_op() {
            self.advance();
            let right = ensure_sufficient_stack(|| self.parse_assignment())?;
            let span = left.span().merge(right.span());
            return Ok(Expression::Assignment(AssignmentExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
                span,
            }));
        }

        Ok(left)
    }

    /// `or ('?' assignment ':' assignment)?`
    fn parse_conditional(&mut self) -> Result<Expression, ParseError> {
        let test = self.parse_binary_or()?;

        if self.current_kind() == TokenKind::Question {
            self.advance();
            let consequent = ensure_sufficient_stack(|| self.parse_assignment())?;
            self.expect(TokenKind::Colon)?;
            let alternate = ensure_sufficient_stack(|| self.parse_assignment())?;
            let span = test.span().merge(alternate.span());
            return Ok(Expression::Conditional(ConditionalExpression {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
                span,
            }));
        }

        Ok(test)
    }

    /// Parse `||` (loosest binary operator).
    fn parse_binary_or(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_binary_and()?;

        while self.current_kind() == TokenKind::PipePipe {
            self.advance();
            let right = self.parse_binary_and()?;
            left = binary(BinaryOp::Or, left, right);
        }

        Ok(left)
    }

    /// Parse `&&`.
    fn parse_binary_and(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_equality()?;

        while self.current_kind() == TokenKind::AmpAmp {
            self.advance();
            let right = self.parse_equality()?;
            left = binary(BinaryOp::And, left, right);
        }

        Ok(left)
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_comparison()?;

        while let Some(op) = self.match_equality_op() {
            self.advance();
            let right = self.parse_comparison()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<`, `>`, `<=` and `>=`.
    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_bitwise_or()?;

        while let Some(op) = self.match_comparison_op() {
            self.advance();
            let right = self.parse_bitwise_or()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `|`.
    fn parse_bitwise_or(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_bitwise_xor()?;

        while self.current_kind() == TokenKind::Pipe {
            self.advance();
            let right = self.parse_bitwise_xor()?;
            left = binary(BinaryOp::BitOr, left, right);
        }

        Ok(left)
    }

    /// Parse `^`.
    fn parse_bitwise_xor(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_bitwise_and()?;

        while self.current_kind() == TokenKind::Caret {
            self.advance();
            let right = self.parse_bitwise_and()?;
            left = binary(BinaryOp::BitXor, left, right);
        }

        Ok(left)
    }

    /// Parse `&`.
    fn parse_bitwise_and(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_shift()?;

        while self.current_kind() == TokenKind::Amp {
            self.advance();
            let right = self.parse_shift()?;
            left = binary(BinaryOp::BitAnd, left, right);
        }

        Ok(left)
    }

    /// Parse `<<`, `>>` and `>>>`.
    fn parse_shift(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_shift_op() {
            self.advance();
            let right = self.parse_additive()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/` and `%`.
    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_exponent()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_exponent()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `**`, which groups to the right: `a ** b ** c` is
    /// `a ** (b ** c)`.
    fn parse_exponent(&mut self) -> Result<Expression, ParseError> {
        let base = self.parse_unary()?;

        if self.current_kind() == TokenKind::StarStar {
            self.advance();
            let exponent = ensure_sufficient_stack(|| self.parse_exponent())?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }

        Ok(base)
    }

    /// Parse prefix operators: `! ~ - + ++ -- delete`.
    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        if let Some(operator) = self.match_prefix_op() {
            let start = self.advance();
            let argument = ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(argument.span());
            return Ok(Expression::Unary(UnaryExpression {
                operator,
                prefix: true,
                argument: Box::new(argument),
                span,
            }));
        }

        self.parse_postfix_expr()
    }
}

/// Postfix `++`/`--` wrapper, used by `postfix.rs`.
fn postfix_unary(operator: UnaryOp, argument: Expression, end: u32) -> Expression {
    let start = argument.span().start;
    Expression::Unary(UnaryExpression {
        operator,
        prefix: false,
        argument: Box::new(argument),
        span: sol_ir::Span::new(start, end),
    })
}
