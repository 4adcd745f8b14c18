//! Statements, blocks and tolerant recovery inside function bodies.

use sol_ir::ast::{
    Block, BreakStatement, CatchClause, ContinueStatement, DoWhileStatement, EmitStatement,
    ExpressionStatement, ForStatement, IfStatement, IncompleteStatement,
    InlineAssemblyStatement, PlaceholderStatement, ReturnStatement, RevertStatement, Statement,
    ThrowStatement, TryStatement, UncheckedStatement, VariableDeclaration,
    VariableDeclarationStatement, WhileStatement,
};
use sol_ir::{Span, TokenKind};
use sol_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::error::ErrorContext;
use crate::literal::string_value;
use crate::recovery::{Rule, TokenSet, FUNCTION_ATTRIBUTE, MEMBER_BOUNDARY};
use crate::{one_of, ParseError, ParseOutcome, Parser};

impl Parser<'_> {
    /// Any statement. Declarations are tried speculatively before falling
    /// back to an expression statement, so `a[i] = 1;` and `T[] x;` both
    /// resolve correctly.
    pub(crate) fn parse_statement(&mut self) -> ParseOutcome<Statement> {
        ensure_sufficient_stack(|| {
            self.labeled(Rule::Statement, |p| {
                one_of!(
                    p,
                    p.parse_keyword_statement(),
                    p.parse_placeholder(),
                    p.parse_revert_statement(),
                    p.attempt(|p| {
                        let start = p.position();
                        let result = p.parse_variable_declaration_statement();
                        p.outcome_from(start, result)
                    }),
                    p.parse_expression_statement_outcome(),
                )
            })
        })
    }

    /// A statement that must be present, as the body of `if` or a loop.
    fn parse_nested_statement(&mut self) -> Result<Box<Statement>, ParseError> {
        let outcome = self.parse_statement();
        self.finish(outcome).map(Box::new)
    }

    /// Statements introduced by a keyword or by `{`.
    fn parse_keyword_statement(&mut self) -> ParseOutcome<Statement> {
        let start = self.position();
        let result = match self.current_kind() {
            TokenKind::LBrace => self
                .parse_block()
                .map(Statement::Block)
                .map_err(|err| err.with_context(ErrorContext::Block)),
            TokenKind::If => self
                .parse_if()
                .map_err(|err| err.with_context(ErrorContext::IfStatement)),
            TokenKind::For => self
                .parse_for()
                .map_err(|err| err.with_context(ErrorContext::ForLoop)),
            TokenKind::While => self
                .parse_while()
                .map_err(|err| err.with_context(ErrorContext::WhileLoop)),
            TokenKind::Do => self
                .parse_do_while()
                .map_err(|err| err.with_context(ErrorContext::WhileLoop)),
            TokenKind::Try => self
                .parse_try()
                .map_err(|err| err.with_context(ErrorContext::TryStatement)),
            TokenKind::Return => self.parse_return(),
            TokenKind::Emit => self.parse_emit(),
            TokenKind::Break => self.parse_bare_keyword().map(|span| {
                Statement::Break(BreakStatement { span })
            }),
            TokenKind::Continue => self.parse_bare_keyword().map(|span| {
                Statement::Continue(ContinueStatement { span })
            }),
            TokenKind::Throw => self.parse_bare_keyword().map(|span| {
                Statement::Throw(ThrowStatement { span })
            }),
            TokenKind::Unchecked => self.parse_unchecked(),
            TokenKind::Assembly => self
                .parse_inline_assembly()
                .map_err(|err| err.with_context(ErrorContext::InlineAssembly)),
            _ => return ParseOutcome::empty_err(TokenSet::new(), start),
        };
        self.outcome_from(start, result)
    }

    /// `{ statement* }`
    ///
    /// In tolerant mode inside a function body, statements that fail to
    /// parse are skipped up to the next resume point and kept as
    /// [`IncompleteStatement`]s. A block cut short by the start of the next
    /// contract member is closed there.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.expect(TokenKind::LBrace)?;
        let mut body = Vec::new();

        loop {
            if self.eat(TokenKind::RBrace).is_some() {
                break;
            }
            if self.recovery_enabled() && self.at_member_boundary() {
                trace!(at = self.position(), "block closed by member boundary");
                break;
            }

            let snapshot = self.snapshot();
            let furthest = self.furthest;
            let outcome = self.parse_statement();
            let error = match self.finish(outcome) {
                Ok(statement) => {
                    body.push(statement);
                    continue;
                }
                Err(error) => error,
            };
            if !self.recovery_enabled() {
                return Err(error);
            }

            self.restore(snapshot);
            let Some(span) = self.skip_incomplete_statement() else {
                return Err(error);
            };
            // Recovered failures do not show up in later error messages.
            self.furthest = furthest;
            body.push(Statement::Incomplete(IncompleteStatement { span }));
        }

        Ok(Block {
            body,
            span: self.span_from(start),
        })
    }

    /// Skip the tokens of a statement that failed to parse.
    ///
    /// The first token is always skipped. Skipping stops before a `}` that
    /// closes the enclosing block, before the start of a contract member, or
    /// after a `;` or `}` from which a statement parses. Returns the span of
    /// the skipped tokens, or `None` at end of input.
    fn skip_incomplete_statement(&mut self) -> Option<Span> {
        if self.is_at_end() {
            return None;
        }
        let first = self.current_span();
        let mut braces = 0usize;
        let mut parens = 0usize;

        loop {
            let kind = self.current_kind();
            match kind {
                TokenKind::LBrace => braces += 1,
                TokenKind::RBrace => braces = braces.saturating_sub(1),
                TokenKind::LParen => parens += 1,
                TokenKind::RParen => parens = parens.saturating_sub(1),
                _ => {}
            }
            self.advance();

            if braces > 0 {
                if self.is_at_end() {
                    break;
                }
                continue;
            }
            if matches!(self.current_kind(), TokenKind::RBrace | TokenKind::Eof)
                || self.at_member_boundary()
            {
                break;
            }
            if matches!(kind, TokenKind::Semicolon | TokenKind::RBrace)
                && parens == 0
                && self.statement_parses_here()
            {
                break;
            }
        }

        let span = self.span_from(first);
        trace!(start = span.start, end = span.end, "skipped incomplete statement");
        Some(span)
    }

    /// Probe whether a statement parses from the current position. Leaves
    /// the cursor and the failure record untouched.
    fn statement_parses_here(&mut self) -> bool {
        let snapshot = self.snapshot();
        let furthest = self.furthest;
        let parses = self.attempt(Self::parse_statement).is_ok();
        self.restore(snapshot);
        self.furthest = furthest;
        parses
    }

    /// Does a contract member or top-level unit start here? Only keywords
    /// that cannot begin a statement count; `function` must be followed by
    /// a name, since `function (...)` starts a function-typed variable.
    pub(crate) fn at_member_boundary(&self) -> bool {
        let kind = self.current_kind();
        if kind == TokenKind::Function {
            return self.peek_kind(1) == TokenKind::Ident;
        }
        if MEMBER_BOUNDARY.contains(kind) {
            return true;
        }
        if kind != TokenKind::Ident {
            return false;
        }
        match self.current_text() {
            "receive" | "fallback" => {
                self.peek_kind(1) == TokenKind::LParen
                    && self.peek_kind(2) == TokenKind::RParen
                    && FUNCTION_ATTRIBUTE.contains(self.peek_kind(3))
            }
            "error" => {
                self.peek_kind(1) == TokenKind::Ident && self.peek_kind(2) == TokenKind::LParen
            }
            _ => false,
        }
    }

    /// `_;` in a modifier body.
    fn parse_placeholder(&mut self) -> ParseOutcome<Statement> {
        if !(self.check_ident_text("_") && self.peek_kind(1) == TokenKind::Semicolon) {
            return ParseOutcome::empty_err(TokenSet::new(), self.position());
        }
        let start = self.advance();
        self.advance();
        ParseOutcome::consumed_ok(Statement::Placeholder(PlaceholderStatement {
            span: self.span_from(start),
        }))
    }

    /// `revert Error(args);`. A call `revert(...)` is left to the
    /// expression statement.
    fn parse_revert_statement(&mut self) -> ParseOutcome<Statement> {
        if !(self.check_ident_text("revert") && self.peek_kind(1) == TokenKind::Ident) {
            return ParseOutcome::empty_err(TokenSet::new(), self.position());
        }
        let start_pos = self.position();
        let start = self.advance();
        let result = self.parse_expr().and_then(|expression| {
            self.expect(TokenKind::Semicolon)?;
            Ok(Statement::Revert(RevertStatement {
                expression,
                span: self.span_from(start),
            }))
        });
        self.outcome_from(start_pos, result)
    }

    /// `type [location] name`
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration, ParseError> {
        let start = self.current_span();
        let outcome = self.parse_type_name();
        let type_name = self.finish(outcome)?;
        let storage_location = self.parse_storage_location();
        let (name, _) = self.expect_ident()?;
        Ok(VariableDeclaration {
            type_name,
            storage_location,
            name,
            span: self.span_from(start),
        })
    }

    /// `decl [= expr];` or `(decl?, ...) = expr;`
    fn parse_variable_declaration_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.current_span();

        if self.eat(TokenKind::LParen).is_some() {
            let mut declarations = Vec::new();
            loop {
                if matches!(self.current_kind(), TokenKind::Comma | TokenKind::RParen) {
                    declarations.push(None);
                } else {
                    declarations.push(Some(self.parse_variable_declaration()?));
                }
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
            self.expect(TokenKind::Eq)?;
            let initial_value = self.parse_expr()?;
            self.expect(TokenKind::Semicolon)?;
            return Ok(Statement::VariableDeclaration(VariableDeclarationStatement {
                declarations,
                initial_value: Some(initial_value),
                span: self.span_from(start),
            }));
        }

        let declaration = self.parse_variable_declaration()?;
        let initial_value = if self.eat(TokenKind::Eq).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::VariableDeclaration(VariableDeclarationStatement {
            declarations: vec![Some(declaration)],
            initial_value,
            span: self.span_from(start),
        }))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.current_span();
        let expression = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::Expression(ExpressionStatement {
            expression,
            span: self.span_from(start),
        }))
    }

    fn parse_expression_statement_outcome(&mut self) -> ParseOutcome<Statement> {
        let start = self.position();
        let result = self.parse_expression_statement();
        self.outcome_from(start, result)
    }

    /// `keyword ;` for `break`, `continue` and `throw`.
    fn parse_bare_keyword(&mut self) -> Result<Span, ParseError> {
        let start = self.advance();
        self.expect(TokenKind::Semicolon)?;
        Ok(self.span_from(start))
    }

    /// `if ( expr ) statement [else statement]`
    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let consequent = self.parse_nested_statement()?;
        let alternate = if self.eat(TokenKind::Else).is_some() {
            Some(self.parse_nested_statement()?)
        } else {
            None
        };
        Ok(Statement::If(IfStatement {
            test,
            consequent,
            alternate,
            span: self.span_from(start),
        }))
    }

    /// `for ( init? ; test? ; update? ) statement`
    fn parse_for(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        self.expect(TokenKind::LParen)?;

        let init = if self.eat(TokenKind::Semicolon).is_some() {
            None
        } else {
            let outcome = one_of!(
                self,
                self.attempt(|p| {
                    let start = p.position();
                    let result = p.parse_variable_declaration_statement();
                    p.outcome_from(start, result)
                }),
                self.parse_expression_statement_outcome(),
            );
            Some(Box::new(self.finish(outcome)?))
        };

        let test = if self.current_kind() == TokenKind::Semicolon {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let update = if self.current_kind() == TokenKind::RParen {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::RParen)?;

        let body = self.parse_nested_statement()?;
        Ok(Statement::For(ForStatement {
            init,
            test,
            update,
            body,
            span: self.span_from(start),
        }))
    }

    /// `while ( expr ) statement`
    fn parse_while(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_nested_statement()?;
        Ok(Statement::While(WhileStatement {
            test,
            body,
            span: self.span_from(start),
        }))
    }

    /// `do statement while ( expr ) ;`
    fn parse_do_while(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        let body = self.parse_nested_statement()?;
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::DoWhile(DoWhileStatement {
            body,
            test,
            span: self.span_from(start),
        }))
    }

    /// `try expr [returns (params)] block catch-clause+`
    fn parse_try(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        let expression = self.parse_expr()?;
        let returns = if self.eat(TokenKind::Returns).is_some() {
            Some(self.parse_parameter_list(false)?)
        } else {
            None
        };
        let body = self.parse_block()?;

        let mut catch_clauses = vec![self.parse_catch_clause()?];
        while self.current_kind() == TokenKind::Catch {
            catch_clauses.push(self.parse_catch_clause()?);
        }

        Ok(Statement::Try(TryStatement {
            expression,
            returns,
            body,
            catch_clauses,
            span: self.span_from(start),
        }))
    }

    /// `catch [Ident] [(params)] block`
    fn parse_catch_clause(&mut self) -> Result<CatchClause, ParseError> {
        let start = self.expect(TokenKind::Catch)?;
        let kind = self.eat_ident();
        let parameters = if self.current_kind() == TokenKind::LParen {
            Some(self.parse_parameter_list(false)?)
        } else {
            None
        };
        let body = self.parse_block()?;
        Ok(CatchClause {
            kind,
            parameters,
            body,
            span: self.span_from(start),
        })
    }

    /// `return [expr] ;`
    fn parse_return(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        let argument = if self.current_kind() == TokenKind::Semicolon {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::Return(ReturnStatement {
            argument,
            span: self.span_from(start),
        }))
    }

    /// `emit Event(args) ;`
    fn parse_emit(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        let expression = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::Emit(EmitStatement {
            expression,
            span: self.span_from(start),
        }))
    }

    /// `unchecked block`
    fn parse_unchecked(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        let body = self.parse_block()?;
        Ok(Statement::Unchecked(UncheckedStatement {
            body,
            span: self.span_from(start),
        }))
    }

    /// `assembly ["dialect"] [("flag", ...)] { ... }`
    ///
    /// The body is not parsed; braces are balanced and the text kept.
    fn parse_inline_assembly(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance();
        let language = if self.current_kind() == TokenKind::String {
            let (_, value) = string_value(self.current_text());
            self.advance();
            Some(value)
        } else {
            None
        };

        let flags = if self.eat(TokenKind::LParen).is_some() {
            self.series(TokenKind::RParen, |p| {
                let text = p.current_text();
                p.expect(TokenKind::String)?;
                Ok(string_value(text).1)
            })?
        } else {
            Vec::new()
        };

        let open = self.expect(TokenKind::LBrace)?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.current_kind() {
                TokenKind::Eof => {
                    self.check(TokenKind::RBrace);
                    return Err(self.error_here());
                }
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
            self.advance();
        }
        let body = self.span_from(open).slice(self.source()).to_string();

        Ok(Statement::InlineAssembly(InlineAssemblyStatement {
            language,
            flags,
            body,
            span: self.span_from(start),
        }))
    }
}

#[cfg(test)]
mod tests;
