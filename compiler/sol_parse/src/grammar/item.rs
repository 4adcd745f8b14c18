//! Top-level units and contract members.
//!
//! Every rule here starts with a keyword (reserved, or contextual like
//! `error` and `receive`), so alternatives are decided by their first token
//! and compose with `one_of!`. The exceptions are state variables and
//! file-level constants, which begin with a type name and are tried
//! speculatively last.

use sol_ir::ast::{
    is_elementary_type_name, AbiCoderPragmaStatement, Block, ConstantVariableDeclaration,
    ConstructorDeclaration, ContractKind, ContractPart, ContractStatement, ElementaryTypeName,
    EnumDeclaration, ErrorDeclaration, EventDefinition, ExperimentalPragmaStatement, Expression,
    FallbackDeclaration, FunctionDeclaration, Identifier, ImportStatement, ImportSymbol,
    InheritanceSpecifier, ModifierDeclaration, ModifierInvocation, Parameter, PragmaStatement,
    ReceiveDeclaration, SourceUnit, StateMutability, StateVariableDeclaration,
    StructDeclaration, UserDefinedTypeName, UserDefinedValueTypeDeclaration, UsingStatement,
    VersionLiteral, Visibility,
};
use sol_ir::{Span, TokenKind};

use crate::context::ParseContext;
use crate::error::ErrorContext;
use crate::literal::string_value;
use crate::recovery::{Rule, TokenSet};
use crate::{one_of, ParseError, ParseOutcome, Parser};

/// Attributes shared by functions, constructors, receive and fallback.
#[derive(Default)]
struct FunctionAttributes {
    visibility: Option<Visibility>,
    state_mutability: Option<StateMutability>,
    modifiers: Vec<ModifierInvocation>,
    is_virtual: bool,
    overrides: Option<Vec<UserDefinedTypeName>>,
}

impl Parser<'_> {
    /// Anything allowed at file level.
    pub(crate) fn parse_source_unit(&mut self) -> ParseOutcome<SourceUnit> {
        self.labeled(Rule::SourceUnit, |p| {
            one_of!(
                p,
                p.parse_pragma(),
                p.parse_import().map(SourceUnit::Import),
                p.parse_contract().map(SourceUnit::Contract),
                p.parse_free_function().map(SourceUnit::Function),
                p.parse_struct().map(SourceUnit::Struct),
                p.parse_enum().map(SourceUnit::Enum),
                p.parse_event().map(SourceUnit::Event),
                p.parse_error_definition().map(SourceUnit::Error),
                p.parse_using().map(SourceUnit::Using),
                p.parse_user_defined_value_type()
                    .map(SourceUnit::UserDefinedValueType),
                p.attempt(|p| {
                    let start = p.position();
                    let result = p.parse_file_constant();
                    p.outcome_from(start, result)
                })
                .map(SourceUnit::Constant),
            )
        })
    }

    /// Run `f` if the current token is `keyword`, otherwise fail without
    /// consuming. `f` starts at the keyword.
    fn keyword_rule<T>(
        &mut self,
        keyword: TokenKind,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> ParseOutcome<T> {
        let start = self.position();
        if !self.check(keyword) {
            return ParseOutcome::empty_err(TokenSet::single(keyword), start);
        }
        let result = f(self);
        self.outcome_from(start, result).with_error_context(context)
    }

    /// Like [`Self::keyword_rule`] for a contextual keyword, which is an
    /// identifier spelled `word` followed by a token of kind `next`.
    fn contextual_rule<T>(
        &mut self,
        word: &str,
        next: TokenKind,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> ParseOutcome<T> {
        let start = self.position();
        if !(self.check_ident_text(word) && self.peek_kind(1) == next) {
            return ParseOutcome::empty_err(TokenSet::new(), start);
        }
        let result = f(self);
        self.outcome_from(start, result).with_error_context(context)
    }

    // Pragmas

    /// `pragma name value ;`
    fn parse_pragma(&mut self) -> ParseOutcome<SourceUnit> {
        self.keyword_rule(TokenKind::Pragma, ErrorContext::Pragma, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            if name == "abicoder" {
                let (version, version_span) = p.expect_ident()?;
                p.expect(TokenKind::Semicolon)?;
                Ok(SourceUnit::AbiCoderPragma(AbiCoderPragmaStatement {
                    version: Identifier {
                        name: version,
                        span: version_span,
                    },
                    span: p.span_from(start),
                }))
            } else if name == "experimental" {
                let text = p.current_text();
                let feature = if p.eat(TokenKind::Ident).is_some() {
                    text.to_string()
                } else {
                    p.expect(TokenKind::String)?;
                    string_value(text).1
                };
                p.expect(TokenKind::Semicolon)?;
                Ok(SourceUnit::ExperimentalPragma(ExperimentalPragmaStatement {
                    feature,
                    span: p.span_from(start),
                }))
            } else {
                p.parse_pragma_value(start, name).map(SourceUnit::Pragma)
            }
        })
    }

    /// Raw pragma value up to `;`, with version constraints picked out.
    fn parse_pragma_value(
        &mut self,
        start: Span,
        name: String,
    ) -> Result<PragmaStatement, ParseError> {
        let value_start = self.current_span().start;
        while !matches!(self.current_kind(), TokenKind::Semicolon | TokenKind::Eof) {
            self.advance();
        }
        let value_end = self.previous_span().end.max(value_start);
        let value = Span::new(value_start, value_end).slice(self.source()).to_string();
        self.expect(TokenKind::Semicolon)?;

        let mut versions = version_literals(&value, value_start).into_iter();
        Ok(PragmaStatement {
            name,
            start_version: versions.next(),
            end_version: versions.next(),
            value,
            span: self.span_from(start),
        })
    }

    // Imports

    /// `import "path" [as A];`, `import * as A from "path";`,
    /// `import {a, b as c} from "path";`
    pub(crate) fn parse_import(&mut self) -> ParseOutcome<ImportStatement> {
        self.keyword_rule(TokenKind::Import, ErrorContext::Import, |p| {
            let start = p.advance();

            if p.check(TokenKind::String) {
                let from = p.expect_string()?;
                let alias = if p.eat(TokenKind::As).is_some() {
                    Some(p.expect_ident()?.0)
                } else {
                    None
                };
                p.expect(TokenKind::Semicolon)?;
                return Ok(ImportStatement {
                    from,
                    alias,
                    symbols: None,
                    span: p.span_from(start),
                });
            }

            let (alias, symbols) = if p.eat(TokenKind::Star).is_some() {
                p.expect(TokenKind::As)?;
                (Some(p.expect_ident()?.0), None)
            } else if p.eat(TokenKind::LBrace).is_some() {
                let symbols = p.series(TokenKind::RBrace, |p| {
                    let (name, name_span) = p.expect_ident()?;
                    let alias = if p.eat(TokenKind::As).is_some() {
                        Some(p.expect_ident()?.0)
                    } else {
                        None
                    };
                    Ok(ImportSymbol {
                        name,
                        alias,
                        span: p.span_from(name_span),
                    })
                })?;
                (None, Some(symbols))
            } else {
                return Err(p.error_here());
            };

            p.expect_ident_text("from")?;
            let from = p.expect_string()?;
            p.expect(TokenKind::Semicolon)?;
            Ok(ImportStatement {
                from,
                alias,
                symbols,
                span: p.span_from(start),
            })
        })
    }

    /// A string literal's decoded value.
    fn expect_string(&mut self) -> Result<String, ParseError> {
        let text = self.current_text();
        self.expect(TokenKind::String)?;
        Ok(string_value(text).1)
    }

    // Contracts

    /// `[abstract] (contract | interface | library) Name [is Base, ...] { member* }`
    fn parse_contract(&mut self) -> ParseOutcome<ContractStatement> {
        let start_pos = self.position();
        let starts_contract = matches!(
            self.current_kind(),
            TokenKind::Abstract | TokenKind::Contract | TokenKind::Interface | TokenKind::Library
        );
        if !starts_contract {
            let expected = TokenSet::new()
                .with(TokenKind::Abstract)
                .with(TokenKind::Contract)
                .with(TokenKind::Interface)
                .with(TokenKind::Library);
            for kind in expected.iter() {
                self.check(kind);
            }
            return ParseOutcome::empty_err(expected, start_pos);
        }
        let result = self.parse_contract_definition();
        self.outcome_from(start_pos, result)
            .with_error_context(ErrorContext::Contract)
    }

    fn parse_contract_definition(&mut self) -> Result<ContractStatement, ParseError> {
        let start = self.current_span();
        let is_abstract = self.eat(TokenKind::Abstract).is_some();
        let kind = if self.eat(TokenKind::Contract).is_some() {
            ContractKind::Contract
        } else if self.eat(TokenKind::Interface).is_some() {
            ContractKind::Interface
        } else if self.eat(TokenKind::Library).is_some() {
            ContractKind::Library
        } else {
            return Err(self.error_here());
        };
        let (name, _) = self.expect_ident()?;

        let mut is = Vec::new();
        if self.eat(TokenKind::Is).is_some() {
            loop {
                let path = self.parse_user_type_path()?;
                let arguments = self.parse_optional_arguments()?;
                is.push(InheritanceSpecifier {
                    name: path.name_path,
                    arguments,
                    span: self.span_from(path.span),
                });
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        self.expect(TokenKind::LBrace)?;
        let mut body = Vec::new();
        while self.eat(TokenKind::RBrace).is_none() {
            let outcome = self.parse_contract_part();
            body.push(self.finish(outcome)?);
        }

        Ok(ContractStatement {
            name,
            kind,
            is_abstract,
            is,
            body,
            span: self.span_from(start),
        })
    }

    /// Anything allowed inside a contract body.
    fn parse_contract_part(&mut self) -> ParseOutcome<ContractPart> {
        self.labeled(Rule::ContractMember, |p| {
            // `function (...) internal f;` is a state variable of function
            // type, not a legacy fallback.
            if p.current_kind() == TokenKind::Function && p.peek_kind(1) == TokenKind::LParen {
                let outcome = p.attempt(Self::parse_state_variable_outcome);
                if outcome.is_ok() {
                    return outcome.map(ContractPart::StateVariable);
                }
            }
            one_of!(
                p,
                p.parse_contract_function(),
                p.parse_constructor().map(ContractPart::Constructor),
                p.parse_receive().map(ContractPart::Receive),
                p.parse_fallback().map(ContractPart::Fallback),
                p.parse_modifier().map(ContractPart::Modifier),
                p.parse_event().map(ContractPart::Event),
                p.parse_error_definition().map(ContractPart::Error),
                p.parse_struct().map(ContractPart::Struct),
                p.parse_enum().map(ContractPart::Enum),
                p.parse_using().map(ContractPart::Using),
                p.parse_user_defined_value_type()
                    .map(ContractPart::UserDefinedValueType),
                p.attempt(Self::parse_state_variable_outcome)
                    .map(ContractPart::StateVariable),
            )
        })
    }

    // Function-like members

    /// `function` inside a contract: a named function, or the pre-0.6
    /// unnamed fallback `function() { ... }`.
    fn parse_contract_function(&mut self) -> ParseOutcome<ContractPart> {
        self.keyword_rule(TokenKind::Function, ErrorContext::FunctionDef, |p| {
            let start = p.advance();
            if p.current_kind() == TokenKind::LParen {
                return p.parse_fallback_rest(start).map(ContractPart::Fallback);
            }
            let (name, _) = p.expect_ident()?;
            p.parse_function_rest(start, name).map(ContractPart::Function)
        })
    }

    /// A function at file level; it must have a name.
    fn parse_free_function(&mut self) -> ParseOutcome<FunctionDeclaration> {
        self.keyword_rule(TokenKind::Function, ErrorContext::FunctionDef, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            p.parse_function_rest(start, name)
        })
    }

    /// `(params) attributes [returns (params)] (block | ;)` after the name.
    fn parse_function_rest(
        &mut self,
        start: Span,
        name: String,
    ) -> Result<FunctionDeclaration, ParseError> {
        let parameters = self.parse_parameter_list(false)?;
        let attributes = self.parse_function_attributes()?;
        let return_parameters = self.parse_returns()?;
        let body = self.parse_optional_body()?;
        Ok(FunctionDeclaration {
            name,
            parameters,
            return_parameters,
            visibility: attributes.visibility,
            state_mutability: attributes.state_mutability,
            modifiers: attributes.modifiers,
            is_virtual: attributes.is_virtual,
            overrides: attributes.overrides,
            body,
            span: self.span_from(start),
        })
    }

    /// `constructor (params) attributes block`
    fn parse_constructor(&mut self) -> ParseOutcome<ConstructorDeclaration> {
        self.keyword_rule(TokenKind::Constructor, ErrorContext::FunctionDef, |p| {
            let start = p.advance();
            let parameters = p.parse_parameter_list(false)?;
            let attributes = p.parse_function_attributes()?;
            let body = p.parse_function_body()?;
            Ok(ConstructorDeclaration {
                parameters,
                modifiers: attributes.modifiers,
                visibility: attributes.visibility,
                state_mutability: attributes.state_mutability,
                body,
                span: p.span_from(start),
            })
        })
    }

    /// `receive () attributes (block | ;)`
    fn parse_receive(&mut self) -> ParseOutcome<ReceiveDeclaration> {
        self.contextual_rule("receive", TokenKind::LParen, ErrorContext::FunctionDef, |p| {
            let start = p.advance();
            p.expect(TokenKind::LParen)?;
            p.expect(TokenKind::RParen)?;
            let attributes = p.parse_function_attributes()?;
            let body = p.parse_optional_body()?;
            Ok(ReceiveDeclaration {
                modifiers: attributes.modifiers,
                visibility: attributes.visibility,
                state_mutability: attributes.state_mutability,
                is_virtual: attributes.is_virtual,
                overrides: attributes.overrides,
                body,
                span: p.span_from(start),
            })
        })
    }

    /// `fallback (params) attributes [returns (params)] (block | ;)`
    fn parse_fallback(&mut self) -> ParseOutcome<FallbackDeclaration> {
        self.contextual_rule("fallback", TokenKind::LParen, ErrorContext::FunctionDef, |p| {
            let start = p.advance();
            p.parse_fallback_rest(start)
        })
    }

    fn parse_fallback_rest(&mut self, start: Span) -> Result<FallbackDeclaration, ParseError> {
        let parameters = self.parse_parameter_list(false)?;
        let attributes = self.parse_function_attributes()?;
        let return_parameters = self.parse_returns()?;
        let body = self.parse_optional_body()?;
        Ok(FallbackDeclaration {
            parameters,
            return_parameters,
            modifiers: attributes.modifiers,
            visibility: attributes.visibility,
            state_mutability: attributes.state_mutability,
            is_virtual: attributes.is_virtual,
            overrides: attributes.overrides,
            body,
            span: self.span_from(start),
        })
    }

    /// `modifier Name [(params)] {virtual | override} (block | ;)`
    fn parse_modifier(&mut self) -> ParseOutcome<ModifierDeclaration> {
        self.keyword_rule(TokenKind::Modifier, ErrorContext::ModifierDef, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            let parameters = if p.current_kind() == TokenKind::LParen {
                Some(p.parse_parameter_list(false)?)
            } else {
                None
            };
            let mut is_virtual = false;
            let mut overrides = None;
            loop {
                if p.eat(TokenKind::Virtual).is_some() {
                    is_virtual = true;
                } else if p.eat(TokenKind::Override).is_some() {
                    overrides = Some(p.parse_override_list()?);
                } else {
                    break;
                }
            }
            let body = p.parse_optional_body()?;
            Ok(ModifierDeclaration {
                name,
                parameters,
                is_virtual,
                overrides,
                body,
                span: p.span_from(start),
            })
        })
    }

    /// Visibility, mutability, `virtual`, `override` and modifier
    /// invocations, in any order.
    fn parse_function_attributes(&mut self) -> Result<FunctionAttributes, ParseError> {
        let mut attributes = FunctionAttributes::default();
        loop {
            if let Some(visibility) = self.parse_visibility() {
                attributes.visibility = Some(visibility);
            } else if let Some(mutability) = self.parse_state_mutability() {
                attributes.state_mutability = Some(mutability);
            } else if self.eat(TokenKind::Virtual).is_some() {
                attributes.is_virtual = true;
            } else if self.eat(TokenKind::Override).is_some() {
                attributes.overrides = Some(self.parse_override_list()?);
            } else if self.current_kind() == TokenKind::Ident {
                let path = self.parse_user_type_path()?;
                let arguments = self.parse_optional_arguments()?;
                attributes.modifiers.push(ModifierInvocation {
                    name: path.name_path,
                    arguments,
                    span: self.span_from(path.span),
                });
            } else {
                return Ok(attributes);
            }
        }
    }

    /// `[( Path {, Path} )]` after `override`.
    fn parse_override_list(&mut self) -> Result<Vec<UserDefinedTypeName>, ParseError> {
        if self.eat(TokenKind::LParen).is_none() {
            return Ok(Vec::new());
        }
        self.series(TokenKind::RParen, Self::parse_user_type_path)
    }

    /// `[returns (params)]`
    fn parse_returns(&mut self) -> Result<Option<Vec<Parameter>>, ParseError> {
        if self.eat(TokenKind::Returns).is_some() {
            self.parse_parameter_list(false).map(Some)
        } else {
            Ok(None)
        }
    }

    /// `;` for a declaration without implementation, or a body.
    fn parse_optional_body(&mut self) -> Result<Option<Block>, ParseError> {
        if self.eat(TokenKind::Semicolon).is_some() {
            Ok(None)
        } else {
            self.parse_function_body().map(Some)
        }
    }

    /// The block of a function-like member. Tolerant recovery applies
    /// inside it.
    fn parse_function_body(&mut self) -> Result<Block, ParseError> {
        self.with_context(ParseContext::IN_FUNCTION_BODY, Self::parse_block)
    }

    /// `[(args)]` after an inheritance specifier or modifier name.
    fn parse_optional_arguments(&mut self) -> Result<Option<Vec<Expression>>, ParseError> {
        if self.eat(TokenKind::LParen).is_none() {
            return Ok(None);
        }
        self.series(TokenKind::RParen, Self::parse_expr)
            .map(Some)
            .map_err(|err| err.with_context(ErrorContext::Arguments))
    }

    /// `Name {. Name}`
    fn parse_user_type_path(&mut self) -> Result<UserDefinedTypeName, ParseError> {
        let (mut name_path, start) = self.expect_ident()?;
        while self.current_kind() == TokenKind::Dot {
            self.advance();
            let (segment, _) = self.expect_ident()?;
            name_path.push('.');
            name_path.push_str(&segment);
        }
        Ok(UserDefinedTypeName {
            name_path,
            span: self.span_from(start),
        })
    }

    // Other declarations

    /// `event Name (params) [anonymous] ;`
    fn parse_event(&mut self) -> ParseOutcome<EventDefinition> {
        self.keyword_rule(TokenKind::Event, ErrorContext::EventDef, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            let parameters = p.parse_parameter_list(true)?;
            let is_anonymous = p.check_ident_text("anonymous");
            if is_anonymous {
                p.advance();
            }
            p.expect(TokenKind::Semicolon)?;
            Ok(EventDefinition {
                name,
                parameters,
                is_anonymous,
                span: p.span_from(start),
            })
        })
    }

    /// `error Name (params) ;`
    fn parse_error_definition(&mut self) -> ParseOutcome<ErrorDeclaration> {
        self.contextual_rule("error", TokenKind::Ident, ErrorContext::ErrorDef, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            let parameters = p.parse_parameter_list(false)?;
            p.expect(TokenKind::Semicolon)?;
            Ok(ErrorDeclaration {
                name,
                parameters,
                span: p.span_from(start),
            })
        })
    }

    /// `struct Name { (type [location] name ;)* }`
    fn parse_struct(&mut self) -> ParseOutcome<StructDeclaration> {
        self.keyword_rule(TokenKind::Struct, ErrorContext::StructDef, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            p.expect(TokenKind::LBrace)?;
            let mut members = Vec::new();
            while p.eat(TokenKind::RBrace).is_none() {
                members.push(p.parse_variable_declaration()?);
                p.expect(TokenKind::Semicolon)?;
            }
            Ok(StructDeclaration {
                name,
                members,
                span: p.span_from(start),
            })
        })
    }

    /// `enum Name { A, B, C }`
    fn parse_enum(&mut self) -> ParseOutcome<EnumDeclaration> {
        self.keyword_rule(TokenKind::Enum, ErrorContext::EnumDef, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            p.expect(TokenKind::LBrace)?;
            let members = p.series(TokenKind::RBrace, |p| {
                let (name, span) = p.expect_ident()?;
                Ok(Identifier { name, span })
            })?;
            Ok(EnumDeclaration {
                name,
                members,
                span: p.span_from(start),
            })
        })
    }

    /// `using (Lib | {f, g}) for (* | type) [global] ;`
    fn parse_using(&mut self) -> ParseOutcome<UsingStatement> {
        self.keyword_rule(TokenKind::Using, ErrorContext::UsingDirective, |p| {
            let start = p.advance();
            let (library, functions) = if p.eat(TokenKind::LBrace).is_some() {
                let functions = p.series(TokenKind::RBrace, |p| {
                    p.parse_user_type_path().map(|path| path.name_path)
                })?;
                (None, functions)
            } else {
                (Some(p.parse_user_type_path()?.name_path), Vec::new())
            };

            p.expect(TokenKind::For)?;
            let for_type = if p.eat(TokenKind::Star).is_some() {
                None
            } else {
                let outcome = p.parse_type_name();
                Some(p.finish(outcome)?)
            };
            let is_global = p.check_ident_text("global");
            if is_global {
                p.advance();
            }
            p.expect(TokenKind::Semicolon)?;

            Ok(UsingStatement {
                library,
                functions,
                for_type,
                is_global,
                span: p.span_from(start),
            })
        })
    }

    /// `type Name is elementary-type ;`
    fn parse_user_defined_value_type(
        &mut self,
    ) -> ParseOutcome<UserDefinedValueTypeDeclaration> {
        // `type(C).name` is an expression, never a declaration.
        if self.current_kind() == TokenKind::Type && self.peek_kind(1) != TokenKind::Ident {
            return ParseOutcome::empty_err(TokenSet::new(), self.position());
        }
        self.keyword_rule(TokenKind::Type, ErrorContext::TypeName, |p| {
            let start = p.advance();
            let (name, _) = p.expect_ident()?;
            p.expect(TokenKind::Is)?;
            let underlying_type = p.parse_elementary_type()?;
            p.expect(TokenKind::Semicolon)?;
            Ok(UserDefinedValueTypeDeclaration {
                name,
                underlying_type,
                span: p.span_from(start),
            })
        })
    }

    /// A built-in value type, such as the underlying type of a user-defined
    /// value type.
    fn parse_elementary_type(&mut self) -> Result<ElementaryTypeName, ParseError> {
        let text = self.current_text();
        if self.current_kind() != TokenKind::Ident || !is_elementary_type_name(text) {
            self.furthest.record_rule(self.position(), Rule::TypeName);
            return Err(self.error_here());
        }
        let start = self.advance();
        let state_mutability = (text == "address" && self.eat(TokenKind::Payable).is_some())
            .then_some(StateMutability::Payable);
        Ok(ElementaryTypeName {
            name: text.to_string(),
            state_mutability,
            span: self.span_from(start),
        })
    }

    // Variables

    fn parse_state_variable_outcome(&mut self) -> ParseOutcome<StateVariableDeclaration> {
        let start = self.position();
        let result = self
            .parse_state_variable()
            .map_err(|err| err.with_context(ErrorContext::StateVariable));
        self.outcome_from(start, result)
    }

    /// `type {visibility | constant | immutable | override} name [= expr] ;`
    fn parse_state_variable(&mut self) -> Result<StateVariableDeclaration, ParseError> {
        let start = self.current_span();
        let outcome = self.parse_type_name();
        let type_name = self.finish(outcome)?;

        let mut visibility = None;
        let mut is_constant = false;
        let mut is_immutable = false;
        let mut overrides = None;
        loop {
            if let Some(v) = self.parse_visibility() {
                visibility = Some(v);
            } else if self.eat(TokenKind::Constant).is_some() {
                is_constant = true;
            } else if self.eat(TokenKind::Immutable).is_some() {
                is_immutable = true;
            } else if self.eat(TokenKind::Override).is_some() {
                overrides = Some(self.parse_override_list()?);
            } else {
                break;
            }
        }

        let (name, _) = self.expect_ident()?;
        let value = if self.eat(TokenKind::Eq).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;

        Ok(StateVariableDeclaration {
            type_name,
            name,
            visibility,
            is_constant,
            is_immutable,
            overrides,
            value,
            span: self.span_from(start),
        })
    }

    /// `type constant name = expr ;` at file level.
    fn parse_file_constant(&mut self) -> Result<ConstantVariableDeclaration, ParseError> {
        let start = self.current_span();
        let outcome = self.parse_type_name();
        let type_name = self.finish(outcome)?;
        self.expect(TokenKind::Constant)?;
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(ConstantVariableDeclaration {
            type_name,
            name,
            value,
            span: self.span_from(start),
        })
    }
}

/// Version constraints in a pragma value: `^0.8.0`, `>=0.4.22 <0.9.0`.
///
/// `base` is the source offset of `value`, so the literals get source spans.
/// Text that is not a version (`||`, `-` in ranges) is skipped.
fn version_literals(value: &str, base: u32) -> Vec<VersionLiteral> {
    const OPERATORS: [&str; 7] = [">=", "<=", "^", "~", ">", "<", "="];

    let bytes = value.as_bytes();
    let offset = |i: usize| base.saturating_add(u32::try_from(i).unwrap_or(u32::MAX));
    let mut literals = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        let start = i;
        let operator = OPERATORS
            .iter()
            .find(|op| bytes[i..].starts_with(op.as_bytes()))
            .map(|op| (*op).to_string());
        if let Some(op) = &operator {
            i += op.len();
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
        }
        let version_start = i;
        while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b'.' | b'x' | b'X' | b'*') {
            i += 1;
        }
        if i == version_start {
            i = start + 1;
            continue;
        }
        literals.push(VersionLiteral {
            operator,
            version: value[version_start..i].to_string(),
            span: Span::new(offset(start), offset(i)),
        });
    }

    literals
}

#[cfg(test)]
mod tests;
