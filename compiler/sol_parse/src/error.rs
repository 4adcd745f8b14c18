//! Parse error types.
//!
//! [`ParseError`] is what grammar rules pass around while parsing. Callers
//! only ever see a [`SyntaxError`], built from the furthest point any
//! alternative reached (see `furthest.rs`), with the offset resolved to a
//! line and column.

use sol_ir::{Location, Span};

use crate::recovery::{describe_kind, join_alternatives, RuleSet, TokenSet};

/// What was being parsed when a hard error occurred.
///
/// Only used for `while parsing ...` context in traces and in
/// [`ParseError::context`]; the user-facing message never carries it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Pragma,
    Import,
    Contract,
    FunctionDef,
    ModifierDef,
    EventDef,
    ErrorDef,
    StructDef,
    EnumDef,
    UsingDirective,
    StateVariable,
    Parameters,
    Block,
    IfStatement,
    ForLoop,
    WhileLoop,
    TryStatement,
    InlineAssembly,
    Expression,
    Arguments,
    TypeName,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Pragma => "a pragma directive",
            Self::Import => "an import directive",
            Self::Contract => "a contract definition",
            Self::FunctionDef => "a function definition",
            Self::ModifierDef => "a modifier definition",
            Self::EventDef => "an event definition",
            Self::ErrorDef => "an error definition",
            Self::StructDef => "a struct definition",
            Self::EnumDef => "an enum definition",
            Self::UsingDirective => "a using directive",
            Self::StateVariable => "a state variable declaration",
            Self::Parameters => "a parameter list",
            Self::Block => "a block",
            Self::IfStatement => "an if statement",
            Self::ForLoop => "a for loop",
            Self::WhileLoop => "a while loop",
            Self::TryStatement => "a try statement",
            Self::InlineAssembly => "an assembly block",
            Self::Expression => "an expression",
            Self::Arguments => "call arguments",
            Self::TypeName => "a type name",
        }
    }
}

/// A hard failure inside a grammar rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    /// "while parsing ..." context, set by the first enclosing rule that
    /// attaches one.
    pub context: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
            context: None,
        }
    }

    /// "Expected X, Y, or Z but `found` found."
    pub fn expected(tokens: &TokenSet, rules: &RuleSet, found: &str, span: Span) -> Self {
        ParseError::new(expected_message(tokens, rules, found), span)
    }

    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(format!("while parsing {}", context.description()));
        }
        self
    }
}

/// Build the user-facing message for a failure at one position.
pub(crate) fn expected_message(tokens: &TokenSet, rules: &RuleSet, found: &str) -> String {
    let names: Vec<String> = rules
        .iter()
        .map(|rule| rule.description().to_string())
        .chain(tokens.iter().map(describe_kind))
        .collect();
    if names.is_empty() {
        format!("Unexpected {found}.")
    } else {
        format!("Expected {} but {found} found.", join_alternatives(&names))
    }
}

/// A parse failure as reported to callers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("SyntaxError: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub location: Location,
}
