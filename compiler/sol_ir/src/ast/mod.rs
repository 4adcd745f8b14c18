//! AST node types.
//!
//! A strict tree owned by [`Program`]: recursion goes through `Box`, there is
//! no sharing and no arena. Every node carries a [`Span`], and serializes as
//! a JSON object tagged with `"type": "<NodeName>"` plus flattened
//! `"start"`/`"end"` offsets.
//!
//! Category enums ([`SourceUnit`], [`ContractPart`], [`Statement`],
//! [`Expression`], [`TypeName`]) are `#[serde(untagged)]`; the tag comes from
//! the wrapped node struct so that a node serializes the same whether it
//! appears behind an enum or as a concrete field.

mod expr;
mod item;
mod operators;
mod stmt;
mod ty;

pub use expr::{
    AssignmentExpression, BinaryExpression, BooleanLiteral, CallArguments, CallExpression,
    CallOptionsExpression, ConditionalExpression, Expression, Identifier, IndexExpression,
    IndexRangeExpression, MemberExpression, NamedArgument, NewExpression, NumberLiteral,
    NumberValue, StringKind, StringLiteral, TupleExpression, UnaryExpression,
};
pub use item::{
    AbiCoderPragmaStatement, ConstantVariableDeclaration, ConstructorDeclaration, ContractKind,
    ContractPart, ContractStatement, EnumDeclaration, ErrorDeclaration, EventDefinition,
    ExperimentalPragmaStatement, FallbackDeclaration, FunctionDeclaration, ImportStatement,
    ImportSymbol, InheritanceSpecifier, ModifierDeclaration, ModifierInvocation, PragmaStatement,
    ReceiveDeclaration, SourceUnit, StateVariableDeclaration, StructDeclaration,
    UserDefinedValueTypeDeclaration, UsingStatement, VersionLiteral,
};
pub use operators::{AssignOp, BinaryOp, UnaryOp};
pub use stmt::{
    Block, BreakStatement, CatchClause, ContinueStatement, DoWhileStatement, EmitStatement,
    ExpressionStatement, ForStatement, IfStatement, IncompleteStatement,
    InlineAssemblyStatement, PlaceholderStatement, ReturnStatement, RevertStatement, Statement,
    ThrowStatement, TryStatement, UncheckedStatement, VariableDeclaration,
    VariableDeclarationStatement, WhileStatement,
};
pub use ty::{
    is_elementary_type_name, ArrayTypeName, ElementaryTypeName, FunctionTypeName, Mapping,
    TypeName, UserDefinedTypeName,
};

use serde::Serialize;

use crate::Span;

/// Anything with a source span.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// Implements [`Spanned`] for a category enum whose every variant wraps a
/// node struct with a `span` field.
macro_rules! spanned_enum {
    ($enum:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::ast::Spanned for $enum {
            fn span(&self) -> $crate::Span {
                match self {
                    $($enum::$variant(node) => node.span,)*
                }
            }
        }
    };
}
pub(crate) use spanned_enum;

/// Root of the tree. Its span covers the whole source.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<SourceUnit>,
    #[serde(flatten)]
    pub span: Span,
}

/// A function, event, error, try/catch or function-type parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Parameter {
    pub type_name: TypeName,
    pub storage_location: Option<StorageLocation>,
    pub name: Option<String>,
    /// Only ever set on event parameters.
    pub is_indexed: bool,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Internal,
    External,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Payable,
    /// Pre-0.5 spelling of `view` on functions.
    Constant,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageLocation {
    Memory,
    Storage,
    Calldata,
}

impl Spanned for Program {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests;
