//! Statement nodes.

use serde::Serialize;

use super::{spanned_enum, Expression, Parameter, StorageLocation, TypeName};
use crate::Span;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Block(Block),
    Expression(ExpressionStatement),
    VariableDeclaration(VariableDeclarationStatement),
    If(IfStatement),
    For(ForStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    Try(TryStatement),
    Return(ReturnStatement),
    Emit(EmitStatement),
    Revert(RevertStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Throw(ThrowStatement),
    Unchecked(UncheckedStatement),
    InlineAssembly(InlineAssemblyStatement),
    Placeholder(PlaceholderStatement),
    Incomplete(IncompleteStatement),
}

spanned_enum!(Statement {
    Block,
    Expression,
    VariableDeclaration,
    If,
    For,
    While,
    DoWhile,
    Try,
    Return,
    Emit,
    Revert,
    Break,
    Continue,
    Throw,
    Unchecked,
    InlineAssembly,
    Placeholder,
    Incomplete,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Block {
    pub body: Vec<Statement>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    pub expression: Expression,
    #[serde(flatten)]
    pub span: Span,
}

/// `T [location] name`, used by local declarations and struct members.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub type_name: TypeName,
    pub storage_location: Option<StorageLocation>,
    pub name: String,
    #[serde(flatten)]
    pub span: Span,
}

/// `T x = e;` or `(T a, , U b) = e;`. Skipped tuple slots are `None`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarationStatement {
    pub declarations: Vec<Option<VariableDeclaration>>,
    pub initial_value: Option<Expression>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForStatement {
    pub init: Option<Box<Statement>>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub test: Expression,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TryStatement {
    pub expression: Expression,
    pub returns: Option<Vec<Parameter>>,
    pub body: Block,
    #[serde(rename = "catchClauses")]
    pub catch_clauses: Vec<CatchClause>,
    #[serde(flatten)]
    pub span: Span,
}

/// `catch Error(string memory reason) { ... }`; `kind` is `None` for the
/// bare and `catch (bytes memory)` forms.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CatchClause {
    pub kind: Option<String>,
    pub parameters: Option<Vec<Parameter>>,
    pub body: Block,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
    #[serde(flatten)]
    pub span: Span,
}

/// `emit Event(args);`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EmitStatement {
    pub expression: Expression,
    #[serde(flatten)]
    pub span: Span,
}

/// `revert CustomError(args);`. The function-call spelling `revert("...")`
/// is an ordinary [`ExpressionStatement`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct RevertStatement {
    pub expression: Expression,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct BreakStatement {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ContinueStatement {
    #[serde(flatten)]
    pub span: Span,
}

/// Legacy `throw;`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ThrowStatement {
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UncheckedStatement {
    pub body: Block,
    #[serde(flatten)]
    pub span: Span,
}

/// `assembly ["evmasm"] [("memory-safe")] { ... }`. The Yul body is not
/// parsed; `body` is its source text, braces included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct InlineAssemblyStatement {
    pub language: Option<String>,
    pub flags: Vec<String>,
    pub body: String,
    #[serde(flatten)]
    pub span: Span,
}

/// `_;` inside a modifier body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct PlaceholderStatement {
    #[serde(flatten)]
    pub span: Span,
}

/// Tokens in a function body that no statement rule could match, kept in
/// tolerant mode instead of failing the parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct IncompleteStatement {
    #[serde(flatten)]
    pub span: Span,
}
