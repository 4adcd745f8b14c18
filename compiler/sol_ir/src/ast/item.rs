//! Top-level units and contract members.

use serde::Serialize;

use super::{
    spanned_enum, Block, ElementaryTypeName, Expression, Identifier, Parameter,
    StateMutability, TypeName, UserDefinedTypeName, VariableDeclaration, Visibility,
};
use crate::Span;

/// Anything allowed at file level.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceUnit {
    Pragma(PragmaStatement),
    AbiCoderPragma(AbiCoderPragmaStatement),
    ExperimentalPragma(ExperimentalPragmaStatement),
    Import(ImportStatement),
    Contract(ContractStatement),
    Function(FunctionDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Error(ErrorDeclaration),
    Event(EventDefinition),
    Using(UsingStatement),
    UserDefinedValueType(UserDefinedValueTypeDeclaration),
    Constant(ConstantVariableDeclaration),
}

spanned_enum!(SourceUnit {
    Pragma,
    AbiCoderPragma,
    ExperimentalPragma,
    Import,
    Contract,
    Function,
    Struct,
    Enum,
    Error,
    Event,
    Using,
    UserDefinedValueType,
    Constant,
});

/// Anything allowed inside a contract, interface or library body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContractPart {
    StateVariable(StateVariableDeclaration),
    Constructor(ConstructorDeclaration),
    Receive(ReceiveDeclaration),
    Fallback(FallbackDeclaration),
    Function(FunctionDeclaration),
    Modifier(ModifierDeclaration),
    Event(EventDefinition),
    Error(ErrorDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Using(UsingStatement),
    UserDefinedValueType(UserDefinedValueTypeDeclaration),
}

spanned_enum!(ContractPart {
    StateVariable,
    Constructor,
    Receive,
    Fallback,
    Function,
    Modifier,
    Event,
    Error,
    Struct,
    Enum,
    Using,
    UserDefinedValueType,
});

/// One side of a version constraint: `^0.8.0`, `>=0.4.22`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct VersionLiteral {
    pub operator: Option<String>,
    pub version: String,
    #[serde(flatten)]
    pub span: Span,
}

/// `pragma solidity >=0.4.22 <0.9.0;` and any other unrecognised pragma.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct PragmaStatement {
    pub name: String,
    /// Everything between the name and the `;`, verbatim.
    pub value: String,
    pub start_version: Option<VersionLiteral>,
    pub end_version: Option<VersionLiteral>,
    #[serde(flatten)]
    pub span: Span,
}

/// `pragma abicoder v2;`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct AbiCoderPragmaStatement {
    pub version: Identifier,
    #[serde(flatten)]
    pub span: Span,
}

/// `pragma experimental ABIEncoderV2;`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ExperimentalPragmaStatement {
    pub feature: String,
    #[serde(flatten)]
    pub span: Span,
}

/// Every import form:
///
/// - `import "a.sol";` and `import "a.sol" as A;`
/// - `import * as A from "a.sol";`
/// - `import {x, y as z} from "a.sol";`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ImportStatement {
    pub from: String,
    pub alias: Option<String>,
    pub symbols: Option<Vec<ImportSymbol>>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ImportSymbol {
    pub name: String,
    pub alias: Option<String>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    Contract,
    Interface,
    Library,
}

/// `is Base(1, 2)`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct InheritanceSpecifier {
    pub name: String,
    pub arguments: Option<Vec<Expression>>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ContractStatement {
    pub name: String,
    pub kind: ContractKind,
    pub is_abstract: bool,
    pub is: Vec<InheritanceSpecifier>,
    /// Members in source order.
    pub body: Vec<ContractPart>,
    #[serde(flatten)]
    pub span: Span,
}

/// A modifier applied to a function, or a base constructor call on a
/// constructor: `onlyOwner`, `Base(x)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ModifierInvocation {
    pub name: String,
    pub arguments: Option<Vec<Expression>>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct StateVariableDeclaration {
    pub type_name: TypeName,
    pub name: String,
    pub visibility: Option<Visibility>,
    pub is_constant: bool,
    pub is_immutable: bool,
    /// `override` alone is `Some([])`.
    #[serde(rename = "override")]
    pub overrides: Option<Vec<UserDefinedTypeName>>,
    pub value: Option<Expression>,
    #[serde(flatten)]
    pub span: Span,
}

/// `uint constant X = 1;` at file level.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ConstantVariableDeclaration {
    pub type_name: TypeName,
    pub name: String,
    pub value: Expression,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ConstructorDeclaration {
    pub parameters: Vec<Parameter>,
    pub modifiers: Vec<ModifierInvocation>,
    pub visibility: Option<Visibility>,
    pub state_mutability: Option<StateMutability>,
    pub body: Block,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReceiveDeclaration {
    pub modifiers: Vec<ModifierInvocation>,
    pub visibility: Option<Visibility>,
    pub state_mutability: Option<StateMutability>,
    pub is_virtual: bool,
    #[serde(rename = "override")]
    pub overrides: Option<Vec<UserDefinedTypeName>>,
    pub body: Option<Block>,
    #[serde(flatten)]
    pub span: Span,
}

/// `fallback(...)`, and the pre-0.6 unnamed `function() { ... }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FallbackDeclaration {
    pub parameters: Vec<Parameter>,
    pub return_parameters: Option<Vec<Parameter>>,
    pub modifiers: Vec<ModifierInvocation>,
    pub visibility: Option<Visibility>,
    pub state_mutability: Option<StateMutability>,
    pub is_virtual: bool,
    #[serde(rename = "override")]
    pub overrides: Option<Vec<UserDefinedTypeName>>,
    pub body: Option<Block>,
    #[serde(flatten)]
    pub span: Span,
}

/// A named function, inside a contract or at file level. `body` is `None`
/// for declarations ending in `;`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_parameters: Option<Vec<Parameter>>,
    pub visibility: Option<Visibility>,
    pub state_mutability: Option<StateMutability>,
    pub modifiers: Vec<ModifierInvocation>,
    pub is_virtual: bool,
    #[serde(rename = "override")]
    pub overrides: Option<Vec<UserDefinedTypeName>>,
    pub body: Option<Block>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ModifierDeclaration {
    pub name: String,
    /// `None` when the parameter list is omitted entirely.
    pub parameters: Option<Vec<Parameter>>,
    pub is_virtual: bool,
    #[serde(rename = "override")]
    pub overrides: Option<Vec<UserDefinedTypeName>>,
    pub body: Option<Block>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EventDefinition {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub is_anonymous: bool,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ErrorDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct StructDeclaration {
    pub name: String,
    pub members: Vec<VariableDeclaration>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EnumDeclaration {
    pub name: String,
    pub members: Vec<Identifier>,
    #[serde(flatten)]
    pub span: Span,
}

/// `using L for T;`, `using {f, g} for T global;`, `using L for *;`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UsingStatement {
    /// Library name, or `None` for the `{f, g}` function-list form.
    pub library: Option<String>,
    pub functions: Vec<String>,
    /// `None` for `*`.
    #[serde(rename = "for")]
    pub for_type: Option<TypeName>,
    pub is_global: bool,
    #[serde(flatten)]
    pub span: Span,
}

/// `type Price is uint128;`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UserDefinedValueTypeDeclaration {
    pub name: String,
    pub underlying_type: ElementaryTypeName,
    #[serde(flatten)]
    pub span: Span,
}
