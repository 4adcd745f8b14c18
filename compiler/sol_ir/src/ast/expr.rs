//! Expression nodes.

use serde::{Serialize, Serializer};

use super::{spanned_enum, AssignOp, BinaryOp, TypeName, UnaryOp};
use crate::Span;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    Member(MemberExpression),
    Index(IndexExpression),
    IndexRange(IndexRangeExpression),
    Call(CallExpression),
    CallOptions(CallOptionsExpression),
    Unary(UnaryExpression),
    Binary(BinaryExpression),
    Assignment(AssignmentExpression),
    Conditional(ConditionalExpression),
    Tuple(TupleExpression),
    New(NewExpression),
}

spanned_enum!(Expression {
    Identifier,
    NumberLiteral,
    StringLiteral,
    BooleanLiteral,
    Member,
    Index,
    IndexRange,
    Call,
    CallOptions,
    Unary,
    Binary,
    Assignment,
    Conditional,
    Tuple,
    New,
});

/// A bare name. Elementary type names used as conversions (`uint8(x)`,
/// `address(0)`, `payable(a)`, `type(C)`) are identifiers too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
    #[serde(flatten)]
    pub span: Span,
}

/// Numeric value of a literal with `_` separators removed.
///
/// Integers up to 128 bits are exact. Wider hex constants and fractional
/// or exponent forms fall back to `f64`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumberValue {
    Integer(u128),
    Float(f64),
}

impl Serialize for NumberValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            NumberValue::Integer(v) => serializer.serialize_u128(v),
            NumberValue::Float(v) => serializer.serialize_f64(v),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NumberLiteral {
    pub value: NumberValue,
    /// Source spelling, separators included.
    pub raw: String,
    /// `wei`, `ether`, `days`, ...
    pub subdenomination: Option<String>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StringKind {
    Plain,
    Hex,
    Unicode,
}

/// One or more adjacent string literals of the same kind, concatenated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral {
    /// Contents with escapes decoded; for hex strings, the hex digits.
    pub value: String,
    pub kind: StringKind,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct BooleanLiteral {
    pub value: bool,
    #[serde(flatten)]
    pub span: Span,
}

/// `object.property`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Identifier,
    #[serde(flatten)]
    pub span: Span,
}

/// `object[index]`; `object[]` in type position (`uint[]` as an argument
/// to `abi.decode`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IndexExpression {
    pub object: Box<Expression>,
    pub index: Option<Box<Expression>>,
    #[serde(flatten)]
    pub span: Span,
}

/// `object[from:to]` on calldata slices.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IndexRangeExpression {
    pub object: Box<Expression>,
    pub index_start: Option<Box<Expression>>,
    pub index_end: Option<Box<Expression>>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CallArguments {
    Positional(Vec<Expression>),
    /// `f({a: 1, b: 2})`
    Named(Vec<NamedArgument>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NamedArgument {
    pub name: String,
    pub value: Expression,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: CallArguments,
    #[serde(flatten)]
    pub span: Span,
}

/// `callee{value: v, gas: g}`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CallOptionsExpression {
    pub callee: Box<Expression>,
    pub options: Vec<NamedArgument>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    pub operator: UnaryOp,
    /// `false` only for postfix `++`/`--`.
    pub prefix: bool,
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    pub operator: BinaryOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression {
    pub operator: AssignOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
}

/// `test ? consequent : alternate`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
    #[serde(flatten)]
    pub span: Span,
}

/// `(a, , b)` or `[a, b]`. A single parenthesised expression is kept as a
/// one-component tuple so that its span covers the parentheses.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TupleExpression {
    pub components: Vec<Option<Expression>>,
    pub is_array: bool,
    #[serde(flatten)]
    pub span: Span,
}

/// `new T`; the constructor call is a [`CallExpression`] around it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression {
    pub type_name: TypeName,
    #[serde(flatten)]
    pub span: Span,
}
