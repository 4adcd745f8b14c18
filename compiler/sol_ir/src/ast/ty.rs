//! Type names.

use serde::Serialize;

use super::{spanned_enum, Expression, Parameter, StateMutability, Visibility};
use crate::Span;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeName {
    Elementary(ElementaryTypeName),
    UserDefined(UserDefinedTypeName),
    Mapping(Mapping),
    Array(ArrayTypeName),
    Function(FunctionTypeName),
}

spanned_enum!(TypeName {
    Elementary,
    UserDefined,
    Mapping,
    Array,
    Function,
});

/// `uint256`, `bytes32`, `address payable`, ...
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ElementaryTypeName {
    pub name: String,
    /// Only `payable`, only on `address`.
    pub state_mutability: Option<StateMutability>,
    #[serde(flatten)]
    pub span: Span,
}

/// A possibly qualified name: `IERC20`, `Lib.Struct`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct UserDefinedTypeName {
    pub name_path: String,
    #[serde(flatten)]
    pub span: Span,
}

/// `mapping(K name => V name)`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Mapping {
    pub key_type: Box<TypeName>,
    pub key_name: Option<String>,
    pub value_type: Box<TypeName>,
    pub value_name: Option<String>,
    #[serde(flatten)]
    pub span: Span,
}

/// `T[]` or `T[N]`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrayTypeName {
    pub base_type: Box<TypeName>,
    pub length: Option<Box<Expression>>,
    #[serde(flatten)]
    pub span: Span,
}

/// `function (uint) external view returns (bool)`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionTypeName {
    pub parameters: Vec<Parameter>,
    pub return_parameters: Vec<Parameter>,
    pub visibility: Option<Visibility>,
    pub state_mutability: Option<StateMutability>,
    #[serde(flatten)]
    pub span: Span,
}

/// Does `name` spell a built-in value type?
///
/// Sized integer and byte types accept any suffix the lexer can produce;
/// range checking (`uint7`, `bytes33`) is left to later compilation stages.
pub fn is_elementary_type_name(name: &str) -> bool {
    match name {
        "address" | "bool" | "string" | "bytes" | "byte" | "var" | "int" | "uint" | "fixed"
        | "ufixed" => true,
        _ => {
            let sized = |prefix: &str, allow_x: bool| {
                name.strip_prefix(prefix).is_some_and(|rest| {
                    !rest.is_empty()
                        && rest.starts_with(|c: char| c.is_ascii_digit())
                        && rest.chars().all(|c| c.is_ascii_digit() || (allow_x && c == 'x'))
                })
            };
            sized("uint", false)
                || sized("int", false)
                || sized("bytes", false)
                || sized("ufixed", true)
                || sized("fixed", true)
        }
    }
}
