use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::Span;

fn ident(name: &str, start: u32) -> Identifier {
    Identifier {
        name: name.to_owned(),
        span: Span::new(start, start + u32::try_from(name.len()).unwrap()),
    }
}

#[test]
fn program_serializes_with_type_and_span() {
    let program = Program {
        body: vec![],
        span: Span::new(0, 0),
    };
    assert_eq!(
        serde_json::to_value(&program).unwrap(),
        json!({"type": "Program", "body": [], "start": 0, "end": 0})
    );
}

#[test]
fn enum_wrapped_node_keeps_its_own_tag() {
    let stmt = Statement::Incomplete(IncompleteStatement {
        span: Span::new(4, 9),
    });
    assert_eq!(
        serde_json::to_value(&stmt).unwrap(),
        json!({"type": "IncompleteStatement", "start": 4, "end": 9})
    );
}

#[test]
fn try_statement_uses_camel_case_catch_clauses() {
    let block = |start| Block {
        body: vec![],
        span: Span::new(start, start + 2),
    };
    let stmt = TryStatement {
        expression: Expression::Identifier(ident("f", 4)),
        returns: None,
        body: block(6),
        catch_clauses: vec![CatchClause {
            kind: None,
            parameters: None,
            body: block(15),
            span: Span::new(9, 17),
        }],
        span: Span::new(0, 17),
    };
    let value = serde_json::to_value(&stmt).unwrap();
    assert_eq!(value["catchClauses"][0]["type"], "CatchClause");
    assert!(value.get("catch_clauses").is_none());
}

#[test]
fn number_value_serializes_as_json_number() {
    let lit = NumberLiteral {
        value: NumberValue::Integer(10_000_000),
        raw: "10_000_000".to_owned(),
        subdenomination: None,
        span: Span::new(0, 10),
    };
    let value = serde_json::to_value(&lit).unwrap();
    assert_eq!(value["value"], json!(10_000_000));
    assert_eq!(value["raw"], "10_000_000");

    let wide = serde_json::to_value(NumberValue::Integer(u128::MAX)).unwrap();
    assert_eq!(
        serde_json::to_string(&wide).unwrap(),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(
        serde_json::to_string(&NumberValue::Float(2.5)).unwrap(),
        "2.5"
    );
}

#[test]
fn operators_serialize_as_symbols() {
    assert_eq!(serde_json::to_value(BinaryOp::Sar).unwrap(), json!(">>>"));
    assert_eq!(serde_json::to_value(AssignOp::Shl).unwrap(), json!("<<="));
    assert_eq!(serde_json::to_value(UnaryOp::Delete).unwrap(), json!("delete"));
    assert_eq!(BinaryOp::Pow.as_symbol(), "**");
}

#[test]
fn override_field_renamed() {
    let decl = ModifierDeclaration {
        name: "onlyOwner".to_owned(),
        parameters: None,
        is_virtual: true,
        overrides: Some(vec![]),
        body: None,
        span: Span::new(0, 30),
    };
    let value = serde_json::to_value(&decl).unwrap();
    assert_eq!(value["override"], json!([]));
    assert_eq!(value["parameters"], json!(null));
}

#[test]
fn spanned_enum_dispatch() {
    let expr = Expression::Identifier(ident("owner", 12));
    assert_eq!(expr.span(), Span::new(12, 17));
}

#[test]
fn elementary_type_names() {
    for name in ["address", "bool", "uint", "uint256", "int8", "bytes32", "ufixed128x18"] {
        assert!(is_elementary_type_name(name), "{name}");
    }
    for name in ["uintx", "bytesX", "Token", "uint_8", "fixedx8"] {
        assert!(!is_elementary_type_name(name), "{name}");
    }
}
