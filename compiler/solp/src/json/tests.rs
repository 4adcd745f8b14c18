#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{parse, to_json, ParseOptions};

fn render(source: &str, options: ParseOptions) -> serde_json::Value {
    let program = parse(source, &options).unwrap();
    to_json(&program, source, &options).unwrap()
}

#[test]
fn plain_rendering_has_offsets_only() {
    let json = render("import \"a.sol\";", ParseOptions::new());
    assert_eq!(
        json,
        json!({
            "type": "Program",
            "body": [{
                "type": "ImportStatement",
                "from": "a.sol",
                "alias": null,
                "symbols": null,
                "start": 0,
                "end": 15,
            }],
            "start": 0,
            "end": 15,
        })
    );
}

#[test]
fn range_decorates_every_node() {
    let json = render("contract C { uint x = 1; }", ParseOptions::new().with_range(true));
    assert_eq!(json["range"], json!([0, 26]));
    let var = &json["body"][0]["body"][0];
    assert_eq!(var["range"], json!([13, 24]));
    assert_eq!(var["value"]["range"], json!([22, 23]));
    assert!(var.get("loc").is_none());
}

#[test]
fn loc_uses_lines_and_columns() {
    let source = "pragma solidity ^0.8.0;\n\ncontract C {\n    uint x;\n}\n";
    let json = render(source, ParseOptions::new().with_loc(true));
    let contract = &json["body"][1];
    assert_eq!(
        contract["loc"],
        json!({
            "start": { "line": 3, "column": 1 },
            "end": { "line": 5, "column": 2 },
        })
    );
    assert_eq!(
        contract["body"][0]["loc"],
        json!({
            "start": { "line": 4, "column": 5 },
            "end": { "line": 4, "column": 12 },
        })
    );
    assert!(contract.get("range").is_none());
}

#[test]
fn nested_nodes_are_decorated() {
    let json = render(
        "import {a as b} from \"x.sol\";",
        ParseOptions::new().with_range(true),
    );
    let import = &json["body"][0];
    assert_eq!(import["range"], json!([0, 29]));
    assert_eq!(import["symbols"][0]["range"], json!([8, 14]));
}

#[test]
fn wide_integers_keep_every_digit() {
    let source = "uint constant MAX = 340282366920938463463374607431768211455;";
    let json = render(source, ParseOptions::new());
    let value = &json["body"][0]["value"]["value"];
    assert_eq!(
        serde_json::to_string(value).unwrap(),
        "340282366920938463463374607431768211455"
    );
}
