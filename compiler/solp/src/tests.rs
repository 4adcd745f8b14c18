#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sol_ir::ast::{Expression, SourceUnit, Statement};
use sol_ir::CommentKind;

use crate::{
    find_imports, imports_of, parse, parse_comments, parse_expression, parse_statement,
    FindImportsError, ParseOptions,
};

#[test]
fn options_builders() {
    let options = ParseOptions::new()
        .with_range(true)
        .with_loc(true)
        .with_tolerant(true);
    assert_eq!(
        options,
        ParseOptions {
            range: true,
            loc: true,
            tolerant: true,
        }
    );
    assert_eq!(ParseOptions::new(), ParseOptions::default());
}

#[test]
fn parse_honours_tolerance() {
    let source = "contract C { function f() public { x = ; y = 1; } }";
    assert!(parse(source, &ParseOptions::new()).is_err());

    let program = parse(source, &ParseOptions::new().with_tolerant(true)).unwrap();
    let SourceUnit::Contract(contract) = &program.body[0] else {
        panic!("expected a contract");
    };
    let sol_ir::ast::ContractPart::Function(function) = &contract.body[0] else {
        panic!("expected a function");
    };
    let body = &function.body.as_ref().unwrap().body;
    assert!(matches!(body[0], Statement::Incomplete(_)));
    assert!(matches!(body[1], Statement::Expression(_)));
}

#[test]
fn alternate_entry_rules() {
    assert!(matches!(parse_expression("a + b * c").unwrap(), Expression::Binary(_)));
    assert!(matches!(parse_statement("return x;").unwrap(), Statement::Return(_)));
    assert!(parse_statement("return x").is_err());
}

#[test]
fn comments_in_order() {
    let comments = parse_comments("// one\nuint x; /* two */\n/// three");
    let summary: Vec<(CommentKind, &str)> = comments
        .iter()
        .map(|c| (c.kind, c.text.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (CommentKind::Line, "// one"),
            (CommentKind::Block, "/* two */"),
            (CommentKind::Line, "/// three"),
        ]
    );
}

#[test]
fn comments_never_fail() {
    assert!(parse_comments("").is_empty());
    let comments = parse_comments("// kept\ncontract { /* unterminated // swallowed");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "// kept");
}

#[test]
fn find_imports_lists_paths() {
    let source = r#"
        pragma solidity ^0.8.0;
        import "./a.sol";
        contract C { string s = "import \"fake.sol\";"; }
        import {X} from "./b.sol";
    "#;
    assert_eq!(find_imports(source).unwrap(), ["./a.sol", "./b.sol"]);
}

#[test]
fn find_imports_wraps_syntax_errors() {
    let err = find_imports("import ;").unwrap_err();
    let FindImportsError(inner) = &err;
    assert_eq!(
        err.to_string(),
        format!(
            "An error occurred while trying to parse the code:\nSyntaxError: {}",
            inner.message
        )
    );
    assert_eq!(inner.location.offset, 7);
}

#[test]
fn imports_of_a_parsed_program() {
    let program = parse(
        "import \"a.sol\";\ncontract C {}\nimport \"b.sol\" as B;",
        &ParseOptions::new(),
    )
    .unwrap();
    assert_eq!(imports_of(&program), ["a.sol", "b.sol"]);
}

proptest! {
    #[test]
    fn comment_texts_are_source_slices(source in "[a-z /*\n\"]{0,40}") {
        for comment in parse_comments(&source) {
            let (start, end) = (comment.span.start as usize, comment.span.end as usize);
            prop_assert_eq!(&source[start..end], comment.text.as_str());
        }
    }

    #[test]
    fn scanner_and_full_parse_agree(n in 0usize..4, with_contract in any::<bool>()) {
        let mut source = String::new();
        for i in 0..n {
            source.push_str(&format!("import \"f{i}.sol\";\n"));
            if with_contract {
                source.push_str("contract C { function f() public { g({a: 1}); } }\n");
            }
        }
        let program = parse(&source, &ParseOptions::new()).unwrap();
        prop_assert_eq!(find_imports(&source).unwrap(), imports_of(&program));
    }
}
