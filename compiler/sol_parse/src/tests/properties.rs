//! Span layout and property-based checks over generated contracts and the
//! fixture sources.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sol_ir::ast::{
    Block, ContractPart, ContractStatement, Expression, ModifierInvocation, Parameter, Program,
    SourceUnit, Spanned, Statement, TypeName,
};
use sol_ir::visitor::{
    walk_contract, walk_contract_part, walk_expression, walk_program, walk_source_unit,
    walk_statement, walk_type_name, Visitor,
};
use sol_ir::Span;

use crate::parse;

const DOC_EXAMPLES: &str = include_str!("../../../solp/tests/fixtures/doc_examples.sol");
const TRY_PARSE: &str = include_str!("../../../solp/tests/fixtures/tryparse.sol");
const ERROR_DECLARATIONS: &str = include_str!("../../../solp/tests/fixtures/errordeclaration.sol");

/// Statement snippets, some of them broken.
const STATEMENTS: &[&str] = &[
    "x = 1;",
    "uint y = x + 2 * z;",
    "(a, b) = (b, a);",
    "if (x > 1) { x--; } else { x++; }",
    "for (uint i = 0; i < n; i++) { total += i; }",
    "while (ok) { break; }",
    "emit Done(x, \"ok\");",
    "return;",
    "unchecked { x -= 1; }",
    "data[i].owner = msg.sender;",
    "x = ;",
    "y =",
    "f(1, ;",
    "if (x) {",
    "}",
    "uint[] memory;",
];

fn function_body() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(STATEMENTS), 0..8).prop_map(|parts| parts.join(" "))
}

/// Contract members wrapped around the generated body, so every node kind
/// the walker knows about shows up.
fn contract_source(body: &str) -> String {
    format!(
        "contract C is Base(1) {{
    struct S {{ uint a; mapping(address => uint[]) b; }}
    event E(uint indexed x, string y);
    uint public total = 1 + 2;
    modifier only(address who) {{ _; }}
    function f(uint a, S memory s) public only(msg.sender) returns (uint, bool ok) {{
        {body}
    }}
    function g(function (uint) external returns (bool) cb) external {{}}
}}
"
    )
}

/// Checks two layout rules for every node the walker reaches: a child lies
/// inside its parent, and siblings come in source order without overlap.
#[derive(Default)]
struct SpanLayout {
    /// Open nodes with the end of their last visited child.
    open: Vec<(Span, u32)>,
    faults: Vec<String>,
}

impl SpanLayout {
    fn check(program: &Program) -> Vec<String> {
        let mut layout = SpanLayout::default();
        layout.within(program.span, |layout| walk_program(layout, program));
        layout.faults
    }

    fn within(&mut self, span: Span, walk: impl FnOnce(&mut Self)) {
        if let Some((parent, last_end)) = self.open.last_mut() {
            if !parent.contains_span(span) {
                self.faults.push(format!("{span:?} escapes {parent:?}"));
            }
            if span.start < *last_end {
                self.faults
                    .push(format!("{span:?} overlaps a sibling ending at {last_end}"));
            }
            *last_end = span.end;
        }
        self.open.push((span, span.start));
        walk(self);
        self.open.pop();
    }
}

impl<'ast> Visitor<'ast> for SpanLayout {
    fn visit_source_unit(&mut self, unit: &'ast SourceUnit) {
        self.within(unit.span(), |v| walk_source_unit(v, unit));
    }

    fn visit_contract(&mut self, contract: &'ast ContractStatement) {
        self.within(contract.span, |v| walk_contract(v, contract));
    }

    fn visit_contract_part(&mut self, part: &'ast ContractPart) {
        self.within(part.span(), |v| walk_contract_part(v, part));
    }

    fn visit_parameter(&mut self, param: &'ast Parameter) {
        self.within(param.span, |v| v.visit_type_name(&param.type_name));
    }

    fn visit_modifier_invocation(&mut self, invocation: &'ast ModifierInvocation) {
        self.within(invocation.span, |v| {
            for arg in invocation.arguments.iter().flatten() {
                v.visit_expression(arg);
            }
        });
    }

    fn visit_block(&mut self, block: &'ast Block) {
        self.within(block.span, |v| {
            for stmt in &block.body {
                v.visit_statement(stmt);
            }
        });
    }

    fn visit_statement(&mut self, stmt: &'ast Statement) {
        self.within(stmt.span(), |v| walk_statement(v, stmt));
    }

    fn visit_expression(&mut self, expr: &'ast Expression) {
        self.within(expr.span(), |v| walk_expression(v, expr));
    }

    fn visit_type_name(&mut self, ty: &'ast TypeName) {
        self.within(ty.span(), |v| walk_type_name(v, ty));
    }
}

#[test]
fn fixture_spans_are_laid_out() {
    for (name, source) in [
        ("doc_examples.sol", DOC_EXAMPLES),
        ("tryparse.sol", TRY_PARSE),
        ("errordeclaration.sol", ERROR_DECLARATIONS),
    ] {
        let program = parse(source, false).unwrap();
        let faults = SpanLayout::check(&program);
        assert!(faults.is_empty(), "{name}: {faults:#?}");
    }
}

#[test]
fn generated_contract_header_parses() {
    let program = parse(&contract_source("x = 1;"), false).unwrap();
    assert!(SpanLayout::check(&program).is_empty());
}

#[test]
fn layout_faults_are_reported() {
    let mut program = parse("contract A {} contract B {}", false).unwrap();
    program.body.swap(0, 1);
    let faults = SpanLayout::check(&program);
    assert_eq!(faults.len(), 1, "{faults:?}");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn tolerance_does_not_change_valid_parses(body in function_body()) {
        let source = contract_source(&body);
        if let Ok(strict) = parse(&source, false) {
            prop_assert_eq!(parse(&source, true), Ok(strict));
        }
    }

    #[test]
    fn parsing_is_deterministic(body in function_body(), tolerant in any::<bool>()) {
        let source = contract_source(&body);
        prop_assert_eq!(parse(&source, tolerant), parse(&source, tolerant));
    }

    #[test]
    fn spans_are_laid_out(body in function_body()) {
        let source = contract_source(&body);
        if let Ok(program) = parse(&source, true) {
            let faults = SpanLayout::check(&program);
            prop_assert!(faults.is_empty(), "{:#?}", faults);
        }
    }

    #[test]
    fn errors_point_inside_the_source(source in "[a-z0-9(){};=+ \n]{0,60}") {
        if let Err(error) = parse(&source, false) {
            prop_assert!(error.location.line >= 1);
            prop_assert!(error.location.column >= 1);
            prop_assert!(error.location.offset as usize <= source.len());
        }
    }
}
