#![allow(clippy::unwrap_used, clippy::expect_used)]

use sol_ir::ast::{
    AssignOp, CallArguments, ContractPart, Expression, SourceUnit, Statement, StorageLocation,
    TypeName, UnaryOp,
};

use crate::{parse, parse_statement};

fn stmt(source: &str) -> Statement {
    parse_statement(source).unwrap_or_else(|err| panic!("{source:?} failed: {err}"))
}

/// Statements of the body of the first member of the first contract.
fn first_body(source: &str, tolerant: bool) -> Vec<Statement> {
    let program = parse(source, tolerant).unwrap_or_else(|err| panic!("parse failed: {err}"));
    let SourceUnit::Contract(contract) = &program.body[0] else {
        panic!("expected a contract");
    };
    match &contract.body[0] {
        ContractPart::Function(f) => f.body.clone().expect("function has a body").body,
        ContractPart::Constructor(c) => c.body.body.clone(),
        other => panic!("unexpected member {other:?}"),
    }
}

mod declarations {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_declaration() {
        let Statement::VariableDeclaration(decl) = stmt("uint x = 1;") else {
            panic!("expected a declaration");
        };
        assert_eq!(decl.declarations.len(), 1);
        let var = decl.declarations[0].as_ref().unwrap();
        assert_eq!(var.name, "x");
        assert!(matches!(var.type_name, TypeName::Elementary(ref t) if t.name == "uint"));
        assert!(matches!(
            decl.initial_value,
            Some(Expression::NumberLiteral(ref n)) if n.raw == "1"
        ));
        assert_eq!((decl.span.start, decl.span.end), (0, 11));
    }

    #[test]
    fn test_declaration_without_value() {
        let Statement::VariableDeclaration(decl) = stmt("address payable owner;") else {
            panic!("expected a declaration");
        };
        assert!(decl.initial_value.is_none());
    }

    #[test]
    fn test_tuple_declaration_with_gaps() {
        let Statement::VariableDeclaration(decl) = stmt("(uint a, , bool b) = f();") else {
            panic!("expected a declaration");
        };
        let names: Vec<Option<&str>> = decl
            .declarations
            .iter()
            .map(|d| d.as_ref().map(|d| d.name.as_str()))
            .collect();
        assert_eq!(names, vec![Some("a"), None, Some("b")]);
    }

    #[test]
    fn test_storage_locations() {
        let Statement::VariableDeclaration(decl) = stmt("uint[] memory xs = new uint[](3);")
        else {
            panic!("expected a declaration");
        };
        let var = decl.declarations[0].as_ref().unwrap();
        assert_eq!(var.storage_location, Some(StorageLocation::Memory));
        assert!(matches!(var.type_name, TypeName::Array(_)));
        let Some(Expression::Call(call)) = &decl.initial_value else {
            panic!("expected a call");
        };
        assert!(matches!(*call.callee, Expression::New(_)));

        let Statement::VariableDeclaration(decl) =
            stmt("mapping(address => uint) storage m = balances;")
        else {
            panic!("expected a declaration");
        };
        let var = decl.declarations[0].as_ref().unwrap();
        assert_eq!(var.storage_location, Some(StorageLocation::Storage));
    }

    #[test]
    fn test_index_assignment_is_an_expression() {
        let Statement::Expression(s) = stmt("a[i] = 1;") else {
            panic!("expected an expression statement");
        };
        assert!(matches!(
            s.expression,
            Expression::Assignment(ref a) if a.operator == AssignOp::Assign
        ));
    }

    #[test]
    fn test_tuple_assignment_is_an_expression() {
        let Statement::Expression(s) = stmt("(a, b) = (b, a);") else {
            panic!("expected an expression statement");
        };
        let Expression::Assignment(assign) = s.expression else {
            panic!("expected an assignment");
        };
        assert!(matches!(*assign.left, Expression::Tuple(ref t) if t.components.len() == 2));
    }
}

mod control_flow {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_if_else() {
        let Statement::If(s) = stmt("if (a) b(); else { c(); }") else {
            panic!("expected if");
        };
        assert!(matches!(*s.consequent, Statement::Expression(_)));
        assert!(matches!(s.alternate.as_deref(), Some(Statement::Block(b)) if b.body.len() == 1));
    }

    #[test]
    fn test_for_with_full_header() {
        let Statement::For(s) = stmt("for (uint i = 0; i < n; i++) {}") else {
            panic!("expected for");
        };
        assert!(matches!(s.init.as_deref(), Some(Statement::VariableDeclaration(_))));
        assert!(matches!(s.test, Some(Expression::Binary(_))));
        assert!(matches!(
            s.update,
            Some(Expression::Unary(ref u)) if u.operator == UnaryOp::Increment && !u.prefix
        ));
    }

    #[test]
    fn test_for_with_empty_header() {
        let Statement::For(s) = stmt("for (;;) x;") else {
            panic!("expected for");
        };
        assert!(s.init.is_none());
        assert!(s.test.is_none());
        assert!(s.update.is_none());
    }

    #[test]
    fn test_for_with_expression_init() {
        let Statement::For(s) = stmt("for (i = 0; i < 3; ) {}") else {
            panic!("expected for");
        };
        assert!(matches!(s.init.as_deref(), Some(Statement::Expression(_))));
        assert!(s.update.is_none());
    }

    #[test]
    fn test_loops_and_jumps() {
        let Statement::While(s) = stmt("while (true) { break; continue; }") else {
            panic!("expected while");
        };
        let Statement::Block(body) = *s.body else {
            panic!("expected block");
        };
        assert!(matches!(body.body[0], Statement::Break(_)));
        assert!(matches!(body.body[1], Statement::Continue(_)));

        assert!(matches!(stmt("do { x++; } while (x < 10);"), Statement::DoWhile(_)));
        assert!(matches!(stmt("throw;"), Statement::Throw(_)));
    }

    #[test]
    fn test_return() {
        let Statement::Return(s) = stmt("return;") else {
            panic!("expected return");
        };
        assert!(s.argument.is_none());
        let Statement::Return(s) = stmt("return (a, b);") else {
            panic!("expected return");
        };
        assert!(matches!(s.argument, Some(Expression::Tuple(_))));
    }

    #[test]
    fn test_unchecked() {
        let Statement::Unchecked(s) = stmt("unchecked { x += 1; }") else {
            panic!("expected unchecked");
        };
        assert_eq!(s.body.body.len(), 1);
    }
}

mod try_catch {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_try_with_every_catch_form() {
        let source = "try t.f{value: 1}(a) returns (uint v) { } \
                      catch Error(string memory reason) { } \
                      catch (bytes memory data) { } \
                      catch { }";
        let Statement::Try(s) = stmt(source) else {
            panic!("expected try");
        };
        let Expression::Call(call) = &s.expression else {
            panic!("expected a call");
        };
        assert!(matches!(*call.callee, Expression::CallOptions(_)));
        assert_eq!(s.returns.as_ref().map(Vec::len), Some(1));

        let kinds: Vec<Option<&str>> =
            s.catch_clauses.iter().map(|c| c.kind.as_deref()).collect();
        assert_eq!(kinds, vec![Some("Error"), None, None]);
        assert!(s.catch_clauses[0].parameters.is_some());
        assert!(s.catch_clauses[1].parameters.is_some());
        assert!(s.catch_clauses[2].parameters.is_none());
    }

    #[test]
    fn test_try_requires_a_catch() {
        let error = parse_statement("try f() { }").unwrap_err();
        assert_eq!(error.message, "Expected `catch` but end of input found.");
    }
}

mod special_forms {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit() {
        let Statement::Emit(s) = stmt("emit Transfer(a, b, 1);") else {
            panic!("expected emit");
        };
        let Expression::Call(call) = s.expression else {
            panic!("expected call");
        };
        assert!(matches!(call.arguments, CallArguments::Positional(ref args) if args.len() == 3));
    }

    #[test]
    fn test_revert_statement_and_revert_call() {
        assert!(matches!(stmt("revert MyError(1);"), Statement::Revert(_)));
        assert!(matches!(stmt("revert Errors.Bad();"), Statement::Revert(_)));
        assert!(matches!(stmt("revert(\"no\");"), Statement::Expression(_)));
        assert!(matches!(stmt("revert();"), Statement::Expression(_)));
    }

    #[test]
    fn test_placeholder() {
        let Statement::Placeholder(s) = stmt("_;") else {
            panic!("expected placeholder");
        };
        assert_eq!((s.span.start, s.span.end), (0, 2));
    }

    #[test]
    fn test_inline_assembly_keeps_raw_body() {
        let source = "assembly { let x := mload(0x40) { } }";
        let Statement::InlineAssembly(s) = stmt(source) else {
            panic!("expected assembly");
        };
        assert_eq!(s.body, "{ let x := mload(0x40) { } }");
        assert!(s.language.is_none());
        assert!(s.flags.is_empty());
        assert_eq!((s.span.start, s.span.end), (0, 37));
    }

    #[test]
    fn test_inline_assembly_dialect_and_flags() {
        let Statement::InlineAssembly(s) = stmt(r#"assembly "evmasm" ("memory-safe") {}"#) else {
            panic!("expected assembly");
        };
        assert_eq!(s.language.as_deref(), Some("evmasm"));
        assert_eq!(s.flags, vec!["memory-safe".to_string()]);
        assert_eq!(s.body, "{}");
    }

    #[test]
    fn test_unterminated_assembly_is_an_error() {
        let error = parse_statement("assembly { let x := 1").unwrap_err();
        assert_eq!(error.message, "Expected `}` but end of input found.");
    }
}

mod tolerant {
    use super::*;
    use pretty_assertions::assert_eq;

    const BROKEN_CONSTRUCTOR: &str = "contract C {
    constructor() {
        owner = ;
        count = 1;
    }
}
";

    #[test]
    fn test_broken_statement_becomes_incomplete() {
        let body = first_body(BROKEN_CONSTRUCTOR, true);
        assert_eq!(body.len(), 2);
        let Statement::Incomplete(incomplete) = &body[0] else {
            panic!("expected an incomplete statement, got {:?}", body[0]);
        };
        assert_eq!((incomplete.span.start, incomplete.span.end), (41, 50));
        assert_eq!(incomplete.span.slice(BROKEN_CONSTRUCTOR), "owner = ;");
        assert!(matches!(body[1], Statement::Expression(_)));
    }

    #[test]
    fn test_strict_mode_reports_the_broken_statement() {
        let error = parse(BROKEN_CONSTRUCTOR, false).unwrap_err();
        assert_eq!(error.message, "Expected expression but `;` found.");
        assert_eq!(error.location.line, 3);
        assert_eq!(error.location.column, 17);
        assert_eq!(error.location.offset, 49);
    }

    #[test]
    fn test_nested_block_recovers_locally() {
        let source = "contract C { function f() public { if (a) { b = ; } c = 1; } }";
        let body = first_body(source, true);
        assert_eq!(body.len(), 2);
        let Statement::If(s) = &body[0] else {
            panic!("expected if");
        };
        let Statement::Block(block) = &*s.consequent else {
            panic!("expected block");
        };
        assert!(matches!(block.body[..], [Statement::Incomplete(_)]));
        assert!(matches!(body[1], Statement::Expression(_)));
    }

    #[test]
    fn test_member_keyword_closes_the_broken_body() {
        let source = "contract C {
    function f() public {
        x = 1;
        y =
    function g() public {}
}";
        let program = parse(source, true).unwrap();
        let SourceUnit::Contract(contract) = &program.body[0] else {
            panic!("expected a contract");
        };
        assert_eq!(contract.body.len(), 2);
        let ContractPart::Function(f) = &contract.body[0] else {
            panic!("expected f");
        };
        let body = &f.body.as_ref().unwrap().body;
        assert!(matches!(body[..], [Statement::Expression(_), Statement::Incomplete(_)]));
        assert!(matches!(&contract.body[1], ContractPart::Function(g) if g.name == "g"));

        assert!(parse(source, false).is_err());
    }

    #[test]
    fn test_no_recovery_outside_function_bodies() {
        let error = parse("contract C { uint x = ; }", true).unwrap_err();
        assert_eq!(error.message, "Expected expression but `;` found.");
        assert_eq!(error.location.offset, 22);
    }

    #[test]
    fn test_no_recovery_without_closing_brace() {
        let error = parse("contract C { function f() { x = ;", true).unwrap_err();
        assert_eq!(error.message, "Expected statement or `}` but end of input found.");
    }
}
