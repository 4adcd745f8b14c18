#![allow(clippy::unwrap_used, clippy::expect_used)]

use sol_ir::ast::{
    ContractKind, ContractPart, ContractStatement, Expression, NumberValue, SourceUnit,
    StateMutability, Statement, TypeName, Visibility,
};
use sol_ir::Span;

use super::version_literals;
use crate::parse;

fn units(source: &str) -> Vec<SourceUnit> {
    parse(source, false)
        .unwrap_or_else(|err| panic!("parse failed: {err}"))
        .body
}

fn contract(source: &str) -> ContractStatement {
    match units(source).into_iter().next() {
        Some(SourceUnit::Contract(contract)) => contract,
        other => panic!("expected a contract, got {other:?}"),
    }
}

mod pragmas {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version_range() {
        let source = "pragma solidity >=0.4.22 <0.9.0;";
        let body = units(source);
        let [SourceUnit::Pragma(pragma)] = &body[..] else {
            panic!("expected one pragma");
        };
        assert_eq!(pragma.name, "solidity");
        assert_eq!(pragma.value, ">=0.4.22 <0.9.0");

        let start = pragma.start_version.as_ref().unwrap();
        assert_eq!(start.operator.as_deref(), Some(">="));
        assert_eq!(start.version, "0.4.22");
        assert_eq!(start.span, Span::new(16, 24));

        let end = pragma.end_version.as_ref().unwrap();
        assert_eq!(end.operator.as_deref(), Some("<"));
        assert_eq!(end.version, "0.9.0");
        assert_eq!(end.span.slice(source), "<0.9.0");
        assert_eq!(pragma.span, Span::new(0, 32));
    }

    #[test]
    fn test_caret_version() {
        let body = units("pragma solidity ^0.8.0;");
        let [SourceUnit::Pragma(pragma)] = &body[..] else {
            panic!("expected one pragma");
        };
        let start = pragma.start_version.as_ref().unwrap();
        assert_eq!(start.operator.as_deref(), Some("^"));
        assert_eq!(start.version, "0.8.0");
        assert!(pragma.end_version.is_none());
    }

    #[test]
    fn test_abicoder_and_experimental() {
        let source = "pragma abicoder v2;\n\
                      pragma experimental ABIEncoderV2;\n\
                      pragma experimental \"SMTChecker\";";
        let body = units(source);
        let SourceUnit::AbiCoderPragma(abicoder) = &body[0] else {
            panic!("expected abicoder pragma");
        };
        assert_eq!(abicoder.version.name, "v2");

        let features: Vec<&str> = body[1..]
            .iter()
            .map(|unit| match unit {
                SourceUnit::ExperimentalPragma(p) => p.feature.as_str(),
                other => panic!("expected experimental pragma, got {other:?}"),
            })
            .collect();
        assert_eq!(features, vec!["ABIEncoderV2", "SMTChecker"]);
    }

    #[test]
    fn test_version_literals_skip_other_text() {
        let literals = version_literals("^0.4.0 || >=0.5.0", 0);
        let versions: Vec<(Option<&str>, &str)> = literals
            .iter()
            .map(|l| (l.operator.as_deref(), l.version.as_str()))
            .collect();
        assert_eq!(versions, vec![(Some("^"), "0.4.0"), (Some(">="), "0.5.0")]);
        assert_eq!(literals[1].span, Span::new(10, 17));
    }

    #[test]
    fn test_version_without_operator() {
        let literals = version_literals("0.8.x", 5);
        assert_eq!(literals.len(), 1);
        assert!(literals[0].operator.is_none());
        assert_eq!(literals[0].version, "0.8.x");
        assert_eq!(literals[0].span, Span::new(5, 10));
    }
}

mod imports {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_import_forms() {
        let source = r#"import "./a.sol";
import "./b.sol" as B;
import * as C from "./c.sol";
import {x, y as z} from "./d.sol";"#;
        let imports: Vec<_> = units(source)
            .into_iter()
            .map(|unit| match unit {
                SourceUnit::Import(import) => import,
                other => panic!("expected import, got {other:?}"),
            })
            .collect();

        assert_eq!(imports[0].from, "./a.sol");
        assert!(imports[0].alias.is_none() && imports[0].symbols.is_none());
        assert_eq!(imports[1].alias.as_deref(), Some("B"));
        assert_eq!(imports[2].alias.as_deref(), Some("C"));
        assert_eq!(imports[2].from, "./c.sol");

        let symbols = imports[3].symbols.as_ref().unwrap();
        let pairs: Vec<(&str, Option<&str>)> = symbols
            .iter()
            .map(|s| (s.name.as_str(), s.alias.as_deref()))
            .collect();
        assert_eq!(pairs, vec![("x", None), ("y", Some("z"))]);
    }

    #[test]
    fn test_import_needs_from() {
        let error = parse(r#"import * as C "./c.sol";"#, false).unwrap_err();
        assert_eq!(error.message, "Expected identifier but `\"./c.sol\"` found.");
        assert_eq!(error.location.offset, 14);
    }
}

mod contracts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_abstract_contract_with_inheritance() {
        let c = contract("abstract contract A is B(1, 2), Lib.C { }");
        assert_eq!(c.name, "A");
        assert_eq!(c.kind, ContractKind::Contract);
        assert!(c.is_abstract);
        assert_eq!(c.is.len(), 2);
        assert_eq!(c.is[0].name, "B");
        assert_eq!(c.is[0].arguments.as_ref().map(Vec::len), Some(2));
        assert_eq!(c.is[1].name, "Lib.C");
        assert!(c.is[1].arguments.is_none());
        assert!(c.body.is_empty());
    }

    #[test]
    fn test_contract_kinds() {
        let kinds: Vec<(ContractKind, bool)> = units("interface I {} library L {} contract C {}")
            .into_iter()
            .map(|unit| match unit {
                SourceUnit::Contract(c) => (c.kind, c.is_abstract),
                other => panic!("expected contract, got {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (ContractKind::Interface, false),
                (ContractKind::Library, false),
                (ContractKind::Contract, false),
            ]
        );
    }

    #[test]
    fn test_special_functions_keep_source_order() {
        let c = contract(
            "contract C {
                uint x;
                constructor(uint a) Base(a) payable { x = a; }
                receive() external payable {}
                fallback(bytes calldata input) external returns (bytes memory) {}
            }",
        );
        assert!(matches!(c.body[0], ContractPart::StateVariable(_)));
        let ContractPart::Constructor(ctor) = &c.body[1] else {
            panic!("expected constructor");
        };
        assert_eq!(ctor.modifiers[0].name, "Base");
        assert_eq!(ctor.state_mutability, Some(StateMutability::Payable));
        assert_eq!(ctor.body.body.len(), 1);

        let ContractPart::Receive(receive) = &c.body[2] else {
            panic!("expected receive");
        };
        assert_eq!(receive.visibility, Some(Visibility::External));

        let ContractPart::Fallback(fallback) = &c.body[3] else {
            panic!("expected fallback");
        };
        assert_eq!(fallback.parameters.len(), 1);
        assert_eq!(fallback.return_parameters.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_unnamed_function_is_a_fallback() {
        let c = contract("contract C { function() external payable { } }");
        let ContractPart::Fallback(fallback) = &c.body[0] else {
            panic!("expected fallback, got {:?}", c.body[0]);
        };
        assert_eq!(fallback.state_mutability, Some(StateMutability::Payable));
        assert!(fallback.body.is_some());
    }

    #[test]
    fn test_function_typed_state_variable() {
        let c = contract("contract C { function (uint) internal returns (bool) handler; }");
        let ContractPart::StateVariable(var) = &c.body[0] else {
            panic!("expected state variable, got {:?}", c.body[0]);
        };
        assert_eq!(var.name, "handler");
        let TypeName::Function(f) = &var.type_name else {
            panic!("expected function type");
        };
        assert_eq!(f.visibility, Some(Visibility::Internal));
        assert_eq!(f.return_parameters.len(), 1);
    }

    #[test]
    fn test_state_variable_attributes() {
        let c = contract(
            "contract C {
                uint256 public constant MAX = 100;
                address immutable owner;
                mapping(address => uint) internal override(A, B) balances;
            }",
        );
        let vars: Vec<_> = c
            .body
            .iter()
            .map(|part| match part {
                ContractPart::StateVariable(var) => var,
                other => panic!("expected state variable, got {other:?}"),
            })
            .collect();

        assert_eq!(vars[0].visibility, Some(Visibility::Public));
        assert!(vars[0].is_constant);
        assert!(vars[0].value.is_some());
        assert!(vars[1].is_immutable);
        assert!(vars[1].value.is_none());
        let overrides: Vec<&str> = vars[2]
            .overrides
            .as_ref()
            .unwrap()
            .iter()
            .map(|o| o.name_path.as_str())
            .collect();
        assert_eq!(overrides, vec!["A", "B"]);
        assert!(matches!(vars[2].type_name, TypeName::Mapping(_)));
    }

    #[test]
    fn test_function_attributes() {
        let c = contract(
            "contract C {
                function f(uint a) public view virtual override onlyOwner Guard.check(1)
                    returns (uint) { return a; }
                function g() external;
            }",
        );
        let ContractPart::Function(f) = &c.body[0] else {
            panic!("expected function");
        };
        assert_eq!(f.name, "f");
        assert_eq!(f.visibility, Some(Visibility::Public));
        assert_eq!(f.state_mutability, Some(StateMutability::View));
        assert!(f.is_virtual);
        assert_eq!(f.overrides, Some(Vec::new()));
        let modifiers: Vec<(&str, bool)> = f
            .modifiers
            .iter()
            .map(|m| (m.name.as_str(), m.arguments.is_some()))
            .collect();
        assert_eq!(modifiers, vec![("onlyOwner", false), ("Guard.check", true)]);
        assert!(matches!(
            f.body.as_ref().unwrap().body[..],
            [Statement::Return(_)]
        ));

        let ContractPart::Function(g) = &c.body[1] else {
            panic!("expected function");
        };
        assert!(g.body.is_none());
    }

    #[test]
    fn test_modifiers() {
        let c = contract(
            "contract C {
                modifier onlyOwner { require(msg.sender == owner); _; }
                modifier guarded(uint x) virtual;
            }",
        );
        let ContractPart::Modifier(only_owner) = &c.body[0] else {
            panic!("expected modifier");
        };
        assert!(only_owner.parameters.is_none());
        let body = &only_owner.body.as_ref().unwrap().body;
        assert!(matches!(body[1], Statement::Placeholder(_)));

        let ContractPart::Modifier(guarded) = &c.body[1] else {
            panic!("expected modifier");
        };
        assert_eq!(guarded.parameters.as_ref().map(Vec::len), Some(1));
        assert!(guarded.is_virtual);
        assert!(guarded.body.is_none());
    }

    #[test]
    fn test_missing_semicolon_after_state_variable() {
        let error = parse("contract A { uint x }", false).unwrap_err();
        assert_eq!(error.message, "Expected `;` or `=` but `}` found.");
        assert_eq!(error.location.offset, 20);
    }

    #[test]
    fn test_missing_function_name() {
        let error = parse("contract A { function }", false).unwrap_err();
        assert_eq!(error.message, "Expected identifier but `}` found.");
    }
}

mod declarations {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_events() {
        let c = contract(
            "contract C {
                event Transfer(address indexed from, address indexed to, uint value);
                event Log(string) anonymous;
            }",
        );
        let ContractPart::Event(transfer) = &c.body[0] else {
            panic!("expected event");
        };
        let indexed: Vec<bool> = transfer.parameters.iter().map(|p| p.is_indexed).collect();
        assert_eq!(indexed, vec![true, true, false]);
        assert!(!transfer.is_anonymous);

        let ContractPart::Event(log) = &c.body[1] else {
            panic!("expected event");
        };
        assert!(log.is_anonymous);
        assert!(log.parameters[0].name.is_none());
    }

    #[test]
    fn test_errors_at_file_level_and_in_contracts() {
        let body = units(
            "error Unauthorized(address caller);
             contract C { error Empty(); }",
        );
        let SourceUnit::Error(unauthorized) = &body[0] else {
            panic!("expected error definition");
        };
        assert_eq!(unauthorized.name, "Unauthorized");
        assert_eq!(unauthorized.parameters[0].name.as_deref(), Some("caller"));

        let SourceUnit::Contract(c) = &body[1] else {
            panic!("expected contract");
        };
        assert!(matches!(&c.body[0], ContractPart::Error(e) if e.parameters.is_empty()));
    }

    #[test]
    fn test_struct_and_enum() {
        let body = units(
            "struct Point { uint x; uint y; mapping(uint => bool) seen; }
             enum Color { Red, Green, Blue }",
        );
        let SourceUnit::Struct(point) = &body[0] else {
            panic!("expected struct");
        };
        let names: Vec<&str> = point.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "seen"]);

        let SourceUnit::Enum(color) = &body[1] else {
            panic!("expected enum");
        };
        let members: Vec<&str> = color.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(members, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_using_directives() {
        let body = units(
            "using SafeMath for uint256;
             using {add, Lib.sub} for Fixed global;
             contract C { using L for *; }",
        );
        let SourceUnit::Using(safe_math) = &body[0] else {
            panic!("expected using");
        };
        assert_eq!(safe_math.library.as_deref(), Some("SafeMath"));
        assert!(matches!(safe_math.for_type, Some(TypeName::Elementary(_))));
        assert!(!safe_math.is_global);

        let SourceUnit::Using(functions) = &body[1] else {
            panic!("expected using");
        };
        assert!(functions.library.is_none());
        assert_eq!(functions.functions, vec!["add".to_string(), "Lib.sub".to_string()]);
        assert!(functions.is_global);

        let SourceUnit::Contract(c) = &body[2] else {
            panic!("expected contract");
        };
        assert!(matches!(&c.body[0], ContractPart::Using(u) if u.for_type.is_none()));
    }

    #[test]
    fn test_user_defined_value_types() {
        let body = units(
            "type Price is uint128;
             contract C { type Wallet is address payable; }",
        );
        let SourceUnit::UserDefinedValueType(price) = &body[0] else {
            panic!("expected value type");
        };
        assert_eq!(price.name, "Price");
        assert_eq!(price.underlying_type.name, "uint128");

        let SourceUnit::Contract(c) = &body[1] else {
            panic!("expected contract");
        };
        let ContractPart::UserDefinedValueType(wallet) = &c.body[0] else {
            panic!("expected value type");
        };
        assert_eq!(
            wallet.underlying_type.state_mutability,
            Some(StateMutability::Payable)
        );
    }

    #[test]
    fn test_value_type_needs_elementary_type() {
        let error = parse("type Price is Money;", false).unwrap_err();
        assert_eq!(error.message, "Expected type name but `Money` found.");
    }

    #[test]
    fn test_file_constant_and_free_function() {
        let body = units(
            "uint256 constant MAX = 10_000_000;
             function helper(uint a) pure returns (uint) { return a * MAX; }",
        );
        let SourceUnit::Constant(max) = &body[0] else {
            panic!("expected constant");
        };
        assert_eq!(max.name, "MAX");
        let Expression::NumberLiteral(value) = &max.value else {
            panic!("expected number");
        };
        assert_eq!(value.value, NumberValue::Integer(10_000_000));
        assert_eq!(value.raw, "10_000_000");

        let SourceUnit::Function(helper) = &body[1] else {
            panic!("expected function");
        };
        assert_eq!(helper.name, "helper");
        assert_eq!(helper.state_mutability, Some(StateMutability::Pure));
    }

    #[test]
    fn test_stray_closing_brace() {
        let error = parse("contract A {} }", false).unwrap_err();
        assert_eq!(
            error.message,
            "Expected declaration or end of input but `}` found."
        );
        assert_eq!(error.location.column, 15);
    }
}
