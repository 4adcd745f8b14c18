//! Read-only AST traversal.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which
//! visits children in source order. Override a `visit_*` method to act on a
//! node kind, and call the `walk_*` function from it to keep descending.
//!
//! ```text
//! struct CollectImports<'ast>(Vec<&'ast str>);
//!
//! impl<'ast> Visitor<'ast> for CollectImports<'ast> {
//!     fn visit_import(&mut self, import: &'ast ImportStatement) {
//!         self.0.push(&import.from);
//!     }
//! }
//! ```

use super::ast::{
    Block, CallArguments, ContractPart, ContractStatement, Expression, ImportStatement,
    ModifierInvocation, Parameter, Program, SourceUnit, Statement, TypeName,
};

pub trait Visitor<'ast> {
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    fn visit_source_unit(&mut self, unit: &'ast SourceUnit) {
        walk_source_unit(self, unit);
    }

    /// Imports have no children.
    fn visit_import(&mut self, import: &'ast ImportStatement) {
        let _ = import;
    }

    fn visit_contract(&mut self, contract: &'ast ContractStatement) {
        walk_contract(self, contract);
    }

    fn visit_contract_part(&mut self, part: &'ast ContractPart) {
        walk_contract_part(self, part);
    }

    fn visit_parameter(&mut self, param: &'ast Parameter) {
        self.visit_type_name(&param.type_name);
    }

    fn visit_modifier_invocation(&mut self, invocation: &'ast ModifierInvocation) {
        walk_expressions(self, invocation.arguments.iter().flatten());
    }

    fn visit_block(&mut self, block: &'ast Block) {
        for stmt in &block.body {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &'ast Statement) {
        walk_statement(self, stmt);
    }

    fn visit_expression(&mut self, expr: &'ast Expression) {
        walk_expression(self, expr);
    }

    fn visit_type_name(&mut self, ty: &'ast TypeName) {
        walk_type_name(self, ty);
    }
}

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    for unit in &program.body {
        visitor.visit_source_unit(unit);
    }
}

fn walk_params<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, params: &'ast [Parameter]) {
    for param in params {
        visitor.visit_parameter(param);
    }
}

fn walk_expressions<'ast, V, I>(visitor: &mut V, exprs: I)
where
    V: Visitor<'ast> + ?Sized,
    I: IntoIterator<Item = &'ast Expression>,
{
    for expr in exprs {
        visitor.visit_expression(expr);
    }
}

pub fn walk_source_unit<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, unit: &'ast SourceUnit) {
    match unit {
        SourceUnit::Pragma(_)
        | SourceUnit::AbiCoderPragma(_)
        | SourceUnit::ExperimentalPragma(_) => {}
        SourceUnit::Import(import) => visitor.visit_import(import),
        SourceUnit::Contract(contract) => visitor.visit_contract(contract),
        SourceUnit::Function(f) => {
            walk_params(visitor, &f.parameters);
            for m in &f.modifiers {
                visitor.visit_modifier_invocation(m);
            }
            walk_params(visitor, f.return_parameters.as_deref().unwrap_or_default());
            if let Some(body) = &f.body {
                visitor.visit_block(body);
            }
        }
        SourceUnit::Struct(s) => {
            for member in &s.members {
                visitor.visit_type_name(&member.type_name);
            }
        }
        SourceUnit::Enum(_) | SourceUnit::UserDefinedValueType(_) => {}
        SourceUnit::Error(e) => walk_params(visitor, &e.parameters),
        SourceUnit::Event(e) => walk_params(visitor, &e.parameters),
        SourceUnit::Using(u) => {
            if let Some(ty) = &u.for_type {
                visitor.visit_type_name(ty);
            }
        }
        SourceUnit::Constant(c) => {
            visitor.visit_type_name(&c.type_name);
            visitor.visit_expression(&c.value);
        }
    }
}

pub fn walk_contract<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    contract: &'ast ContractStatement,
) {
    for base in &contract.is {
        walk_expressions(visitor, base.arguments.iter().flatten());
    }
    for part in &contract.body {
        visitor.visit_contract_part(part);
    }
}

pub fn walk_contract_part<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    part: &'ast ContractPart,
) {
    let (params, modifiers, returns, body): (
        &[Parameter],
        &[ModifierInvocation],
        Option<&[Parameter]>,
        Option<&Block>,
    ) = match part {
        ContractPart::StateVariable(v) => {
            visitor.visit_type_name(&v.type_name);
            walk_expressions(visitor, &v.value);
            return;
        }
        ContractPart::Constructor(c) => (
            c.parameters.as_slice(),
            c.modifiers.as_slice(),
            None,
            Some(&c.body),
        ),
        ContractPart::Receive(r) => (
            Default::default(),
            r.modifiers.as_slice(),
            None,
            r.body.as_ref(),
        ),
        ContractPart::Fallback(f) => (
            f.parameters.as_slice(),
            f.modifiers.as_slice(),
            f.return_parameters.as_deref(),
            f.body.as_ref(),
        ),
        ContractPart::Function(f) => (
            f.parameters.as_slice(),
            f.modifiers.as_slice(),
            f.return_parameters.as_deref(),
            f.body.as_ref(),
        ),
        ContractPart::Modifier(m) => (
            m.parameters.as_deref().unwrap_or_default(),
            Default::default(),
            None,
            m.body.as_ref(),
        ),
        ContractPart::Event(e) => {
            walk_params(visitor, &e.parameters);
            return;
        }
        ContractPart::Error(e) => {
            walk_params(visitor, &e.parameters);
            return;
        }
        ContractPart::Struct(s) => {
            for member in &s.members {
                visitor.visit_type_name(&member.type_name);
            }
            return;
        }
        ContractPart::Using(u) => {
            if let Some(ty) = &u.for_type {
                visitor.visit_type_name(ty);
            }
            return;
        }
        ContractPart::Enum(_) | ContractPart::UserDefinedValueType(_) => return,
    };
    walk_params(visitor, params);
    for m in modifiers {
        visitor.visit_modifier_invocation(m);
    }
    walk_params(visitor, returns.unwrap_or_default());
    if let Some(body) = body {
        visitor.visit_block(body);
    }
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Statement) {
    match stmt {
        Statement::Block(block) => visitor.visit_block(block),
        Statement::Expression(s) => visitor.visit_expression(&s.expression),
        Statement::VariableDeclaration(s) => {
            for decl in s.declarations.iter().flatten() {
                visitor.visit_type_name(&decl.type_name);
            }
            walk_expressions(visitor, &s.initial_value);
        }
        Statement::If(s) => {
            visitor.visit_expression(&s.test);
            visitor.visit_statement(&s.consequent);
            if let Some(alt) = &s.alternate {
                visitor.visit_statement(alt);
            }
        }
        Statement::For(s) => {
            if let Some(init) = &s.init {
                visitor.visit_statement(init);
            }
            walk_expressions(visitor, s.test.iter().chain(&s.update));
            visitor.visit_statement(&s.body);
        }
        Statement::While(s) => {
            visitor.visit_expression(&s.test);
            visitor.visit_statement(&s.body);
        }
        Statement::DoWhile(s) => {
            visitor.visit_statement(&s.body);
            visitor.visit_expression(&s.test);
        }
        Statement::Try(s) => {
            visitor.visit_expression(&s.expression);
            walk_params(visitor, s.returns.as_deref().unwrap_or_default());
            visitor.visit_block(&s.body);
            for clause in &s.catch_clauses {
                walk_params(visitor, clause.parameters.as_deref().unwrap_or_default());
                visitor.visit_block(&clause.body);
            }
        }
        Statement::Return(s) => walk_expressions(visitor, &s.argument),
        Statement::Emit(s) => visitor.visit_expression(&s.expression),
        Statement::Revert(s) => visitor.visit_expression(&s.expression),
        Statement::Unchecked(s) => visitor.visit_block(&s.body),
        Statement::Break(_)
        | Statement::Continue(_)
        | Statement::Throw(_)
        | Statement::InlineAssembly(_)
        | Statement::Placeholder(_)
        | Statement::Incomplete(_) => {}
    }
}

pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expression) {
    match expr {
        Expression::Identifier(_)
        | Expression::NumberLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::BooleanLiteral(_) => {}
        Expression::Member(e) => visitor.visit_expression(&e.object),
        Expression::Index(e) => {
            visitor.visit_expression(&e.object);
            walk_expressions(visitor, e.index.as_deref());
        }
        Expression::IndexRange(e) => {
            visitor.visit_expression(&e.object);
            walk_expressions(
                visitor,
                e.index_start.as_deref().into_iter().chain(e.index_end.as_deref()),
            );
        }
        Expression::Call(e) => {
            visitor.visit_expression(&e.callee);
            match &e.arguments {
                CallArguments::Positional(args) => walk_expressions(visitor, args),
                CallArguments::Named(args) => {
                    walk_expressions(visitor, args.iter().map(|a| &a.value));
                }
            }
        }
        Expression::CallOptions(e) => {
            visitor.visit_expression(&e.callee);
            walk_expressions(visitor, e.options.iter().map(|a| &a.value));
        }
        Expression::Unary(e) => visitor.visit_expression(&e.argument),
        Expression::Binary(e) => {
            visitor.visit_expression(&e.left);
            visitor.visit_expression(&e.right);
        }
        Expression::Assignment(e) => {
            visitor.visit_expression(&e.left);
            visitor.visit_expression(&e.right);
        }
        Expression::Conditional(e) => {
            visitor.visit_expression(&e.test);
            visitor.visit_expression(&e.consequent);
            visitor.visit_expression(&e.alternate);
        }
        Expression::Tuple(e) => walk_expressions(visitor, e.components.iter().flatten()),
        Expression::New(e) => visitor.visit_type_name(&e.type_name),
    }
}

pub fn walk_type_name<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast TypeName) {
    match ty {
        TypeName::Elementary(_) | TypeName::UserDefined(_) => {}
        TypeName::Mapping(m) => {
            visitor.visit_type_name(&m.key_type);
            visitor.visit_type_name(&m.value_type);
        }
        TypeName::Array(a) => {
            visitor.visit_type_name(&a.base_type);
            walk_expressions(visitor, a.length.as_deref());
        }
        TypeName::Function(f) => {
            walk_params(visitor, &f.parameters);
            walk_params(visitor, &f.return_parameters);
        }
    }
}
