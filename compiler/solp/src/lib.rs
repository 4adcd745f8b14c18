//! Solidity parser front end.
//!
//! Three entry points over an in-memory source string:
//!
//! ```text
//! source ──► parse()          ──► Program (AST)      or SyntaxError
//!        ──► parse_comments() ──► Vec<Comment>
//!        ──► find_imports()   ──► Vec<String>        or FindImportsError
//! ```
//!
//! Each call is independent and keeps no state between calls, so files can
//! be parsed on as many threads as the caller likes. [`parse_file`] adds
//! file reading on top, and [`to_json`] renders a tree the way the `solp`
//! binary prints it.

mod file;
mod json;

use std::sync::Once;

use sol_ir::ast::{Expression, ImportStatement, Program, Statement};
use sol_ir::visitor::{walk_program, Visitor};
use sol_ir::Comment;
use tracing::debug;

pub use file::{parse_file, ParseFileError, ParsedContent, ParsedFile, ScanMode};
pub use json::to_json;
pub use sol_ir::Location;
pub use sol_parse::SyntaxError;

/// Options for [`parse`] and [`to_json`].
///
/// `range` and `loc` only affect JSON rendering; spans are always recorded
/// in the tree itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Add `"range": [start, end]` to every rendered node.
    pub range: bool,
    /// Add `"loc": {"start": {line, column}, "end": {line, column}}`.
    pub loc: bool,
    /// Replace unparseable statements in function bodies with
    /// `IncompleteStatement` nodes.
    pub tolerant: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_loc(mut self, loc: bool) -> Self {
        self.loc = loc;
        self
    }

    #[must_use]
    pub fn with_tolerant(mut self, tolerant: bool) -> Self {
        self.tolerant = tolerant;
        self
    }
}

/// Parse a complete source unit.
pub fn parse(source: &str, options: &ParseOptions) -> Result<Program, SyntaxError> {
    sol_parse::parse(source, options.tolerant)
}

/// Parse `source` as a single expression.
pub fn parse_expression(source: &str) -> Result<Expression, SyntaxError> {
    sol_parse::parse_expression(source)
}

/// Parse `source` as a single statement.
pub fn parse_statement(source: &str) -> Result<Statement, SyntaxError> {
    sol_parse::parse_statement(source)
}

/// All comments in `source`, in order. Never fails.
pub fn parse_comments(source: &str) -> Vec<Comment> {
    let comments = sol_lexer::lex_comments(source);
    debug!(comments = comments.len(), "extracted comments");
    comments.into_vec()
}

/// [`find_imports`] failed because the source does not parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("An error occurred while trying to parse the code:\n{0}")]
pub struct FindImportsError(#[from] pub SyntaxError);

/// Paths named by the top-level `import` directives of `source`.
///
/// Runs the import scanner, which never builds an AST for the rest of the
/// file.
pub fn find_imports(source: &str) -> Result<Vec<String>, FindImportsError> {
    Ok(sol_parse::scan_imports(source)?)
}

/// Paths of the `import` directives of an already parsed program.
pub fn imports_of(program: &Program) -> Vec<String> {
    struct Imports(Vec<String>);

    impl<'ast> Visitor<'ast> for Imports {
        fn visit_import(&mut self, import: &'ast ImportStatement) {
            self.0.push(import.from.clone());
        }
    }

    let mut imports = Imports(Vec::new());
    walk_program(&mut imports, program);
    imports.0
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=sol_parse=trace`. Output goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
