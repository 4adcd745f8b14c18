//! Parsing from the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use sol_ir::ast::Program;
use sol_ir::{Comment, Location};
use tracing::debug;

use crate::{
    find_imports, parse, parse_comments, to_json, FindImportsError, ParseOptions, SyntaxError,
};

/// What to extract from a file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// The whole AST.
    #[default]
    Full,
    /// Only the paths of `import` directives.
    Imports,
    /// Only the comments.
    Comments,
}

/// Result of one [`ScanMode`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedContent {
    Program(Program),
    Imports(Vec<String>),
    Comments(Vec<Comment>),
}

/// A file and what was extracted from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub content: ParsedContent,
}

impl ParsedFile {
    pub fn program(&self) -> Option<&Program> {
        match &self.content {
            ParsedContent::Program(program) => Some(program),
            _ => None,
        }
    }

    /// Render the content as JSON. `range`/`loc` decorate AST nodes only.
    pub fn to_json(&self, options: &ParseOptions) -> Result<Value, serde_json::Error> {
        match &self.content {
            ParsedContent::Program(program) => to_json(program, &self.source, options),
            other => serde_json::to_value(other),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseFileError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Imports(#[from] FindImportsError),
}

impl ParseFileError {
    /// Error class name, as printed by the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            ParseFileError::Io { .. } => "IOError",
            ParseFileError::Syntax(_) => "SyntaxError",
            ParseFileError::Imports(_) => "Error",
        }
    }

    /// The message without the class name.
    pub fn message(&self) -> String {
        match self {
            ParseFileError::Syntax(err) => err.message.clone(),
            other => other.to_string(),
        }
    }

    /// Source position, for syntax errors of a full parse.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseFileError::Syntax(err) => Some(err.location),
            _ => None,
        }
    }
}

/// Read `path` and extract what `mode` asks for.
///
/// `options.tolerant` applies to [`ScanMode::Full`] only.
pub fn parse_file(
    path: impl AsRef<Path>,
    mode: ScanMode,
    options: &ParseOptions,
) -> Result<ParsedFile, ParseFileError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ParseFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), ?mode, "parsing file");

    let content = match mode {
        ScanMode::Full => ParsedContent::Program(parse(&source, options)?),
        ScanMode::Imports => ParsedContent::Imports(find_imports(&source)?),
        ScanMode::Comments => ParsedContent::Comments(parse_comments(&source)),
    };
    Ok(ParsedFile {
        path: path.to_path_buf(),
        source,
        content,
    })
}
