//! Comments, kept out of the AST.
//!
//! The lexer returns them in a [`CommentList`] next to the tokens, which is
//! all a documentation tool needs; it never has to build a tree.

use std::fmt;

use serde::Serialize;

use super::Span;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum CommentKind {
    /// `//` through the end of the line, newline not included.
    Line,
    /// `/* ... */`, which may cover several lines.
    Block,
}

/// One comment with its delimiters.
///
/// JSON shape: `{"type": "Line", "text": "// hi", "start": 0, "end": 5}`.
#[derive(Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    pub text: String,
    #[serde(flatten)]
    pub span: Span,
}

impl Comment {
    pub fn from_source(kind: CommentKind, span: Span, source: &str) -> Self {
        let text = span.slice(source).to_owned();
        Comment { kind, text, span }
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} {:?}", self.kind, self.span, self.text)
    }
}

/// Comments in the order they appear.
#[derive(Clone, Eq, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CommentList(Vec<Comment>);

impl CommentList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, comment: Comment) {
        self.0.push(comment);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Comment> {
        self.0
    }
}

impl fmt::Debug for CommentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl From<Vec<Comment>> for CommentList {
    fn from(comments: Vec<Comment>) -> Self {
        CommentList(comments)
    }
}

impl<'a> IntoIterator for &'a CommentList {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
