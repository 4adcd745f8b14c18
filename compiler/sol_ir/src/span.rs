//! Byte spans into a source string.
//!
//! Every AST node, token and comment carries one. Offsets are `u32`, which
//! caps a single source file at 4GiB; [`check_source_len`] enforces the cap
//! before lexing so later conversions can saturate without losing data.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// An offset that does not fit in a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanError {
    pub offset: usize,
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source offset {} is past the 4GiB limit for a single file",
            self.offset
        )
    }
}

impl std::error::Error for SpanError {}

/// Half-open byte range `start..end`.
///
/// Serializes as `{"start": .., "end": ..}`; nodes flatten it so the offsets
/// sit next to their `type` tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

fn narrow(offset: usize) -> Result<u32, SpanError> {
    u32::try_from(offset).map_err(|_| SpanError { offset })
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        Ok(Span::new(narrow(range.start)?, narrow(range.end)?))
    }

    /// Like [`Span::try_from_range`], clamping to `u32::MAX`.
    #[inline]
    pub fn from_range(range: Range<usize>) -> Self {
        let clamp = |offset| narrow(offset).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// `other` lies entirely inside `self`.
    #[inline]
    pub fn contains_span(self, other: Span) -> bool {
        (self.start..=self.end).contains(&other.start) && other.end <= self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Text under the span; empty when the span is out of bounds or cuts a
    /// UTF-8 sequence.
    pub fn slice(self, source: &str) -> &str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}

/// Fails when `source` is too long for its offsets to fit a [`Span`].
pub fn check_source_len(source: &str) -> Result<(), SpanError> {
    narrow(source.len()).map(drop)
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
