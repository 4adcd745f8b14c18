//! Byte offset to line/column conversion.
//!
//! Lines are split on `\n` only, the same convention the lexer uses when it
//! treats `\r\n` as ordinary whitespace. Lines and columns are 1-based and
//! columns count characters, not bytes.

use serde::Serialize;

/// A resolved source position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

/// Line start offsets for one source text.
///
/// Built once per source so that decorating every node of a large AST with
/// line/column data stays O(log L) per lookup.
#[derive(Clone, Debug)]
pub struct LineOffsetTable<'src> {
    source: &'src str,
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl<'src> LineOffsetTable<'src> {
    pub fn build(source: &'src str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { source, offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Resolve `offset` (clamped to the source length) to a [`Location`].
    pub fn locate(&self, offset: u32) -> Location {
        let offset = offset.min(u32::try_from(self.source.len()).unwrap_or(u32::MAX));
        let line = self.line_from_offset(offset);
        let line_start = self.offsets[(line - 1) as usize] as usize;
        let prefix = self
            .source
            .get(line_start..offset as usize)
            .unwrap_or_else(|| &self.source[line_start..]);
        let column = u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX - 1) + 1;
        Location {
            line,
            column,
            offset,
        }
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
