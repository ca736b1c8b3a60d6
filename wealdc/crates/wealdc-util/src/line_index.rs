//! Line and column lookup for diagnostics.
//!
//! [`LineIndices`] holds the byte offset of every line start in a source
//! body, computed once and then shared. [`LineColumn`] is the 1-based
//! human-facing position derived from it; columns count grapheme clusters,
//! not bytes, and a `\r\n` pair advances the column once.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::Loc;

/// Sorted byte offsets of line starts: offset 0, plus the offset
/// immediately after every `\n`.
///
/// A `\r\n` pair is one line break, contributing a single entry after the
/// `\n`.
///
/// # Examples
///
/// ```
/// use wealdc_util::LineIndices;
///
/// let indices = LineIndices::of("ab\ncd\r\nef");
/// assert_eq!(indices.starts(), &[0, 3, 7]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndices {
    starts: Vec<u32>,
}

impl LineIndices {
    /// Computes the line-start table for `text`.
    pub fn of(text: &str) -> Self {
        let mut starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i as u32 + 1);
            }
        }
        Self { starts }
    }

    /// The raw line-start offsets, ascending, never empty.
    #[inline]
    pub fn starts(&self) -> &[u32] {
        &self.starts
    }

    /// The number of lines (at least one, even for an empty text).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// The 0-based line containing byte `offset`.
    #[inline]
    pub fn line_of(&self, offset: u32) -> usize {
        self.starts.partition_point(|&s| s <= offset) - 1
    }

    /// The 1-based line/column of byte `offset` within `text`.
    ///
    /// `text` must be the body the table was computed from, and `offset`
    /// must lie on a `char` boundary (the end offset is allowed).
    pub fn line_column(&self, text: &str, offset: u32) -> LineColumn {
        let line = self.line_of(offset);
        let line_start = self.starts[line] as usize;
        let mut column = text[line_start..offset as usize].graphemes(true).count() as u32 + 1;
        // A \r\n pair occupies a single column: the \n maps onto the \r.
        let bytes = text.as_bytes();
        let i = offset as usize;
        if i < bytes.len() && bytes[i] == b'\n' && i > line_start && bytes[i - 1] == b'\r' {
            column -= 1;
        }
        LineColumn {
            line: line as u32 + 1,
            column,
        }
    }

    /// The 1-based line/column range covered by `loc` within `text`.
    pub fn range(&self, text: &str, loc: Loc) -> LineColumnRange {
        LineColumnRange {
            start: self.line_column(text, loc.start),
            end: self.line_column(text, loc.end()),
        }
    }
}

/// A 1-based line and grapheme-cluster column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
    /// Line number, 1-based.
    pub line: u32,
    /// Column number, 1-based, counted in grapheme clusters.
    pub column: u32,
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of [`LineColumn`] positions.
///
/// Displays as `L:C` for a single column, `L:C1-C2` within one line, and
/// `L1:C1-L2:C2` across lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineColumnRange {
    /// Position of the first column in the range.
    pub start: LineColumn,
    /// Position one past the last column in the range.
    pub end: LineColumn,
}

impl fmt::Display for LineColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            if self.end.column <= self.start.column + 1 {
                write!(f, "{}", self.start)
            } else {
                write!(f, "{}-{}", self.start, self.end.column)
            }
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
