//! The in-memory source object handed to the front-end.

use once_cell::sync::OnceCell;

use crate::{LineColumnRange, LineIndices, Loc};

/// A named, immutable source text.
///
/// The line-start table used for line/column lookups is computed lazily and
/// cached inside the source, so repeated diagnostics formatting does not
/// rescan the body and concurrent lookups are safe.
///
/// # Examples
///
/// ```
/// use wealdc_util::{Loc, Source};
///
/// let source = Source::new("demo.weald", "let x = 1");
/// assert_eq!(source.line_column_at(Loc::new(4, 1)).to_string(), "1:5");
/// ```
#[derive(Debug)]
pub struct Source {
    name: String,
    body: String,
    line_indices: OnceCell<LineIndices>,
}

impl Source {
    /// Creates a source from a display name and a body.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            line_indices: OnceCell::new(),
        }
    }

    /// The name used when formatting diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source text.
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The length of the body in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.body.len() as u32
    }

    /// Returns true if the body is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The cached line-start table for this body.
    pub fn line_indices(&self) -> &LineIndices {
        self.line_indices.get_or_init(|| LineIndices::of(&self.body))
    }

    /// The 1-based line/column range covered by `loc`.
    pub fn line_column_at(&self, loc: Loc) -> LineColumnRange {
        self.line_indices().range(&self.body, loc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let source = Source::new("main.weald", "true\n");
        assert_eq!(source.name(), "main.weald");
        assert_eq!(source.body(), "true\n");
        assert_eq!(source.len(), 5);
        assert!(!source.is_empty());
    }

    #[test]
    fn test_line_indices_cached() {
        let source = Source::new("t", "a\nb");
        let first = source.line_indices() as *const LineIndices;
        let second = source.line_indices() as *const LineIndices;
        assert_eq!(first, second);
    }

    #[test]
    fn test_line_column_at() {
        let source = Source::new("t", "ab\ncd");
        assert_eq!(source.line_column_at(Loc::new(3, 2)).to_string(), "2:1-3");
    }
}
