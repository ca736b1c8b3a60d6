//! The problem buffer shared by the lexer and parser.
//!
//! Problems are plain data: a stable id, a human-readable message, and a
//! source span. Neither stage ever aborts; both append here and carry on.

use crate::{Loc, Source};

/// What went wrong: a stable slash-delimited id plus a rendered message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemDesc {
    /// Stable machine-readable id, e.g. `syntax/expected-end`.
    pub id: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ProblemDesc {
    /// The first slash-delimited segment of the id.
    ///
    /// # Examples
    ///
    /// ```
    /// use wealdc_util::ProblemDesc;
    ///
    /// let desc = ProblemDesc { id: "syntax/expected-end", message: String::new() };
    /// assert_eq!(desc.category(), "syntax");
    /// ```
    pub fn category(&self) -> &'static str {
        self.id.split('/').next().unwrap_or(self.id)
    }
}

/// A single diagnostic pinned to a source span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// Id and message.
    pub desc: ProblemDesc,
    /// The offending span; always a valid slice of the source body.
    pub loc: Loc,
}

impl Problem {
    /// Renders the problem against its source for console output.
    ///
    /// This is a data-carrier convenience, not a pretty-printer.
    ///
    /// # Examples
    ///
    /// ```
    /// use wealdc_util::{Loc, Problem, ProblemDesc, Source};
    ///
    /// let source = Source::new("demo.weald", "let = 1");
    /// let problem = Problem {
    ///     desc: ProblemDesc {
    ///         id: "syntax/expected-let-name",
    ///         message: "expected a name after 'let'".into(),
    ///     },
    ///     loc: Loc::empty_at(4),
    /// };
    /// assert_eq!(
    ///     problem.format_for_console(&source),
    ///     "demo.weald:1:5: expected a name after 'let' [syntax/expected-let-name]"
    /// );
    /// ```
    pub fn format_for_console(&self, source: &Source) -> String {
        format!(
            "{}:{}: {} [{}]",
            source.name(),
            source.line_column_at(self.loc),
            self.desc.message,
            self.desc.id
        )
    }
}

/// An append-only, insertion-ordered problem list.
///
/// Duplicates at the same location are allowed; nothing is ever removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problems {
    items: Vec<Problem>,
}

impl Problems {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a problem.
    pub fn report(&mut self, id: &'static str, message: impl Into<String>, loc: Loc) {
        self.items.push(Problem {
            desc: ProblemDesc {
                id,
                message: message.into(),
            },
            loc,
        });
    }

    /// Moves every problem out of `other`, preserving order.
    pub fn append(&mut self, other: &mut Problems) {
        self.items.append(&mut other.items);
    }

    /// The collected problems, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Problem] {
        &self.items
    }

    /// Iterates the collected problems in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for Problems {
    type Item = Problem;
    type IntoIter = std::vec::IntoIter<Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
