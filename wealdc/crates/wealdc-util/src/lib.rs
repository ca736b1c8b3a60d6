//! wealdc-util - Foundation types for the Weald front-end.
//!
//! This crate holds everything the lexer and parser share but neither owns:
//!
//! - [`Source`]: the in-memory source object (name + immutable body).
//! - [`Loc`]: byte-offset spans into a source body.
//! - [`LineIndices`] / [`LineColumn`]: the derived 1-based, grapheme-aware
//!   line/column view used by diagnostics.
//! - [`Problems`]: the append-only diagnostic buffer both stages report
//!   into, and the stable problem ids in [`codes`].
//!
//! Nothing in here aborts: problems are data, and every span stays valid
//! for the lifetime of the source it points into.

pub mod codes;
mod line_index;
mod loc;
mod problem;
mod source;

pub use line_index::{LineColumn, LineColumnRange, LineIndices};
pub use loc::Loc;
pub use problem::{Problem, ProblemDesc, Problems};
pub use source::Source;
