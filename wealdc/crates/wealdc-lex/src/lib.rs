//! wealdc-lex - Lexical analysis for the Weald front-end.
//!
//! One forward pass turns a [`wealdc_util::Source`] into a complete token
//! sequence plus a problem list; malformed input never stops the pass. The
//! stream always ends with exactly one `End` token, line breaks surface as
//! at most one `Newline` token between tokens, and everything unlexable
//! becomes an `Invalid` token pinned to its exact span.
//!
//! Layering, leaves first:
//!
//! - [`runes`]: character-level predicates, including the Unicode name
//!   grammar.
//! - [`cursor`]: the position-tracking view the lexer scans with.
//! - [`escape`]: escape decoding, shared with literal interpretation in
//!   the parser.
//! - [`lexer`]: the scanning loop itself, entered through [`tokenise`].
//!
//! Callers that only need tokens (tools, tests) can stop here; the parser
//! crate consumes this stream without re-reading the source.

pub mod cursor;
pub mod escape;
pub mod lexer;
pub mod runes;
mod token;

mod edge_cases;

pub use lexer::tokenise;
pub use token::{keyword, Token, TokenTag};
