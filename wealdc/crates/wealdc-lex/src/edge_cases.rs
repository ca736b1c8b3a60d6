//! Edge case and property tests for wealdc-lex.
