//! Edge case tests for wealdc-par.
