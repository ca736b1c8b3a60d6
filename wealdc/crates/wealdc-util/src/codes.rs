//! Stable problem ids.
//!
//! Ids are slash-delimited; the first segment is the category. They are part
//! of the machine-readable diagnostic contract and must not be renamed.

/// An invalid token produced by the lexer (mirrors the token's message).
pub const INVALID_TOKEN: &str = "syntax/invalid-token";
/// A malformed escape sequence inside a string literal.
pub const INVALID_ESCAPE: &str = "syntax/invalid-escape";
/// An `_` in a number literal not followed by a digit.
pub const INVALID_UNDERSCORE: &str = "syntax/invalid-underscore";
/// A name medial `-` not followed by a name-continue rune.
pub const INVALID_HYPHEN: &str = "syntax/invalid-hyphen";
/// Name characters after a name final (`?` or `!`).
pub const INVALID_NAME_FINAL: &str = "syntax/invalid-name-final";
/// A bidirectional mark embedded between name characters.
pub const INVALID_BIDI: &str = "syntax/invalid-bidi";
/// A forbidden rune inside a string literal or comment.
pub const FORBIDDEN_RUNE: &str = "syntax/forbidden-rune";

/// Leftover tokens after the top-level statement list.
pub const EXPECTED_END: &str = "syntax/expected-end";
/// `let` not followed by a name.
pub const EXPECTED_LET_NAME: &str = "syntax/expected-let-name";
/// `let <name>` not followed by `=`.
pub const EXPECTED_LET_EQ: &str = "syntax/expected-let-eq";
/// `let <name> =` not followed by an expression.
pub const EXPECTED_LET_EXPR: &str = "syntax/expected-let-expr";
/// A token that cannot start a statement.
pub const EXPECTED_STMT: &str = "syntax/expected-stmt";
/// Chained operators whose grouping is ambiguous.
pub const AMBIGUOUS_EXPR: &str = "syntax/ambiguous-expr";
/// An operator not followed by an expression.
pub const EXPECTED_EXPR: &str = "syntax/expected-expr";
/// `(` not followed by an expression.
pub const EXPECTED_EXPR_IN_GROUP: &str = "syntax/expected-expr-in-group";
/// `if` not followed by a predicate expression.
pub const EXPECTED_PREDICATE: &str = "syntax/expected-predicate";
/// Non-ternary `if` without a `{` body.
pub const EXPECTED_IF_BODY: &str = "syntax/expected-if-body";
/// `else` followed by neither `{` nor `if`.
pub const EXPECTED_ELSE_BODY: &str = "syntax/expected-else-body";
/// Ternary `?` not followed by an expression.
pub const EXPECTED_EXPR_IN_TERNARY_THEN: &str = "syntax/expected-expr-in-ternary-then";
/// Ternary then-branch not followed by `:`.
pub const EXPECTED_TERNARY_ELSE: &str = "syntax/expected-ternary-else";
/// Ternary `:` not followed by an expression.
pub const EXPECTED_EXPR_IN_TERNARY_ELSE: &str = "syntax/expected-expr-in-ternary-else";
/// A block or `if` used as a ternary branch.
pub const BLOCK_IN_TERNARY: &str = "syntax/block-in-ternary";
/// A group whose `)` never arrived.
pub const UNCLOSED_GROUP: &str = "syntax/unclosed-group";
/// A block whose `}` never arrived.
pub const UNCLOSED_BLOCK: &str = "syntax/unclosed-block";
/// An integer literal that does not fit a signed 128-bit integer.
pub const INVALID_INT: &str = "syntax/invalid-int";
/// A float literal that is not a finite IEEE-754 double.
pub const INVALID_FLOAT: &str = "syntax/invalid-float";
