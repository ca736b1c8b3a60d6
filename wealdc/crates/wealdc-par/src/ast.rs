//! The abstract syntax tree.
//!
//! A sealed family of owned node types; every node carries the [`Loc`] of
//! the material it was parsed from, and every parent owns its children
//! outright. The tree is total: wherever parsing could not produce a real
//! child, a [`Expr::Missing`] placeholder with a zero-length span stands in,
//! so consumers never meet a dangling edge.
//!
//! Structural equality (including spans) is the notion of AST identity used
//! throughout the tests, so everything derives `PartialEq`.

use wealdc_util::Loc;

/// A name: NFC-normalized text plus the span it was read from.
///
/// Also used for the synthesized function names that binary and unary
/// operators desugar to (`"+"`, `"unary -"`, ...), where the span is the
/// operator token.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub text: String,
    pub loc: Loc,
}

impl Name {
    pub fn new(text: impl Into<String>, loc: Loc) -> Self {
        Self {
            text: text.into(),
            loc,
        }
    }
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A required expression that could not be parsed. Zero-length span at
    /// the failure point.
    Missing { loc: Loc },
    /// `true`
    True { loc: Loc },
    /// `false`
    False { loc: Loc },
    /// An integer literal, already range-checked.
    Int { value: i128, loc: Loc },
    /// A float literal, already checked finite.
    Float { value: f64, loc: Loc },
    /// A string literal of any flavor.
    String(Box<StringLit>),
    /// A name in expression position.
    VariableRead { name: Name },
    /// `( expr )`
    Group(Box<Group>),
    /// `{ stmts }`
    Block(Box<Block>),
    /// `if`, in either block or ternary form.
    If(Box<If>),
    /// `left && right`
    And(Box<Binary>),
    /// `left || right`
    Or(Box<Binary>),
    /// Every other operator application, desugared to a call on the
    /// receiver.
    Call(Box<Call>),
}

impl Expr {
    /// The span this expression was parsed from.
    pub fn loc(&self) -> Loc {
        match self {
            Expr::Missing { loc }
            | Expr::True { loc }
            | Expr::False { loc }
            | Expr::Int { loc, .. }
            | Expr::Float { loc, .. } => *loc,
            Expr::String(s) => s.loc,
            Expr::VariableRead { name } => name.loc,
            Expr::Group(g) => g.loc,
            Expr::Block(b) => b.loc,
            Expr::If(i) => i.loc,
            Expr::And(b) | Expr::Or(b) => b.loc,
            Expr::Call(c) => c.loc,
        }
    }
}

/// A string literal with its delimiters located and its content decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct StringLit {
    /// Span of the opening delimiter.
    pub opening: Loc,
    /// Span of the material between the delimiters.
    pub content: Loc,
    /// Span of the closing delimiter.
    pub closing: Loc,
    /// The decoded content: escapes applied, block indentation stripped.
    pub interpreted: String,
    pub loc: Loc,
}

/// A parenthesised expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub opening: Loc,
    pub body: Expr,
    pub closing: Loc,
    pub loc: Loc,
}

/// A braced statement list.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub opening: Loc,
    pub stmts: Stmts,
    pub closing: Loc,
    pub loc: Loc,
}

/// An `if` expression.
///
/// The ternary form `if p ? a : b` sets `ternary_then` to the span of the
/// `?` and wraps the else value in an [`Else`] whose `kw_else` is the span
/// of the `:`. The block form leaves `ternary_then` empty.
#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub kw_if: Loc,
    pub predicate: Expr,
    pub ternary_then: Option<Loc>,
    pub then_branch: Expr,
    pub else_branch: Option<Else>,
    pub loc: Loc,
}

/// An else branch: a block, a chained `if`, or a ternary else value.
#[derive(Clone, Debug, PartialEq)]
pub struct Else {
    pub kw_else: Loc,
    pub body: Expr,
    pub loc: Loc,
}

/// The operands of `&&` or `||`; `op` is the operator token's span.
#[derive(Clone, Debug, PartialEq)]
pub struct Binary {
    pub left: Expr,
    pub op: Loc,
    pub right: Expr,
    pub loc: Loc,
}

/// An operator application desugared to a call: `1 + 2` becomes a call of
/// `+` on receiver `1` with arguments `[2]`; unary operators have no
/// argument list at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub receiver: Expr,
    pub function: Name,
    pub arguments: Option<Arguments>,
    pub loc: Loc,
}

/// A call's argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments {
    pub items: Vec<Expr>,
    pub loc: Loc,
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// An expression in statement position.
    Expr(StmtExpr),
    /// `let name = value`
    VariableDecl(VariableDecl),
}

impl Stmt {
    /// The span this statement was parsed from.
    pub fn loc(&self) -> Loc {
        match self {
            Stmt::Expr(s) => s.loc,
            Stmt::VariableDecl(d) => d.loc,
        }
    }
}

/// An expression statement.
#[derive(Clone, Debug, PartialEq)]
pub struct StmtExpr {
    pub expr: Expr,
    pub loc: Loc,
}

/// A `let` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDecl {
    pub kw_let: Loc,
    pub name: Name,
    pub eq: Loc,
    pub value: Expr,
    pub loc: Loc,
}

/// A statement list.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmts {
    pub items: Vec<Stmt>,
    pub loc: Loc,
}

/// The root of a parse: the top-level statement list of one source.
#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    pub stmts: Stmts,
    pub loc: Loc,
}
