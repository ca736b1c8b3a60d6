//! wealdc-par - Parsing for the Weald front-end.
//!
//! A recursive-descent parser with Pratt-style expression precedence over
//! the token stream produced by `wealdc-lex`. Parsing is total: every run
//! returns a fully built [`ast::Script`], with `Missing` placeholder nodes
//! standing in wherever material could not be parsed, and every diagnostic
//! lands in the returned [`Problems`] buffer.
//!
//! Recovery is breakpoint-gated: the parser keeps a stack of closer tags
//! (`)`, `}`, `End`), and inner statement loops stop at the current
//! breakpoint instead of consuming a closer that belongs to an outer
//! construct.

pub mod ast;
mod expr;
mod literal;
mod stmt;

mod edge_cases;

use wealdc_lex::{tokenise, Token, TokenTag};
use wealdc_util::{codes, Loc, Problems, Source};

/// Parses a lexed token stream into a script plus parse-stage problems.
///
/// The stream must be terminated by a single `End` token, as `tokenise`
/// guarantees; handing over anything else is a programmer error and
/// panics.
///
/// # Examples
///
/// ```
/// use wealdc_lex::tokenise;
/// use wealdc_util::Source;
///
/// let source = Source::new("demo.weald", "let x = 1");
/// let (tokens, _) = tokenise(&source);
/// let (script, problems) = wealdc_par::parse(&tokens);
/// assert_eq!(script.stmts.items.len(), 1);
/// assert!(problems.is_empty());
/// ```
pub fn parse(tokens: &[Token]) -> (ast::Script, Problems) {
    let mut parser = Parser::new(tokens);
    let script = parser.parse_script();
    (script, parser.problems)
}

/// Lexes and parses a source in one call. Problems arrive in stage order:
/// the lexer's first, then the parser's.
pub fn parse_source(source: &Source) -> (ast::Script, Problems) {
    let (tokens, mut problems) = tokenise(source);
    let (script, mut parse_problems) = parse(&tokens);
    problems.append(&mut parse_problems);
    (script, problems)
}

/// A view of the token slice that hides `Newline` tokens and surfaces them
/// as "there was a line break just before the current token".
pub(crate) struct TokenStream<'t> {
    tokens: &'t [Token],
    index: usize,
    newline_before: bool,
}

impl<'t> TokenStream<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        assert!(
            matches!(tokens.last(), Some(last) if last.tag == TokenTag::End),
            "parser requires a token stream terminated by an End token"
        );
        let mut stream = Self {
            tokens,
            index: 0,
            newline_before: false,
        };
        stream.skip_newlines();
        stream
    }

    fn skip_newlines(&mut self) {
        while self.tokens[self.index].tag == TokenTag::Newline {
            self.newline_before = true;
            self.index += 1;
        }
    }

    /// The current non-newline token. `End` once the stream is exhausted.
    pub(crate) fn current(&self) -> &'t Token {
        &self.tokens[self.index]
    }

    pub(crate) fn tag(&self) -> TokenTag {
        self.current().tag
    }

    pub(crate) fn loc(&self) -> Loc {
        self.current().loc
    }

    /// True if a line break separated the previous token from this one.
    pub(crate) fn newline_before(&self) -> bool {
        self.newline_before
    }

    /// Position in the underlying slice, used as a progress measure.
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// The span of the terminal `End` token.
    pub(crate) fn end_loc(&self) -> Loc {
        self.tokens[self.tokens.len() - 1].loc
    }

    /// Moves past the current token; never moves past `End`.
    pub(crate) fn advance(&mut self) {
        if self.tag() != TokenTag::End {
            self.index += 1;
        }
        self.newline_before = false;
        self.skip_newlines();
    }
}

/// Parser state: the token view, the problem buffer, and the breakpoint
/// stack.
pub(crate) struct Parser<'t> {
    pub(crate) stream: TokenStream<'t>,
    pub(crate) problems: Problems,
    pub(crate) breakpoints: Vec<TokenTag>,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            problems: Problems::new(),
            // Depth tracks nesting, which is shallow in practice; one
            // allocation covers almost every source.
            breakpoints: Vec::with_capacity(16),
        }
    }

    fn parse_script(&mut self) -> ast::Script {
        self.breakpoints.push(TokenTag::End);
        let stmts = self.parse_stmts();
        self.breakpoints.pop();

        // Leftover tokens are only worth a diagnostic when nothing else
        // explains why the statement list stopped.
        if self.stream.tag() != TokenTag::End && self.problems.is_empty() {
            self.problems.report(
                codes::EXPECTED_END,
                format!(
                    "expected the end of the script, found '{}'",
                    self.stream.current().tag
                ),
                self.stream.loc(),
            );
        }

        let loc = Loc::from_range(0, self.stream.end_loc().end());
        ast::Script { stmts, loc }
    }

    /// A zero-length span at the start of the current token.
    pub(crate) fn here(&self) -> Loc {
        Loc::empty_at(self.stream.loc().start)
    }

    /// True if the current token is the innermost breakpoint.
    pub(crate) fn at_breakpoint(&self) -> bool {
        self.breakpoints.last() == Some(&self.stream.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Stmt};

    fn parse_body(body: &str) -> (ast::Script, Problems) {
        parse_source(&Source::new("test.weald", body))
    }

    fn single_expr(script: &ast::Script) -> &Expr {
        match &script.stmts.items[..] {
            [Stmt::Expr(stmt)] => &stmt.expr,
            other => panic!("expected a single expression statement, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source() {
        let (script, problems) = parse_body("");
        assert!(script.stmts.items.is_empty());
        assert_eq!(script.loc, Loc::new(0, 0));
        assert!(problems.is_empty());
    }

    #[test]
    fn test_let_with_operator_desugaring() {
        let (script, problems) = parse_body("let x = 1 + 2");
        assert!(problems.is_empty());

        let decl = match &script.stmts.items[..] {
            [Stmt::VariableDecl(decl)] => decl,
            other => panic!("expected one declaration, got {other:?}"),
        };
        assert_eq!(decl.kw_let, Loc::new(0, 3));
        assert_eq!(decl.name.text, "x");
        assert_eq!(decl.name.loc, Loc::new(4, 1));
        assert_eq!(decl.eq, Loc::new(6, 1));

        let call = match &decl.value {
            Expr::Call(call) => call,
            other => panic!("expected a call, got {other:?}"),
        };
        assert_eq!(call.receiver, Expr::Int { value: 1, loc: Loc::new(8, 1) });
        assert_eq!(call.function.text, "+");
        assert_eq!(call.function.loc, Loc::new(10, 1));
        let arguments = call.arguments.as_ref().expect("binary call has arguments");
        assert_eq!(
            arguments.items,
            [Expr::Int { value: 2, loc: Loc::new(12, 1) }]
        );
    }

    #[test]
    fn test_ambiguous_comparison_chain() {
        let (script, problems) = parse_body("1 == 2 != 3");

        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(ids, ["syntax/ambiguous-expr"]);
        // The problem spans both operators.
        assert_eq!(problems.as_slice()[0].loc, Loc::new(2, 7));

        // Still a left-associated chain.
        let outer = match single_expr(&script) {
            Expr::Call(call) => call,
            other => panic!("expected a call, got {other:?}"),
        };
        assert_eq!(outer.function.text, "!=");
        let inner = match &outer.receiver {
            Expr::Call(call) => call,
            other => panic!("expected a nested call, got {other:?}"),
        };
        assert_eq!(inner.function.text, "==");
        assert_eq!(inner.receiver, Expr::Int { value: 1, loc: Loc::new(0, 1) });
    }

    #[test]
    fn test_block_in_ternary_reported() {
        let (script, problems) = parse_body("if true ? {} : 1");

        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(ids, ["syntax/block-in-ternary"]);
        assert_eq!(problems.as_slice()[0].loc, Loc::new(10, 2));

        let if_expr = match single_expr(&script) {
            Expr::If(if_expr) => if_expr,
            other => panic!("expected an if, got {other:?}"),
        };
        assert_eq!(if_expr.ternary_then, Some(Loc::new(8, 1)));
        assert!(matches!(if_expr.then_branch, Expr::Block(_)));
        let else_branch = if_expr.else_branch.as_ref().expect("ternary has an else");
        assert_eq!(else_branch.kw_else, Loc::new(13, 1));
        assert_eq!(else_branch.body, Expr::Int { value: 1, loc: Loc::new(15, 1) });
    }

    #[test]
    fn test_unclosed_string_parses_to_missing() {
        let source = Source::new("test.weald", "\"foo\\");
        let (tokens, lex_problems) = tokenise(&source);
        assert_eq!(lex_problems.len(), 1);

        let (script, problems) = parse(&tokens);
        assert!(problems.is_empty(), "the lexer already reported");
        assert!(matches!(single_expr(&script), Expr::Missing { .. }));
    }

    #[test]
    fn test_mixed_base_literals() {
        let (script, problems) = parse_body("0xFFF_FF + 0b10_01");
        assert!(problems.is_empty());

        let call = match single_expr(&script) {
            Expr::Call(call) => call,
            other => panic!("expected a call, got {other:?}"),
        };
        assert!(matches!(
            call.receiver,
            Expr::Int { value: 0xFFFFF, .. }
        ));
        assert_eq!(call.function.text, "+");
        let arguments = call.arguments.as_ref().expect("binary call has arguments");
        assert!(matches!(arguments.items[0], Expr::Int { value: 9, .. }));
    }

    #[test]
    fn test_integer_overflow_becomes_missing() {
        // One above i128::MAX.
        let (script, problems) =
            parse_body("170_141_183_460_469_231_731_687_303_715_884_105_728");
        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(ids, ["syntax/invalid-int"]);
        assert!(matches!(single_expr(&script), Expr::Missing { .. }));
    }

    #[test]
    fn test_most_negative_literal_overflows() {
        // The sign applies after magnitude accumulation, so even the value
        // that would fit as i128::MIN reports overflow.
        let (_, problems) =
            parse_body("-170_141_183_460_469_231_731_687_303_715_884_105_728");
        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(ids, ["syntax/invalid-int"]);
    }

    #[test]
    fn test_expected_end_on_leftovers() {
        let (_, problems) = parse_body("1\n2 )");
        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(ids, ["syntax/expected-end"]);
    }

    #[test]
    fn test_expected_end_suppressed_by_prior_problems() {
        let (_, problems) = parse_body("let = 1\n2 )");
        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert!(ids.contains(&"syntax/expected-let-name"));
        assert!(!ids.contains(&"syntax/expected-end"));
    }

    #[test]
    fn test_determinism() {
        let body = "let a = 1\nif a ? 2 : 3\n\"s\" == `r`";
        let (first_script, first_problems) = parse_body(body);
        let (second_script, second_problems) = parse_body(body);
        assert_eq!(first_script, second_script);
        assert_eq!(first_problems, second_problems);
    }

    #[test]
    #[should_panic(expected = "terminated by an End token")]
    fn test_empty_stream_is_a_programmer_error() {
        let _ = parse(&[]);
    }
}
