//! Expression parsing: Pratt precedence over a static operator table.
//!
//! Precedence levels, loosest first: logic (`&&`, `||`), comparison,
//! additive, multiplicative, power (right-associative), then prefix
//! operators. Two spots are ambiguity-sensitive and parse but report:
//! two comparison operators in a row, and `&&` meeting `||` either way
//! round.
//!
//! Only `&&` and `||` get dedicated nodes. Every other binary operator
//! desugars to a call of the operator's name on the left operand, and a
//! prefix operator to a call of `"unary X"` with no argument list.

use wealdc_lex::TokenTag;
use wealdc_util::{codes, Loc};

use crate::ast::{Arguments, Binary, Call, Expr, Name};
use crate::Parser;

/// Binding power of prefix operators; tighter than every infix level.
const UNARY_POWER: u8 = 11;

/// Infix precedence levels, loosest to tightest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpLevel {
    Logic,
    Cmp,
    Add,
    Mul,
    Pow,
}

impl OpLevel {
    fn left_power(self) -> u8 {
        match self {
            OpLevel::Logic => 1,
            OpLevel::Cmp => 3,
            OpLevel::Add => 5,
            OpLevel::Mul => 7,
            OpLevel::Pow => 9,
        }
    }

    /// Left-associative levels bind their right operand one step tighter;
    /// the right-associative power level reuses its own power.
    fn right_power(self) -> u8 {
        match self {
            OpLevel::Pow => self.left_power(),
            _ => self.left_power() + 1,
        }
    }
}

/// One row of the operator table.
#[derive(Clone, Copy, Debug)]
struct OpInfo {
    tag: TokenTag,
    level: OpLevel,
    symbol: &'static str,
}

/// The operator consumed immediately before the current position, for
/// ambiguity detection.
#[derive(Clone, Copy, Debug)]
struct PrevOp {
    tag: TokenTag,
    level: OpLevel,
    symbol: &'static str,
    loc: Loc,
}

fn infix_op(tag: TokenTag) -> Option<OpInfo> {
    let (level, symbol) = match tag {
        TokenTag::AndAnd => (OpLevel::Logic, "&&"),
        TokenTag::OrOr => (OpLevel::Logic, "||"),
        TokenTag::EqualEqual => (OpLevel::Cmp, "=="),
        TokenTag::BangEqual => (OpLevel::Cmp, "!="),
        TokenTag::Less => (OpLevel::Cmp, "<"),
        TokenTag::LessEqual => (OpLevel::Cmp, "<="),
        TokenTag::Greater => (OpLevel::Cmp, ">"),
        TokenTag::GreaterEqual => (OpLevel::Cmp, ">="),
        TokenTag::Plus => (OpLevel::Add, "+"),
        TokenTag::Minus => (OpLevel::Add, "-"),
        TokenTag::Star => (OpLevel::Mul, "*"),
        TokenTag::Slash => (OpLevel::Mul, "/"),
        TokenTag::Percent => (OpLevel::Mul, "%"),
        TokenTag::Caret => (OpLevel::Pow, "^"),
        _ => return None,
    };
    Some(OpInfo { tag, level, symbol })
}

/// Chained comparisons are always ambiguous; mixed `&&`/`||` is too.
fn is_ambiguous(prev: PrevOp, next: OpInfo) -> bool {
    match (prev.level, next.level) {
        (OpLevel::Cmp, OpLevel::Cmp) => true,
        (OpLevel::Logic, OpLevel::Logic) => prev.tag != next.tag,
        _ => false,
    }
}

impl Parser<'_> {
    /// Parses a full expression. `fallback_id`/`fallback_message` name the
    /// diagnostic to report when not even a prefix is present.
    pub(crate) fn parse_expr(
        &mut self,
        fallback_id: &'static str,
        fallback_message: &'static str,
    ) -> Expr {
        self.parse_expr_power(0, None, fallback_id, fallback_message)
    }

    fn parse_expr_power(
        &mut self,
        min_power: u8,
        mut prev: Option<PrevOp>,
        fallback_id: &'static str,
        fallback_message: &'static str,
    ) -> Expr {
        let before = self.stream.index();
        let mut lhs = self.parse_prefix(fallback_id, fallback_message);
        if self.stream.index() == before {
            // Nothing was consumed, so there is no expression to extend;
            // running the operator loop here would only cascade.
            return lhs;
        }
        loop {
            let Some(op) = infix_op(self.stream.tag()) else {
                break;
            };
            if op.level.left_power() < min_power {
                break;
            }
            let op_loc = self.stream.loc();
            if let Some(prev) = prev {
                if is_ambiguous(prev, op) {
                    self.problems.report(
                        codes::AMBIGUOUS_EXPR,
                        format!(
                            "'{}' and '{}' chain ambiguously; group one side with parentheses",
                            prev.symbol, op.symbol
                        ),
                        prev.loc.cover(op_loc),
                    );
                }
            }
            self.stream.advance();
            let handed_down = PrevOp {
                tag: op.tag,
                level: op.level,
                symbol: op.symbol,
                loc: op_loc,
            };
            let rhs = self.parse_expr_power(
                op.level.right_power(),
                Some(handed_down),
                codes::EXPECTED_EXPR,
                "expected an expression",
            );
            lhs = combine(lhs, op, op_loc, rhs);
            prev = Some(handed_down);
        }
        lhs
    }

    /// Parses one prefix: a literal, a name, an opener, a prefix operator,
    /// or nothing, in which case a `Missing` is produced and the fallback
    /// diagnostic reported.
    fn parse_prefix(&mut self, fallback_id: &'static str, fallback_message: &'static str) -> Expr {
        let token = self.stream.current();
        let loc = token.loc;
        match token.tag {
            TokenTag::Name => {
                let name = Name::new(token.text(), loc);
                self.stream.advance();
                Expr::VariableRead { name }
            }
            TokenTag::KwTrue => {
                self.stream.advance();
                Expr::True { loc }
            }
            TokenTag::KwFalse => {
                self.stream.advance();
                Expr::False { loc }
            }
            TokenTag::Integer => self.parse_int_literal(),
            TokenTag::Float => self.parse_float_literal(),
            TokenTag::String => self.parse_string_literal(),
            TokenTag::ParenOpen => self.parse_group(),
            TokenTag::BraceOpen => Expr::Block(Box::new(self.parse_block())),
            TokenTag::KwIf => self.parse_if(),
            TokenTag::Bang | TokenTag::Plus | TokenTag::Minus => self.parse_unary(),
            TokenTag::Invalid => {
                // The lexer already reported this span; a placeholder is
                // all that is needed here.
                self.stream.advance();
                Expr::Missing {
                    loc: Loc::empty_at(loc.start),
                }
            }
            _ => {
                self.problems
                    .report(fallback_id, fallback_message, self.here());
                Expr::Missing { loc: self.here() }
            }
        }
    }

    fn parse_unary(&mut self) -> Expr {
        let op_loc = self.stream.loc();
        let symbol = match self.stream.tag() {
            TokenTag::Bang => "unary !",
            TokenTag::Minus => "unary -",
            _ => "unary +",
        };
        self.stream.advance();
        let operand = self.parse_expr_power(
            UNARY_POWER,
            None,
            codes::EXPECTED_EXPR,
            "expected an expression",
        );
        let loc = op_loc.cover(operand.loc());
        Expr::Call(Box::new(Call {
            receiver: operand,
            function: Name::new(symbol, op_loc),
            arguments: None,
            loc,
        }))
    }
}

/// Builds the node for `lhs op rhs`.
fn combine(lhs: Expr, op: OpInfo, op_loc: Loc, rhs: Expr) -> Expr {
    let loc = lhs.loc().cover(rhs.loc());
    match op.tag {
        TokenTag::AndAnd => Expr::And(Box::new(Binary {
            left: lhs,
            op: op_loc,
            right: rhs,
            loc,
        })),
        TokenTag::OrOr => Expr::Or(Box::new(Binary {
            left: lhs,
            op: op_loc,
            right: rhs,
            loc,
        })),
        _ => {
            let arguments = Arguments {
                loc: rhs.loc(),
                items: vec![rhs],
            };
            Expr::Call(Box::new(Call {
                receiver: lhs,
                function: Name::new(op.symbol, op_loc),
                arguments: Some(arguments),
                loc,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use wealdc_util::Source;

    use super::*;
    use crate::parse_source;

    fn parse_expr_body(body: &str) -> (Expr, wealdc_util::Problems) {
        let (script, problems) = parse_source(&Source::new("test.weald", body));
        let expr = match script.stmts.items.into_iter().next() {
            Some(crate::ast::Stmt::Expr(stmt)) => stmt.expr,
            other => panic!("expected an expression statement, got {other:?}"),
        };
        (expr, problems)
    }

    fn call_symbol(expr: &Expr) -> &str {
        match expr {
            Expr::Call(call) => &call.function.text,
            other => panic!("expected a call, got {other:?}"),
        }
    }

    fn call_parts(expr: &Expr) -> (&Expr, &str, &Expr) {
        match expr {
            Expr::Call(call) => {
                let arguments = call.arguments.as_ref().expect("binary call");
                (&call.receiver, call.function.text.as_str(), &arguments.items[0])
            }
            other => panic!("expected a call, got {other:?}"),
        }
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let (expr, problems) = parse_expr_body("1 + 2 * 3");
        assert!(problems.is_empty());
        let (lhs, op, rhs) = call_parts(&expr);
        assert_eq!(op, "+");
        assert!(matches!(lhs, Expr::Int { value: 1, .. }));
        let (inner_lhs, inner_op, inner_rhs) = call_parts(rhs);
        assert_eq!(inner_op, "*");
        assert!(matches!(inner_lhs, Expr::Int { value: 2, .. }));
        assert!(matches!(inner_rhs, Expr::Int { value: 3, .. }));
    }

    #[test]
    fn test_addition_left_associative() {
        let (expr, _) = parse_expr_body("1 - 2 - 3");
        let (lhs, op, _) = call_parts(&expr);
        assert_eq!(op, "-");
        assert_eq!(call_symbol(lhs), "-");
    }

    #[test]
    fn test_power_right_associative() {
        let (expr, problems) = parse_expr_body("2 ^ 3 ^ 4");
        assert!(problems.is_empty());
        let (lhs, op, rhs) = call_parts(&expr);
        assert_eq!(op, "^");
        assert!(matches!(lhs, Expr::Int { value: 2, .. }));
        assert_eq!(call_symbol(rhs), "^");
    }

    #[test]
    fn test_logic_nodes_not_calls() {
        let (expr, problems) = parse_expr_body("true && false");
        assert!(problems.is_empty());
        assert!(matches!(expr, Expr::And(_)));

        let (expr, _) = parse_expr_body("true || false");
        assert!(matches!(expr, Expr::Or(_)));
    }

    #[test]
    fn test_logic_binds_loosest() {
        let (expr, problems) = parse_expr_body("1 < 2 && 3 < 4");
        assert!(problems.is_empty());
        let and = match &expr {
            Expr::And(and) => and,
            other => panic!("expected &&, got {other:?}"),
        };
        assert_eq!(call_symbol(&and.left), "<");
        assert_eq!(call_symbol(&and.right), "<");
    }

    #[test]
    fn test_unary_desugaring() {
        let (expr, problems) = parse_expr_body("!ready");
        assert!(problems.is_empty());
        let call = match &expr {
            Expr::Call(call) => call,
            other => panic!("expected a call, got {other:?}"),
        };
        assert_eq!(call.function.text, "unary !");
        assert_eq!(call.function.loc, Loc::new(0, 1));
        assert!(call.arguments.is_none());
        assert!(matches!(&call.receiver, Expr::VariableRead { name } if name.text == "ready"));
    }

    #[test]
    fn test_unary_minus_on_spaced_operand() {
        let (expr, _) = parse_expr_body("- x");
        assert_eq!(call_symbol(&expr), "unary -");
    }

    #[test]
    fn test_unary_binds_tighter_than_power() {
        let (expr, _) = parse_expr_body("- x ^ 2");
        // (unary - x) ^ 2, not unary -(x ^ 2).
        let (lhs, op, _) = call_parts(&expr);
        assert_eq!(op, "^");
        assert_eq!(call_symbol(lhs), "unary -");
    }

    #[test]
    fn test_nested_unary() {
        let (expr, problems) = parse_expr_body("! ! a");
        assert!(problems.is_empty());
        let outer = match &expr {
            Expr::Call(call) => call,
            other => panic!("expected a call, got {other:?}"),
        };
        assert_eq!(outer.function.text, "unary !");
        assert_eq!(call_symbol(&outer.receiver), "unary !");
    }

    #[test]
    fn test_same_logic_operator_chains_cleanly() {
        let (_, problems) = parse_expr_body("a && b && c");
        assert!(problems.is_empty());
        let (_, problems) = parse_expr_body("a || b || c");
        assert!(problems.is_empty());
    }

    #[test]
    fn test_mixed_logic_reports_ambiguity() {
        let (expr, problems) = parse_expr_body("a && b || c");
        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(ids, ["syntax/ambiguous-expr"]);
        // Parsed left-associated all the same.
        assert!(matches!(expr, Expr::Or(_)));

        let (_, problems) = parse_expr_body("a || b && c");
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn test_comparison_chain_reports_each_adjacent_pair() {
        let (_, problems) = parse_expr_body("1 < 2 < 3 < 4");
        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(
            ids,
            ["syntax/ambiguous-expr", "syntax/ambiguous-expr"]
        );
    }

    #[test]
    fn test_parentheses_reset_ambiguity() {
        let (_, problems) = parse_expr_body("(1 == 2) != (3 == 4)");
        assert!(problems.is_empty());
    }

    #[test]
    fn test_comparison_then_logic_is_fine() {
        let (_, problems) = parse_expr_body("a == b && c != d");
        assert!(problems.is_empty());
    }

    #[test]
    fn test_missing_rhs_reports_expected_expr() {
        let (expr, problems) = parse_expr_body("1 +");
        let ids: Vec<_> = problems.iter().map(|p| p.desc.id).collect();
        assert_eq!(ids, ["syntax/expected-expr"]);
        let (_, _, rhs) = call_parts(&expr);
        assert!(matches!(rhs, Expr::Missing { .. }));
    }

    #[test]
    fn test_literal_prefixes() {
        let (expr, _) = parse_expr_body("true");
        assert!(matches!(expr, Expr::True { .. }));
        let (expr, _) = parse_expr_body("3.5");
        assert!(matches!(expr, Expr::Float { .. }));
        let (expr, _) = parse_expr_body("name");
        assert!(matches!(expr, Expr::VariableRead { .. }));
    }

    #[test]
    fn test_group_wraps_body() {
        let (expr, problems) = parse_expr_body("(1 + 2)");
        assert!(problems.is_empty());
        let group = match &expr {
            Expr::Group(group) => group,
            other => panic!("expected a group, got {other:?}"),
        };
        assert_eq!(group.opening, Loc::new(0, 1));
        assert_eq!(group.closing, Loc::new(6, 1));
        assert_eq!(call_symbol(&group.body), "+");
    }

    #[test]
    fn test_expression_continues_across_newline() {
        // The token view hides line breaks from the operator loop.
        let (expr, problems) = parse_expr_body("(1 +\n 2)");
        assert!(problems.is_empty());
        let group = match &expr {
            Expr::Group(group) => group,
            other => panic!("expected a group, got {other:?}"),
        };
        assert_eq!(call_symbol(&group.body), "+");
    }
}
