//! Statements, blocks, groups, and `if` in both of its forms.
//!
//! Statement lists are breakpoint-gated: inside `{` the list stops at `}`
//! so the block parser can consume it, and the script-level list stops at
//! `End`. A statement that consumes nothing costs one token of progress,
//! so malformed input cannot wedge the loop.

use wealdc_lex::TokenTag;
use wealdc_util::{codes, Loc};

use crate::ast::{Block, Else, Expr, Group, If, Name, Stmt, StmtExpr, Stmts, VariableDecl};
use crate::Parser;

impl Parser<'_> {
    /// Parses statements until the current breakpoint, `End`, or a missing
    /// line break between statements.
    pub(crate) fn parse_stmts(&mut self) -> Stmts {
        let start = self.here();
        let mut items = Vec::new();
        loop {
            if self.stream.tag() == TokenTag::End || self.at_breakpoint() {
                break;
            }
            if !items.is_empty() && !self.stream.newline_before() {
                break;
            }
            let before = self.stream.index();
            items.push(self.parse_stmt());
            if self.stream.index() == before {
                self.stream.advance();
            }
        }
        let loc = match (items.first(), items.last()) {
            (Some(first), Some(last)) => first.loc().cover(last.loc()),
            _ => start,
        };
        Stmts { items, loc }
    }

    fn parse_stmt(&mut self) -> Stmt {
        if self.stream.tag() == TokenTag::KwLet {
            return Stmt::VariableDecl(self.parse_variable_decl());
        }
        let expr = self.parse_expr(codes::EXPECTED_STMT, "expected a statement");
        let loc = expr.loc();
        Stmt::Expr(StmtExpr { expr, loc })
    }

    /// `let <name> = <expr>`; each missing piece gets its own diagnostic
    /// and a zero-length stand-in, and parsing carries on.
    fn parse_variable_decl(&mut self) -> VariableDecl {
        let kw_let = self.stream.loc();
        self.stream.advance();

        let name = if self.stream.tag() == TokenTag::Name {
            let name = Name::new(self.stream.current().text(), self.stream.loc());
            self.stream.advance();
            name
        } else {
            self.problems.report(
                codes::EXPECTED_LET_NAME,
                "expected a name after 'let'",
                self.here(),
            );
            Name::new("", self.here())
        };

        let eq = if self.stream.tag() == TokenTag::Equal {
            let eq = self.stream.loc();
            self.stream.advance();
            eq
        } else {
            self.problems.report(
                codes::EXPECTED_LET_EQ,
                "expected '=' after the declared name",
                self.here(),
            );
            self.here()
        };

        let value = self.parse_expr(codes::EXPECTED_LET_EXPR, "expected an expression after '='");
        let loc = kw_let.cover(value.loc());
        VariableDecl {
            kw_let,
            name,
            eq,
            value,
            loc,
        }
    }

    /// `( <expr> )` with `)` as the inner breakpoint.
    pub(crate) fn parse_group(&mut self) -> Expr {
        let opening = self.stream.loc();
        self.stream.advance();
        self.breakpoints.push(TokenTag::ParenClose);
        let body = self.parse_expr(
            codes::EXPECTED_EXPR_IN_GROUP,
            "expected an expression after '('",
        );
        self.breakpoints.pop();
        let closing = if self.stream.tag() == TokenTag::ParenClose {
            let closing = self.stream.loc();
            self.stream.advance();
            closing
        } else {
            self.problems.report(
                codes::UNCLOSED_GROUP,
                "this group is never closed; expected ')'",
                self.here(),
            );
            self.here()
        };
        let loc = opening.cover(closing);
        Expr::Group(Box::new(Group {
            opening,
            body,
            closing,
            loc,
        }))
    }

    /// `{ <stmts> }` with `}` as the inner breakpoint.
    pub(crate) fn parse_block(&mut self) -> Block {
        let opening = self.stream.loc();
        self.stream.advance();
        self.breakpoints.push(TokenTag::BraceClose);
        let stmts = self.parse_stmts();
        self.breakpoints.pop();
        let closing = if self.stream.tag() == TokenTag::BraceClose {
            let closing = self.stream.loc();
            self.stream.advance();
            closing
        } else {
            self.problems.report(
                codes::UNCLOSED_BLOCK,
                "this block is never closed; expected '}'",
                self.here(),
            );
            self.here()
        };
        let loc = opening.cover(closing);
        Block {
            opening,
            stmts,
            closing,
            loc,
        }
    }

    /// `if` in ternary form (`if p ? a : b`) or block form
    /// (`if p { } else ...`).
    pub(crate) fn parse_if(&mut self) -> Expr {
        let kw_if = self.stream.loc();
        self.stream.advance();

        let predicate = self.parse_expr(
            codes::EXPECTED_PREDICATE,
            "expected a predicate expression after 'if'",
        );

        if self.stream.tag() == TokenTag::Question {
            return self.parse_ternary_tail(kw_if, predicate);
        }

        let then_branch = if self.stream.tag() == TokenTag::BraceOpen {
            Expr::Block(Box::new(self.parse_block()))
        } else {
            self.problems.report(
                codes::EXPECTED_IF_BODY,
                "expected '{' to open the if body",
                self.here(),
            );
            Expr::Missing { loc: self.here() }
        };

        let else_branch = if self.stream.tag() == TokenTag::KwElse {
            let kw_else = self.stream.loc();
            self.stream.advance();
            let body = match self.stream.tag() {
                TokenTag::BraceOpen => Expr::Block(Box::new(self.parse_block())),
                TokenTag::KwIf => self.parse_if(),
                _ => {
                    self.problems.report(
                        codes::EXPECTED_ELSE_BODY,
                        "expected '{' or 'if' after 'else'",
                        self.here(),
                    );
                    Expr::Missing { loc: self.here() }
                }
            };
            let loc = kw_else.cover(body.loc());
            Some(Else { kw_else, body, loc })
        } else {
            None
        };

        let end = else_branch
            .as_ref()
            .map(|e| e.loc)
            .unwrap_or_else(|| then_branch.loc());
        let loc = kw_if.cover(end);
        Expr::If(Box::new(If {
            kw_if,
            predicate,
            ternary_then: None,
            then_branch,
            else_branch,
            loc,
        }))
    }

    /// The `? then : else` tail. Neither branch may itself be a block or an
    /// `if`.
    fn parse_ternary_tail(&mut self, kw_if: Loc, predicate: Expr) -> Expr {
        let question = self.stream.loc();
        self.stream.advance();

        let then_branch = self.parse_expr(
            codes::EXPECTED_EXPR_IN_TERNARY_THEN,
            "expected an expression after '?'",
        );
        self.check_ternary_branch(&then_branch);

        let else_branch = if self.stream.tag() == TokenTag::Colon {
            let colon = self.stream.loc();
            self.stream.advance();
            let body = self.parse_expr(
                codes::EXPECTED_EXPR_IN_TERNARY_ELSE,
                "expected an expression after ':'",
            );
            self.check_ternary_branch(&body);
            let loc = colon.cover(body.loc());
            Some(Else {
                kw_else: colon,
                body,
                loc,
            })
        } else {
            self.problems.report(
                codes::EXPECTED_TERNARY_ELSE,
                "expected ':' and an else value to finish the ternary",
                self.here(),
            );
            None
        };

        let end = else_branch
            .as_ref()
            .map(|e| e.loc)
            .unwrap_or_else(|| then_branch.loc());
        let loc = kw_if.cover(end);
        Expr::If(Box::new(If {
            kw_if,
            predicate,
            ternary_then: Some(question),
            then_branch,
            else_branch,
            loc,
        }))
    }

    fn check_ternary_branch(&mut self, branch: &Expr) {
        if matches!(branch, Expr::Block(_) | Expr::If(_)) {
            self.problems.report(
                codes::BLOCK_IN_TERNARY,
                "a ternary branch cannot be a block or an 'if'",
                branch.loc(),
            );
        }
    }
}
