//! String literal lexing.
//!
//! Two flavors times two shapes: standard (`"`) and raw (`` ` ``), each as
//! a line literal or a triple-delimited block literal. The lexer only finds
//! the end of the literal and reports forbidden runes; escape decoding and
//! block dedenting happen when the literal is interpreted. The token text
//! is the full literal, delimiters included.

use crate::cursor::{Mark, ScanOutcome};
use crate::lexer::Lexer;
use crate::runes;
use crate::token::TokenTag;

impl Lexer<'_> {
    pub(crate) fn lex_standard_string(&mut self) {
        let start = self.cursor.mark();
        if self.cursor.match_str("\"\"\"") {
            self.lex_block(start, '"');
        } else {
            self.cursor.next();
            self.lex_line(start, '"');
        }
    }

    pub(crate) fn lex_raw_string(&mut self) {
        let start = self.cursor.mark();
        if self.cursor.match_str("```") {
            self.lex_block(start, '`');
        } else {
            self.cursor.next();
            self.lex_line(start, '`');
        }
    }

    /// A line literal: ends at the closing quote; a bare line break or the
    /// end of input ends it with an `Invalid` token instead.
    fn lex_line(&mut self, start: Mark, quote: char) {
        let escapes = quote == '"';
        loop {
            let outcome = self.cursor.next_until(|c| {
                c == quote || runes::is_newline(c) || (escapes && c == '\\')
            });
            match outcome {
                ScanOutcome::Forbidden => self.report_forbidden(),
                ScanOutcome::Empty => {
                    let loc = self.cursor.loc_from(start);
                    self.invalid("unclosed string literal".into(), loc);
                    return;
                }
                ScanOutcome::Matched => {
                    if self.cursor.check_char(quote) {
                        self.cursor.next();
                        let loc = self.cursor.loc_from(start);
                        self.push_text(TokenTag::String, self.cursor.text_from(start), loc);
                        return;
                    }
                    if self.cursor.check(runes::is_newline) {
                        // The break stays outside the token and separates
                        // lines as usual.
                        let loc = self.cursor.loc_from(start);
                        self.invalid(
                            "newline in string literal; close the string or use a block string"
                                .into(),
                            loc,
                        );
                        return;
                    }
                    self.consume_escape_lead_in();
                }
            }
        }
    }

    /// A block literal: ends at the next unescaped triple delimiter.
    fn lex_block(&mut self, start: Mark, quote: char) {
        let escapes = quote == '"';
        let delim = if quote == '"' { "\"\"\"" } else { "```" };
        loop {
            let outcome = self
                .cursor
                .next_until(|c| c == quote || (escapes && c == '\\'));
            match outcome {
                ScanOutcome::Forbidden => self.report_forbidden(),
                ScanOutcome::Empty => {
                    let loc = self.cursor.loc_from(start);
                    self.invalid("unclosed string literal".into(), loc);
                    return;
                }
                ScanOutcome::Matched => {
                    if self.cursor.check_char('\\') && escapes {
                        self.consume_escape_lead_in();
                    } else if self.cursor.match_str(delim) {
                        let loc = self.cursor.loc_from(start);
                        self.push_text(TokenTag::String, self.cursor.text_from(start), loc);
                        return;
                    } else {
                        // A lone quote, not a closing delimiter.
                        self.cursor.next();
                    }
                }
            }
        }
    }

    /// Consumes a backslash and whatever it escapes, so an escaped quote
    /// cannot end the literal. After a backslash-newline the following
    /// ignorable run belongs to the literal (line continuation). A
    /// forbidden rune is left for the scanner to report.
    fn consume_escape_lead_in(&mut self) {
        self.cursor.next();
        if self.cursor.check(runes::is_newline) {
            self.cursor.next_while(runes::is_ignorable);
        } else if self.cursor.check_not(runes::is_forbidden) {
            self.cursor.next();
        }
    }
}
