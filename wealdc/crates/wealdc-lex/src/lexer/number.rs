//! Number literal lexing.
//!
//! Three interleaved syntaxes: hex (`0x`) and binary (`0b`) integers, and
//! decimal integers that may extend to a float with a fraction and a
//! lowercase exponent. Digit groups accept `_` between digits. The token
//! carries the full literal text, sign and prefix included; value parsing
//! and overflow detection happen later, during interpretation.

use wealdc_util::codes;

use crate::cursor::Mark;
use crate::lexer::Lexer;
use crate::runes;
use crate::token::TokenTag;

impl Lexer<'_> {
    pub(crate) fn lex_number(&mut self) {
        let start = self.cursor.mark();
        self.cursor.match_pred(runes::is_sign);

        if self.cursor.match_str("0x") {
            self.digits(runes::is_hex_digit);
            self.finish_number(start, TokenTag::Integer);
            return;
        }
        if self.cursor.match_str("0b") {
            self.digits(runes::is_binary_digit);
            self.finish_number(start, TokenTag::Integer);
            return;
        }

        let mut tag = TokenTag::Integer;
        self.digits(runes::is_digit);

        if self.cursor.check_char('.') && self.cursor.check_next(runes::is_digit) {
            self.cursor.next();
            self.digits(runes::is_digit);
            tag = TokenTag::Float;
        }

        // The exponent is committed only once a digit is certain; otherwise
        // the 'e' is left for the trailing-character check below.
        if self.cursor.check_char('e') {
            let before = self.cursor.mark();
            self.cursor.next();
            self.cursor.match_pred(runes::is_sign);
            if self.cursor.check(runes::is_digit) {
                self.digits(runes::is_digit);
                tag = TokenTag::Float;
            } else {
                self.cursor.restore(before);
            }
        }

        self.finish_number(start, tag);
    }

    /// Consumes a run of digits and underscores, reporting every `_` that
    /// is not followed by a digit.
    fn digits(&mut self, digit: fn(char) -> bool) {
        loop {
            if self.cursor.next_while(digit) > 0 {
                continue;
            }
            if self.cursor.check_char('_') {
                let underscore = self.cursor.mark();
                self.cursor.next();
                if !self.cursor.check(digit) {
                    self.problems.report(
                        codes::INVALID_UNDERSCORE,
                        "'_' in a number literal must sit between digits",
                        self.cursor.loc_from(underscore),
                    );
                }
                continue;
            }
            break;
        }
    }

    /// Emits the token, unless a name character follows the digit block, in
    /// which case the whole run becomes an `Invalid` token with a hint.
    fn finish_number(&mut self, start: Mark, tag: TokenTag) {
        if let Some(c) = self.cursor.peek() {
            if runes::is_name_char(c) {
                self.cursor.next_while(runes::is_name_char);
                let loc = self.cursor.loc_from(start);
                self.invalid(number_tail_hint(c), loc);
                return;
            }
        }
        let loc = self.cursor.loc_from(start);
        self.push_text(tag, self.cursor.text_from(start), loc);
    }
}

/// The hint for a name character stuck to the end of a number.
fn number_tail_hint(c: char) -> String {
    match c {
        'X' => "'X' cannot follow a number; hexadecimal literals are written with '0x'".into(),
        'B' => "'B' cannot follow a number; binary literals are written with '0b'".into(),
        '-' => "'-' cannot follow a number directly; insert a space before the operator".into(),
        'e' => "float exponent is missing its digits".into(),
        'E' => "'E' cannot follow a number; exponents are written with a lowercase 'e'".into(),
        _ => format!("'{c}' cannot follow a number; separate it with a space"),
    }
}
