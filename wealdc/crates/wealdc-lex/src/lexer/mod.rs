//! The lexer: one forward pass from source text to a token buffer.
//!
//! The stream is a faithful serial image of the source: tokens appear in
//! source order, every `Invalid` sits exactly on the offending span, and
//! the buffer always ends with exactly one `End`. Between two non-newline
//! tokens there is at most one `Newline`, covering the whole ignorable run
//! that contained the break.

mod name;
mod number;
mod punct;
mod string;

use wealdc_util::{codes, Loc, Problems, Source};

use crate::cursor::{Cursor, ScanOutcome};
use crate::runes;
use crate::token::{Token, TokenTag};

/// Lexes a source into its complete token sequence and the problems found
/// along the way.
///
/// # Examples
///
/// ```
/// use wealdc_lex::{tokenise, TokenTag};
/// use wealdc_util::Source;
///
/// let source = Source::new("demo.weald", "let x = 1");
/// let (tokens, problems) = tokenise(&source);
/// let tags: Vec<_> = tokens.iter().map(|t| t.tag).collect();
/// assert_eq!(
///     tags,
///     [
///         TokenTag::KwLet,
///         TokenTag::Name,
///         TokenTag::Equal,
///         TokenTag::Integer,
///         TokenTag::End,
///     ]
/// );
/// assert!(problems.is_empty());
/// ```
pub fn tokenise(source: &Source) -> (Vec<Token>, Problems) {
    Lexer::new(source.body()).run()
}

/// The lexer state: a cursor, the token buffer, and the problem buffer.
pub(crate) struct Lexer<'src> {
    pub(crate) cursor: Cursor<'src>,
    tokens: Vec<Token>,
    pub(crate) problems: Problems,
}

impl<'src> Lexer<'src> {
    fn new(body: &'src str) -> Self {
        Self {
            cursor: Cursor::new(body),
            tokens: Vec::new(),
            problems: Problems::new(),
        }
    }

    fn run(mut self) -> (Vec<Token>, Problems) {
        self.skip_prelude();
        loop {
            self.skip_ignorable();
            let Some(c) = self.cursor.peek() else {
                break;
            };
            self.dispatch(c);
        }
        let here = self.cursor.here();
        self.tokens.push(Token::new(TokenTag::End, here));
        (self.tokens, self.problems)
    }

    /// Consumes a leading byte-order mark and a shebang line, if present.
    fn skip_prelude(&mut self) {
        self.cursor.match_char('\u{FEFF}');
        if self.cursor.check_str("#!") {
            self.cursor.next_while(|c| !runes::is_newline(c));
        }
    }

    /// Consumes whitespace, comments, and line breaks. If the run contained
    /// a break and a token has already been emitted, one `Newline` token
    /// spanning the run is appended.
    fn skip_ignorable(&mut self) {
        let run = self.cursor.mark();
        let mut saw_newline = false;
        loop {
            if self.cursor.next_while(runes::is_whitespace) > 0 {
                continue;
            }
            if self.cursor.check_str("--") {
                self.skip_comment();
                continue;
            }
            if self.cursor.check(runes::is_newline) {
                saw_newline = true;
                self.cursor.next();
                continue;
            }
            break;
        }
        if saw_newline && !self.tokens.is_empty() {
            self.tokens
                .push(Token::new(TokenTag::Newline, self.cursor.loc_from(run)));
        }
    }

    /// Consumes a `--` comment through the end of the line, reporting any
    /// forbidden runes inside it.
    fn skip_comment(&mut self) {
        self.cursor.next();
        self.cursor.next();
        loop {
            match self.cursor.next_until(runes::is_newline) {
                ScanOutcome::Forbidden => self.report_forbidden(),
                ScanOutcome::Matched | ScanOutcome::Empty => break,
            }
        }
    }

    fn dispatch(&mut self, c: char) {
        if runes::is_digit(c) || (runes::is_sign(c) && self.cursor.check_next(runes::is_digit)) {
            self.lex_number();
        } else if runes::is_name_start(c) {
            self.lex_name();
        } else if c == '"' {
            self.lex_standard_string();
        } else if c == '`' {
            self.lex_raw_string();
        } else if runes::is_punctuation(c) {
            self.lex_punctuation();
        } else {
            self.lex_invalid_rune();
        }
    }

    /// Consumes exactly one rune and emits an `Invalid` token whose message
    /// depends on the rune's classification.
    fn lex_invalid_rune(&mut self) {
        let start = self.cursor.mark();
        if let Some(c) = self.cursor.next() {
            let loc = self.cursor.loc_from(start);
            self.invalid(describe_rune(c), loc);
        }
    }

    /// Reports the forbidden rune at the cursor and consumes it.
    pub(crate) fn report_forbidden(&mut self) {
        let start = self.cursor.mark();
        if let Some(c) = self.cursor.next() {
            self.problems.report(
                codes::FORBIDDEN_RUNE,
                describe_rune(c),
                self.cursor.loc_from(start),
            );
        }
    }

    /// Emits an `Invalid` token and its mirror `syntax/invalid-token`
    /// problem.
    pub(crate) fn invalid(&mut self, message: String, loc: Loc) {
        self.problems
            .report(codes::INVALID_TOKEN, message.clone(), loc);
        self.tokens
            .push(Token::with_text(TokenTag::Invalid, message, loc));
    }

    pub(crate) fn push(&mut self, tag: TokenTag, loc: Loc) {
        self.tokens.push(Token::new(tag, loc));
    }

    pub(crate) fn push_text(&mut self, tag: TokenTag, text: impl Into<String>, loc: Loc) {
        self.tokens.push(Token::with_text(tag, text, loc));
    }
}

/// A pointed message for a rune that cannot appear here.
fn describe_rune(c: char) -> String {
    let cp = c as u32;
    if runes::is_line_separator(c) {
        format!("line separator U+{cp:04X} is not permitted; use a line feed")
    } else if matches!(c, '\u{000B}' | '\u{000C}') || runes::is_space_separator(c) {
        format!("whitespace character U+{cp:04X} is not permitted; use a plain space")
    } else if c.is_control() {
        format!("control character U+{cp:04X} is not permitted")
    } else {
        format!("unexpected character '{c}' (U+{cp:04X})")
    }
}

/// Test entry point that skips the `Source` wrapper.
#[cfg(test)]
pub(crate) fn lex(body: &str) -> (Vec<Token>, Problems) {
    Lexer::new(body).run()
}
