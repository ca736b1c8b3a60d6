//! Name and keyword lexing.
//!
//! The name grammar is `NameStart NameContinue* (-NameContinue+)* (?|!)?`.
//! Accepted text is NFC-normalized before the keyword check, so a name
//! spelled with combining marks is the same name as its composed form.

use unicode_normalization::{is_nfc, UnicodeNormalization};
use wealdc_util::{codes, Loc};

use crate::lexer::Lexer;
use crate::runes;
use crate::token::{keyword, TokenTag};

impl Lexer<'_> {
    pub(crate) fn lex_name(&mut self) {
        let start = self.cursor.mark();
        self.cursor.next();
        self.cursor.next_while(runes::is_name_continue);

        // Medial-continue repetitions. A dash with nothing after it is
        // consumed and reported, and ends the name.
        while self.cursor.check(runes::is_name_medial) {
            let dash = self.cursor.mark();
            self.cursor.next();
            if self.cursor.next_while(runes::is_name_continue) == 0 {
                self.problems.report(
                    codes::INVALID_HYPHEN,
                    "'-' inside a name must be followed by a name character",
                    self.cursor.loc_from(dash),
                );
                break;
            }
        }

        if self.cursor.match_pred(runes::is_name_final).is_some()
            && self.cursor.check(runes::is_name_char)
        {
            let tail = self.cursor.mark();
            self.cursor.next_while(runes::is_name_char);
            self.problems.report(
                codes::INVALID_NAME_FINAL,
                "name characters after a '?' or '!' name final",
                self.cursor.loc_from(tail),
            );
        }

        // A bidi mark squeezed between this name and more name material
        // would render misleadingly; flag it, then let the ignorable run
        // consume it as whitespace.
        if let Some(mark) = self.cursor.peek() {
            if runes::is_bidi_mark(mark) && self.cursor.check_next(runes::is_name_char) {
                self.problems.report(
                    codes::INVALID_BIDI,
                    "bidirectional mark embedded in a name",
                    Loc::new(self.cursor.offset(), mark.len_utf8() as u32),
                );
            }
        }

        let text = self.cursor.text_from(start);
        let loc = self.cursor.loc_from(start);
        let normalized = if is_nfc(text) {
            text.to_string()
        } else {
            text.nfc().collect()
        };
        match keyword(&normalized) {
            Some(tag) => self.push(tag, loc),
            None => self.push_text(TokenTag::Name, normalized, loc),
        }
    }
}
