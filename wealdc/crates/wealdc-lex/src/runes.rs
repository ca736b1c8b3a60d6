//! Character-level predicates.
//!
//! Everything the lexer wants to know about a single rune lives here. The
//! name predicates delegate to the compiled Unicode tables in
//! `unicode-ident` (ASCII bitmask fast path plus a two-level compressed
//! trie generated from the Unicode database); the rest are small fixed
//! sets.

/// Horizontal whitespace: space, tab, and the two bidirectional marks
/// U+200E/U+200F.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{200E}' | '\u{200F}')
}

/// Line break runes: LF and CR.
#[inline]
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Whitespace or a line break.
#[inline]
pub fn is_ignorable(c: char) -> bool {
    is_whitespace(c) || is_newline(c)
}

/// Runes never permitted in source text outside escape sequences: control
/// characters that are not ignorable, plus the U+2028/U+2029 line
/// separators.
#[inline]
pub fn is_forbidden(c: char) -> bool {
    (c.is_control() && !is_ignorable(c)) || matches!(c, '\u{2028}' | '\u{2029}')
}

/// ASCII punctuation that can begin a punctuation token (or, for a few
/// reserved characters, an invalid one).
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '!' | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '*'
            | '\\'
            | '&'
            | '#'
            | '%'
            | '`'
            | '^'
            | '|'
            | '~'
            | '$'
            | '+'
            | '-'
            | ','
            | ';'
            | ':'
            | '?'
            | '.'
            | '@'
            | '/'
            | '<'
            | '='
            | '>'
    )
}

/// Can begin a name: `_` or an XID start rune.
#[inline]
pub fn is_name_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Can continue a name: an XID continue rune (includes `_` and digits).
#[inline]
pub fn is_name_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// The name medial rune, `-`; must be followed by a continue rune.
#[inline]
pub fn is_name_medial(c: char) -> bool {
    c == '-'
}

/// A name final rune, `?` or `!`; at most one, at the very end.
#[inline]
pub fn is_name_final(c: char) -> bool {
    c == '?' || c == '!'
}

/// Any rune that can appear in a name after its first rune.
#[inline]
pub fn is_name_char(c: char) -> bool {
    is_name_continue(c) || is_name_medial(c) || is_name_final(c)
}

/// A decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// A hexadecimal digit, either case.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// A binary digit.
#[inline]
pub fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

/// A numeric sign.
#[inline]
pub fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Can begin a number: a sign or a decimal digit.
#[inline]
pub fn is_number_start(c: char) -> bool {
    is_sign(c) || is_digit(c)
}

/// One of the U+200E/U+200F bidirectional marks.
#[inline]
pub fn is_bidi_mark(c: char) -> bool {
    matches!(c, '\u{200E}' | '\u{200F}')
}

/// NEL or one of the Unicode line/paragraph separators, which get their
/// own diagnostic wording.
#[inline]
pub fn is_line_separator(c: char) -> bool {
    matches!(c, '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// A non-ASCII space separator (Unicode category Zs, minus the plain
/// space, which is ordinary whitespace).
#[inline]
pub fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\u{200E}'));
        assert!(is_whitespace('\u{200F}'));
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\u{00A0}'));
    }

    #[test]
    fn test_newline_set() {
        assert!(is_newline('\n'));
        assert!(is_newline('\r'));
        assert!(!is_newline('\u{2028}'));
    }

    #[test]
    fn test_forbidden_controls() {
        assert!(is_forbidden('\u{0000}'));
        assert!(is_forbidden('\u{0007}'));
        assert!(is_forbidden('\u{000B}'));
        assert!(is_forbidden('\u{000C}'));
        assert!(is_forbidden('\u{007F}'));
        assert!(is_forbidden('\u{0085}'));
        assert!(is_forbidden('\u{2028}'));
        assert!(is_forbidden('\u{2029}'));
        // Ignorable controls are not forbidden.
        assert!(!is_forbidden('\t'));
        assert!(!is_forbidden('\n'));
        assert!(!is_forbidden('\r'));
        // Non-control whitespace oddities are invalid but not forbidden.
        assert!(!is_forbidden('\u{00A0}'));
    }

    #[test]
    fn test_punctuation_set() {
        for c in "!()[]{}*\\&#%`^|~$+-,;:?.@/<=>".chars() {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
        }
        assert!(!is_punctuation('"'));
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation('_'));
    }

    #[test]
    fn test_name_predicates() {
        assert!(is_name_start('_'));
        assert!(is_name_start('a'));
        assert!(is_name_start('Δ'));
        assert!(is_name_start('変'));
        assert!(!is_name_start('1'));
        assert!(!is_name_start('-'));

        assert!(is_name_continue('a'));
        assert!(is_name_continue('1'));
        assert!(is_name_continue('_'));
        assert!(!is_name_continue('-'));
        assert!(!is_name_continue('?'));

        assert!(is_name_char('-'));
        assert!(is_name_char('?'));
        assert!(is_name_char('!'));
        assert!(!is_name_char(' '));
    }

    #[test]
    fn test_digit_families() {
        assert!(is_digit('0') && is_digit('9'));
        assert!(!is_digit('a'));
        assert!(is_hex_digit('f') && is_hex_digit('F') && is_hex_digit('0'));
        assert!(!is_hex_digit('g'));
        assert!(is_binary_digit('0') && is_binary_digit('1'));
        assert!(!is_binary_digit('2'));
    }

    #[test]
    fn test_number_start() {
        assert!(is_number_start('+'));
        assert!(is_number_start('-'));
        assert!(is_number_start('5'));
        assert!(!is_number_start('.'));
    }

    #[test]
    fn test_separator_classification() {
        assert!(is_line_separator('\u{0085}'));
        assert!(is_line_separator('\u{2028}'));
        assert!(is_space_separator('\u{00A0}'));
        assert!(is_space_separator('\u{3000}'));
        assert!(!is_space_separator(' '));
    }
}
