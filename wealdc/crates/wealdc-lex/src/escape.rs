//! Escape sequence decoding for standard string literals.
//!
//! The lexer only scans strings for termination; decoding runs once, when
//! literal content is interpreted, and reports each malformed escape at its
//! precise `\…` span. A malformed escape contributes U+FFFD to the decoded
//! text and decoding continues.
//!
//! The escape set: `\"`, `\\`, `\e`, `\n`, `\r`, `\t`, `\xHH` (exactly two
//! hex digits), `\uHHHH` (exactly four), `\u{H…H}` (one to six between
//! braces), and a backslash before a line break, which elides the break and
//! the following whitespace.

use thiserror::Error;
use wealdc_util::{codes, Loc, Problems};

use crate::runes;

/// A malformed escape sequence. The `Display` text is the problem message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("unknown escape '\\{0}'")]
    Unknown(char),
    #[error("'\\x' escape needs exactly two hex digits")]
    MalformedHex,
    #[error("'\\u' escape needs exactly four hex digits")]
    MalformedUnicode,
    #[error("'\\u{{...}}' escape needs one to six hex digits before the closing brace")]
    MalformedBracedUnicode,
    #[error("escape does not name a valid unicode scalar value")]
    InvalidScalar,
    #[error("'\\' at the end of the literal escapes nothing")]
    Dangling,
}

/// Decodes the content of a standard line string.
///
/// `text` is the material between the quotes; `base` is its byte offset in
/// the source, used to pin `syntax/invalid-escape` problems.
pub fn unescape_line(text: &str, base: u32, problems: &mut Problems) -> String {
    let mut out = String::with_capacity(text.len());
    unescape_into(&mut out, text, base, problems);
    out
}

/// Decodes the already-dedented lines of a standard block string.
///
/// Each entry is a line's text (no line break) and its byte offset in the
/// source. A backslash at the end of a line is a continuation: the line
/// break and the following whitespace-only material are elided.
pub fn unescape_block(lines: &[(&str, u32)], problems: &mut Problems) -> String {
    let mut out = String::new();
    let mut continuation = false;
    let mut first = true;
    for &(line, base) in lines {
        let mut text = line;
        let mut base = base;
        if continuation {
            let trimmed = text.trim_start_matches(runes::is_whitespace);
            base += (text.len() - trimmed.len()) as u32;
            text = trimmed;
            if text.is_empty() {
                continue;
            }
            continuation = false;
        } else if !first {
            out.push('\n');
        }
        first = false;
        continuation = unescape_into(&mut out, text, base, problems);
    }
    out
}

/// Decodes `text` into `out`. Returns true when the text ends with a bare
/// continuation backslash.
fn unescape_into(out: &mut String, text: &str, base: u32, problems: &mut Problems) -> bool {
    let mut i = 0;
    while let Some(c) = text[i..].chars().next() {
        if c != '\\' {
            out.push(c);
            i += c.len_utf8();
            continue;
        }
        let rest = &text[i + 1..];
        if rest.is_empty() {
            return true;
        }
        if rest.starts_with(runes::is_newline) {
            // Line continuation: drop the break and the indentation of the
            // continued material.
            i += 1;
            while let Some(c) = text[i..].chars().next() {
                if !runes::is_ignorable(c) {
                    break;
                }
                i += c.len_utf8();
            }
            continue;
        }
        let (consumed, result) = decode_escape(rest);
        let len = 1 + consumed;
        match result {
            Ok(decoded) => out.push(decoded),
            Err(error) => {
                problems.report(
                    codes::INVALID_ESCAPE,
                    error.to_string(),
                    Loc::new(base + i as u32, len as u32),
                );
                out.push('\u{FFFD}');
            }
        }
        i += len;
    }
    false
}

/// Decodes one escape. `rest` starts after the backslash and is non-empty.
/// Returns the byte length consumed after the backslash and the result.
fn decode_escape(rest: &str) -> (usize, Result<char, EscapeError>) {
    let Some(c) = rest.chars().next() else {
        return (0, Err(EscapeError::Dangling));
    };
    match c {
        '"' => (1, Ok('"')),
        '\\' => (1, Ok('\\')),
        'e' => (1, Ok('\u{1B}')),
        'n' => (1, Ok('\n')),
        'r' => (1, Ok('\r')),
        't' => (1, Ok('\t')),
        'x' => {
            let digits = hex_prefix(&rest[1..], 2);
            if digits.len() == 2 {
                let value = u32::from_str_radix(digits, 16).unwrap_or(0);
                match char::from_u32(value) {
                    Some(decoded) => (3, Ok(decoded)),
                    None => (3, Err(EscapeError::InvalidScalar)),
                }
            } else {
                (1 + digits.len(), Err(EscapeError::MalformedHex))
            }
        }
        'u' => decode_unicode_escape(&rest[1..]),
        other => (other.len_utf8(), Err(EscapeError::Unknown(other))),
    }
}

/// Decodes the tail of a `\u` escape. `rest` starts after the `u`.
fn decode_unicode_escape(rest: &str) -> (usize, Result<char, EscapeError>) {
    if let Some(inner) = rest.strip_prefix('{') {
        let digits = hex_prefix(inner, 6);
        let closed = inner[digits.len()..].starts_with('}');
        let consumed = 2 + digits.len() + usize::from(closed);
        if !closed || digits.is_empty() {
            return (consumed, Err(EscapeError::MalformedBracedUnicode));
        }
        let value = u32::from_str_radix(digits, 16).unwrap_or(u32::MAX);
        match char::from_u32(value) {
            Some(decoded) => (consumed, Ok(decoded)),
            None => (consumed, Err(EscapeError::InvalidScalar)),
        }
    } else {
        let digits = hex_prefix(rest, 4);
        if digits.len() == 4 {
            let value = u32::from_str_radix(digits, 16).unwrap_or(0);
            match char::from_u32(value) {
                Some(decoded) => (5, Ok(decoded)),
                None => (5, Err(EscapeError::InvalidScalar)),
            }
        } else {
            (1 + digits.len(), Err(EscapeError::MalformedUnicode))
        }
    }
}

/// The leading run of ASCII hex digits, capped at `max`.
fn hex_prefix(text: &str, max: usize) -> &str {
    let len = text
        .bytes()
        .take(max)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    &text[..len]
}
