//! Literal interpretation: token text to values.
//!
//! The lexer hands over literal text verbatim (sign, base prefix,
//! delimiters and all); this module turns it into values and reports what
//! does not fit. A literal that fails interpretation contributes a
//! `Missing` node, so the tree stays total.

use thiserror::Error;
use wealdc_lex::{escape, runes};
use wealdc_util::{codes, Loc, Problems};

use crate::ast::{Expr, StringLit};
use crate::Parser;

/// An integer literal that cannot become a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IntLitError {
    #[error("integer literal does not fit a signed 128-bit integer")]
    Overflow,
    #[error("integer literal has no digits")]
    NoDigits,
}

/// A float literal that cannot become a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FloatLitError {
    #[error("float literal does not fit a finite 64-bit float")]
    NonFinite,
    #[error("malformed float literal")]
    Malformed,
}

impl Parser<'_> {
    pub(crate) fn parse_int_literal(&mut self) -> Expr {
        let loc = self.stream.loc();
        let text = self.stream.current().text();
        let result = parse_i128(text);
        self.stream.advance();
        match result {
            Ok(value) => Expr::Int { value, loc },
            Err(error) => {
                self.problems
                    .report(codes::INVALID_INT, error.to_string(), loc);
                Expr::Missing {
                    loc: Loc::empty_at(loc.start),
                }
            }
        }
    }

    pub(crate) fn parse_float_literal(&mut self) -> Expr {
        let loc = self.stream.loc();
        let text = self.stream.current().text();
        let result = parse_f64(text);
        self.stream.advance();
        match result {
            Ok(value) => Expr::Float { value, loc },
            Err(error) => {
                self.problems
                    .report(codes::INVALID_FLOAT, error.to_string(), loc);
                Expr::Missing {
                    loc: Loc::empty_at(loc.start),
                }
            }
        }
    }

    pub(crate) fn parse_string_literal(&mut self) -> Expr {
        let loc = self.stream.loc();
        let text = self.stream.current().text().to_string();
        self.stream.advance();
        let lit = interpret_string(&text, loc, &mut self.problems);
        Expr::String(Box::new(lit))
    }
}

/// Parses an integer literal: optional sign, optional `0x`/`0b` prefix,
/// digits with `_` separators. The magnitude accumulates first and the
/// sign applies afterwards, so the most negative 128-bit value still
/// reports overflow.
pub(crate) fn parse_i128(text: &str) -> Result<i128, IntLitError> {
    let mut rest = text;
    let negative = match rest.strip_prefix('-') {
        Some(stripped) => {
            rest = stripped;
            true
        }
        None => {
            rest = rest.strip_prefix('+').unwrap_or(rest);
            false
        }
    };
    let radix: u32 = if let Some(stripped) = rest.strip_prefix("0x") {
        rest = stripped;
        16
    } else if let Some(stripped) = rest.strip_prefix("0b") {
        rest = stripped;
        2
    } else {
        10
    };

    let mut value: i128 = 0;
    let mut digit_count = 0usize;
    for c in rest.chars() {
        if c == '_' {
            continue;
        }
        let Some(digit) = c.to_digit(radix) else {
            return Err(IntLitError::NoDigits);
        };
        digit_count += 1;
        value = value
            .checked_mul(radix as i128)
            .and_then(|v| v.checked_add(digit as i128))
            .ok_or(IntLitError::Overflow)?;
    }
    if digit_count == 0 {
        return Err(IntLitError::NoDigits);
    }
    Ok(if negative { -value } else { value })
}

/// Parses a float literal through IEEE-754 double semantics, rejecting
/// overflow to infinity.
pub(crate) fn parse_f64(text: &str) -> Result<f64, FloatLitError> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    let value: f64 = cleaned.parse().map_err(|_| FloatLitError::Malformed)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FloatLitError::NonFinite)
    }
}

/// Splits a string token into delimiters and content and computes the
/// interpreted text for its flavor.
fn interpret_string(text: &str, loc: Loc, problems: &mut Problems) -> StringLit {
    let (delim_len, block, escapes) = if text.starts_with("\"\"\"") {
        (3, true, true)
    } else if text.starts_with('"') {
        (1, false, true)
    } else if text.starts_with("```") {
        (3, true, false)
    } else {
        (1, false, false)
    };

    let content_text = &text[delim_len..text.len() - delim_len];
    let opening = Loc::new(loc.start, delim_len as u32);
    let closing = Loc::new(loc.end() - delim_len as u32, delim_len as u32);
    let content = Loc::from_range(opening.end(), closing.start);

    let interpreted = if block {
        let lines = dedented_lines(content_text, content.start);
        if escapes {
            escape::unescape_block(&lines, problems)
        } else {
            lines
                .iter()
                .map(|&(line, _)| line)
                .collect::<Vec<_>>()
                .join("\n")
        }
    } else if escapes {
        escape::unescape_line(content_text, content.start, problems)
    } else {
        content_text.to_string()
    };

    StringLit {
        opening,
        content,
        closing,
        interpreted,
        loc,
    }
}

/// The interior lines of a block string, dedented.
///
/// The lines carrying the opening and closing delimiters contribute no
/// text. The longest common whitespace prefix of the non-blank interior
/// lines (compared character for character, so tabs and spaces never
/// match each other) is removed from every line. Each returned entry keeps
/// the byte offset of its remaining text.
fn dedented_lines(content: &str, base: u32) -> Vec<(&str, u32)> {
    let Some(first_break) = content.find('\n') else {
        return Vec::new();
    };
    let last_break = content.rfind('\n').unwrap_or(first_break);
    if last_break <= first_break {
        return Vec::new();
    }
    let interior = &content[first_break + 1..last_break];
    let interior_base = base + first_break as u32 + 1;

    let mut lines: Vec<(&str, u32)> = Vec::new();
    let mut line_start = 0usize;
    for (i, b) in interior.bytes().enumerate() {
        if b == b'\n' {
            lines.push((&interior[line_start..i], interior_base + line_start as u32));
            line_start = i + 1;
        }
    }
    lines.push((
        &interior[line_start..],
        interior_base + line_start as u32,
    ));
    for entry in &mut lines {
        if let Some(trimmed) = entry.0.strip_suffix('\r') {
            entry.0 = trimmed;
        }
    }

    let prefix = common_whitespace_prefix(&lines);
    lines
        .into_iter()
        .map(|(line, line_base)| {
            let strip = matching_prefix_len(line, prefix);
            (&line[strip..], line_base + strip as u32)
        })
        .collect()
}

/// The longest whitespace prefix shared by every non-blank line.
fn common_whitespace_prefix<'a>(lines: &[(&'a str, u32)]) -> &'a str {
    let mut prefix: Option<&str> = None;
    for &(line, _) in lines {
        if line.chars().all(runes::is_whitespace) {
            continue;
        }
        let ws_len = line.len() - line.trim_start_matches(runes::is_whitespace).len();
        let ws = &line[..ws_len];
        prefix = Some(match prefix {
            None => ws,
            Some(prefix) => &prefix[..matching_prefix_len(prefix, ws)],
        });
    }
    prefix.unwrap_or("")
}

/// The byte length of the longest common prefix of two strings.
fn matching_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}
