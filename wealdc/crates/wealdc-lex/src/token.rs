//! Token model.
//!
//! A token is a tag, an optional text payload, and a source span. The text
//! is present exactly for the tags that need it: `Invalid` carries its
//! message, `Name` its NFC-normalized spelling, and the literal tags their
//! full literal text including sign, prefix, or delimiters.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use wealdc_util::Loc;

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenTag {
    /// Unlexable material; the token text is a human-readable message.
    Invalid,
    /// End of the token stream. Always present, exactly once, last.
    End,
    /// One or more line breaks between tokens, coalesced.
    Newline,
    /// An identifier, NFC-normalized.
    Name,
    /// An integer literal, text including any sign and base prefix.
    Integer,
    /// A float literal.
    Float,
    /// A string literal of any flavor, text including delimiters.
    String,

    // Keywords
    /// `_`
    KwDiscard,
    /// `else`
    KwElse,
    /// `false`
    KwFalse,
    /// `if`
    KwIf,
    /// `let`
    KwLet,
    /// `true`
    KwTrue,

    // Punctuation
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `*`
    Star,
    /// `\`
    Backslash,
    /// `&`; reserved, a lone `&` currently lexes as `Invalid`.
    And,
    /// `&&`
    AndAnd,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `|`
    Or,
    /// `||`
    OrOr,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `.`
    Dot,
    /// `/`
    Slash,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `>=`
    GreaterEqual,
    /// `>`
    Greater,
}

impl TokenTag {
    /// The source spelling for fixed tokens, or a category word for the
    /// variable ones. Used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenTag::Invalid => "invalid input",
            TokenTag::End => "end of input",
            TokenTag::Newline => "newline",
            TokenTag::Name => "name",
            TokenTag::Integer => "integer",
            TokenTag::Float => "float",
            TokenTag::String => "string",
            TokenTag::KwDiscard => "_",
            TokenTag::KwElse => "else",
            TokenTag::KwFalse => "false",
            TokenTag::KwIf => "if",
            TokenTag::KwLet => "let",
            TokenTag::KwTrue => "true",
            TokenTag::ParenOpen => "(",
            TokenTag::ParenClose => ")",
            TokenTag::BracketOpen => "[",
            TokenTag::BracketClose => "]",
            TokenTag::BraceOpen => "{",
            TokenTag::BraceClose => "}",
            TokenTag::Star => "*",
            TokenTag::Backslash => "\\",
            TokenTag::And => "&",
            TokenTag::AndAnd => "&&",
            TokenTag::Percent => "%",
            TokenTag::Caret => "^",
            TokenTag::Or => "|",
            TokenTag::OrOr => "||",
            TokenTag::Plus => "+",
            TokenTag::Minus => "-",
            TokenTag::Comma => ",",
            TokenTag::Colon => ":",
            TokenTag::Question => "?",
            TokenTag::Dot => ".",
            TokenTag::Slash => "/",
            TokenTag::Less => "<",
            TokenTag::LessEqual => "<=",
            TokenTag::Equal => "=",
            TokenTag::EqualEqual => "==",
            TokenTag::Bang => "!",
            TokenTag::BangEqual => "!=",
            TokenTag::GreaterEqual => ">=",
            TokenTag::Greater => ">",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

static KEYWORDS: Lazy<FxHashMap<&'static str, TokenTag>> = Lazy::new(|| {
    FxHashMap::from_iter([
        ("_", TokenTag::KwDiscard),
        ("else", TokenTag::KwElse),
        ("false", TokenTag::KwFalse),
        ("if", TokenTag::KwIf),
        ("let", TokenTag::KwLet),
        ("true", TokenTag::KwTrue),
    ])
});

/// Looks up the keyword tag for an already-normalized name, if any.
///
/// # Examples
///
/// ```
/// use wealdc_lex::{keyword, TokenTag};
///
/// assert_eq!(keyword("let"), Some(TokenTag::KwLet));
/// assert_eq!(keyword("letter"), None);
/// ```
pub fn keyword(text: &str) -> Option<TokenTag> {
    KEYWORDS.get(text).copied()
}

/// A single lexed token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub tag: TokenTag,
    /// Payload for `Invalid`, `Name`, `Integer`, `Float`, and `String`.
    pub text: Option<String>,
    /// The source span the token was lexed from.
    pub loc: Loc,
}

impl Token {
    /// Creates a payload-free token.
    #[inline]
    pub fn new(tag: TokenTag, loc: Loc) -> Self {
        Self {
            tag,
            text: None,
            loc,
        }
    }

    /// Creates a token carrying text.
    #[inline]
    pub fn with_text(tag: TokenTag, text: impl Into<String>, loc: Loc) -> Self {
        Self {
            tag,
            text: Some(text.into()),
            loc,
        }
    }

    /// The text payload, or `""` for payload-free tags.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
