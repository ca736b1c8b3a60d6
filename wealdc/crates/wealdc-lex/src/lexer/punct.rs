//! Punctuation lexing.
//!
//! Two-character operators are taken greedily; everything else is a single
//! rune. A few punctuation runes are reserved without a token: a lone `&`
//! (see the `&&` operator), and `#`, `~`, `$`, `@`, `;`.

use crate::lexer::Lexer;
use crate::token::TokenTag;

/// Two-character operators, checked before the single-character map.
const DIGRAPHS: [(&str, TokenTag); 6] = [
    ("!=", TokenTag::BangEqual),
    ("&&", TokenTag::AndAnd),
    ("||", TokenTag::OrOr),
    ("<=", TokenTag::LessEqual),
    ("==", TokenTag::EqualEqual),
    (">=", TokenTag::GreaterEqual),
];

impl Lexer<'_> {
    pub(crate) fn lex_punctuation(&mut self) {
        let start = self.cursor.mark();
        for (symbol, tag) in DIGRAPHS {
            if self.cursor.match_str(symbol) {
                let loc = self.cursor.loc_from(start);
                self.push(tag, loc);
                return;
            }
        }
        let Some(c) = self.cursor.next() else {
            return;
        };
        let loc = self.cursor.loc_from(start);
        let tag = match c {
            '(' => TokenTag::ParenOpen,
            ')' => TokenTag::ParenClose,
            '[' => TokenTag::BracketOpen,
            ']' => TokenTag::BracketClose,
            '{' => TokenTag::BraceOpen,
            '}' => TokenTag::BraceClose,
            '*' => TokenTag::Star,
            '\\' => TokenTag::Backslash,
            '%' => TokenTag::Percent,
            '^' => TokenTag::Caret,
            '|' => TokenTag::Or,
            '+' => TokenTag::Plus,
            '-' => TokenTag::Minus,
            ',' => TokenTag::Comma,
            ':' => TokenTag::Colon,
            '?' => TokenTag::Question,
            '.' => TokenTag::Dot,
            '/' => TokenTag::Slash,
            '<' => TokenTag::Less,
            '=' => TokenTag::Equal,
            '!' => TokenTag::Bang,
            '>' => TokenTag::Greater,
            '&' => {
                self.invalid("lone '&' is not an operator; use '&&'".into(), loc);
                return;
            }
            _ => {
                self.invalid(format!("unexpected character '{c}'"), loc);
                return;
            }
        };
        self.push(tag, loc);
    }
}

#[cfg(test)]
mod tests {
    use wealdc_util::Loc;

    use crate::lexer::lex;
    use crate::token::TokenTag;

    fn tags(body: &str) -> Vec<TokenTag> {
        let (tokens, _) = lex(body);
        tokens.into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_single_punctuation() {
        assert_eq!(
            tags("( ) [ ] { } * % ^ + , : ? . / < = > |"),
            [
                TokenTag::ParenOpen,
                TokenTag::ParenClose,
                TokenTag::BracketOpen,
                TokenTag::BracketClose,
                TokenTag::BraceOpen,
                TokenTag::BraceClose,
                TokenTag::Star,
                TokenTag::Percent,
                TokenTag::Caret,
                TokenTag::Plus,
                TokenTag::Comma,
                TokenTag::Colon,
                TokenTag::Question,
                TokenTag::Dot,
                TokenTag::Slash,
                TokenTag::Less,
                TokenTag::Equal,
                TokenTag::Greater,
                TokenTag::Or,
                TokenTag::End,
            ]
        );
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(
            tags("!= && || <= == >="),
            [
                TokenTag::BangEqual,
                TokenTag::AndAnd,
                TokenTag::OrOr,
                TokenTag::LessEqual,
                TokenTag::EqualEqual,
                TokenTag::GreaterEqual,
                TokenTag::End,
            ]
        );
    }

    #[test]
    fn test_digraphs_greedy() {
        // "===" is "==" then "=", not three "=".
        assert_eq!(
            tags("==="),
            [TokenTag::EqualEqual, TokenTag::Equal, TokenTag::End]
        );
    }

    #[test]
    fn test_bang_and_minus_alone() {
        assert_eq!(tags("! abc"), [TokenTag::Bang, TokenTag::Name, TokenTag::End]);
        assert_eq!(
            tags("- abc"),
            [TokenTag::Minus, TokenTag::Name, TokenTag::End]
        );
    }

    #[test]
    fn test_backslash_token() {
        assert_eq!(tags("\\"), [TokenTag::Backslash, TokenTag::End]);
    }

    #[test]
    fn test_lone_ampersand_is_invalid() {
        let (tokens, problems) = lex("&");
        assert_eq!(tokens[0].tag, TokenTag::Invalid);
        assert!(tokens[0].text().contains("lone '&'"));
        assert_eq!(problems.len(), 1);
        assert_eq!(problems.as_slice()[0].loc, Loc::new(0, 1));
    }

    #[test]
    fn test_reserved_punctuation_is_invalid() {
        for source in ["#", "~", "$", "@", ";"] {
            let (tokens, problems) = lex(source);
            assert_eq!(tokens[0].tag, TokenTag::Invalid, "for {source:?}");
            assert_eq!(problems.len(), 1, "for {source:?}");
        }
    }

    #[test]
    fn test_ampersand_pair_splits_oddly() {
        // "&&&" is "&&" then a lone "&".
        let (tokens, problems) = lex("&&&");
        assert_eq!(tokens[0].tag, TokenTag::AndAnd);
        assert_eq!(tokens[1].tag, TokenTag::Invalid);
        assert_eq!(problems.len(), 1);
    }
}
