pub mod error;
pub mod token;

pub use self::error::{LexError, LexResult};
pub use self::token::{Span, Token, TokenKind};

/// Shape accepted by the `identifier` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierRule {
    /// `[a-zA-Z][a-zA-Z0-9_]*`
    #[default]
    Word,
    /// Exactly one ASCII letter, not followed by another word character.
    SingleLetter,
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    rule: IdentifierRule,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_rule(input, IdentifierRule::default())
    }

    pub fn with_rule(input: &'a str, rule: IdentifierRule) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 0,
            rule,
        }
    }

    /// Returns `Ok(None)` once only whitespace remains.
    pub fn next_token(&mut self) -> LexResult<Option<Token<'a>>> {
        self.skip_whitespace();

        let rest = self.remaining();
        if rest.is_empty() {
            return Ok(None);
        }

        for kind in TokenKind::PRIORITY {
            if let Some(len) = self.match_len(kind, rest) {
                let text = &rest[..len];
                let span = Span {
                    start: self.position,
                    end: self.position + len,
                    line: self.line,
                    column: self.column,
                };
                self.advance(text);
                return Ok(Some(Token::new(kind, text, span)));
            }
        }

        Err(LexError::UnexpectedInput {
            remaining: rest.to_string(),
            line: self.line,
            column: self.column,
        })
    }

    fn match_len(&self, kind: TokenKind, rest: &str) -> Option<usize> {
        match kind {
            TokenKind::Def => match_keyword(rest, "def"),
            TokenKind::End => match_keyword(rest, "end"),
            TokenKind::Identifier => match self.rule {
                IdentifierRule::Word => match_word(rest),
                IdentifierRule::SingleLetter => match_letter(rest),
            },
            TokenKind::Integer => match_integer(rest),
            TokenKind::OParen => match_delimiter(rest, '('),
            TokenKind::CParen => match_delimiter(rest, ')'),
            TokenKind::Comma => match_delimiter(rest, ','),
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let trimmed = rest.trim_start_matches(is_separator);
        self.advance(&rest[..rest.len() - trimmed.len()]);
    }

    fn advance(&mut self, consumed: &str) {
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.position += consumed.len();
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// ASCII whitespace, vertical tab and NUL. Other Unicode spaces are not separators.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' | '\0')
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Accepts a match of `len` bytes only if it ends on a word boundary.
fn bounded(rest: &str, len: usize) -> Option<usize> {
    match rest[len..].chars().next() {
        Some(c) if is_word_char(c) => None,
        _ => Some(len),
    }
}

fn match_keyword(rest: &str, keyword: &str) -> Option<usize> {
    if rest.starts_with(keyword) {
        bounded(rest, keyword.len())
    } else {
        None
    }
}

fn match_word(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    Some(rest.find(|c| !is_word_char(c)).unwrap_or(rest.len()))
}

fn match_letter(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if first.is_ascii_alphabetic() {
        bounded(rest, 1)
    } else {
        None
    }
}

fn match_integer(rest: &str) -> Option<usize> {
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if len == 0 { None } else { bounded(rest, len) }
}

fn match_delimiter(rest: &str, delimiter: char) -> Option<usize> {
    rest.starts_with(delimiter).then_some(delimiter.len_utf8())
}

pub fn tokenize(input: &str) -> LexResult<Vec<Token<'_>>> {
    tokenize_with_rule(input, IdentifierRule::default())
}

pub fn tokenize_with_rule(input: &str, rule: IdentifierRule) -> LexResult<Vec<Token<'_>>> {
    Lexer::with_rule(input, rule).collect()
}
