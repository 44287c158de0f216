use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Def,
    End,

    Identifier,
    Integer,

    // Delimiters
    OParen, // (
    CParen, // )
    Comma,  // ,
}

impl TokenKind {
    /// Order in which the lexer tries each pattern. Keywords must come before
    /// `Identifier`, otherwise `def` and `end` would lex as names.
    pub const PRIORITY: [TokenKind; 7] = [
        TokenKind::Def,
        TokenKind::End,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::OParen,
        TokenKind::CParen,
        TokenKind::Comma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Def => "def",
            TokenKind::End => "end",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::OParen => "oparen",
            TokenKind::CParen => "cparen",
            TokenKind::Comma => "comma",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }
}
