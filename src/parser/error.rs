use thiserror::Error;

use crate::lexer::TokenKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Expected token type {expected} but got {found} ({text:?}) at line {line}, column {column}"
    )]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        text: String,
        line: usize,
        column: usize,
    },
    #[error("Expected token type {expected} but ran out of tokens")]
    UnexpectedEnd { expected: TokenKind },
    #[error("Unexpected {found} after end of definition at line {line}, column {column}")]
    TrailingTokens {
        found: TokenKind,
        line: usize,
        column: usize,
    },
}

pub type ParseResult<T> = Result<T, ParseError>;
