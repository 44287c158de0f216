use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Couldn't match token on {remaining:?} at line {line}, column {column}")]
    UnexpectedInput {
        remaining: String,
        line: usize,
        column: usize,
    },
}

impl LexError {
    /// Unconsumed source text starting at the failure position.
    pub fn remaining(&self) -> &str {
        match self {
            LexError::UnexpectedInput { remaining, .. } => remaining,
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;
