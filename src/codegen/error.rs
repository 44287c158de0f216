use thiserror::Error;

/// Typed errors produced while rendering a syntax tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("Unexpected node type: {node} in {position} position")]
    UnexpectedNode {
        node: &'static str,
        position: &'static str,
    },
}

pub type CodegenResult<T> = Result<T, CodegenError>;
