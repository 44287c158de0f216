//! Syntax tree built by the parser and consumed by the code generator.
//!
//! Every node owns its children, so a parsed definition is a plain finite tree
//! that can be cloned, compared and handed between stages without sharing.

use std::fmt;

/// The only valid parse root: `def NAME(PARAMS) BODY end`.
#[derive(Debug, PartialEq, Clone)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Box<Node>,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>, params: Vec<String>, body: Node) -> Self {
        Self {
            name: name.into(),
            params,
            body: Box::new(body),
        }
    }
}

/// Decimal integer of any width, kept as its canonical digit string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Integer(String);

impl Integer {
    /// Builds a literal from an unsigned run of ASCII digits, dropping leading
    /// zeros (`007` becomes `7`, `000` becomes `0`).
    pub fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    FunctionDef(FunctionDef),
    Call { callee: String, args: Vec<Node> },
    VarRef(String),
    IntLiteral(Integer),
}

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::FunctionDef(_) => "function definition",
            Node::Call { .. } => "call",
            Node::VarRef(_) => "variable reference",
            Node::IntLiteral(_) => "integer literal",
        }
    }
}

impl From<FunctionDef> for Node {
    fn from(def: FunctionDef) -> Self {
        Node::FunctionDef(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_digits_are_canonical() {
        assert_eq!(Integer::from_digits("007").as_str(), "7");
        assert_eq!(Integer::from_digits("000").as_str(), "0");
        assert_eq!(Integer::from_digits("0").as_str(), "0");
        assert_eq!(Integer::from_digits("42"), Integer::from(42_i64));
    }

    #[test]
    fn integer_width_is_unbounded() {
        let digits = "123456789012345678901234567890";
        assert_eq!(Integer::from_digits(digits).to_string(), digits);
    }
}
