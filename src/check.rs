//! Optional semantic checks run between parsing and code generation.
//!
//! None of these are required for a definition to translate; they catch
//! sources that would translate into JavaScript that fails to load or that
//! refers to names the definition never binds.

use std::collections::HashSet;

use thiserror::Error;

use crate::ast::{FunctionDef, Node};

/// Words that cannot name a function or binding in the generated output.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Duplicate parameter '{name}' in function '{function}'")]
    DuplicateParameter { function: String, name: String },
    #[error("Undefined variable '{name}' in function '{function}'")]
    UnboundVariable { function: String, name: String },
    #[error("'{name}' is a reserved word in the generated code")]
    ReservedWord { name: String },
}

pub type CheckResult<T> = Result<T, CheckError>;

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

pub fn check(def: &FunctionDef) -> CheckResult<()> {
    reject_reserved(&def.name)?;

    let mut params = HashSet::with_capacity(def.params.len());
    for param in &def.params {
        reject_reserved(param)?;
        if !params.insert(param.as_str()) {
            return Err(CheckError::DuplicateParameter {
                function: def.name.clone(),
                name: param.clone(),
            });
        }
    }

    check_node(&def.name, &params, &def.body)
}

fn check_node(function: &str, params: &HashSet<&str>, node: &Node) -> CheckResult<()> {
    match node {
        Node::VarRef(name) => {
            if params.contains(name.as_str()) {
                Ok(())
            } else {
                Err(CheckError::UnboundVariable {
                    function: function.to_string(),
                    name: name.clone(),
                })
            }
        }
        Node::Call { callee, args } => {
            reject_reserved(callee)?;
            for arg in args {
                check_node(function, params, arg)?;
            }
            Ok(())
        }
        Node::IntLiteral(_) => Ok(()),
        Node::FunctionDef(def) => check(def),
    }
}

fn reject_reserved(name: &str) -> CheckResult<()> {
    if is_reserved(name) {
        Err(CheckError::ReservedWord {
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}
