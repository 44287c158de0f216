pub mod error;
pub mod runtime;

pub use self::error::{CodegenError, CodegenResult};
pub use self::runtime::Harness;

use crate::ast::{FunctionDef, Node};

/// Renders syntax trees as JavaScript.
///
/// Definitions become `function NAME(P1,P2) { return BODY };`. Lists are joined
/// with a bare comma so the output is byte-for-byte reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl Generator {
    pub fn generate(&self, node: &Node) -> CodegenResult<String> {
        match node {
            Node::FunctionDef(def) => self.generate_def(def),
            _ => self.generate_expr(node),
        }
    }

    pub fn generate_def(&self, def: &FunctionDef) -> CodegenResult<String> {
        let body = self.generate_expr(&def.body)?;
        Ok(format!(
            "function {}({}) {{ return {body} }};",
            def.name,
            def.params.join(",")
        ))
    }

    fn generate_expr(&self, node: &Node) -> CodegenResult<String> {
        match node {
            Node::Call { callee, args } => {
                let mut rendered_args = Vec::with_capacity(args.len());
                for arg in args {
                    rendered_args.push(self.generate_expr(arg)?);
                }
                Ok(format!("{callee}({})", rendered_args.join(",")))
            }
            Node::VarRef(name) => Ok(name.clone()),
            Node::IntLiteral(value) => Ok(value.to_string()),
            Node::FunctionDef(_) => Err(CodegenError::UnexpectedNode {
                node: node.kind_name(),
                position: "expression",
            }),
        }
    }
}

pub fn generate(node: &Node) -> CodegenResult<String> {
    Generator.generate(node)
}
