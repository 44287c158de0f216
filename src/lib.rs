pub mod ast;
pub mod check;
pub mod codegen;
pub mod compiler;
pub mod lexer;
pub mod parser;

pub use compiler::{CompileError, CompileOptions, Compiler, compile};
