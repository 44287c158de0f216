#![allow(dead_code)]
use std::fs;

use defc::ast::FunctionDef;
use defc::{lexer, parser};

pub const WORKLOADS: [(&str, &str); 2] = [
    ("runtime_nested", "tests/programs/runtime_nested/program.def"),
    ("add_call", "tests/programs/add_call/program.def"),
];

pub fn load_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("read {path}: {err}"))
}

/// A single definition whose body nests `depth` calls, each with `width` arguments.
pub fn wide_source(depth: usize, width: usize) -> String {
    let params = (0..width)
        .map(|index| format!("p{index}"))
        .collect::<Vec<_>>();
    let mut body = params.join(", ");
    for level in 0..depth {
        body = format!("call{level}({body}, {level})");
    }
    format!("def wide({})\n  {body}\nend\n", params.join(","))
}

pub fn load_def(source: &str) -> FunctionDef {
    let tokens = lexer::tokenize(source).unwrap_or_else(|err| panic!("tokenize: {err}"));
    parser::parse_tokens(tokens).unwrap_or_else(|err| panic!("parse: {err}"))
}
