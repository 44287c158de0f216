use thiserror::Error;

use crate::ast::FunctionDef;
use crate::check::{self, CheckError};
use crate::codegen::{CodegenError, Generator};
use crate::lexer::{self, IdentifierRule, LexError, Token};
use crate::parser::{self, ParseError};

/// First failure of a compilation; later stages never run after it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub identifiers: IdentifierRule,
    /// Run the semantic checks in [`crate::check`] before generating code.
    pub strict: bool,
}

/// Source-to-JavaScript pipeline.
///
/// Holds configuration only; every call builds its own lexer, parser and
/// generator state, so one `Compiler` can serve any number of sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CompileOptions {
        self.options
    }

    pub fn tokenize<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>, CompileError> {
        Ok(lexer::tokenize_with_rule(
            source,
            self.options.identifiers,
        )?)
    }

    pub fn parse(&self, source: &str) -> Result<FunctionDef, CompileError> {
        let tokens = self.tokenize(source)?;
        let def = parser::parse_tokens(tokens)?;
        if self.options.strict {
            check::check(&def)?;
        }
        Ok(def)
    }

    /// Translates one compilation unit into a single JavaScript definition.
    pub fn compile(&self, source: &str) -> Result<String, CompileError> {
        let def = self.parse(source)?;
        Ok(Generator.generate_def(&def)?)
    }
}

pub fn compile(source: &str) -> Result<String, CompileError> {
    Compiler::default().compile(source)
}
