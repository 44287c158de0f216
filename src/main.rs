use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use defc::codegen::runtime::run_with_node;
use defc::codegen::{Generator, Harness};
use defc::lexer::IdentifierRule;
use defc::{CompileOptions, Compiler};

#[derive(Parser)]
#[command(name = "defc")]
#[command(version)]
#[command(about = "Translates a `def ... end` function into JavaScript", long_about = None)]
struct Cli {
    /// Source file to translate (stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Stage output to print
    #[arg(long, value_enum, default_value_t = Emit::Program)]
    emit: Emit,

    /// Omit the runtime preamble and the test trailer
    #[arg(long, conflicts_with_all = ["preamble", "trailer"])]
    bare: bool,

    /// Replace the runtime preamble with the contents of FILE
    #[arg(long, value_name = "FILE")]
    preamble: Option<PathBuf>,

    /// Replace the test trailer with the contents of FILE
    #[arg(long, value_name = "FILE")]
    trailer: Option<PathBuf>,

    /// Only accept one-letter identifiers
    #[arg(long)]
    single_letter_identifiers: bool,

    /// Reject duplicate parameters, unbound variables and reserved words
    #[arg(long)]
    strict: bool,

    /// Execute the assembled program and print its stdout
    #[arg(long)]
    run: bool,

    /// JavaScript runtime used by --run
    #[arg(long, value_name = "PROGRAM", default_value = "node")]
    node: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// One `kind text` line per token
    Tokens,
    /// The parsed syntax tree
    Ast,
    /// Only the generated definition
    Function,
    /// The generated definition with preamble and trailer
    Program,
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
}

fn read_source(input: Option<&Path>) -> Result<String> {
    if let Some(path) = input {
        return read_text(path);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Reading stdin")?;
    Ok(buffer)
}

fn harness(cli: &Cli) -> Result<Harness> {
    if cli.bare {
        return Ok(Harness::bare());
    }
    let mut harness = Harness::default();
    if let Some(path) = &cli.preamble {
        harness.preamble = Some(read_text(path)?);
    }
    if let Some(path) = &cli.trailer {
        harness.trailer = Some(read_text(path)?);
    }
    Ok(harness)
}

fn render(cli: &Cli, compiler: &Compiler, source: &str, name: &str) -> Result<String> {
    match cli.emit {
        Emit::Tokens => {
            let tokens = compiler
                .tokenize(source)
                .with_context(|| format!("Tokenizing {name}"))?;
            let mut output = String::new();
            for token in tokens {
                output.push_str(&format!("{} {}\n", token.kind, token.text));
            }
            Ok(output)
        }
        Emit::Ast => {
            let def = compiler
                .parse(source)
                .with_context(|| format!("Parsing {name}"))?;
            Ok(format!("{def:#?}\n"))
        }
        Emit::Function | Emit::Program => {
            let def = compiler
                .parse(source)
                .with_context(|| format!("Parsing {name}"))?;
            let generated = Generator
                .generate_def(&def)
                .with_context(|| format!("Generating code for {name}"))?;
            if cli.emit == Emit::Function {
                Ok(format!("{generated}\n"))
            } else {
                Ok(harness(cli)?.assemble(&generated))
            }
        }
    }
}

fn compiler(cli: &Cli) -> Compiler {
    Compiler::new(CompileOptions {
        identifiers: if cli.single_letter_identifiers {
            IdentifierRule::SingleLetter
        } else {
            IdentifierRule::Word
        },
        strict: cli.strict,
    })
}

/// Applies `--run` to rendered output; other emit modes pass through unchanged.
fn execute(cli: &Cli, output: String, name: &str) -> Result<String> {
    if !cli.run {
        return Ok(output);
    }
    if cli.emit != Emit::Program {
        eprintln!("Ignoring --run: only `--emit program` output can be executed.");
        return Ok(output);
    }
    run_with_node(&cli.node, &output)
        .with_context(|| format!("Running generated program for {name}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let name = cli
        .input
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    let source = read_source(cli.input.as_deref())?;

    let output = render(&cli, &compiler(&cli), &source, &name)?;
    let output = execute(&cli, output, &name)?;

    match &cli.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("Writing {}", path.display()))?,
        None => print!("{output}"),
    }
    Ok(())
}
