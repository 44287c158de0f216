use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Helper the generated test program calls into.
pub const JS_RUNTIME: &str = "function g(x, y) { return x + y };";

/// Invocation appended after the generated definition.
pub const JS_TEST: &str = "console.log(f(1,2));";

/// Fixed text placed around a generated definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harness {
    pub preamble: Option<String>,
    pub trailer: Option<String>,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            preamble: Some(JS_RUNTIME.to_string()),
            trailer: Some(JS_TEST.to_string()),
        }
    }
}

impl Harness {
    pub fn bare() -> Self {
        Self {
            preamble: None,
            trailer: None,
        }
    }

    /// Joins preamble, generated code and trailer one per line, newline-terminated.
    pub fn assemble(&self, generated: &str) -> String {
        let parts = [
            self.preamble.as_deref(),
            Some(generated),
            self.trailer.as_deref(),
        ];
        let mut output = String::new();
        for part in parts.into_iter().flatten() {
            output.push_str(part.trim_end_matches('\n'));
            output.push('\n');
        }
        output
    }
}

fn write_temp_file(contents: &str) -> Result<PathBuf> {
    let mut dir = std::env::temp_dir();
    dir.push("defc");
    fs::create_dir_all(&dir).context("Creating temp directory")?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = dir.join(format!("program_{}_{nanos}.js", std::process::id()));
    fs::write(&path, contents).context("Writing JavaScript source")?;
    Ok(path)
}

/// Runs an assembled program with `node` and returns its stdout.
pub fn run_with_node(node: &str, program: &str) -> Result<String> {
    let path = write_temp_file(program)?;
    let output = Command::new(node)
        .arg(&path)
        .output()
        .with_context(|| format!("Running {node}"));
    let _ = fs::remove_file(&path);
    let output = output?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("Generated program failed: {stderr}");
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
