use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseClass {
    TranslateSuccess,
    LexError,
    ParseError,
    CheckError,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseOptions {
    #[serde(default)]
    pub single_letter_identifiers: bool,
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpectedOutcome {
    pub output_file: Option<String>,
    pub stdout_file: Option<String>,
    pub error_contains_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CaseSpec {
    pub class: CaseClass,
    #[serde(default)]
    pub options: CaseOptions,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub dir: PathBuf,
    pub program_path: PathBuf,
    pub spec: CaseSpec,
}

impl Case {
    pub fn read_text(&self, relative_path: &str) -> Result<String> {
        fs::read_to_string(self.dir.join(relative_path))
            .with_context(|| format!("Reading {} fixture file {}", self.name, relative_path))
    }

    pub fn read_program(&self) -> Result<String> {
        fs::read_to_string(&self.program_path)
            .with_context(|| format!("Reading {}", self.program_path.display()))
    }
}

pub fn load_cases(programs_dir: &Path) -> Result<Vec<Case>> {
    let mut cases = Vec::new();

    for entry in
        fs::read_dir(programs_dir).with_context(|| format!("Reading {}", programs_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let case_path = path.join("case.yaml");
        if !case_path.exists() {
            continue;
        }

        let program_path = path.join("program.def");
        ensure!(
            program_path.exists(),
            "Missing program.def for case {}",
            path.display()
        );

        let case_name = path
            .file_name()
            .and_then(|value| value.to_str())
            .map(str::to_string)
            .with_context(|| format!("Invalid case directory name {}", path.display()))?;
        let case_raw = fs::read_to_string(&case_path)
            .with_context(|| format!("Reading {}", case_path.display()))?;
        let spec: CaseSpec = serde_yaml::from_str(&case_raw)
            .with_context(|| format!("Parsing {}", case_path.display()))?;

        cases.push(Case {
            name: case_name,
            dir: path,
            program_path,
            spec,
        });
    }

    ensure!(
        !cases.is_empty(),
        "No test cases found in {}",
        programs_dir.display()
    );
    cases.sort_by(|left, right| left.name.cmp(&right.name));
    Ok(cases)
}

pub fn normalize_output(output: &str) -> String {
    output.replace("\r\n", "\n").trim_end().to_string()
}

pub fn node_required() -> bool {
    std::env::var("NODE_REQUIRED")
        .map(|value| value == "1")
        .unwrap_or(false)
}

fn run_node_startup(node: &str) -> Result<()> {
    let status = Command::new(node)
        .arg("-e")
        .arg("0")
        .status()
        .with_context(|| format!("Running '{node} -e 0'"))?;
    ensure!(status.success(), "node startup command failed");
    Ok(())
}

/// Finds a runnable JavaScript runtime: `$NODE` first, then `node`/`nodejs`.
pub fn detect_node() -> Result<Option<String>> {
    if let Ok(node) = std::env::var("NODE")
        && run_node_startup(&node).is_ok()
    {
        return Ok(Some(node));
    }

    for candidate in ["node", "nodejs"] {
        if run_node_startup(candidate).is_ok() {
            return Ok(Some(candidate.to_string()));
        }
    }

    if node_required() {
        anyhow::bail!("node required but no runtime found. Set NODE or install node.");
    }

    eprintln!("Skipping execution checks: no NODE env or node runtime found.");
    Ok(None)
}
