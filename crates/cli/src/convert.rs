//! Construction and execution of the single converter invocation.
//!
//! The pipeline commits to calling the converter exactly once per run,
//! synchronously, after every document is staged. Execution goes through a
//! narrow runner seam so the rest of the pipeline is testable without
//! spawning a real process.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::assemble::STYLESHEET_NAME;
use crate::error::ExportError;

/// Markdown dialect the staged files are written in.
const PANDOC_FROM: &str = "markdown+gfm_auto_identifiers+pipe_tables+raw_html+tex_math_dollars+fenced_code_blocks+fenced_code_attributes";

/// Metadata stamped into the output artifact.
#[derive(Debug, Clone)]
pub struct BookMeta {
    /// Artifact title.
    pub title: String,
    /// Artifact author, omitted from the invocation when absent.
    pub author: Option<String>,
}

/// A fully resolved external converter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    /// Program name or path.
    pub program: String,
    /// Arguments: staged file paths in assembly order, then flags.
    pub args: Vec<String>,
    /// Working directory for the spawn (the scratch workspace).
    pub cwd: PathBuf,
}

/// Captured output of a successful converter run.
#[derive(Debug, Clone, Default)]
pub struct ConverterOutput {
    /// Captured stdout.
    pub stdout: String,
    /// Captured stderr (converters often warn here on success).
    pub stderr: String,
}

/// Runs a converter command to completion with captured output.
pub trait ConverterRunner {
    /// Execute `cmd`, returning its output or the failure that aborted it.
    fn run(&self, cmd: &ConverterCommand) -> Result<ConverterOutput, ExportError>;
}

/// Real implementation over `std::process::Command`.
pub struct SystemRunner;

impl ConverterRunner for SystemRunner {
    fn run(&self, cmd: &ConverterCommand) -> Result<ConverterOutput, ExportError> {
        let output = Command::new(&cmd.program)
            .args(&cmd.args)
            .current_dir(&cmd.cwd)
            .output()
            .map_err(|source| ExportError::ConverterSpawn {
                program: cmd.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(ExportError::ConverterFailed {
                program: cmd.program.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(ConverterOutput { stdout, stderr })
    }
}

/// Build the one pandoc invocation over the staged file set.
///
/// Paths are expressed relative to the workspace, which is the process's
/// working directory; the workspace is assumed to sit directly under the
/// invocation directory, so a relative `output` gains a `../` prefix to land
/// outside it.
pub fn pandoc_command(
    program: &str,
    files: &[String],
    workspace: &Path,
    docs_dir: &Path,
    locale: &str,
    output: &Path,
    meta: &BookMeta,
) -> ConverterCommand {
    let mut args: Vec<String> = files.to_vec();
    args.push("-o".to_string());
    args.push(escape_workspace(output));
    args.push(format!("--from={PANDOC_FROM}"));
    args.push("--to=epub3".to_string());
    args.push("--standalone".to_string());
    args.push("--toc".to_string());
    args.push("--toc-depth=2".to_string());
    args.push("--number-sections".to_string());
    args.push("--embed-resources".to_string());
    args.push("--highlight-style=tango".to_string());
    args.push(format!("--css={STYLESHEET_NAME}"));
    args.push(format!("--metadata=title:{}", meta.title));
    if let Some(author) = &meta.author {
        args.push(format!("--metadata=author:{author}"));
    }
    args.push(format!(
        "--resource-path=.:{}:{locale}",
        public_assets_dir(docs_dir)
    ));

    ConverterCommand {
        program: program.to_string(),
        args,
        cwd: workspace.to_path_buf(),
    }
}

/// A path the invoker gave relative to its own directory, re-expressed from
/// inside the workspace.
fn escape_workspace(path: &Path) -> String {
    if path.is_absolute() {
        path.display().to_string()
    } else {
        format!("../{}", path.display())
    }
}

/// The site's public assets directory, seen from inside the workspace.
fn public_assets_dir(docs_dir: &Path) -> String {
    if docs_dir.is_absolute() {
        docs_dir.join("public").display().to_string()
    } else {
        format!("../{}/public", docs_dir.display())
    }
}

#[cfg(test)]
pub(crate) use fake::FakeRunner;
