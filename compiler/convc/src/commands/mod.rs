//! Command handlers for the `convc` CLI.
//!
//! Handlers return their outcome instead of exiting, so `main` decides how
//! to report it and tests can drive them directly.

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use conv_diagnostic::Diagnostic;

use crate::generate::MethodFailure;
use crate::manifest::Manifest;

mod explain;
mod generate;

pub use explain::explain_error;
pub use generate::{check_file, generate_file, GenerateOptions};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The manifest could not be parsed or loaded.
    #[error("{0}")]
    Manifest(Diagnostic),

    /// One or more methods failed; nothing was written.
    #[error("{count} {} failed", if *count == 1 { "method" } else { "methods" })]
    Failed {
        count: usize,
        diagnostics: Vec<Diagnostic>,
    },

    #[error("unknown error code `{0}`")]
    UnknownCode(String),
}

impl RunError {
    /// Full report: every diagnostic followed by the summary line.
    pub fn report(&self) -> String {
        let mut out = String::new();
        if let RunError::Failed { diagnostics, .. } = self {
            for diagnostic in diagnostics {
                let _ = writeln!(out, "{diagnostic}\n");
            }
        }
        let _ = write!(out, "error: {self}");
        out
    }
}

fn read_manifest(path: &Path) -> Result<Manifest, RunError> {
    let text = std::fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Manifest::from_json(&text)
        .map_err(|err| RunError::Manifest(err.to_diagnostic().with_file(file_label(path))))
}

fn failure_diagnostic(path: &Path, failure: &MethodFailure) -> Diagnostic {
    failure
        .error
        .to_diagnostic()
        .with_file(file_label(path))
        .with_note(format!("in method `{}`", failure.method))
}

fn file_label(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests;
