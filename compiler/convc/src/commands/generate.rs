//! The `generate` and `check` commands.

use std::path::{Path, PathBuf};

use conv_emit::render_file;
use tracing::info;

use super::{failure_diagnostic, file_label, read_manifest, RunError};
use crate::generate::{generate, Generation};

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Where to write the generated file; `None` returns it only.
    pub output: Option<PathBuf>,
    /// Build methods on a scoped thread pool.
    pub parallel: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            output: None,
            parallel: true,
        }
    }
}

/// Generate the file described by the manifest at `path`.
///
/// Returns the rendered source. If any method fails, nothing is written.
pub fn generate_file(path: &Path, options: &GenerateOptions) -> Result<String, RunError> {
    let generation = run(path, options.parallel)?;
    let rendered = render_file(&generation.file);
    if let Some(output) = &options.output {
        std::fs::write(output, &rendered).map_err(|source| RunError::Write {
            path: output.clone(),
            source,
        })?;
        info!(
            output = %output.display(),
            methods = generation.file.methods.len(),
            "wrote generated file"
        );
    }
    Ok(rendered)
}

/// Build every method without rendering; returns the method count.
pub fn check_file(path: &Path, parallel: bool) -> Result<usize, RunError> {
    run(path, parallel).map(|generation| generation.file.methods.len())
}

fn run(path: &Path, parallel: bool) -> Result<Generation, RunError> {
    let manifest = read_manifest(path)?;
    let generation = generate(&manifest, parallel)
        .map_err(|err| RunError::Manifest(err.to_diagnostic().with_file(file_label(path))))?;
    if generation.is_ok() {
        return Ok(generation);
    }
    Err(RunError::Failed {
        count: generation.failures.len(),
        diagnostics: generation
            .failures
            .iter()
            .map(|failure| failure_diagnostic(path, failure))
            .collect(),
    })
}
