//! Resolve a path argument to an absolute path

use crate::actions::Filepath;
use crate::utils::formatting::{render, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct ResolvedPath {
    path: PathBuf,
    exists: bool,
}

/// Resolve `path`, optionally requiring that it exists
///
/// # Errors
///
/// Returns an `ActionError` if `exists` is set and the resolved path is absent
pub fn execute(path: &str, exists: bool, output_format: OutputFormat) -> Result<String> {
    let resolved = Filepath { exists }.resolve(path)?;
    let data = ResolvedPath {
        exists: resolved.exists(),
        path: resolved,
    };
    render(output_format, &data, |data| data.path.display().to_string())
}
