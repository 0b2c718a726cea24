//! Test fixtures for input lists on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write `lines` to `dir/name`, one per line, and return the full path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    if !lines.is_empty() {
        contents.push('\n');
    }
    fs::write(&path, contents)
        .with_context(|| format!("failed to write fixture '{}'", path.display()))?;
    Ok(path)
}

/// Read a text file into its non-empty lines.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture '{}'", path.display()))?;
    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
