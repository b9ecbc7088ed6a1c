//! Reading command input from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Path argument meaning "read standard input".
pub const STDIN: &str = "-";

/// Reads the whole source as text; `-` reads stdin.
pub fn read_source(source: &Path) -> Result<String> {
    if source.as_os_str() == STDIN {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read standard input")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(source)
        .with_context(|| format!("Failed to read {}", source.display()))
}

/// Reads a blob and strips surrounding whitespace.
pub fn read_blob(source: &Path) -> Result<String> {
    Ok(read_source(source)?.trim().to_string())
}
