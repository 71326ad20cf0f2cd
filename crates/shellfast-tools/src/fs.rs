//! File-reading collaborators shared by the text tools
//!
//! The engine in `shellfast-core` never touches the filesystem; these
//! helpers are the boundary that turns a path into the line or byte
//! sequence it consumes. Missing paths surface immediately as
//! [`ToolError::NotFound`], without retry.

use shellfast_core::tools::ToolError;
use std::path::Path;

/// Read a file into its lines, trailing newlines stripped.
pub async fn read_lines(path: &Path) -> Result<Vec<String>, ToolError> {
    let content = read_to_string(path).await?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read an entire file as UTF-8 text.
pub async fn read_to_string(path: &Path) -> Result<String, ToolError> {
    check_readable(path)?;
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Read an entire file as raw bytes.
pub async fn read_bytes(path: &Path) -> Result<Vec<u8>, ToolError> {
    check_readable(path)?;
    Ok(tokio::fs::read(path).await?)
}

fn check_readable(path: &Path) -> Result<(), ToolError> {
    if !path.exists() {
        return Err(ToolError::NotFound(format!(
            "{}: No such file or directory",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(ToolError::InvalidArguments(format!(
            "{}: Is a directory",
            path.display()
        )));
    }
    Ok(())
}
