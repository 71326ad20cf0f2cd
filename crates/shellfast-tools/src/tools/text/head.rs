//! First-lines tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool returning the first lines or bytes of a file, like `head`
pub struct HeadTool {
    working_directory: PathBuf,
}

impl HeadTool {
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for HeadTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for HeadTool {
    fn name(&self) -> &str {
        "head"
    }

    fn description(&self) -> &str {
        "Return the first N lines of a file, equivalent to the `head` shell \
         command (default 10, head -n). When bytes > 0, return the first N \
         bytes instead (head -c)."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "head",
            self.description(),
            vec![
                ToolParameter::string("path", "Path to the file"),
                ToolParameter::number("n", "Number of lines to return (head -n)")
                    .optional()
                    .with_default(10),
                ToolParameter::number("bytes", "If > 0, return the first N bytes (head -c)")
                    .optional()
                    .with_default(-1),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let path = call.require_string("path")?;
        let n = call.get_i64("n").unwrap_or(10).max(0) as usize;
        let bytes = call.get_i64("bytes").unwrap_or(-1);

        let resolved = self.resolve_path(&path);

        if bytes > 0 {
            let content = fs::read_bytes(&resolved).await?;
            let taken = &content[..content.len().min(bytes as usize)];
            let output = String::from_utf8_lossy(taken).into_owned();
            return Ok(ToolResult::success(&call.id, self.name(), output)
                .with_metadata("bytes", taken.len()));
        }

        let lines = fs::read_lines(&resolved).await?;
        let mut output = String::new();
        for line in lines.iter().take(n) {
            output.push_str(line);
            output.push('\n');
        }

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("lines", lines.len().min(n)))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("path")?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for HeadTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
