//! Byte-by-byte file comparison tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::text::byte_compare;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool comparing two files byte by byte, like `cmp`
pub struct CmpTool {
    working_directory: PathBuf,
}

impl CmpTool {
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

impl Default for CmpTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CmpTool {
    fn name(&self) -> &str {
        "cmp"
    }

    fn description(&self) -> &str {
        "Compare two files byte by byte, equivalent to the `cmp` shell command. \
         Reports the 1-based byte offset and line number of the first difference; \
         with silent=true only the identical verdict is produced (cmp -s)."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "cmp",
            self.description(),
            vec![
                ToolParameter::string("file1", "Path to the first file"),
                ToolParameter::string("file2", "Path to the second file"),
                ToolParameter::boolean("silent", "Only report whether the files are identical")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let file1 = call.require_string("file1")?;
        let file2 = call.require_string("file2")?;
        let silent = call.get_bool("silent").unwrap_or(false);

        let bytes1 = fs::read_bytes(&self.resolve_path(&file1)).await?;
        let bytes2 = fs::read_bytes(&self.resolve_path(&file2)).await?;

        let outcome = byte_compare(&bytes1, &bytes2);

        let mut result = ToolResult::success(&call.id, self.name(), "")
            .with_metadata("identical", outcome.identical);

        if !outcome.identical && !silent {
            let byte_offset = outcome.byte_offset.unwrap_or_default();
            let line_number = outcome.line_number.unwrap_or_default();
            let message = format!(
                "{} {} differ: byte {}, line {}",
                file1, file2, byte_offset, line_number
            );
            result = result
                .with_metadata("byte_offset", byte_offset)
                .with_metadata("line_number", line_number)
                .with_metadata("message", message.clone());
            result.output = Some(message);
        }

        Ok(result)
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("file1")?;
        call.require_string("file2")?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for CmpTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
