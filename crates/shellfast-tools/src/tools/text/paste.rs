//! Side-by-side line merging tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::text::merge_columns;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool merging lines of several files side by side, like `paste`
pub struct PasteTool {
    working_directory: PathBuf,
}

impl PasteTool {
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

impl Default for PasteTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for PasteTool {
    fn name(&self) -> &str {
        "paste"
    }

    fn description(&self) -> &str {
        "Merge corresponding lines of several files, equivalent to the `paste` \
         shell command. Row count follows the longest file; shorter files \
         contribute empty cells. Cells join with the delimiter (paste -d, \
         default tab)."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "paste",
            self.description(),
            vec![
                ToolParameter::array("files", "Paths of the files to merge"),
                ToolParameter::string("delimiter", "Delimiter between cells (default: tab)")
                    .optional()
                    .with_default("\t"),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let files: Vec<String> = call.require_argument("files")?;
        let delimiter = call.get_string("delimiter").unwrap_or_else(|| "\t".to_string());

        let mut columns = Vec::with_capacity(files.len());
        for file in &files {
            columns.push(fs::read_lines(&self.resolve_path(file)).await?);
        }

        let rows = merge_columns(&columns, &delimiter);
        let mut output = String::new();
        for row in &rows {
            output.push_str(row);
            output.push('\n');
        }

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("files", files.len())
            .with_metadata("rows", rows.len()))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let files: Vec<String> = call.require_argument("files")?;
        if files.is_empty() {
            return Err(ToolError::InvalidArguments(
                "At least one file is required".to_string(),
            ));
        }
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for PasteTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
