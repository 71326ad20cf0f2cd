//! Diff tool implementation

use super::schema;
use crate::fs;
use async_trait::async_trait;
use shellfast_core::text::{align, render, DiffFormat, EditOp};
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolResult, ToolSchema};
use std::path::PathBuf;
use tracing::instrument;

/// Tool comparing two files line by line via LCS alignment
pub struct DiffTool {
    working_directory: PathBuf,
}

impl DiffTool {
    /// Create a new diff tool
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Create a diff tool with specific working directory
    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }
}

impl Default for DiffTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for DiffTool {
    fn name(&self) -> &str {
        "diff"
    }

    fn description(&self) -> &str {
        schema::description()
    }

    fn schema(&self) -> ToolSchema {
        schema::create_schema()
    }

    #[instrument(skip(self, call), fields(call_id = %call.id, file1 = call.get_string("file1").as_deref().unwrap_or("<missing>")))]
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let file1 = call.require_string("file1")?;
        let file2 = call.require_string("file2")?;
        let unified = call.get_bool("unified").unwrap_or(true);

        let lines1 = fs::read_lines(&self.resolve_path(&file1)).await?;
        let lines2 = fs::read_lines(&self.resolve_path(&file2)).await?;

        let script = align(&lines1, &lines2);
        let insertions = script
            .iter()
            .filter(|op| matches!(op, EditOp::Insert { .. }))
            .count();
        let deletions = script
            .iter()
            .filter(|op| matches!(op, EditOp::Delete { .. }))
            .count();

        let format = if unified {
            DiffFormat::Unified
        } else {
            DiffFormat::Compact
        };
        let output = render(&script, format, &file1, &file2);

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("insertions", insertions)
            .with_metadata("deletions", deletions)
            .with_metadata("identical", insertions == 0 && deletions == 0))
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

impl FileSystemTool for DiffTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
