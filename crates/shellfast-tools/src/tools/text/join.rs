//! Keyed line joining tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::text::join_on;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool joining lines of two files on a common field, like `join`
pub struct JoinTool {
    working_directory: PathBuf,
}

impl JoinTool {
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

    fn field_argument(call: &ToolCall, key: &str) -> Result<usize, ToolError> {
        let field = call.get_i64(key).unwrap_or(1);
        if field < 1 {
            return Err(ToolError::InvalidArguments(format!(
                "'{}' must be a positive field index, got {}",
                key, field
            )));
        }
        Ok(field as usize)
    }
}

impl Default for JoinTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for JoinTool {
    fn name(&self) -> &str {
        "join"
    }

    fn description(&self) -> &str {
        "Join lines of two files on a common field, equivalent to the `join` \
         shell command. For every pair of lines whose key fields match, emits \
         the first file's line, the separator, then the second file's line. \
         Inner-join semantics: unmatched lines produce no output. An empty \
         separator means whitespace-delimited fields joined with a space."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "join",
            self.description(),
            vec![
                ToolParameter::string("file1", "Path to the first file"),
                ToolParameter::string("file2", "Path to the second file"),
                ToolParameter::number("field1", "1-based join field in file1 (join -1)")
                    .optional()
                    .with_default(1),
                ToolParameter::number("field2", "1-based join field in file2 (join -2)")
                    .optional()
                    .with_default(1),
                ToolParameter::string("separator", "Field separator character (join -t)")
                    .optional()
                    .with_default(""),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let file1 = call.require_string("file1")?;
        let file2 = call.require_string("file2")?;
        let field1 = Self::field_argument(call, "field1")?;
        let field2 = Self::field_argument(call, "field2")?;
        let separator = call.get_string("separator").unwrap_or_default();
        let delimiter = separator.chars().next();

        let lines1 = fs::read_lines(&self.resolve_path(&file1)).await?;
        let lines2 = fs::read_lines(&self.resolve_path(&file2)).await?;

        let rows = join_on(&lines1, &lines2, field1, field2, delimiter);
        let mut output = String::new();
        for row in &rows {
            output.push_str(row);
            output.push('\n');
        }

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("rows", rows.len()))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("file1")?;
        call.require_string("file2")?;
        Self::field_argument(call, "field1")?;
        Self::field_argument(call, "field2")?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for JoinTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
