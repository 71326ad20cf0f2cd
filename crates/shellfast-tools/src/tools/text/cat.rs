//! File display tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool returning file contents, like `cat`
pub struct CatTool {
    working_directory: PathBuf,
}

impl CatTool {
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

impl Default for CatTool {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[async_trait]
impl Tool for CatTool {
    fn name(&self) -> &str {
        "cat"
    }

    fn description(&self) -> &str {
        "Read a file and return its contents, equivalent to the `cat` shell \
         command. number_lines prefixes each emitted line with its number \
         (cat -n); squeeze_blank collapses runs of blank lines into one \
         (cat -s)."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "cat",
            self.description(),
            vec![
                ToolParameter::string("path", "Path to the file to read"),
                ToolParameter::boolean("number_lines", "Number all output lines (cat -n)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("squeeze_blank", "Suppress repeated blank lines (cat -s)")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let path = call.require_string("path")?;
        let number_lines = call.get_bool("number_lines").unwrap_or(false);
        let squeeze_blank = call.get_bool("squeeze_blank").unwrap_or(false);

        let lines = fs::read_lines(&self.resolve_path(&path)).await?;

        let mut output = String::new();
        let mut line_number = 1;
        let mut previous_blank = false;

        for line in &lines {
            let blank = is_blank(line);

            if squeeze_blank && blank && previous_blank {
                continue;
            }

            if number_lines {
                output.push_str(&format!("     {}\t", line_number));
                line_number += 1;
            }

            output.push_str(line);
            output.push('\n');
            previous_blank = blank;
        }

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("lines", lines.len()))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("path")?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for CatTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
