//! Field extraction tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::text::{extract_fields, FieldSpec};
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool extracting delimited fields from each line, like `cut`
pub struct CutTool {
    working_directory: PathBuf,
}

impl CutTool {
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

impl Default for CutTool {
    fn default() -> Self {
        Self::new()
    }
}

/// An empty delimiter string selects whitespace splitting; otherwise the
/// first character is the literal delimiter.
fn delimiter_of(raw: &str) -> Option<char> {
    raw.chars().next()
}

#[async_trait]
impl Tool for CutTool {
    fn name(&self) -> &str {
        "cut"
    }

    fn description(&self) -> &str {
        "Extract fields from each line of a file, equivalent to the `cut` shell \
         command. Fields are selected with a comma-separated list of 1-based \
         indices and inclusive ranges, e.g. \"1,3-5\" (cut -f), split on the \
         delimiter character (cut -d, default tab). Selected fields beyond a \
         line's field count are omitted from that line's output."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "cut",
            self.description(),
            vec![
                ToolParameter::string("path", "Path to the file"),
                ToolParameter::string("delimiter", "Field delimiter character (default: tab)")
                    .optional()
                    .with_default("\t"),
                ToolParameter::string(
                    "fields",
                    "Comma-separated 1-based field numbers or ranges, e.g. \"1,3-5\"",
                )
                .optional()
                .with_default("1"),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let path = call.require_string("path")?;
        let delimiter = call.get_string("delimiter").unwrap_or_else(|| "\t".to_string());
        let fields = call.get_string("fields").unwrap_or_else(|| "1".to_string());

        // The spec is checked before any file I/O happens.
        let spec = FieldSpec::parse(&fields)?;
        let delimiter = delimiter_of(&delimiter);

        let lines = fs::read_lines(&self.resolve_path(&path)).await?;

        let mut output = String::new();
        for line in &lines {
            output.push_str(&extract_fields(line, delimiter, &spec));
            output.push('\n');
        }

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("lines", lines.len()))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("path")?;
        if let Some(fields) = call.get_string("fields") {
            FieldSpec::parse(&fields)?;
        }
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for CutTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
