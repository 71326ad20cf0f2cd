//! Line sorting tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::text::{sort_by_key, SortOptions};
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool sorting the lines of a file, like `sort`
pub struct SortTool {
    working_directory: PathBuf,
}

impl SortTool {
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

    fn options_from(call: &ToolCall) -> Result<SortOptions, ToolError> {
        let key = call.get_i64("key").unwrap_or(0);
        if key < 0 {
            return Err(ToolError::InvalidArguments(format!(
                "'key' must be zero (whole line) or a 1-based field index, got {}",
                key
            )));
        }

        let separator = call.get_string("separator").unwrap_or_default();

        Ok(SortOptions {
            reverse: call.get_bool("reverse").unwrap_or(false),
            numeric: call.get_bool("numeric").unwrap_or(false),
            unique: call.get_bool("unique").unwrap_or(false),
            key: key as usize,
            separator: separator.chars().next(),
            ignore_case: call.get_bool("ignore_case").unwrap_or(false),
        })
    }
}

impl Default for SortTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SortTool {
    fn name(&self) -> &str {
        "sort"
    }

    fn description(&self) -> &str {
        "Sort the lines of a file, equivalent to the `sort` shell command. \
         Supports reverse (-r), numeric (-n), unique (-u), case-insensitive \
         (-f) ordering and sorting by a 1-based key field (-k) split on a \
         separator (-t). In numeric mode a key that does not parse as a \
         number makes that comparison fall back to plain lexicographic line \
         order; with mixed keys this mixes the two orders, which matches the \
         reference behavior and is intentional."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "sort",
            self.description(),
            vec![
                ToolParameter::string("path", "Path to the file to sort"),
                ToolParameter::boolean("reverse", "Reverse the sort order (sort -r)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("numeric", "Compare keys numerically (sort -n)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("unique", "Drop consecutive duplicate lines (sort -u)")
                    .optional()
                    .with_default(false),
                ToolParameter::number("key", "1-based key field, 0 for the whole line (sort -k)")
                    .optional()
                    .with_default(0),
                ToolParameter::string("separator", "Field separator character (sort -t)")
                    .optional()
                    .with_default(""),
                ToolParameter::boolean("ignore_case", "Fold case when comparing (sort -f)")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let path = call.require_string("path")?;
        let opts = Self::options_from(call)?;

        let lines = fs::read_lines(&self.resolve_path(&path)).await?;
        let sorted = sort_by_key(&lines, &opts);

        let mut output = String::new();
        for line in &sorted {
            output.push_str(line);
            output.push('\n');
        }

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("lines", sorted.len()))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("path")?;
        Self::options_from(call)?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for SortTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
