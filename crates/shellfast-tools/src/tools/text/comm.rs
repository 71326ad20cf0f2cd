//! Sorted-file set comparison tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::text::set_compare;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool comparing two sorted files as line sets, like `comm`
pub struct CommTool {
    working_directory: PathBuf,
}

impl CommTool {
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

impl Default for CommTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CommTool {
    fn name(&self) -> &str {
        "comm"
    }

    fn description(&self) -> &str {
        "Compare two sorted files line by line, equivalent to the `comm` shell \
         command. Produces three line sets: only in the first file, only in the \
         second, and in both. Inputs are treated as sets (duplicates collapse) \
         and the output lists are value-ordered, so the result is only a \
         faithful file comparison when the inputs are sorted and deduplicated."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "comm",
            self.description(),
            vec![
                ToolParameter::string("file1", "Path to the first sorted file"),
                ToolParameter::string("file2", "Path to the second sorted file"),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let file1 = call.require_string("file1")?;
        let file2 = call.require_string("file2")?;

        let lines1 = fs::read_lines(&self.resolve_path(&file1)).await?;
        let lines2 = fs::read_lines(&self.resolve_path(&file2)).await?;

        let split = set_compare(&lines1, &lines2);

        let output = format!(
            "only in {}: {}\nonly in {}: {}\nin both: {}\n",
            file1,
            split.only_in_a.len(),
            file2,
            split.only_in_b.len(),
            split.in_both.len()
        );

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("only_in_first", split.only_in_a)
            .with_metadata("only_in_second", split.only_in_b)
            .with_metadata("in_both", split.in_both))
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

impl FileSystemTool for CommTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;
    use tokio::fs as tokio_fs;

    fn create_tool_call(id: &str, name: &str, args: serde_json::Value) -> ToolCall {
        let arguments = if let serde_json::Value::Object(map) = args {
            map.into_iter().collect()
        } else {
            HashMap::new()
        };

        ToolCall {
            id: id.to_string(),
            name: name.to_string(),
            arguments,
        }
    }

    fn metadata_lines(result: &ToolResult, key: &str) -> Vec<String> {
        result
            .metadata
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn splits_lines_three_ways() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("a"), "a\nb\nc\n")
            .await
            .unwrap();
        tokio_fs::write(temp_dir.path().join("b"), "b\nc\nd\n")
            .await
            .unwrap();

        let tool = CommTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-1", "comm", json!({ "file1": "a", "file2": "b" }));

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(metadata_lines(&result, "only_in_first"), vec!["a"]);
        assert_eq!(metadata_lines(&result, "only_in_second"), vec!["d"]);
        assert_eq!(metadata_lines(&result, "in_both"), vec!["b", "c"]);
    }

    #[tokio::test]
    async fn duplicate_lines_appear_once() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("a"), "x\nx\ny\n")
            .await
            .unwrap();
        tokio_fs::write(temp_dir.path().join("b"), "x\n").await.unwrap();

        let tool = CommTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-2", "comm", json!({ "file1": "a", "file2": "b" }));

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(metadata_lines(&result, "in_both"), vec!["x"]);
        assert_eq!(metadata_lines(&result, "only_in_first"), vec!["y"]);
    }

    #[tokio::test]
    async fn output_summarizes_counts() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("a"), "p\nq\n").await.unwrap();
        tokio_fs::write(temp_dir.path().join("b"), "q\n").await.unwrap();

        let tool = CommTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-3", "comm", json!({ "file1": "a", "file2": "b" }));

        let result = tool.execute(&call).await.unwrap();
        let output = result.output.unwrap();
        assert!(output.contains("only in a: 1"));
        assert!(output.contains("in both: 1"));
    }
}
