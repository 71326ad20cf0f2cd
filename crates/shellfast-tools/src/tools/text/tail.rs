//! Last-lines tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool returning the last lines or bytes of a file, like `tail`
pub struct TailTool {
    working_directory: PathBuf,
}

impl TailTool {
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

impl Default for TailTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for TailTool {
    fn name(&self) -> &str {
        "tail"
    }

    fn description(&self) -> &str {
        "Return the last N lines of a file, equivalent to the `tail` shell \
         command (default 10, tail -n). When bytes > 0, return the last N \
         bytes instead (tail -c)."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "tail",
            self.description(),
            vec![
                ToolParameter::string("path", "Path to the file"),
                ToolParameter::number("n", "Number of lines to return (tail -n)")
                    .optional()
                    .with_default(10),
                ToolParameter::number("bytes", "If > 0, return the last N bytes (tail -c)")
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
            let start = content.len().saturating_sub(bytes as usize);
            let output = String::from_utf8_lossy(&content[start..]).into_owned();
            return Ok(ToolResult::success(&call.id, self.name(), output)
                .with_metadata("bytes", content.len() - start));
        }

        let lines = fs::read_lines(&resolved).await?;
        let start = lines.len().saturating_sub(n);
        let mut output = String::new();
        for line in &lines[start..] {
            output.push_str(line);
            output.push('\n');
        }

        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("lines", lines.len() - start))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("path")?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for TailTool {
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

    #[tokio::test]
    async fn defaults_to_last_ten_lines() {
        let temp_dir = TempDir::new().unwrap();
        let content: String = (0..20).map(|i| format!("{}\n", i)).collect();
        tokio_fs::write(temp_dir.path().join("nums"), content)
            .await
            .unwrap();

        let tool = TailTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-1", "tail", json!({ "path": "nums" }));

        let result = tool.execute(&call).await.unwrap();
        let output = result.output.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "10");
        assert_eq!(lines[9], "19");
    }

    #[tokio::test]
    async fn explicit_line_count() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("f"), "a\nb\nc\nd\n")
            .await
            .unwrap();

        let tool = TailTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-2", "tail", json!({ "path": "f", "n": 2 }));

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("c\nd\n"));
    }

    #[tokio::test]
    async fn byte_mode_keeps_the_suffix() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("f"), "abcdefgh")
            .await
            .unwrap();

        let tool = TailTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-3", "tail", json!({ "path": "f", "bytes": 3 }));

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("fgh"));
    }

    #[tokio::test]
    async fn byte_count_larger_than_file_returns_all() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("f"), "xy").await.unwrap();

        let tool = TailTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-4", "tail", json!({ "path": "f", "bytes": 100 }));

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("xy"));
    }
}
