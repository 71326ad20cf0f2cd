//! Tests for the base tool abstractions

use super::error::ToolError;
use super::filesystem_tool::FileSystemTool;
use super::tool_trait::Tool;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

struct UpperTool {
    working_directory: PathBuf,
}

#[async_trait]
impl Tool for UpperTool {
    fn name(&self) -> &str {
        "upper"
    }

    fn description(&self) -> &str {
        "uppercases its input"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), vec![])
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let text = call.require_string("text")?;
        Ok(ToolResult::success(&call.id, self.name(), text.to_uppercase()))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("text")?;
        Ok(())
    }
}

impl FileSystemTool for UpperTool {
    fn working_directory(&self) -> &Path {
        &self.working_directory
    }
}

fn upper_tool() -> UpperTool {
    UpperTool {
        working_directory: PathBuf::from("/work"),
    }
}

fn call_with_text(text: Option<&str>) -> ToolCall {
    let mut arguments = HashMap::new();
    if let Some(text) = text {
        arguments.insert("text".to_string(), serde_json::Value::from(text));
    }
    ToolCall::new("call-1", "upper", arguments)
}

#[tokio::test]
async fn execute_with_timing_stamps_successful_results() {
    let result = upper_tool().execute_with_timing(&call_with_text(Some("hi"))).await;
    assert!(result.success);
    assert_eq!(result.output.as_deref(), Some("HI"));
    assert!(result.execution_time_ms.is_some());
}

#[tokio::test]
async fn execute_with_timing_turns_validation_failures_into_results() {
    let result = upper_tool().execute_with_timing(&call_with_text(None)).await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("text"));
    assert_eq!(result.exit_code, Some(1));
}

#[test]
fn defaults_allow_parallel_but_not_read_only() {
    let tool = upper_tool();
    assert!(tool.supports_parallel_execution());
    assert!(!tool.is_read_only());
}

#[test]
fn relative_paths_resolve_against_the_working_directory() {
    let tool = upper_tool();
    assert_eq!(tool.resolve_path("notes.txt"), PathBuf::from("/work/notes.txt"));
    assert_eq!(tool.resolve_path("/etc/hosts"), PathBuf::from("/etc/hosts"));
}
