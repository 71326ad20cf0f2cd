//! Text echo tool

use async_trait::async_trait;
use shellfast_core::tools::base::{Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};

/// Tool returning its input text, like `echo`
///
/// The one tool in the set that touches no files.
pub struct EchoTool;

impl EchoTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Return the given text with a trailing newline, equivalent to the \
         `echo` shell command. no_newline omits the newline (echo -n)."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "echo",
            self.description(),
            vec![
                ToolParameter::string("text", "The text to return"),
                ToolParameter::boolean("no_newline", "Omit the trailing newline (echo -n)")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let text = call.require_string("text")?;
        let no_newline = call.get_bool("no_newline").unwrap_or(false);

        let output = if no_newline { text } else { format!("{}\n", text) };
        Ok(ToolResult::success(&call.id, self.name(), output))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("text")?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

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
    async fn appends_newline_by_default() {
        let tool = EchoTool::new();
        let call = create_tool_call("test-1", "echo", json!({ "text": "hello" }));
        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("hello\n"));
    }

    #[tokio::test]
    async fn no_newline_returns_text_verbatim() {
        let tool = EchoTool::new();
        let call = create_tool_call("test-2", "echo", json!({ "text": "hello", "no_newline": true }));
        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn missing_text_is_invalid() {
        let tool = EchoTool::new();
        let call = create_tool_call("test-3", "echo", json!({}));
        assert!(tool.validate(&call).is_err());
    }
}
