//! Core Tool trait definition

use super::error::ToolError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::Instant;

/// Base trait for all tools
///
/// Tools are shell-utility equivalents the host invokes in-process instead
/// of spawning a subprocess. Each tool has a schema for validation and an
/// execution entry point.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g. "diff")
    fn name(&self) -> &str;

    /// Get the tool's description for the host
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if arguments are invalid, a path cannot be read,
    /// or execution fails.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments
    ///
    /// Called before `execute()` to verify arguments are valid.
    /// Default implementation accepts all arguments.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Whether this tool only reads data without side effects
    fn is_read_only(&self) -> bool {
        false
    }

    /// Whether this tool can be called in parallel with other tools
    fn supports_parallel_execution(&self) -> bool {
        true
    }

    /// Execute the tool with timing and error handling
    ///
    /// This wraps `execute()` with automatic validation, timing measurement,
    /// and error conversion. Always returns a `ToolResult`.
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        if let Err(err) = self.validate(call) {
            return ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(mut result) => {
                result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
                result
            }
            Err(err) => ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}
