//! Base trait and types for tools
//!
//! This module provides the core abstractions for exposing shell utilities
//! as in-process calls:
//!
//! - [`Tool`] - The main trait that all tools must implement
//! - [`ToolError`] - Error types for tool operations
//! - [`FileSystemTool`] - Helper trait for tools that resolve file paths
//!
//! # Examples
//!
//! ```no_run
//! use shellfast_core::tools::{Tool, ToolSchema};
//! use shellfast_core::tools::base::ToolError;
//! use shellfast_core::tools::types::{ToolCall, ToolResult};
//! use async_trait::async_trait;
//!
//! struct MyTool;
//!
//! #[async_trait]
//! impl Tool for MyTool {
//!     fn name(&self) -> &str { "my_tool" }
//!     fn description(&self) -> &str { "A custom tool" }
//!     fn schema(&self) -> ToolSchema {
//!         ToolSchema::new(self.name(), self.description(), vec![])
//!     }
//!     async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
//!         Ok(ToolResult::success(&call.id, self.name(), "done"))
//!     }
//! }
//! ```

pub mod error;
pub mod filesystem_tool;
pub mod tool_trait;

#[cfg(test)]
mod tests;

pub use error::ToolError;
pub use filesystem_tool::FileSystemTool;
pub use tool_trait::Tool;
