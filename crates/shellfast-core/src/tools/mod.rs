//! Tool framework: trait, call/result types, errors and registry

pub mod base;
pub mod registry;
pub mod types;

pub use base::{FileSystemTool, Tool, ToolError};
pub use registry::{ToolRegistry, ToolRegistryBuilder};
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
