//! Tool implementations for ShellFast

pub mod fs;
pub mod tools;

// Re-export tools
pub use tools::text::{
    CatTool, CmpTool, CommTool, CutTool, DiffTool, EchoTool, GrepTool, HeadTool, JoinTool,
    PasteTool, SortTool, TailTool, WcTool,
};

use shellfast_core::tools::{Tool, ToolRegistry, ToolRegistryBuilder};
use std::sync::Arc;

/// The category every built-in tool registers under.
pub const TEXT_CATEGORY: &str = "text";

/// Get all default tools
pub fn default_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(CatTool::new()),
        Arc::new(EchoTool::new()),
        Arc::new(HeadTool::new()),
        Arc::new(TailTool::new()),
        Arc::new(GrepTool::new()),
        Arc::new(SortTool::new()),
        Arc::new(DiffTool::new()),
        Arc::new(CmpTool::new()),
        Arc::new(CommTool::new()),
        Arc::new(WcTool::new()),
        Arc::new(CutTool::new()),
        Arc::new(PasteTool::new()),
        Arc::new(JoinTool::new()),
    ]
}

/// Build a registry with every default tool under [`TEXT_CATEGORY`]
pub fn default_registry() -> ToolRegistry {
    let mut builder = ToolRegistryBuilder::new();
    for tool in default_tools() {
        builder = builder.with_tool_in_category(tool, TEXT_CATEGORY);
    }
    builder.build()
}
