//! Tool registry for managing available tools

use crate::tools::base::Tool;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    categories: HashMap<String, Vec<String>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        tracing::debug!("Registering tool '{}'", name);
        self.tools.insert(name, tool);
    }

    /// Register a tool with a category
    pub fn register_with_category(&mut self, tool: Arc<dyn Tool>, category: &str) {
        let name = tool.name().to_string();
        tracing::debug!("Registering tool '{}' in category '{}'", name, category);
        self.tools.insert(name.clone(), tool);

        self.categories
            .entry(category.to_string())
            .or_default()
            .push(name);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get all tools in a category
    pub fn get_category(&self, category: &str) -> Vec<&Arc<dyn Tool>> {
        self.categories
            .get(category)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| self.tools.get(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all category names
    pub fn category_names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tools
    pub fn all_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.values().cloned().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for tool registry
pub struct ToolRegistryBuilder {
    tools: Vec<(Arc<dyn Tool>, Option<String>)>,
}

impl ToolRegistryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Add a tool
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push((tool, None));
        self
    }

    /// Add a tool with category
    pub fn with_tool_in_category(mut self, tool: Arc<dyn Tool>, category: &str) -> Self {
        self.tools.push((tool, Some(category.to_string())));
        self
    }

    /// Build the registry
    pub fn build(self) -> ToolRegistry {
        let mut registry = ToolRegistry::new();

        for (tool, category) in self.tools {
            if let Some(cat) = category {
                registry.register_with_category(tool, &cat);
            } else {
                registry.register(tool);
            }
        }

        registry
    }
}

impl Default for ToolRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use parking_lot::Mutex;
use std::sync::LazyLock;

/// Global tool registry instance.
/// Uses parking_lot::Mutex for non-poisoning, faster locks.
static GLOBAL_REGISTRY: LazyLock<Mutex<ToolRegistry>> =
    LazyLock::new(|| Mutex::new(ToolRegistry::new()));

/// Run a closure against the global tool registry
pub fn with_global_registry<F, R>(f: F) -> R
where
    F: FnOnce(&mut ToolRegistry) -> R,
{
    let mut registry = GLOBAL_REGISTRY.lock();
    f(&mut registry)
}

/// Register a tool globally
pub fn register_global_tool(tool: Arc<dyn Tool>) {
    with_global_registry(|registry| registry.register(tool));
}

/// Get a tool from the global registry
pub fn get_global_tool(name: &str) -> Option<Arc<dyn Tool>> {
    with_global_registry(|registry| registry.get(name).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
    use crate::tools::ToolError;
    use async_trait::async_trait;

    struct NullTool {
        name: &'static str,
    }

    #[async_trait]
    impl Tool for NullTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "does nothing"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new(self.name(), self.description(), vec![])
        }

        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(&call.id, self.name(), ""))
        }
    }

    #[test]
    fn registers_and_looks_up_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NullTool { name: "first" }));
        assert!(registry.has_tool("first"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn categories_group_tools() {
        let registry = ToolRegistryBuilder::new()
            .with_tool_in_category(Arc::new(NullTool { name: "a" }), "text")
            .with_tool_in_category(Arc::new(NullTool { name: "b" }), "text")
            .with_tool(Arc::new(NullTool { name: "c" }))
            .build();

        assert_eq!(registry.get_category("text").len(), 2);
        assert_eq!(registry.category_names(), vec!["text".to_string()]);
        assert_eq!(registry.tool_names().len(), 3);
    }

    #[test]
    fn global_registry_round_trips() {
        register_global_tool(Arc::new(NullTool {
            name: "global-probe",
        }));
        let tool = get_global_tool("global-probe").expect("registered above");
        assert_eq!(tool.name(), "global-probe");
    }
}
