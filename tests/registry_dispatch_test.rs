//! Dispatching tool calls through the registry, the way a host would

use serde_json::json;
use shellfast::{default_registry, ToolCall, TEXT_CATEGORY};
use std::collections::HashMap;
use tempfile::TempDir;

fn call(name: &str, args: serde_json::Value) -> ToolCall {
    let arguments: HashMap<String, serde_json::Value> = match args {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => HashMap::new(),
    };
    ToolCall::new(format!("host-{}", name), name.to_string(), arguments)
}

#[tokio::test]
async fn host_dispatches_by_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("f.txt");
    std::fs::write(&path, "b\na\n").unwrap();

    let registry = default_registry();
    let sort = registry.get("sort").expect("sort registered");

    let result = sort
        .execute(&call(
            "sort",
            json!({ "path": path.to_string_lossy(), "reverse": false }),
        ))
        .await
        .unwrap();
    assert_eq!(result.output.as_deref(), Some("a\nb\n"));
    assert_eq!(result.tool_name, "sort");
}

#[tokio::test]
async fn execute_with_timing_converts_errors_to_results() {
    let registry = default_registry();
    let cut = registry.get("cut").expect("cut registered");

    // Malformed field spec: validation fails, but the host still gets a
    // ToolResult rather than a panic or a bare error.
    let result = cut
        .execute_with_timing(&call("cut", json!({ "path": "x", "fields": "1-" })))
        .await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("invalid field spec"));
    assert!(result.execution_time_ms.is_some());
}

#[tokio::test]
async fn schemas_expose_every_registered_tool() {
    let registry = default_registry();
    for tool in registry.get_category(TEXT_CATEGORY) {
        let schema = tool.schema();
        assert_eq!(schema.name, tool.name());
        assert!(schema.parameters["properties"].is_object());
    }
}

#[tokio::test]
async fn pipeline_sort_then_comm() {
    let dir = TempDir::new().unwrap();
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    std::fs::write(&left, "pear\napple\nfig\n").unwrap();
    std::fs::write(&right, "fig\nplum\napple\n").unwrap();

    // comm expects sorted input; feed it through sort first like a shell
    // pipeline would.
    let sorted_left = shellfast::sort_file(
        &left.to_string_lossy(),
        &shellfast::text::SortOptions::default(),
    )
    .await
    .unwrap();
    let sorted_path = dir.path().join("left.sorted.txt");
    std::fs::write(&sorted_path, sorted_left).unwrap();

    let result = shellfast::comm(
        &sorted_path.to_string_lossy(),
        &right.to_string_lossy(),
    )
    .await
    .unwrap();

    let in_both: Vec<&str> = result.metadata["in_both"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(in_both, vec!["apple", "fig"]);
}
