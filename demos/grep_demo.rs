//! Example demonstrating the grep tool through the registry

use serde_json::json;
use shellfast::{default_registry, ToolCall};
use std::collections::HashMap;

fn call(name: &str, args: serde_json::Value) -> ToolCall {
    let arguments: HashMap<String, serde_json::Value> = match args {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => HashMap::new(),
    };
    ToolCall::new(format!("demo-{}", name), name.to_string(), arguments)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Grep Tool Demo ===\n");

    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("app.log"),
        "INFO started\nERROR disk full\nINFO retrying\nerror: timeout\n",
    )?;
    std::fs::write(dir.path().join("other.log"), "nothing to see\n")?;

    let registry = default_registry();
    let grep = registry.get("grep").expect("grep is registered");

    println!("Example 1: Case-insensitive recursive search");
    println!("============================================");
    let result = grep
        .execute(&call(
            "grep",
            json!({
                "pattern": "error",
                "path": dir.path().to_string_lossy(),
                "ignore_case": true,
                "recursive": true,
            }),
        ))
        .await?;
    println!("{}", result.output.unwrap_or_default());

    println!("Example 2: Match counts per file");
    println!("================================");
    let result = grep
        .execute(&call(
            "grep",
            json!({
                "pattern": "INFO",
                "path": dir.path().to_string_lossy(),
                "recursive": true,
                "count_only": true,
            }),
        ))
        .await?;
    println!("{}", result.output.unwrap_or_default());

    println!("Registered tools: {:?}", registry.tool_names());
    Ok(())
}
