//! Example demonstrating the diff tool and the flat API

use shellfast::text::SortOptions;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Diff Tool Demo ===\n");

    let dir = tempfile::tempdir()?;
    let old_path = dir.path().join("config.old");
    let new_path = dir.path().join("config.new");
    std::fs::write(&old_path, "host=localhost\nport=8080\ntimeout=30\n")?;
    std::fs::write(&new_path, "host=localhost\nport=9090\ntimeout=30\nretries=3\n")?;

    println!("Example 1: Unified diff");
    println!("=======================");
    let patch = shellfast::diff(
        &old_path.to_string_lossy(),
        &new_path.to_string_lossy(),
        true,
    )
    .await?;
    println!("{}", patch);

    println!("Example 2: Changed lines only");
    println!("=============================");
    let compact = shellfast::diff(
        &old_path.to_string_lossy(),
        &new_path.to_string_lossy(),
        false,
    )
    .await?;
    println!("{}", compact);

    println!("Example 3: Sort, then diff against the original");
    println!("===============================================");
    let sorted = shellfast::sort_file(&old_path.to_string_lossy(), &SortOptions::default()).await?;
    let sorted_path = dir.path().join("config.sorted");
    std::fs::write(&sorted_path, sorted)?;
    let patch = shellfast::diff(
        &old_path.to_string_lossy(),
        &sorted_path.to_string_lossy(),
        false,
    )
    .await?;
    println!("{}", patch);

    println!("Working directory was: {}", env::current_dir()?.display());
    Ok(())
}
