//! Schema definition for the diff tool

use shellfast_core::tools::types::{ToolParameter, ToolSchema};

/// Create the schema for the diff tool
pub fn create_schema() -> ToolSchema {
    ToolSchema::new(
        "diff",
        description(),
        vec![
            ToolParameter::string("file1", "Path to the first file"),
            ToolParameter::string("file2", "Path to the second file"),
            ToolParameter::boolean(
                "unified",
                "Output in unified format with headers and context lines (diff -u)",
            )
            .optional()
            .with_default(true),
        ],
    )
}

/// Get the tool description
pub fn description() -> &'static str {
    r#"Compare two files line by line, equivalent to the `diff` shell command.

Computes a longest-common-subsequence alignment of the two files and renders
the resulting edit script. Unified output (the default) starts with
`--- file1` / `+++ file2` headers and includes unchanged lines prefixed with
a space; changed lines are prefixed `+` (only in file2) or `-` (only in
file1). With unified=false only the changed lines are emitted, without
headers.

Both files are read fully into memory and aligned with an O(n*m) table in
their line counts, so this is intended for files whose line counts fit
comfortably in memory, not multi-gigabyte logs."#
}
