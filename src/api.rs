//! Flat convenience API over the tool set
//!
//! One async function per utility, mirroring the original package's flat
//! namespace. Functions that produce text return it directly; the ones with
//! structured results (`cmp`, `comm`, `wc`, `grep`) return the full
//! [`ToolResult`] so callers can read the typed metadata. Paths resolve
//! against the process working directory; hosts that need a different root
//! should construct the tools directly.

use serde_json::json;
use shellfast_core::text::SortOptions;
use shellfast_core::tools::{Tool, ToolCall, ToolError, ToolResult};
use shellfast_tools::{
    CatTool, CmpTool, CommTool, CutTool, DiffTool, EchoTool, GrepTool, HeadTool, JoinTool,
    PasteTool, SortTool, TailTool, WcTool,
};
use std::collections::HashMap;

fn flat_call(name: &str, args: serde_json::Value) -> ToolCall {
    let arguments: HashMap<String, serde_json::Value> = match args {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => HashMap::new(),
    };
    ToolCall::new(format!("flat-{}", name), name.to_string(), arguments)
}

async fn text_output(tool: &dyn Tool, call: ToolCall) -> Result<String, ToolError> {
    let result = tool.execute(&call).await?;
    Ok(result.output.unwrap_or_default())
}

/// Read a file, equivalent to `cat` (optionally `-n` / `-s`).
pub async fn cat(path: &str, number_lines: bool, squeeze_blank: bool) -> Result<String, ToolError> {
    let call = flat_call(
        "cat",
        json!({ "path": path, "number_lines": number_lines, "squeeze_blank": squeeze_blank }),
    );
    text_output(&CatTool::new(), call).await
}

/// Return text, equivalent to `echo` (optionally `-n`).
pub async fn echo(text: &str, no_newline: bool) -> Result<String, ToolError> {
    let call = flat_call("echo", json!({ "text": text, "no_newline": no_newline }));
    text_output(&EchoTool::new(), call).await
}

/// First `n` lines of a file, equivalent to `head -n`.
pub async fn head(path: &str, n: usize) -> Result<String, ToolError> {
    let call = flat_call("head", json!({ "path": path, "n": n }));
    text_output(&HeadTool::new(), call).await
}

/// Last `n` lines of a file, equivalent to `tail -n`.
pub async fn tail(path: &str, n: usize) -> Result<String, ToolError> {
    let call = flat_call("tail", json!({ "path": path, "n": n }));
    text_output(&TailTool::new(), call).await
}

/// Search a file for a pattern, equivalent to `grep -n`.
///
/// The full flag set (recursive, invert, counts, ...) is available on
/// [`GrepTool`] directly.
pub async fn grep(pattern: &str, path: &str, ignore_case: bool) -> Result<ToolResult, ToolError> {
    let call = flat_call(
        "grep",
        json!({ "pattern": pattern, "path": path, "ignore_case": ignore_case }),
    );
    GrepTool::new().execute(&call).await
}

/// Sort the lines of a file, equivalent to `sort`.
pub async fn sort_file(path: &str, opts: &SortOptions) -> Result<String, ToolError> {
    let separator = opts.separator.map(String::from).unwrap_or_default();
    let call = flat_call(
        "sort",
        json!({
            "path": path,
            "reverse": opts.reverse,
            "numeric": opts.numeric,
            "unique": opts.unique,
            "key": opts.key,
            "separator": separator,
            "ignore_case": opts.ignore_case,
        }),
    );
    text_output(&SortTool::new(), call).await
}

/// Compare two files line by line, equivalent to `diff` (optionally `-u`).
pub async fn diff(file1: &str, file2: &str, unified: bool) -> Result<String, ToolError> {
    let call = flat_call(
        "diff",
        json!({ "file1": file1, "file2": file2, "unified": unified }),
    );
    text_output(&DiffTool::new(), call).await
}

/// Compare two files byte by byte, equivalent to `cmp` (optionally `-s`).
///
/// The verdict and difference position are in the result metadata under
/// `identical`, `byte_offset` and `line_number`.
pub async fn cmp(file1: &str, file2: &str, silent: bool) -> Result<ToolResult, ToolError> {
    let call = flat_call(
        "cmp",
        json!({ "file1": file1, "file2": file2, "silent": silent }),
    );
    CmpTool::new().execute(&call).await
}

/// Compare two sorted files as line sets, equivalent to `comm`.
///
/// The three line lists are in the result metadata under `only_in_first`,
/// `only_in_second` and `in_both`.
pub async fn comm(file1: &str, file2: &str) -> Result<ToolResult, ToolError> {
    let call = flat_call("comm", json!({ "file1": file1, "file2": file2 }));
    CommTool::new().execute(&call).await
}

/// Count lines, words, characters and bytes, equivalent to `wc`.
pub async fn wc(path: &str) -> Result<ToolResult, ToolError> {
    let call = flat_call("wc", json!({ "path": path }));
    WcTool::new().execute(&call).await
}

/// Extract fields from each line, equivalent to `cut -d -f`.
pub async fn cut(path: &str, delimiter: &str, fields: &str) -> Result<String, ToolError> {
    let call = flat_call(
        "cut",
        json!({ "path": path, "delimiter": delimiter, "fields": fields }),
    );
    text_output(&CutTool::new(), call).await
}

/// Merge lines of files side by side, equivalent to `paste -d`.
pub async fn paste(files: &[&str], delimiter: &str) -> Result<String, ToolError> {
    let call = flat_call("paste", json!({ "files": files, "delimiter": delimiter }));
    text_output(&PasteTool::new(), call).await
}

/// Join two files on a common field, equivalent to `join -1 -2 -t`.
pub async fn join(
    file1: &str,
    file2: &str,
    field1: usize,
    field2: usize,
    separator: &str,
) -> Result<String, ToolError> {
    let call = flat_call(
        "join",
        json!({
            "file1": file1,
            "file2": file2,
            "field1": field1,
            "field2": field2,
            "separator": separator,
        }),
    );
    text_output(&JoinTool::new(), call).await
}
