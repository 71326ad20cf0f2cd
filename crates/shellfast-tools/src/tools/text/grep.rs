//! Pattern search tool

use crate::fs;
use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use shellfast_core::text::TextError;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::{Path, PathBuf};
use tracing::instrument;
use walkdir::WalkDir;

/// Tool searching files for a regex pattern, like `grep`
pub struct GrepTool {
    working_directory: PathBuf,
}

impl GrepTool {
    pub fn new() -> Self {
        Self {
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn with_working_directory<P: Into<PathBuf>>(working_dir: P) -> Self {
        Self {
            working_directory: working_dir.into(),
        }
    }

    /// Expand the search path into the list of files to scan.
    ///
    /// Regular files search as-is; directories require recursive=true and
    /// expand to every regular file beneath them, path-sorted so output is
    /// stable across platforms.
    fn collect_files(path: &Path, recursive: bool) -> Result<Vec<PathBuf>, ToolError> {
        if !path.exists() {
            return Err(ToolError::NotFound(format!(
                "{}: No such file or directory",
                path.display()
            )));
        }

        if path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }

        if !recursive {
            return Err(ToolError::InvalidArguments(format!(
                "{}: Is a directory (use recursive=true)",
                path.display()
            )));
        }

        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(entry.into_path()),
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!("Error walking directory entry: {}", err);
                    None
                }
            })
            .collect();
        files.sort();
        Ok(files)
    }

    fn build_regex(pattern: &str, ignore_case: bool, whole_word: bool) -> Result<Regex, ToolError> {
        let pattern = if whole_word {
            format!(r"\b{}\b", pattern)
        } else {
            pattern.to_string()
        };

        RegexBuilder::new(&pattern)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|err| TextError::InvalidPattern(err.to_string()).into())
    }
}

impl Default for GrepTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GrepTool {
    fn name(&self) -> &str {
        "grep"
    }

    fn description(&self) -> &str {
        "Search for a regex pattern in a file or directory tree, equivalent to \
         the `grep` shell command. Supports case-insensitive matching (-i), \
         recursive directory search (-r), line numbers (-n, on by default), \
         per-file match counts (-c), inverted matching (-v), listing only \
         matching file names (-l) and whole-word matching (-w). Searching a \
         directory without recursive=true is an error."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "grep",
            self.description(),
            vec![
                ToolParameter::string("pattern", "Regular expression pattern to search for"),
                ToolParameter::string("path", "File or directory to search"),
                ToolParameter::boolean("ignore_case", "Case-insensitive matching (grep -i)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("recursive", "Search directories recursively (grep -r)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("line_numbers", "Include line numbers (grep -n)")
                    .optional()
                    .with_default(true),
                ToolParameter::boolean("count_only", "Only report match counts per file (grep -c)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("invert", "Select non-matching lines (grep -v)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("files_only", "Only list matching file names (grep -l)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("whole_word", "Match whole words only (grep -w)")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    #[instrument(skip(self, call), fields(call_id = %call.id, pattern = call.get_string("pattern").as_deref().unwrap_or("<missing>")))]
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let pattern = call.require_string("pattern")?;
        let path = call.require_string("path")?;
        let ignore_case = call.get_bool("ignore_case").unwrap_or(false);
        let recursive = call.get_bool("recursive").unwrap_or(false);
        let line_numbers = call.get_bool("line_numbers").unwrap_or(true);
        let count_only = call.get_bool("count_only").unwrap_or(false);
        let invert = call.get_bool("invert").unwrap_or(false);
        let files_only = call.get_bool("files_only").unwrap_or(false);
        let whole_word = call.get_bool("whole_word").unwrap_or(false);

        let regex = Self::build_regex(&pattern, ignore_case, whole_word)?;
        let files = Self::collect_files(&self.resolve_path(&path), recursive)?;
        let multi_file = files.len() > 1;

        let mut output = String::new();
        let mut counts = serde_json::Map::new();
        let mut matching_files: Vec<String> = Vec::new();
        let mut total_matches: u64 = 0;

        for file in &files {
            let lines = match fs::read_lines(file).await {
                Ok(lines) => lines,
                // Recursive walks hit binary or unreadable files; skip them
                // instead of failing the whole search.
                Err(err) if recursive => {
                    tracing::warn!("Skipping {}: {}", file.display(), err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            let mut file_matches: u64 = 0;
            for (index, line) in lines.iter().enumerate() {
                let mut matched = regex.is_match(line);
                if invert {
                    matched = !matched;
                }
                if !matched {
                    continue;
                }

                file_matches += 1;
                if !count_only && !files_only {
                    if multi_file {
                        output.push_str(&format!("{}:", file.display()));
                    }
                    if line_numbers {
                        output.push_str(&format!("{}:", index + 1));
                    }
                    output.push_str(line);
                    output.push('\n');
                }
            }

            total_matches += file_matches;
            if count_only {
                counts.insert(file.display().to_string(), file_matches.into());
                output.push_str(&format!("{}:{}\n", file.display(), file_matches));
            }
            if file_matches > 0 {
                matching_files.push(file.display().to_string());
            }
        }

        if files_only {
            output = matching_files
                .iter()
                .map(|file| format!("{}\n", file))
                .collect();
        }

        let mut result = ToolResult::success(&call.id, self.name(), output)
            .with_metadata("total_matches", total_matches)
            .with_metadata("files_searched", files.len())
            .with_metadata("matching_files", matching_files);
        if count_only {
            result = result.with_metadata("counts", counts);
        }
        Ok(result)
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let pattern = call.require_string("pattern")?;
        call.require_string("path")?;
        Self::build_regex(
            &pattern,
            call.get_bool("ignore_case").unwrap_or(false),
            call.get_bool("whole_word").unwrap_or(false),
        )?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for GrepTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;
    use tokio::fs as tokio_fs;

    fn create_tool_call(id: &str, name: &str, args: serde_json::Value) -> ToolCall {
        let arguments = if let serde_json::Value::Object(map) = args {
            map.into_iter().collect()
        } else {
            HashMap::new()
        };

        ToolCall {
            id: id.to_string(),
            name: name.to_string(),
            arguments,
        }
    }

    #[tokio::test]
    async fn matches_lines_with_numbers() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(
            temp_dir.path().join("f"),
            "hello world\nfoo bar\nhello again\n",
        )
        .await
        .unwrap();

        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-1", "grep", json!({ "pattern": "hello", "path": "f" }));

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("1:hello world\n3:hello again\n"));
        assert_eq!(
            result.metadata.get("total_matches").and_then(|v| v.as_u64()),
            Some(2)
        );
    }

    #[tokio::test]
    async fn ignore_case_matches_all_variants() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("f"), "Hello\nhello\nHELLO\n")
            .await
            .unwrap();

        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-2",
            "grep",
            json!({ "pattern": "hello", "path": "f", "ignore_case": true }),
        );

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(
            result.metadata.get("total_matches").and_then(|v| v.as_u64()),
            Some(3)
        );
    }

    #[tokio::test]
    async fn invert_selects_non_matching_lines() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("f"), "a\nb\nc\n").await.unwrap();

        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-3",
            "grep",
            json!({ "pattern": "a", "path": "f", "invert": true }),
        );

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("2:b\n3:c\n"));
    }

    #[tokio::test]
    async fn count_only_reports_per_file_counts() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("f"), "a\nb\na\n").await.unwrap();

        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-4",
            "grep",
            json!({ "pattern": "a", "path": "f", "count_only": true }),
        );

        let result = tool.execute(&call).await.unwrap();
        let counts = result.metadata.get("counts").unwrap().as_object().unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.values().next().and_then(|v| v.as_u64()), Some(2));
    }

    #[tokio::test]
    async fn whole_word_does_not_match_substrings() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("f"), "cat\nconcatenate\n")
            .await
            .unwrap();

        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-5",
            "grep",
            json!({ "pattern": "cat", "path": "f", "whole_word": true }),
        );

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(result.output.as_deref(), Some("1:cat\n"));
    }

    #[tokio::test]
    async fn recursive_search_prefixes_file_names() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::create_dir(temp_dir.path().join("sub")).await.unwrap();
        tokio_fs::write(temp_dir.path().join("one.txt"), "needle\n")
            .await
            .unwrap();
        tokio_fs::write(temp_dir.path().join("sub/two.txt"), "needle here\n")
            .await
            .unwrap();

        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-6",
            "grep",
            json!({ "pattern": "needle", "path": ".", "recursive": true }),
        );

        let result = tool.execute(&call).await.unwrap();
        assert_eq!(
            result.metadata.get("total_matches").and_then(|v| v.as_u64()),
            Some(2)
        );
        let output = result.output.unwrap();
        assert!(output.contains("one.txt:1:needle"));
        assert!(output.contains("two.txt:1:needle here"));
    }

    #[tokio::test]
    async fn directory_without_recursive_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call("test-7", "grep", json!({ "pattern": "x", "path": "." }));

        let err = tool.execute(&call).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn invalid_pattern_is_rejected() {
        let tool = GrepTool::new();
        let call = create_tool_call(
            "test-8",
            "grep",
            json!({ "pattern": "[invalid(regex", "path": "f" }),
        );

        let err = tool.execute(&call).await.unwrap_err();
        assert!(matches!(err, ToolError::Text(TextError::InvalidPattern(_))));
        assert!(tool.validate(&call).is_err());
    }

    #[tokio::test]
    async fn files_only_lists_matching_paths() {
        let temp_dir = TempDir::new().unwrap();
        tokio_fs::write(temp_dir.path().join("hit.txt"), "needle\n")
            .await
            .unwrap();
        tokio_fs::write(temp_dir.path().join("miss.txt"), "nothing\n")
            .await
            .unwrap();

        let tool = GrepTool::with_working_directory(temp_dir.path());
        let call = create_tool_call(
            "test-9",
            "grep",
            json!({ "pattern": "needle", "path": ".", "recursive": true, "files_only": true }),
        );

        let result = tool.execute(&call).await.unwrap();
        let output = result.output.unwrap();
        assert!(output.contains("hit.txt"));
        assert!(!output.contains("miss.txt"));
    }
}
