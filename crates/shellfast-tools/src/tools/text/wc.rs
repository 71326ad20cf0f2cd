//! Line, word and byte counting tool

use crate::fs;
use async_trait::async_trait;
use shellfast_core::tools::base::{FileSystemTool, Tool, ToolError};
use shellfast_core::tools::types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
use std::path::PathBuf;

/// Tool counting lines, words, characters and bytes, like `wc`
pub struct WcTool {
    working_directory: PathBuf,
}

#[derive(Debug, Default)]
struct Counts {
    lines: u64,
    words: u64,
    chars: u64,
    bytes: u64,
}

fn count_bytes(content: &[u8]) -> Counts {
    let mut counts = Counts::default();
    let mut in_word = false;

    for &byte in content {
        counts.bytes += 1;
        counts.chars += 1;
        if byte == b'\n' {
            counts.lines += 1;
        }
        if byte.is_ascii_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            counts.words += 1;
        }
    }

    counts
}

impl WcTool {
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
}

impl Default for WcTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WcTool {
    fn name(&self) -> &str {
        "wc"
    }

    fn description(&self) -> &str {
        "Count lines, words, characters and bytes in a file, equivalent to the \
         `wc` shell command. One of the *_only flags restricts the result to a \
         single count (wc -l / -w / -m / -c)."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "wc",
            self.description(),
            vec![
                ToolParameter::string("path", "Path to the file"),
                ToolParameter::boolean("lines_only", "Return only the line count (wc -l)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("words_only", "Return only the word count (wc -w)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("chars_only", "Return only the character count (wc -m)")
                    .optional()
                    .with_default(false),
                ToolParameter::boolean("bytes_only", "Return only the byte count (wc -c)")
                    .optional()
                    .with_default(false),
            ],
        )
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let path = call.require_string("path")?;
        let content = fs::read_bytes(&self.resolve_path(&path)).await?;
        let counts = count_bytes(&content);

        let mut result =
            ToolResult::success(&call.id, self.name(), "").with_metadata("file", path.clone());

        let only_flags = [
            ("lines_only", "lines", counts.lines),
            ("words_only", "words", counts.words),
            ("chars_only", "chars", counts.chars),
            ("bytes_only", "bytes", counts.bytes),
        ];
        for (flag, key, value) in only_flags {
            if call.get_bool(flag).unwrap_or(false) {
                result = result.with_metadata(key, value);
                result.output = Some(format!("{} {}", value, path));
                return Ok(result);
            }
        }

        result.output = Some(format!(
            "{} {} {} {}",
            counts.lines, counts.words, counts.bytes, path
        ));
        Ok(result
            .with_metadata("lines", counts.lines)
            .with_metadata("words", counts.words)
            .with_metadata("chars", counts.chars)
            .with_metadata("bytes", counts.bytes))
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.require_string("path")?;
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

impl FileSystemTool for WcTool {
    fn working_directory(&self) -> &std::path::Path {
        &self.working_directory
    }
}
