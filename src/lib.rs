//! ShellFast — Unix shell utilities as direct in-process function calls.
//!
//! Instead of spawning `diff`, `grep` or `sort` subprocesses, ShellFast
//! implements the text-processing command family natively and exposes each
//! utility to the host process two ways:
//!
//! - as a typed [`Tool`] with a JSON schema, for hosts that dispatch calls
//!   dynamically through a [`ToolRegistry`] (see [`default_registry`]);
//! - as a flat async function (e.g. [`diff`], [`grep`], [`sort_file`]),
//!   mirroring the original package's single namespace, for direct embedding.
//!
//! The pure algorithms (LCS alignment, byte/set comparison, field
//! tokenization) live in [`text`] and never touch the filesystem; the tool
//! layer reads files and resolves paths against an explicit working
//! directory.
//!
//! ```no_run
//! # async fn demo() -> Result<(), shellfast::ToolError> {
//! let patch = shellfast::diff("old.txt", "new.txt", true).await?;
//! let sorted = shellfast::sort_file("data.txt", &shellfast::text::SortOptions {
//!     numeric: true,
//!     ..Default::default()
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub use shellfast_core::text;
pub use shellfast_core::tools::{
    Tool, ToolCall, ToolError, ToolRegistry, ToolResult, ToolSchema,
};
pub use shellfast_tools::{
    default_registry, default_tools, CatTool, CmpTool, CommTool, CutTool, DiffTool, EchoTool,
    GrepTool, HeadTool, JoinTool, PasteTool, SortTool, TailTool, WcTool, TEXT_CATEGORY,
};

mod api;

pub use api::{cat, cmp, comm, cut, diff, echo, grep, head, join, paste, sort_file, tail, wc};
