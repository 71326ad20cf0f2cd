//! Text-processing tools
//!
//! One tool per utility, each a thin argument-decoding and file-reading
//! shell around the pure engine in `shellfast_core::text`.

pub mod cat;
pub mod cmp;
pub mod comm;
pub mod cut;
pub mod diff;
pub mod echo;
pub mod grep;
pub mod head;
pub mod join;
pub mod paste;
pub mod sort;
pub mod tail;
pub mod wc;

pub use cat::CatTool;
pub use cmp::CmpTool;
pub use comm::CommTool;
pub use cut::CutTool;
pub use diff::DiffTool;
pub use echo::EchoTool;
pub use grep::GrepTool;
pub use head::HeadTool;
pub use join::JoinTool;
pub use paste::PasteTool;
pub use sort::SortTool;
pub use tail::TailTool;
pub use wc::WcTool;
