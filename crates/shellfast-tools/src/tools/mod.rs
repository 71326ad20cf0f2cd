//! Tool implementations, grouped by command family
//!
//! Only the text-processing family lives in-repo; the filesystem, process,
//! network and system-info families of the original package are OS-call
//! plumbing that hosts wire up separately.

pub mod text;
