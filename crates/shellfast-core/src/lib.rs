//! Core library for ShellFast
//!
//! Two halves, matching the system's data flow:
//!
//! - [`text`] — the pure text-processing engine: LCS line alignment,
//!   byte/set comparison and field tokenization. Synchronous, deterministic,
//!   no I/O.
//! - [`tools`] — the framework for exposing utilities to a host process as
//!   in-process calls: the [`tools::Tool`] trait, call/result/schema types
//!   and the registry.
//!
//! The utility implementations themselves live in the `shellfast-tools`
//! crate.

pub mod text;
pub mod tools;
