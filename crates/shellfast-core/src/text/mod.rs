//! Pure text-processing engine
//!
//! Everything in this module is a synchronous, deterministic function over
//! fully materialized in-memory line or byte sequences. The engine performs
//! no I/O and holds no state; reading files into sequences is the tool
//! layer's job. Memory is O(n*m) for alignment and O(total lines) for the
//! field operations, so callers with very large inputs must chunk before
//! calling in here.

mod align;
mod compare;
mod error;
mod fields;
mod join;
mod paste;
mod sort;

pub use align::{align, render, DiffFormat, EditOp, EditScript};
pub use compare::{byte_compare, set_compare, ByteComparison, SetComparison};
pub use error::TextError;
pub use fields::{extract_fields, field_at, split_fields, FieldSpec};
pub use join::join_on;
pub use paste::merge_columns;
pub use sort::{sort_by_key, SortOptions};
