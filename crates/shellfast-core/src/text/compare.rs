//! Byte-level and set-level sequence comparison

use std::collections::BTreeSet;

/// Outcome of a byte-by-byte comparison of two streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteComparison {
    /// True when both streams have the same length and content
    pub identical: bool,
    /// 1-based offset of the first differing byte
    pub byte_offset: Option<u64>,
    /// 1-based line number containing the first differing byte, counted by
    /// newlines seen in the first stream
    pub line_number: Option<u64>,
}

impl ByteComparison {
    fn identical_streams() -> Self {
        Self {
            identical: true,
            byte_offset: None,
            line_number: None,
        }
    }

    fn differ_at(byte_offset: u64, line_number: u64) -> Self {
        Self {
            identical: false,
            byte_offset: Some(byte_offset),
            line_number: Some(line_number),
        }
    }
}

/// Compare two byte streams in lockstep.
///
/// Reports the 1-based offset and line number of the first mismatch. When
/// one stream is a strict prefix of the other, the difference is reported at
/// the offset one past the shorter stream's end. The identical verdict is
/// symmetric in the arguments; the reported line number is counted in the
/// first stream and is not.
pub fn byte_compare(a: &[u8], b: &[u8]) -> ByteComparison {
    let mut line_number: u64 = 1;
    let shared = a.len().min(b.len());

    for offset in 0..shared {
        if a[offset] == b'\n' {
            line_number += 1;
        }
        if a[offset] != b[offset] {
            return ByteComparison::differ_at(offset as u64 + 1, line_number);
        }
    }

    if a.len() != b.len() {
        return ByteComparison::differ_at(shared as u64 + 1, line_number);
    }

    ByteComparison::identical_streams()
}

/// Three-way split of two line sequences treated as sets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetComparison {
    /// Lines appearing only in the first sequence, value-ordered
    pub only_in_a: Vec<String>,
    /// Lines appearing only in the second sequence, value-ordered
    pub only_in_b: Vec<String>,
    /// Lines appearing in both, once each, value-ordered
    pub in_both: Vec<String>,
}

/// Compare two line sequences as sets.
///
/// Input ordering and duplicate counts are discarded; every output list is
/// sorted by line value. Like conventional `comm` usage this only gives a
/// faithful file comparison when the caller supplies sorted, deduplicated
/// input, but the set split itself is well-defined for any input.
pub fn set_compare(a: &[String], b: &[String]) -> SetComparison {
    let set_a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: BTreeSet<&str> = b.iter().map(String::as_str).collect();

    let mut result = SetComparison::default();
    for line in &set_a {
        if set_b.contains(line) {
            result.in_both.push((*line).to_string());
        } else {
            result.only_in_a.push((*line).to_string());
        }
    }
    for line in &set_b {
        if !set_a.contains(line) {
            result.only_in_b.push((*line).to_string());
        }
    }

    result
}
