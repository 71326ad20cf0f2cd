//! Stable keyed line sort

use std::cmp::Ordering;

use super::fields::field_at;

/// Options for [`sort_by_key`].
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// Reverse the order after sorting
    pub reverse: bool,
    /// Compare keys as floating-point numbers.
    ///
    /// A pair where either key fails to parse falls back to whole-line
    /// lexicographic comparison. This silently mixes numeric and lexical
    /// order when keys are heterogeneous (not a total order); it is kept as
    /// an explicit compatibility policy, not an accident.
    pub numeric: bool,
    /// Collapse consecutive duplicate lines after sorting (and after
    /// reversal), never before
    pub unique: bool,
    /// 1-based key field; 0 sorts on the whole line
    pub key: usize,
    /// Field separator for key extraction; `None` splits on whitespace runs
    pub separator: Option<char>,
    /// Compare keys case-insensitively
    pub ignore_case: bool,
}

/// Stable sort of lines by an extracted key.
///
/// The input is untouched; a newly ordered copy is returned. Lines with
/// equal keys keep their input order.
pub fn sort_by_key(lines: &[String], opts: &SortOptions) -> Vec<String> {
    let key = opts.key;
    let separator = opts.separator;
    let mut sorted = lines.to_vec();

    if opts.numeric {
        sorted.sort_by(|a, b| {
            let ka = key_of(a, key, separator).parse::<f64>();
            let kb = key_of(b, key, separator).parse::<f64>();
            match (ka, kb) {
                (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => a.cmp(b),
            }
        });
    } else if opts.ignore_case {
        sorted.sort_by(|a, b| {
            key_of(a, key, separator)
                .to_lowercase()
                .cmp(&key_of(b, key, separator).to_lowercase())
        });
    } else {
        sorted.sort_by(|a, b| key_of(a, key, separator).cmp(key_of(b, key, separator)));
    }

    if opts.reverse {
        sorted.reverse();
    }

    if opts.unique {
        sorted.dedup();
    }

    sorted
}

fn key_of<'a>(line: &'a str, key: usize, separator: Option<char>) -> &'a str {
    if key == 0 {
        line
    } else {
        field_at(line, separator, key)
    }
}
