//! Inner join of two line sequences on a key field

use std::collections::HashMap;

use super::fields::field_at;

/// Join two line sequences on the given 1-based key fields.
///
/// Builds a key index over `b`, then emits one row per matching pair as
/// `a_line + delimiter + b_line`. Inner-join semantics only: an `a` line
/// whose key has no match in `b` contributes nothing. Output rows follow
/// `a`'s input order, then `b`'s input order among lines sharing a key.
pub fn join_on(
    a: &[String],
    b: &[String],
    field_a: usize,
    field_b: usize,
    delimiter: Option<char>,
) -> Vec<String> {
    let joiner = delimiter.unwrap_or(' ');

    let mut index: HashMap<&str, Vec<&str>> = HashMap::new();
    for line in b {
        index
            .entry(field_at(line, delimiter, field_b))
            .or_default()
            .push(line);
    }

    let mut rows = Vec::new();
    for line in a {
        let key = field_at(line, delimiter, field_a);
        if let Some(matches) = index.get(key) {
            for other in matches {
                rows.push(format!("{}{}{}", line, joiner, other));
            }
        }
    }

    rows
}
