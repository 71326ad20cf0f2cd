//! Side-by-side merging of parallel line sequences

/// Merge corresponding lines from several sequences into rows.
///
/// Rows run to the longest input; a sequence that has run out contributes an
/// empty cell. Every row joins its cells with `delimiter`.
pub fn merge_columns(columns: &[Vec<String>], delimiter: &str) -> Vec<String> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        let row: Vec<&str> = columns
            .iter()
            .map(|column| column.get(i).map(String::as_str).unwrap_or(""))
            .collect();
        rows.push(row.join(delimiter));
    }

    rows
}
