//! Field specifications and line tokenization

use std::collections::BTreeSet;

use super::error::TextError;

/// A parsed set of 1-based field indices.
///
/// Parsed from comma-separated integers and inclusive ranges, e.g.
/// `"1,3-5"` selects fields {1, 3, 4, 5}. Duplicates collapse and iteration
/// always runs in ascending index order regardless of how the spec was
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    indices: BTreeSet<usize>,
}

impl FieldSpec {
    /// Parse a field list such as `"2"`, `"1,3"` or `"1,3-5"`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidSpec`] when a token is not an integer or
    /// a well-formed ascending `a-b` range, or when any index is zero.
    pub fn parse(spec: &str) -> Result<Self, TextError> {
        let mut indices = BTreeSet::new();

        for token in spec.split(',') {
            let token = token.trim();
            if let Some((start, end)) = token.split_once('-') {
                let start = parse_index(start, spec)?;
                let end = parse_index(end, spec)?;
                if start > end {
                    return Err(TextError::InvalidSpec(spec.to_string()));
                }
                indices.extend(start..=end);
            } else {
                indices.insert(parse_index(token, spec)?);
            }
        }

        Ok(Self { indices })
    }

    /// Whether the given 1-based index is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn parse_index(token: &str, spec: &str) -> Result<usize, TextError> {
    match token.trim().parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err(TextError::InvalidSpec(spec.to_string())),
    }
}

/// Split a line into fields.
///
/// With no delimiter (or an explicit space) the line splits on runs of
/// whitespace and leading/trailing whitespace produces no empty edge fields.
/// Any other delimiter splits literally, preserving the empty field between
/// two consecutive delimiter characters.
pub fn split_fields(line: &str, delimiter: Option<char>) -> Vec<&str> {
    match delimiter {
        None | Some(' ') => line.split_whitespace().collect(),
        Some(delim) => line.split(delim).collect(),
    }
}

/// Read a single 1-based field from a line.
///
/// An index past the line's field count reads as the empty string, never an
/// error.
pub fn field_at(line: &str, delimiter: Option<char>, index: usize) -> &str {
    index
        .checked_sub(1)
        .and_then(|i| split_fields(line, delimiter).into_iter().nth(i))
        .unwrap_or("")
}

/// Extract the fields selected by `spec` from a line.
///
/// Fields are emitted in ascending index order and joined with the split
/// delimiter (a single space in whitespace mode). A selected index past the
/// line's field count is omitted from the output entirely, unlike a plain
/// field read which yields the empty string.
pub fn extract_fields(line: &str, delimiter: Option<char>, spec: &FieldSpec) -> String {
    let fields = split_fields(line, delimiter);
    let joiner = delimiter.unwrap_or(' ');

    let mut out = String::new();
    let mut first = true;
    for index in spec.iter() {
        if index <= fields.len() {
            if !first {
                out.push(joiner);
            }
            out.push_str(fields[index - 1]);
            first = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singles_and_ranges() {
        let spec = FieldSpec::parse("1,3-5").unwrap();
        assert_eq!(spec.iter().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
    }

    #[test]
    fn duplicates_collapse_and_order_is_ascending() {
        let spec = FieldSpec::parse("5,1,3,3,2-4").unwrap();
        assert_eq!(spec.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_index_is_rejected() {
        assert!(matches!(
            FieldSpec::parse("0"),
            Err(TextError::InvalidSpec(_))
        ));
        assert!(FieldSpec::parse("0-2").is_err());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(FieldSpec::parse("a").is_err());
        assert!(FieldSpec::parse("1,").is_err());
        assert!(FieldSpec::parse("1-2-3").is_err());
        assert!(FieldSpec::parse("").is_err());
        assert!(FieldSpec::parse("-3").is_err());
    }

    #[test]
    fn descending_range_is_rejected() {
        assert!(FieldSpec::parse("5-3").is_err());
    }

    #[test]
    fn whitespace_split_collapses_runs() {
        assert_eq!(split_fields("  a b\t\tc  ", None), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a b  c", Some(' ')), vec!["a", "b", "c"]);
    }

    #[test]
    fn literal_split_preserves_empty_fields() {
        assert_eq!(split_fields("a::c", Some(':')), vec!["a", "", "c"]);
        assert_eq!(split_fields(":a:", Some(':')), vec!["", "a", ""]);
    }

    #[test]
    fn field_at_reads_empty_past_the_end() {
        assert_eq!(field_at("a:b", Some(':'), 2), "b");
        assert_eq!(field_at("a:b", Some(':'), 9), "");
        assert_eq!(field_at("one two", None, 1), "one");
    }

    #[test]
    fn extract_joins_with_the_split_delimiter() {
        let spec = FieldSpec::parse("1,3").unwrap();
        assert_eq!(extract_fields("a:b:c", Some(':'), &spec), "a:c");
    }

    #[test]
    fn extract_whitespace_mode_joins_with_single_space() {
        let spec = FieldSpec::parse("2").unwrap();
        assert_eq!(extract_fields("a b  c", None, &spec), "b");
        let spec = FieldSpec::parse("1,3").unwrap();
        assert_eq!(extract_fields("a b  c", None, &spec), "a c");
    }

    #[test]
    fn extract_omits_out_of_range_indices() {
        let spec = FieldSpec::parse("2,9").unwrap();
        assert_eq!(extract_fields("x:y", Some(':'), &spec), "y");
    }
}
