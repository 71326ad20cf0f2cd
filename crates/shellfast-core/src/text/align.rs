//! LCS-based line alignment and diff rendering

/// A single operation in an edit script.
///
/// Each variant carries the line text plus the 1-based position of that line
/// in the sequence it came from. A variant only has position fields for the
/// sides the line actually exists on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Line present in both sequences
    Equal {
        text: String,
        position_a: usize,
        position_b: usize,
    },
    /// Line present only in the second sequence
    Insert { text: String, position_b: usize },
    /// Line present only in the first sequence
    Delete { text: String, position_a: usize },
}

impl EditOp {
    /// The line text this operation carries.
    pub fn text(&self) -> &str {
        match self {
            EditOp::Equal { text, .. } | EditOp::Insert { text, .. } | EditOp::Delete { text, .. } => {
                text
            }
        }
    }

    /// Tag character used by the diff renderers: space, `+` or `-`.
    pub fn tag(&self) -> char {
        match self {
            EditOp::Equal { .. } => ' ',
            EditOp::Insert { .. } => '+',
            EditOp::Delete { .. } => '-',
        }
    }

    /// Whether this op keeps a line that is unchanged between the inputs.
    pub fn is_equal(&self) -> bool {
        matches!(self, EditOp::Equal { .. })
    }
}

/// An ordered sequence of [`EditOp`] transforming the first input into the
/// second.
///
/// Concatenating the Equal and Delete ops in order reproduces the first
/// input exactly; Equal and Insert reproduce the second.
pub type EditScript = Vec<EditOp>;

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffFormat {
    /// `---`/`+++` headers, then every op including unchanged lines
    Unified,
    /// Changed lines only, no headers
    Compact,
}

/// Align two line sequences and return the edit script between them.
///
/// Uses a dense dynamic-programming LCS table: O(n*m) time and memory in the
/// line counts. Both inputs must be fully materialized; callers with files
/// too large for that must chunk before calling, the engine does not degrade
/// to a sparser algorithm.
///
/// The backtrack prefers Insert over Delete when the table scores tie, which
/// makes the output deterministic on repeated or otherwise ambiguous lines.
pub fn align(a: &[String], b: &[String]) -> EditScript {
    let n = a.len();
    let m = b.len();

    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut script: EditScript = Vec::with_capacity(n.max(m));
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            script.push(EditOp::Equal {
                text: a[i - 1].clone(),
                position_a: i,
                position_b: j,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || dp[i][j - 1] >= dp[i - 1][j]) {
            script.push(EditOp::Insert {
                text: b[j - 1].clone(),
                position_b: j,
            });
            j -= 1;
        } else {
            script.push(EditOp::Delete {
                text: a[i - 1].clone(),
                position_a: i,
            });
            i -= 1;
        }
    }

    script.reverse();
    script
}

/// Render an edit script as diff text.
///
/// Unified output starts with `--- <label_a>` and `+++ <label_b>` header
/// lines and includes unchanged lines; compact output has no headers and
/// only the changed lines. Every rendered op is `<tag> <text>` with tag one
/// of space, `+`, `-`.
pub fn render(script: &[EditOp], format: DiffFormat, label_a: &str, label_b: &str) -> String {
    let mut out = String::new();

    if format == DiffFormat::Unified {
        out.push_str(&format!("--- {}\n", label_a));
        out.push_str(&format!("+++ {}\n", label_b));
    }

    for op in script {
        if format == DiffFormat::Unified || !op.is_equal() {
            out.push(op.tag());
            out.push(' ');
            out.push_str(op.text());
            out.push('\n');
        }
    }

    out
}
