use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?[\s\-:|]+\|?$").expect("separator pattern"));

/// Pipe-delimited table row syntax.
///
/// A pipe row only becomes tabular when the *next* line is a separator row;
/// the builder does that one-line look-ahead.
pub struct TableRow;

impl TableRow {
    pub const DELIMITER: char = '|';

    /// Whether the line contains a pipe and so is a table-row candidate.
    pub fn is_candidate(line: &str) -> bool {
        line.contains(Self::DELIMITER)
    }

    /// Whether the line is a header/body separator (`|---|---|` style).
    ///
    /// Must contain a hyphen so a row of empty cells never counts.
    pub fn is_separator(line: &str) -> bool {
        let t = line.trim();
        t.contains('-') && SEPARATOR_RE.is_match(t)
    }

    /// Splits a row into trimmed cells, dropping the empty edge cells that
    /// leading/trailing pipes produce.
    pub fn cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::DELIMITER).unwrap_or(t);
        let t = t.strip_suffix(Self::DELIMITER).unwrap_or(t);
        t.split(Self::DELIMITER)
            .map(|c| c.trim().to_string())
            .collect()
    }
}
