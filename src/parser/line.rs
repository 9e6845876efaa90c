//! Line classification for the markup dialect.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("invalid heading regex"));

/// Marker for a horizontal rule line.
pub const RULE_MARKER: &str = "---";

/// Prefix of a table row.
pub const TABLE_MARKER: char = '|';

/// Prefix of a bullet list item.
pub const BULLET_MARKER: &str = "- ";

/// What a single trimmed line of markup represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// A lone `---`
    Rule,
    /// `#` markers, whitespace, then text
    Heading {
        /// Number of `#` characters (1-6)
        level: u8,
        /// Heading text, trimmed
        text: &'a str,
    },
    /// Line starting with `|`
    TableRow,
    /// Line starting with `- `
    ListItem {
        /// Item text with the marker stripped
        text: &'a str,
    },
    /// Anything else
    Text,
}

/// Classify a line. The line is trimmed before matching; first rule wins.
pub fn classify(line: &str) -> LineKind<'_> {
    let stripped = line.trim();

    if stripped.is_empty() {
        return LineKind::Blank;
    }
    if stripped == RULE_MARKER {
        return LineKind::Rule;
    }
    if let Some((level, text)) = parse_heading(stripped) {
        return LineKind::Heading { level, text };
    }
    if stripped.starts_with(TABLE_MARKER) {
        return LineKind::TableRow;
    }
    if let Some(text) = parse_bullet(stripped) {
        return LineKind::ListItem { text };
    }
    LineKind::Text
}

/// Parse a heading line into its level and trimmed text.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let caps = HEADING_PATTERN.captures(line)?;
    let level = caps.get(1)?.as_str().len() as u8;
    let text = caps.get(2)?.as_str().trim();
    Some((level, text))
}

/// Strip the bullet marker from a trimmed line.
pub fn parse_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_MARKER).map(str::trim)
}

/// Check whether a raw line starts a table row.
pub fn is_table_row(line: &str) -> bool {
    line.trim().starts_with(TABLE_MARKER)
}

/// Split a table row into trimmed cell texts.
///
/// Outer pipes are stripped first, so `| a | b |` yields `["a", "b"]`.
pub fn split_cells(line: &str) -> Vec<&str> {
    line.trim()
        .trim_matches(TABLE_MARKER)
        .split(TABLE_MARKER)
        .map(str::trim)
        .collect()
}
