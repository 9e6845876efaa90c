//! Inline span recognition for bold, italic and link markup.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Span;

/// Bold, italic and link alternatives, tried in that order at each position.
static INLINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\*\*(?P<bold>.+?)\*\*|\*(?P<italic>.+?)\*|\[(?P<link_text>[^\]]+)\]\((?P<link_url>[^)]+)\)",
    )
    .expect("invalid inline span regex")
});

/// Splits a single line of markup into styled spans.
///
/// The formatter is total: text that does not form a complete span,
/// such as a lone `*`, is returned as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineSpanFormatter;

impl InlineSpanFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Format a line into spans.
    pub fn format(&self, line: &str) -> Vec<Span> {
        format_inline(line)
    }
}

/// Format a line into spans.
///
/// ```
/// use resumark::model::Span;
/// use resumark::parser::format_inline;
///
/// let spans = format_inline("**Bold** and *Italic*");
/// assert_eq!(
///     spans,
///     vec![Span::bold("Bold"), Span::plain(" and "), Span::italic("Italic")]
/// );
/// ```
pub fn format_inline(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = 0;

    for caps in INLINE_PATTERN.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > pos {
            spans.push(Span::plain(&line[pos..whole.start()]));
        }

        if let Some(bold) = caps.name("bold") {
            spans.push(Span::bold(bold.as_str()));
        } else if let Some(italic) = caps.name("italic") {
            spans.push(Span::italic(italic.as_str()));
        } else if let (Some(text), Some(url)) = (caps.name("link_text"), caps.name("link_url")) {
            spans.push(Span::link(text.as_str(), url.as_str()));
        }
        pos = whole.end();
    }

    if pos < line.len() {
        spans.push(Span::plain(&line[pos..]));
    }

    spans
}
