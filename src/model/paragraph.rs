//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline spans in the paragraph
    pub content: Vec<Span>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph from a span sequence.
    pub fn with_spans(content: Vec<Span>) -> Self {
        Self {
            content,
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_spans(vec![Span::plain(text)])
    }

    /// Create a bullet list item from a span sequence.
    pub fn bullet(content: Vec<Span>) -> Self {
        let mut p = Self::with_spans(content);
        p.style.list_marker = Some(ListMarker::Bullet);
        p
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Set the keep-with-next hint and return self.
    pub fn keep_with_next(mut self, keep: bool) -> Self {
        self.style.keep_with_next = keep;
        self
    }

    /// Add a span to the paragraph.
    pub fn push(&mut self, span: Span) {
        self.content.push(span);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.style.list_marker.is_some()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenate the visible text of a span sequence.
pub(crate) fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// One styled fragment of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    /// Unstyled text
    PlainText {
        /// The text content
        text: String,
    },

    /// Bold text
    Bold {
        /// The text content
        text: String,
    },

    /// Italic text
    Italic {
        /// The text content
        text: String,
    },

    /// A hyperlink
    Link {
        /// Display text
        text: String,
        /// Target URL, carried verbatim
        url: String,
    },
}

impl Span {
    /// Create a plain text span.
    pub fn plain(text: impl Into<String>) -> Self {
        Span::PlainText { text: text.into() }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Span::Bold { text: text.into() }
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Span::Italic { text: text.into() }
    }

    /// Create a link span.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Visible text of the span, ignoring style.
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText { text }
            | Span::Bold { text }
            | Span::Italic { text }
            | Span::Link { text, .. } => text,
        }
    }

    /// Check if this span is a link.
    pub fn is_link(&self) -> bool {
        matches!(self, Span::Link { .. })
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// List marker if this is a list item
    pub list_marker: Option<ListMarker>,

    /// Discourage a page break between this paragraph and the next block
    pub keep_with_next: bool,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
}

/// List marker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMarker {
    /// Bulleted item (`- ` in the source)
    Bullet,
}
