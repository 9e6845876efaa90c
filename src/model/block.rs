//! Block-level types.

use super::paragraph::plain_text;
use super::{Alignment, Paragraph, Span, Table};
use serde::{Deserialize, Serialize};

/// A content block in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading
    Heading(Heading),

    /// A paragraph or list item
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A horizontal rule / separator
    Rule,
}

impl Block {
    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a horizontal rule.
    pub fn is_rule(&self) -> bool {
        matches!(self, Block::Rule)
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading(h) => h.plain_text(),
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::Rule => String::new(),
        }
    }
}

/// A heading paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,

    /// Inline spans of the heading text
    pub content: Vec<Span>,

    /// Paragraph style id, `None` renders with the body style
    pub style_id: Option<String>,

    /// Text alignment
    pub alignment: Alignment,
}

impl Heading {
    /// Create a heading. The level is clamped to 1-6.
    pub fn new(level: u8, content: Vec<Span>) -> Self {
        Self {
            level: level.clamp(1, 6),
            content,
            style_id: None,
            alignment: Alignment::Left,
        }
    }

    /// Set the paragraph style id and return self.
    pub fn with_style(mut self, style_id: Option<String>) -> Self {
        self.style_id = style_id;
        self
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Get plain text content of the heading.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }
}
