//! Rendering statistics.

use serde::{Deserialize, Serialize};

use crate::model::{Block, Document, Span};

/// Counts collected from a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of body paragraphs, list items excluded
    pub paragraph_count: u32,

    /// Number of bullet list items
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of horizontal rules
    pub rule_count: u32,

    /// Number of hyperlinks, page header included
    pub link_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();

        if let Some(header) = &doc.header {
            stats.count_spans(&header.content);
        }

        for block in &doc.blocks {
            match block {
                Block::Heading(h) => {
                    stats.heading_count += 1;
                    stats.count_spans(&h.content);
                }
                Block::Paragraph(p) => {
                    if p.is_list_item() {
                        stats.list_item_count += 1;
                    } else {
                        stats.paragraph_count += 1;
                    }
                    stats.count_spans(&p.content);
                }
                Block::Table(t) => {
                    stats.table_count += 1;
                    for cell in t.all_rows().flat_map(|row| &row.cells) {
                        stats.count_spans(&cell.content);
                    }
                }
                Block::Rule => stats.rule_count += 1,
            }
        }

        stats
    }

    fn count_spans(&mut self, spans: &[Span]) {
        for span in spans {
            if span.is_link() {
                self.link_count += 1;
            }
            self.word_count += span.text().split_whitespace().count() as u32;
        }
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.list_item_count
            + self.table_count
            + self.rule_count
    }
}
