//! Plain text rendering of the document model.

use crate::model::{Block, Document};

/// Convert a document to plain text.
///
/// List items are prefixed with `- ` and table cells are tab-separated.
/// The page header, when set, comes first.
pub fn to_text(doc: &Document) -> String {
    let mut lines = Vec::new();

    if let Some(header) = &doc.header {
        lines.push(header.plain_text());
    }

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) if p.is_list_item() => lines.push(format!("- {}", p.plain_text())),
            Block::Rule => {}
            other => lines.push(other.plain_text()),
        }
    }

    lines.join("\n").trim().to_string()
}
