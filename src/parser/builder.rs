//! Document builder seam between the markup renderer and a concrete document.

use crate::model::{Block, Document, Heading, PageGeometry, Paragraph, Table, TextDefaults};

/// Capability interface the markup renderer writes through.
///
/// The renderer never touches a document type directly, so any sink that
/// implements these calls can receive a rendered resume.
pub trait DocumentBuilder {
    /// Set page size and margins.
    fn set_page_geometry(&mut self, page: PageGeometry);

    /// Set document-wide font and spacing.
    fn set_defaults(&mut self, defaults: TextDefaults);

    /// Set the running page header.
    fn set_header(&mut self, header: Paragraph);

    /// Append a heading.
    fn add_heading(&mut self, heading: Heading);

    /// Append a paragraph or list item.
    fn add_paragraph(&mut self, paragraph: Paragraph);

    /// Append a table.
    fn add_table(&mut self, table: Table);

    /// Append a horizontal rule.
    fn add_rule(&mut self);
}

/// Builder that collects calls into a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    document: Document,
}

impl ModelBuilder {
    /// Create a builder around an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the finished document.
    pub fn finish(self) -> Document {
        self.document
    }
}

impl DocumentBuilder for ModelBuilder {
    fn set_page_geometry(&mut self, page: PageGeometry) {
        self.document.page = page;
    }

    fn set_defaults(&mut self, defaults: TextDefaults) {
        self.document.defaults = defaults;
    }

    fn set_header(&mut self, header: Paragraph) {
        self.document.header = Some(header);
    }

    fn add_heading(&mut self, heading: Heading) {
        self.document.add_block(Block::Heading(heading));
    }

    fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.document.add_paragraph(paragraph);
    }

    fn add_table(&mut self, table: Table) {
        self.document.add_table(table);
    }

    fn add_rule(&mut self) {
        self.document.add_block(Block::Rule);
    }
}
