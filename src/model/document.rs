//! Document-level types.

use super::{Block, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A rendered resume document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Physical page size and margins
    pub page: PageGeometry,

    /// Document-wide font and spacing
    pub defaults: TextDefaults,

    /// Running page header, repeated on every page
    pub header: Option<Paragraph>,

    /// Body blocks in order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document with Letter geometry.
    pub fn new() -> Self {
        Self {
            page: PageGeometry::default(),
            defaults: TextDefaults::default(),
            header: None,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Get the number of body blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no body blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of the first level-1 heading, used as the document title.
    pub fn title(&self) -> Option<String> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading(h) if h.level == 1 => Some(h.plain_text()),
            _ => None,
        })
    }

    /// Get plain text content of the entire body.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|block| !block.is_rule())
            .map(|block| block.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Page size and margins in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Top margin
    pub margin_top: f32,
    /// Right margin
    pub margin_right: f32,
    /// Bottom margin
    pub margin_bottom: f32,
    /// Left margin
    pub margin_left: f32,
}

impl PageGeometry {
    /// Create a geometry with four equal margins.
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin_top: margin,
            margin_right: margin,
            margin_bottom: margin,
            margin_left: margin,
        }
    }

    /// US Letter (8.5 x 11 inches) with half-inch margins.
    pub fn letter() -> Self {
        Self::from_inches(8.5, 11.0, 0.5)
    }

    /// Create a geometry from inch measurements.
    pub fn from_inches(width: f32, height: f32, margin: f32) -> Self {
        Self::new(width * 72.0, height * 72.0, margin * 72.0)
    }

    /// Usable width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// Document-wide text defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDefaults {
    /// Font family applied to every run
    pub font: String,
    /// Font size in points
    pub size_pt: f32,
    /// Space before paragraphs in points
    pub space_before_pt: f32,
    /// Space after paragraphs in points
    pub space_after_pt: f32,
    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: f32,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font: "Aptos".to_string(),
            size_pt: 11.0,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
            line_spacing: 1.0,
        }
    }
}
