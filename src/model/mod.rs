//! Document model types for rendered resumes.
//!
//! This module defines the intermediate representation that sits between
//! the markup renderer and the output writers. The model knows nothing
//! about OOXML; the docx writer is only one consumer of it.

mod block;
mod document;
mod paragraph;
mod table;

pub use block::{Block, Heading};
pub use document::{Document, PageGeometry, TextDefaults};
pub use paragraph::{Alignment, ListMarker, Paragraph, ParagraphStyle, Span};
pub use table::{CellStyle, Table, TableCell, TableRow};
