//! Rendering module for writing documents to output formats.

mod docx;
mod json;
mod stats;
mod text;

pub use docx::{to_docx, write_docx, DocxWriter};
pub use json::{to_json, JsonFormat};
pub use stats::RenderStats;
pub use text::to_text;
