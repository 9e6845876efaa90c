//! # resumark
//!
//! Resume markup to Word document renderer.
//!
//! This library reads a small Markdown-like resume dialect and produces a
//! styled `.docx` file: letter page, tight spacing, highlighted tables and
//! an employment history section whose job blocks stay on one page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumark::{render_markup, render};
//!
//! fn main() -> resumark::Result<()> {
//!     let doc = render_markup("# Jane Doe\n---\n## SKILLS\n- Rust", "jane@example.com");
//!     render::write_docx(&doc, "resume.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Markup
//!
//! - `#` to `######` headings; level 2 `EMPLOYMENT HISTORY` groups job blocks
//! - `---` horizontal rules; lines before the first rule are centered
//! - `- ` bullet items and `|` pipe tables
//! - `**bold**`, `*italic*` and `[text](url)` inline spans

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{strip_code_fence, ConvertOptions, ConvertResult, Converter};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, CellStyle, Document, Heading, PageGeometry, Paragraph, ParagraphStyle, Span,
    Table, TableCell, TableRow, TextDefaults,
};
pub use parser::{DocumentBuilder, InlineSpanFormatter, MarkupRenderer, ModelBuilder, RenderConfig};
pub use render::{DocxWriter, JsonFormat, RenderStats};

use std::path::Path;

/// Render markup text with the default configuration.
///
/// # Example
///
/// ```
/// use resumark::render_markup;
///
/// let doc = render_markup("# Jane Doe\n---\nHello", "");
/// assert_eq!(doc.title().as_deref(), Some("Jane Doe"));
/// assert_eq!(doc.block_count(), 3);
/// ```
pub fn render_markup(markup: &str, header_text: &str) -> Document {
    MarkupRenderer::default().render(markup, header_text)
}

/// Render markup text into `.docx` bytes with the default configuration.
pub fn markup_to_docx(markup: &str, header_text: &str) -> Result<Vec<u8>> {
    render::to_docx(&render_markup(markup, header_text))
}

/// Convert a markup file into a `.docx` file.
///
/// The header text is read from `header_path`; the output path is resolved
/// the same way as [`Converter::convert`].
///
/// # Example
///
/// ```no_run
/// use resumark::convert_file;
///
/// let result = convert_file("resume.md", "resume.docx", "settings/header.txt").unwrap();
/// println!("Saved {}", result.output_path.display());
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>, H: AsRef<Path>>(
    input: P,
    output: Q,
    header_path: H,
) -> Result<ConvertResult> {
    let options = ConvertOptions::new().with_header_path(header_path.as_ref());
    Converter::new(options).convert(input, output)
}

/// Builder for rendering resume markup.
///
/// # Example
///
/// ```no_run
/// use resumark::Resumark;
///
/// let bytes = Resumark::new()
///     .with_font("Calibri")
///     .with_font_size(10.5)
///     .with_header_text("Jane Doe | jane@example.com")
///     .render("# Jane Doe\n---\n## SKILLS\n- Rust")
///     .to_docx()?;
/// # Ok::<(), resumark::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resumark {
    config: RenderConfig,
    header_text: String,
}

impl Resumark {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole rendering configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the body font.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.config = self.config.with_font(font);
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, size_pt: f32) -> Self {
        self.config = self.config.with_font_size(size_pt);
        self
    }

    /// Set page size and margins.
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.config = self.config.with_page(page);
        self
    }

    /// Set the running header text.
    pub fn with_header_text(mut self, text: impl Into<String>) -> Self {
        self.header_text = text.into();
        self
    }

    /// Read the running header text from a file.
    pub fn with_header_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.header_text = convert::load_header(path)?;
        Ok(self)
    }

    /// Render markup text. A surrounding code fence is stripped first.
    pub fn render(self, markup: &str) -> ResumarkResult {
        let markup = strip_code_fence(markup);
        let document = MarkupRenderer::new(self.config).render(&markup, &self.header_text);
        ResumarkResult { document }
    }

    /// Render a markup file.
    pub fn render_file<P: AsRef<Path>>(self, path: P) -> Result<ResumarkResult> {
        let markup = std::fs::read_to_string(path)?;
        Ok(self.render(&markup))
    }
}

/// A rendered resume.
#[derive(Debug, Clone)]
pub struct ResumarkResult {
    /// The rendered document
    pub document: Document,
}

impl ResumarkResult {
    /// Serialize to `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document)
    }

    /// Write a `.docx` file.
    pub fn write_docx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::write_docx(&self.document, path)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Collect statistics.
    pub fn stats(&self) -> RenderStats {
        RenderStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_applies_config() {
        let result = Resumark::new()
            .with_font("Calibri")
            .with_font_size(10.0)
            .with_header_text("  Jane Doe  ")
            .render("Hello");

        let doc = result.document();
        assert_eq!(doc.defaults.font, "Calibri");
        assert_eq!(doc.defaults.size_pt, 10.0);
        assert_eq!(doc.header.as_ref().map(|h| h.plain_text()).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_builder_strips_code_fence() {
        let result = Resumark::new().render("```markdown\n# Jane\n```");
        assert_eq!(result.document().block_count(), 1);
    }

    #[test]
    fn test_builder_missing_header_file() {
        let result = Resumark::new().with_header_file("/nonexistent/header.txt");
        assert!(matches!(result, Err(Error::Header { .. })));
    }

    #[test]
    fn test_result_outputs() {
        let result = Resumark::new().render("# Jane\n---\n- Rust");
        assert_eq!(result.to_text(), "Jane\n- Rust");
        assert_eq!(result.stats().list_item_count, 1);
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("\"rule\""));
        assert!(result.to_docx().unwrap().starts_with(b"PK"));
    }

    #[test]
    fn test_markup_to_docx() {
        let bytes = markup_to_docx("# Jane", "").unwrap();
        assert!(bytes.len() > 100);
    }
}
