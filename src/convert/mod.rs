//! File-level conversion from resume markup to `.docx`.
//!
//! # Example
//!
//! ```no_run
//! use resumark::convert::{ConvertOptions, Converter};
//!
//! fn main() -> resumark::Result<()> {
//!     let converter = Converter::new(ConvertOptions::new().with_header_path("settings/header.txt"));
//!     let result = converter.convert("resume.md", "resume.docx")?;
//!     println!("{} ({} headings)", result.output_path.display(), result.stats.heading_count);
//!     Ok(())
//! }
//! ```

mod fence;
mod paths;

pub use fence::{strip_code_fence, CLOSING_FENCE, OPENING_FENCE};
pub use paths::{is_bare, resolve_output_path, tool_dir, tool_relative, DEFAULT_EXPORT_DIR};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{MarkupRenderer, RenderConfig};
use crate::render::{DocxWriter, RenderStats};

/// Default location of the running header text.
pub const DEFAULT_HEADER_PATH: &str = "settings/header.txt";

/// Options for file conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Rendering configuration
    pub config: RenderConfig,

    /// File holding the running header text
    pub header_path: PathBuf,

    /// Folder the output is placed in; `None` keeps the output name as given
    pub output_dir: Option<PathBuf>,

    /// Folder for bare output names when no `output_dir` is set
    pub default_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            config: RenderConfig::default(),
            header_path: PathBuf::from(DEFAULT_HEADER_PATH),
            output_dir: None,
            default_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options whose header file and export folder sit next to the executable.
    pub fn beside_tool() -> Self {
        Self {
            header_path: tool_relative(DEFAULT_HEADER_PATH),
            default_dir: tool_relative(DEFAULT_EXPORT_DIR),
            ..Self::default()
        }
    }

    /// Set the rendering configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the header text file.
    pub fn with_header_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_path = path.into();
        self
    }

    /// Set the output folder.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the folder used for bare output names.
    pub fn with_default_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_dir = dir.into();
        self
    }
}

/// Result of a file conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Where the `.docx` was written
    pub output_path: PathBuf,

    /// Counts from the rendered document
    pub stats: RenderStats,
}

/// Converts markup files into `.docx` files.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
    writer: DocxWriter,
}

impl Converter {
    /// Create a converter.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            writer: DocxWriter::new(),
        }
    }

    /// Use a specific docx writer.
    pub fn with_writer(mut self, writer: DocxWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Render a markup file into a document without writing anything.
    pub fn render_file(&self, input: impl AsRef<Path>) -> Result<Document> {
        let input = input.as_ref();
        let markup = fs::read_to_string(input)?;
        let header = load_header(&self.options.header_path)?;
        Ok(self.render_str(&markup, &header))
    }

    /// Render markup text with the given header text.
    pub fn render_str(&self, markup: &str, header_text: &str) -> Document {
        let markup = strip_code_fence(markup);
        MarkupRenderer::new(self.options.config.clone()).render(&markup, header_text)
    }

    /// Convert `input` into a `.docx` named by `output`.
    pub fn convert(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConvertResult> {
        let output_path = resolve_output_path(
            output.as_ref(),
            self.options.output_dir.as_deref(),
            &self.options.default_dir,
        )?;

        let doc = self.render_file(input)?;
        let stats = RenderStats::from_document(&doc);
        self.writer.write_to(&doc, &output_path)?;
        log::info!("Wrote {}", output_path.display());

        Ok(ConvertResult { output_path, stats })
    }
}

/// Read the running header text, trimmed.
pub fn load_header(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map(|text| text.trim().to_string())
        .map_err(|source| Error::Header {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ConvertOptions::new()
            .with_header_path("h.txt")
            .with_output_dir("out")
            .with_default_dir("exports");
        assert_eq!(options.header_path, PathBuf::from("h.txt"));
        assert_eq!(options.output_dir, Some(PathBuf::from("out")));
        assert_eq!(options.default_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_beside_tool_defaults() {
        let options = ConvertOptions::beside_tool();
        let dir = tool_dir();
        assert_eq!(options.header_path, dir.join("settings").join("header.txt"));
        assert_eq!(options.default_dir, dir.join(DEFAULT_EXPORT_DIR));
        assert!(options.output_dir.is_none());
    }

    #[test]
    fn test_missing_header_is_header_error() {
        let err = load_header("/nonexistent/header.txt").unwrap_err();
        assert!(matches!(err, Error::Header { .. }));
        assert!(err.to_string().contains("/nonexistent/header.txt"));
    }

    #[test]
    fn test_render_str_strips_fence() {
        let converter = Converter::default();
        let doc = converter.render_str("```markdown\n# Jane\n```", "");
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.title().as_deref(), Some("Jane"));
    }
}
