//! DOCX package writer.
//!
//! Serializes a [`Document`] as raw WordprocessingML parts and packs them
//! into a zip archive that Word and LibreOffice open directly.

mod body;
mod package;
mod rels;
mod styles;
mod xml;

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::model::Document;
use rels::Relationships;

const HEADER_PART: &str = "header1.xml";

/// Writes documents as `.docx` packages.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    /// Creation timestamp recorded in the core properties; `None` uses now
    pub created: Option<DateTime<Utc>>,
}

impl DocxWriter {
    /// Create a writer that stamps the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the creation timestamp, for reproducible output.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Serialize a document into package bytes.
    pub fn to_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut document_rels = Relationships::document();
        let mut header_rels = Relationships::new();

        let header = match &doc.header {
            Some(paragraph) => {
                let id = document_rels.add_header(HEADER_PART);
                let xml = body::header_xml(paragraph, &doc.defaults.font, &mut header_rels);
                Some((id, xml))
            }
            None => None,
        };
        let header_id = header.as_ref().map(|(id, _)| id.as_str());
        let document_xml = body::document_xml(doc, &mut document_rels, header_id);

        let created = self.created.unwrap_or_else(Utc::now);
        let title = doc.title();

        let mut parts: Vec<(String, String)> = vec![
            (
                "[Content_Types].xml".into(),
                package::content_types_xml(header.is_some()),
            ),
            ("_rels/.rels".into(), Relationships::package().to_xml()),
            (
                "docProps/core.xml".into(),
                package::core_xml(title.as_deref(), created),
            ),
            ("docProps/app.xml".into(), package::app_xml()),
            ("word/document.xml".into(), document_xml),
            ("word/styles.xml".into(), styles::styles_xml(doc)),
            ("word/numbering.xml".into(), styles::numbering_xml()),
            (
                "word/_rels/document.xml.rels".into(),
                document_rels.to_xml(),
            ),
        ];
        if let Some((_, xml)) = header {
            parts.push((format!("word/{}", HEADER_PART), xml));
            if !header_rels.is_empty() {
                parts.push((
                    format!("word/_rels/{}.rels", HEADER_PART),
                    header_rels.to_xml(),
                ));
            }
        }

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, xml) in &parts {
            log::debug!("Writing part {} ({} bytes)", name, xml.len());
            zip.start_file(name.as_str(), options)?;
            zip.write_all(xml.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Serialize a document and write it to `path`, creating parent directories.
    pub fn write_to(&self, doc: &Document, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes(doc)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;
        log::debug!("Saved {}", path.display());
        Ok(())
    }
}

/// Serialize a document into `.docx` bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    DocxWriter::new().to_bytes(doc)
}

/// Write a document as a `.docx` file.
pub fn write_docx(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    DocxWriter::new().write_to(doc, path)
}
