//! Part relationships.

use super::xml::{escape_attr, NS_PACKAGE_RELS, XML_DECLARATION};

const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_NUMBERING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const REL_HEADER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

#[derive(Debug, Clone)]
struct Relationship {
    id: String,
    kind: &'static str,
    target: String,
    external: bool,
}

/// Relationship table of a single part.
#[derive(Debug, Clone, Default)]
pub(super) struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Relationships of the package root.
    pub(super) fn package() -> Self {
        let mut rels = Self::new();
        rels.push(REL_OFFICE_DOCUMENT, "word/document.xml", false);
        rels.push(REL_CORE_PROPERTIES, "docProps/core.xml", false);
        rels.push(REL_EXTENDED_PROPERTIES, "docProps/app.xml", false);
        rels
    }

    /// Relationships of `word/document.xml` before any hyperlinks.
    pub(super) fn document() -> Self {
        let mut rels = Self::new();
        rels.push(REL_STYLES, "styles.xml", false);
        rels.push(REL_NUMBERING, "numbering.xml", false);
        rels
    }

    /// Add the header part and return its id.
    pub(super) fn add_header(&mut self, target: &str) -> String {
        self.push(REL_HEADER, target, false)
    }

    /// Add an external hyperlink and return its id.
    ///
    /// Repeated urls share one relationship.
    pub(super) fn add_hyperlink(&mut self, url: &str) -> String {
        if let Some(existing) = self
            .entries
            .iter()
            .find(|r| r.kind == REL_HYPERLINK && r.target == url)
        {
            return existing.id.clone();
        }
        self.push(REL_HYPERLINK, url, true)
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, kind: &'static str, target: &str, external: bool) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            kind,
            target: target.to_string(),
            external,
        });
        id
    }

    /// Serialize as a `.rels` part.
    pub(super) fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push_str(&format!(r#"<Relationships xmlns="{}">"#, NS_PACKAGE_RELS));
        for rel in &self.entries {
            out.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                rel.id,
                rel.kind,
                escape_attr(&rel.target)
            ));
            if rel.external {
                out.push_str(r#" TargetMode="External""#);
            }
            out.push_str("/>");
        }
        out.push_str("</Relationships>");
        out
    }
}
