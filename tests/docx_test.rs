//! Integration tests for the docx writer: generated packages are reopened
//! with `zip` and their parts inspected.

use std::io::{Cursor, Read};

use chrono::{TimeZone, Utc};
use resumark::render::{to_docx, DocxWriter};
use resumark::{render_markup, Document};
use zip::ZipArchive;

fn open(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).expect("valid zip")
}

fn part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {}", name));
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

const RESUME: &str = "\
# Jane Doe
[Portfolio](https://jane.dev) | [GitHub](https://github.com/jane)
---
## SKILLS
- Rust & Go
| Cert | Year |
|---|---|
| AWS <SA> | 2023 |
## EMPLOYMENT HISTORY
**Acme** | 2020 - Current
- Built [the API](https://jane.dev)
";

#[test]
fn test_package_has_required_parts() {
    let mut archive = open(to_docx(&render_markup(RESUME, "jane@example.com")).unwrap());
    for name in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "word/document.xml",
        "word/styles.xml",
        "word/numbering.xml",
        "word/header1.xml",
        "word/_rels/document.xml.rels",
    ] {
        assert!(archive.by_name(name).is_ok(), "missing {}", name);
    }
}

#[test]
fn test_page_geometry_in_twips() {
    let mut archive = open(to_docx(&render_markup(RESUME, "")).unwrap());
    let xml = part(&mut archive, "word/document.xml");
    assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840"/>"#));
    assert!(xml.contains(r#"w:top="720" w:right="720" w:bottom="720" w:left="720""#));
}

#[test]
fn test_document_body_formatting() {
    let mut archive = open(to_docx(&render_markup(RESUME, "")).unwrap());
    let xml = part(&mut archive, "word/document.xml");

    assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/><w:jc w:val="center"/>"#));
    assert!(xml.contains(r#"<w:pStyle w:val="Heading2"/>"#));
    assert!(xml.contains(r#"<w:bottom w:val="single" w:sz="6" w:space="1" w:color="auto"/>"#));
    assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
    assert!(xml.contains("Rust &amp; Go"));
    assert!(xml.contains("AWS &lt;SA&gt;"));
    assert_eq!(xml.matches(r#"w:fill="C6EFCE""#).count(), 2);
    assert_eq!(xml.matches(r#"w:fill="FFFACD""#).count(), 2);
    assert!(xml.contains(r#"<w:color w:val="006100"/>"#));
    assert!(xml.contains("<w:keepNext/>"));
}

#[test]
fn test_hyperlink_relationships() {
    let mut archive = open(to_docx(&render_markup(RESUME, "")).unwrap());
    let rels = part(&mut archive, "word/_rels/document.xml.rels");
    let xml = part(&mut archive, "word/document.xml");

    // Two distinct urls, one used twice.
    assert_eq!(rels.matches(r#"TargetMode="External""#).count(), 2);
    assert!(rels.contains(r#"Target="https://jane.dev""#));
    assert!(rels.contains(r#"Target="https://github.com/jane""#));
    assert_eq!(xml.matches("<w:hyperlink ").count(), 3);
}

#[test]
fn test_no_header_part_without_header_text() {
    let mut archive = open(to_docx(&render_markup("# Jane", "  ")).unwrap());
    assert!(archive.by_name("word/header1.xml").is_err());
    let types = part(&mut archive, "[Content_Types].xml");
    assert!(!types.contains("header1.xml"));
    let xml = part(&mut archive, "word/document.xml");
    assert!(!xml.contains("headerReference"));
}

#[test]
fn test_header_links_get_own_relationships() {
    let doc = render_markup("# Jane", "[jane.dev](https://jane.dev)");
    let mut archive = open(to_docx(&doc).unwrap());
    let header = part(&mut archive, "word/header1.xml");
    let rels = part(&mut archive, "word/_rels/header1.xml.rels");
    assert!(header.contains(r#"<w:hyperlink r:id="rId1""#));
    assert!(rels.contains("https://jane.dev"));
}

#[test]
fn test_styles_and_core_properties() {
    let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let bytes = DocxWriter::new()
        .with_created(created)
        .to_bytes(&render_markup(RESUME, ""))
        .unwrap();
    let mut archive = open(bytes);

    let styles = part(&mut archive, "word/styles.xml");
    assert!(styles.contains(r#"w:ascii="Aptos""#));
    assert!(styles.contains(r#"<w:sz w:val="22"/>"#));
    assert!(styles.contains(r#"w:styleId="TableGrid""#));

    let core = part(&mut archive, "docProps/core.xml");
    assert!(core.contains("<dc:title>Jane Doe</dc:title>"));
    assert!(core.contains("2025-01-02T03:04:05Z"));
}

#[test]
fn test_fixed_timestamp_is_reproducible() {
    let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let writer = DocxWriter::new().with_created(created);
    let doc = render_markup(RESUME, "jane@example.com");
    assert_eq!(writer.to_bytes(&doc).unwrap(), writer.to_bytes(&doc).unwrap());
}

#[test]
fn test_empty_document_is_valid_package() {
    let mut archive = open(to_docx(&Document::new()).unwrap());
    let xml = part(&mut archive, "word/document.xml");
    assert!(xml.contains("<w:body><w:sectPr>"));
}

#[test]
fn test_write_docx_creates_parents() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("resume.docx");
    resumark::render::write_docx(&render_markup(RESUME, ""), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
