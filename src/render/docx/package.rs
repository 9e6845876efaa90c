//! Package-level parts: content types and document properties.

use chrono::{DateTime, Utc};

use super::xml::{escape_text, XML_DECLARATION};

const CT_MAIN: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const CT_NUMBERING: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
const CT_HEADER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// Build `[Content_Types].xml`.
pub(super) fn content_types_xml(with_header: bool) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    out.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    out.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let mut overrides = vec![
        ("/word/document.xml", CT_MAIN),
        ("/word/styles.xml", CT_STYLES),
        ("/word/numbering.xml", CT_NUMBERING),
    ];
    if with_header {
        overrides.push(("/word/header1.xml", CT_HEADER));
    }
    overrides.push(("/docProps/core.xml", CT_CORE));
    overrides.push(("/docProps/app.xml", CT_APP));

    for (part, content_type) in overrides {
        out.push_str(&format!(
            r#"<Override PartName="{}" ContentType="{}"/>"#,
            part, content_type
        ));
    }
    out.push_str("</Types>");
    out
}

/// Build `docProps/core.xml`.
pub(super) fn core_xml(title: Option<&str>, created: DateTime<Utc>) -> String {
    let stamp = created.format("%Y-%m-%dT%H:%M:%SZ");
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    if let Some(title) = title {
        out.push_str(&format!("<dc:title>{}</dc:title>", escape_text(title)));
    }
    out.push_str(&format!(
        "<dc:creator>{}</dc:creator>",
        env!("CARGO_PKG_NAME")
    ));
    out.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{0}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{0}</dcterms:modified>"#,
        stamp
    ));
    out.push_str("</cp:coreProperties>");
    out
}

/// Build `docProps/app.xml`.
pub(super) fn app_xml() -> String {
    format!(
        r#"{}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>{} {}</Application></Properties>"#,
        XML_DECLARATION,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_header_override_only_when_present() {
        assert!(content_types_xml(true).contains("/word/header1.xml"));
        assert!(!content_types_xml(false).contains("/word/header1.xml"));
    }

    #[test]
    fn test_core_properties() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let xml = core_xml(Some("Jane & Co"), created);
        assert!(xml.contains("<dc:title>Jane &amp; Co</dc:title>"));
        assert!(xml.contains("2024-03-01T12:30:00Z"));
    }
}
