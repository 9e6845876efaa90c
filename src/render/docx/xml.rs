//! XML helpers shared by the docx part writers.

/// Declaration that opens every part.
pub(super) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// WordprocessingML main namespace.
pub(super) const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace.
pub(super) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Package relationships namespace.
pub(super) const NS_PACKAGE_RELS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

/// Escape text content.
pub(super) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Escape attribute values (double-quoted).
pub(super) fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// XML 1.0 forbids most C0 control characters.
fn is_xml_char(c: char) -> bool {
    !matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Points to twentieths of a point.
pub(super) fn twips(points: f32) -> i64 {
    (points * 20.0).round() as i64
}

/// Points to half-points, the unit of `w:sz`.
pub(super) fn half_points(points: f32) -> i64 {
    (points * 2.0).round() as i64
}
