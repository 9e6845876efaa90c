//! Style and numbering definitions.

use std::collections::BTreeMap;

use super::body::{HEADER_STYLE, HYPERLINK_STYLE, LIST_BULLET_STYLE, TABLE_STYLE};
use super::xml::{escape_attr, half_points, twips, NS_W, XML_DECLARATION};
use crate::model::{Block, Document, TextDefaults};

/// Numbering instance referenced by the bullet list style.
const BULLET_NUM_ID: u32 = 1;

/// Heading styles referenced by a document, with the level that first used each.
///
/// `Heading1` through `Heading3` are always present.
pub(super) fn heading_styles(doc: &Document) -> BTreeMap<String, u8> {
    let mut styles: BTreeMap<String, u8> =
        (1..=3u8).map(|level| (format!("Heading{}", level), level)).collect();
    for block in &doc.blocks {
        if let Block::Heading(h) = block {
            if let Some(id) = &h.style_id {
                styles.entry(id.clone()).or_insert(h.level);
            }
        }
    }
    styles
}

/// Heading font size by level, in points.
fn heading_size(level: u8, body_size: f32) -> f32 {
    match level {
        1 => 16.0,
        2 => 13.0,
        3 => 12.0,
        _ => body_size,
    }
}

/// Built-in style names Word recognizes.
fn heading_name(id: &str, level: u8) -> String {
    if id == format!("Heading{}", level) {
        format!("heading {}", level)
    } else {
        id.to_string()
    }
}

fn spacing(defaults: &TextDefaults) -> String {
    format!(
        r#"<w:spacing w:before="{}" w:after="{}" w:line="{}" w:lineRule="auto"/>"#,
        twips(defaults.space_before_pt),
        twips(defaults.space_after_pt),
        (defaults.line_spacing * 240.0).round() as i64
    )
}

fn fonts(font: &str) -> String {
    let font = escape_attr(font);
    format!(
        r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{0}" w:cs="{0}"/>"#,
        font
    )
}

/// Build `word/styles.xml`.
pub(super) fn styles_xml(doc: &Document) -> String {
    let defaults = &doc.defaults;
    let size = half_points(defaults.size_pt);
    let mut out = String::new();

    out.push_str(XML_DECLARATION);
    out.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, NS_W));

    out.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    out.push_str(&fonts(&defaults.font));
    out.push_str(&format!(
        r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/><w:lang w:val="en-US"/>"#,
        size
    ));
    out.push_str("</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr>");
    out.push_str(&spacing(defaults));
    out.push_str("</w:pPr></w:pPrDefault></w:docDefaults>");

    out.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/><w:pPr>"#);
    out.push_str(&spacing(defaults));
    out.push_str("</w:pPr><w:rPr>");
    out.push_str(&fonts(&defaults.font));
    out.push_str(&format!(r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size));
    out.push_str("</w:rPr></w:style>");

    out.push_str(r#"<w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont"><w:name w:val="Default Paragraph Font"/><w:uiPriority w:val="1"/><w:semiHidden/><w:unhideWhenUsed/></w:style>"#);

    for (id, level) in heading_styles(doc) {
        let heading_size = half_points(heading_size(level, defaults.size_pt));
        out.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="{}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:uiPriority w:val="9"/><w:qFormat/>"#,
            escape_attr(&id),
            escape_attr(&heading_name(&id, level))
        ));
        out.push_str(&format!(
            r#"<w:pPr><w:keepNext/><w:keepLines/><w:outlineLvl w:val="{}"/></w:pPr>"#,
            level.saturating_sub(1)
        ));
        out.push_str(&format!(
            r#"<w:rPr><w:b/><w:bCs/><w:sz w:val="{0}"/><w:szCs w:val="{0}"/></w:rPr></w:style>"#,
            heading_size
        ));
    }

    out.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:uiPriority w:val="99"/><w:unhideWhenUsed/><w:pPr><w:numPr><w:numId w:val="{}"/></w:numPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:style>"#,
        LIST_BULLET_STYLE, BULLET_NUM_ID
    ));

    out.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="header"/><w:basedOn w:val="Normal"/><w:uiPriority w:val="99"/><w:unhideWhenUsed/></w:style>"#,
        HEADER_STYLE
    ));

    out.push_str(&format!(
        r#"<w:style w:type="character" w:styleId="{}"><w:name w:val="Hyperlink"/><w:basedOn w:val="DefaultParagraphFont"/><w:uiPriority w:val="99"/><w:unhideWhenUsed/><w:rPr><w:color w:val="0563C1"/><w:u w:val="single"/></w:rPr></w:style>"#,
        HYPERLINK_STYLE
    ));

    out.push_str(r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:uiPriority w:val="99"/><w:semiHidden/><w:unhideWhenUsed/><w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style>"#);

    out.push_str(&format!(
        r#"<w:style w:type="table" w:styleId="{}"><w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/><w:uiPriority w:val="39"/><w:tblPr><w:tblBorders>"#,
        TABLE_STYLE
    ));
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        out.push_str(&format!(
            r#"<w:{} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            edge
        ));
    }
    out.push_str("</w:tblBorders></w:tblPr></w:style>");

    out.push_str("</w:styles>");
    out
}

/// Build `word/numbering.xml` with a single bullet list.
pub(super) fn numbering_xml() -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push_str(&format!(r#"<w:numbering xmlns:w="{}">"#, NS_W));
    out.push_str(r#"<w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/>"#);
    out.push_str(r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#8226;"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:lvl>"#);
    out.push_str("</w:abstractNum>");
    out.push_str(&format!(
        r#"<w:num w:numId="{}"><w:abstractNumId w:val="0"/></w:num>"#,
        BULLET_NUM_ID
    ));
    out.push_str("</w:numbering>");
    out
}
