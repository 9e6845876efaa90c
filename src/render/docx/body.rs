//! WordprocessingML for the document body and page header.

use super::rels::Relationships;
use super::xml::{escape_attr, escape_text, twips, NS_R, NS_W, XML_DECLARATION};
use crate::model::{
    Alignment, Block, Document, Heading, PageGeometry, Paragraph, Span, Table, TableCell,
};

/// Paragraph style applied to bullet list items.
pub(super) const LIST_BULLET_STYLE: &str = "ListBullet";

/// Table style applied to every table.
pub(super) const TABLE_STYLE: &str = "TableGrid";

/// Paragraph style of the page header.
pub(super) const HEADER_STYLE: &str = "Header";

/// Character style of hyperlink runs.
pub(super) const HYPERLINK_STYLE: &str = "Hyperlink";

/// Serializes model blocks into a part, registering hyperlinks as it goes.
pub(super) struct BodyWriter<'a> {
    font: &'a str,
    rels: &'a mut Relationships,
    out: String,
}

impl<'a> BodyWriter<'a> {
    pub(super) fn new(font: &'a str, rels: &'a mut Relationships) -> Self {
        Self {
            font,
            rels,
            out: String::new(),
        }
    }

    pub(super) fn finish(self) -> String {
        self.out
    }

    pub(super) fn write_block(&mut self, block: &Block, content_width: f32) {
        match block {
            Block::Heading(h) => self.write_heading(h),
            Block::Paragraph(p) => self.write_paragraph(p, None),
            Block::Table(t) => self.write_table(t, content_width),
            Block::Rule => self.write_rule(),
        }
    }

    fn write_heading(&mut self, heading: &Heading) {
        self.out.push_str("<w:p><w:pPr>");
        if let Some(style) = &heading.style_id {
            self.out
                .push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, escape_attr(style)));
        }
        push_alignment(&mut self.out, heading.alignment);
        self.out.push_str("</w:pPr>");
        self.write_runs(&heading.content, None);
        self.out.push_str("</w:p>");
    }

    pub(super) fn write_paragraph(&mut self, paragraph: &Paragraph, style: Option<&str>) {
        let style = style.or(paragraph.is_list_item().then_some(LIST_BULLET_STYLE));

        self.out.push_str("<w:p>");
        let mut props = String::new();
        if let Some(style) = style {
            props.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style));
        }
        if paragraph.style.keep_with_next {
            props.push_str("<w:keepNext/>");
        }
        push_alignment(&mut props, paragraph.style.alignment);
        if !props.is_empty() {
            self.out.push_str("<w:pPr>");
            self.out.push_str(&props);
            self.out.push_str("</w:pPr>");
        }
        self.write_runs(&paragraph.content, None);
        self.out.push_str("</w:p>");
    }

    fn write_rule(&mut self) {
        self.out.push_str(
            r#"<w:p><w:pPr><w:pBdr><w:bottom w:val="single" w:sz="6" w:space="1" w:color="auto"/></w:pBdr></w:pPr></w:p>"#,
        );
    }

    fn write_table(&mut self, table: &Table, content_width: f32) {
        let columns = table.column_count().max(1);
        let column_width = twips(content_width) / columns as i64;

        self.out.push_str("<w:tbl><w:tblPr>");
        self.out
            .push_str(&format!(r#"<w:tblStyle w:val="{}"/>"#, TABLE_STYLE));
        self.out.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);
        self.out.push_str(r#"<w:tblLook w:val="04A0"/>"#);
        self.out.push_str("</w:tblPr><w:tblGrid>");
        for _ in 0..columns {
            self.out
                .push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, column_width));
        }
        self.out.push_str("</w:tblGrid>");

        for row in table.all_rows() {
            self.out.push_str("<w:tr>");
            for cell in &row.cells {
                self.write_cell(cell, column_width);
            }
            self.out.push_str("</w:tr>");
        }
        self.out.push_str("</w:tbl>");
    }

    fn write_cell(&mut self, cell: &TableCell, width: i64) {
        self.out.push_str("<w:tc><w:tcPr>");
        self.out
            .push_str(&format!(r#"<w:tcW w:w="{}" w:type="dxa"/>"#, width));
        if let Some(fill) = &cell.style.background {
            self.out.push_str(&format!(
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                escape_attr(fill)
            ));
        }
        self.out.push_str("</w:tcPr><w:p>");
        self.write_runs(&cell.content, cell.style.color.as_deref());
        self.out.push_str("</w:p></w:tc>");
    }

    fn write_runs(&mut self, spans: &[Span], color: Option<&str>) {
        for span in spans {
            match span {
                Span::PlainText { text } => self.write_run(text, false, false, color),
                Span::Bold { text } => self.write_run(text, true, false, color),
                Span::Italic { text } => self.write_run(text, false, true, color),
                Span::Link { text, url } => self.write_hyperlink(text, url),
            }
        }
    }

    fn write_run(&mut self, text: &str, bold: bool, italic: bool, color: Option<&str>) {
        self.out.push_str("<w:r>");
        if bold || italic || color.is_some() {
            self.out.push_str("<w:rPr>");
            if bold {
                self.out.push_str("<w:b/>");
            }
            if italic {
                self.out.push_str("<w:i/>");
            }
            if let Some(color) = color {
                self.out
                    .push_str(&format!(r#"<w:color w:val="{}"/>"#, escape_attr(color)));
            }
            self.out.push_str("</w:rPr>");
        }
        push_text(&mut self.out, text);
        self.out.push_str("</w:r>");
    }

    fn write_hyperlink(&mut self, text: &str, url: &str) {
        let id = self.rels.add_hyperlink(url);
        let font = escape_attr(self.font);
        self.out
            .push_str(&format!(r#"<w:hyperlink r:id="{}" w:history="1"><w:r><w:rPr>"#, id));
        self.out
            .push_str(&format!(r#"<w:rStyle w:val="{}"/>"#, HYPERLINK_STYLE));
        self.out.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{0}" w:cs="{0}"/>"#,
            font
        ));
        self.out.push_str(r#"<w:u w:val="single"/></w:rPr>"#);
        push_text(&mut self.out, text);
        self.out.push_str("</w:r></w:hyperlink>");
    }
}

fn push_alignment(out: &mut String, alignment: Alignment) {
    if alignment == Alignment::Center {
        out.push_str(r#"<w:jc w:val="center"/>"#);
    }
}

fn push_text(out: &mut String, text: &str) {
    out.push_str(r#"<w:t xml:space="preserve">"#);
    out.push_str(&escape_text(text));
    out.push_str("</w:t>");
}

/// Build `word/document.xml`.
///
/// `header_id` is the relationship id of the header part, if any.
pub(super) fn document_xml(
    doc: &Document,
    rels: &mut Relationships,
    header_id: Option<&str>,
) -> String {
    let content_width = doc.page.content_width();
    let mut writer = BodyWriter::new(&doc.defaults.font, rels);
    for block in &doc.blocks {
        writer.write_block(block, content_width);
    }
    let body = writer.finish();

    let mut out = String::with_capacity(body.len() + 512);
    out.push_str(XML_DECLARATION);
    out.push_str(&format!(
        r#"<w:document xmlns:w="{}" xmlns:r="{}"><w:body>"#,
        NS_W, NS_R
    ));
    out.push_str(&body);
    out.push_str(&section_properties(&doc.page, header_id));
    out.push_str("</w:body></w:document>");
    out
}

/// Build `word/header1.xml` holding a single paragraph.
pub(super) fn header_xml(header: &Paragraph, font: &str, rels: &mut Relationships) -> String {
    let mut writer = BodyWriter::new(font, rels);
    writer.write_paragraph(header, Some(HEADER_STYLE));
    let body = writer.finish();

    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push_str(&format!(r#"<w:hdr xmlns:w="{}" xmlns:r="{}">"#, NS_W, NS_R));
    out.push_str(&body);
    out.push_str("</w:hdr>");
    out
}

fn section_properties(page: &PageGeometry, header_id: Option<&str>) -> String {
    let mut out = String::from("<w:sectPr>");
    if let Some(id) = header_id {
        out.push_str(&format!(
            r#"<w:headerReference w:type="default" r:id="{}"/>"#,
            id
        ));
    }
    out.push_str(&format!(
        r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
        twips(page.width),
        twips(page.height)
    ));
    out.push_str(&format!(
        r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="720" w:footer="720" w:gutter="0"/>"#,
        twips(page.margin_top),
        twips(page.margin_right),
        twips(page.margin_bottom),
        twips(page.margin_left)
    ));
    out.push_str("</w:sectPr>");
    out
}
