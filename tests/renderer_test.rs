//! Integration tests for the markup renderer.

use resumark::model::{Alignment, Heading, PageGeometry, Paragraph, Span, Table, TextDefaults};
use resumark::parser::{DocumentBuilder, MarkupRenderer, RenderConfig};
use resumark::{render_markup, Block};

/// Builder call, as seen by a fake sink.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Page(PageGeometry),
    Defaults(TextDefaults),
    Header(Paragraph),
    Heading(Heading),
    Paragraph(Paragraph),
    Table(Table),
    Rule,
}

/// Records every builder call in order.
#[derive(Debug, Default)]
struct RecordingBuilder {
    calls: Vec<Call>,
}

impl RecordingBuilder {
    fn body(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::Page(_) | Call::Defaults(_) | Call::Header(_)))
            .collect()
    }
}

impl DocumentBuilder for RecordingBuilder {
    fn set_page_geometry(&mut self, page: PageGeometry) {
        self.calls.push(Call::Page(page));
    }

    fn set_defaults(&mut self, defaults: TextDefaults) {
        self.calls.push(Call::Defaults(defaults));
    }

    fn set_header(&mut self, header: Paragraph) {
        self.calls.push(Call::Header(header));
    }

    fn add_heading(&mut self, heading: Heading) {
        self.calls.push(Call::Heading(heading));
    }

    fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.calls.push(Call::Paragraph(paragraph));
    }

    fn add_table(&mut self, table: Table) {
        self.calls.push(Call::Table(table));
    }

    fn add_rule(&mut self) {
        self.calls.push(Call::Rule);
    }
}

fn record(markup: &str, header: &str) -> RecordingBuilder {
    let mut builder = RecordingBuilder::default();
    MarkupRenderer::default().render_into(markup, header, &mut builder);
    builder
}

const RESUME: &str = "\
# Jane Doe
Senior Engineer | [GitHub](https://github.com/jane)
---
## SKILLS
- **Rust**, Go
| Cert | Year |
|---|---|
| AWS SA | 2023 |
## EMPLOYMENT HISTORY
**Acme Corp** | 2020 - Current
- Led the *platform* team

- Cut costs 30%
---
## EDUCATION
BSc Computer Science
";

#[test]
fn test_document_settings_come_first() {
    let builder = record(RESUME, "jane@example.com");
    assert_eq!(builder.calls[0], Call::Page(PageGeometry::letter()));
    assert!(matches!(&builder.calls[1], Call::Defaults(d) if d.font == "Aptos" && d.size_pt == 11.0));
    match &builder.calls[2] {
        Call::Header(h) => {
            assert_eq!(h.plain_text(), "jane@example.com");
            assert_eq!(h.style.alignment, Alignment::Center);
        }
        other => panic!("expected header, got {:?}", other),
    }
}

#[test]
fn test_full_resume_call_sequence() {
    let builder = record(RESUME, "");
    let body = builder.body();

    let kinds: Vec<&str> = body
        .iter()
        .map(|c| match c {
            Call::Heading(_) => "heading",
            Call::Paragraph(p) if p.is_list_item() => "bullet",
            Call::Paragraph(_) => "paragraph",
            Call::Table(_) => "table",
            Call::Rule => "rule",
            _ => "setting",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "heading",   // Jane Doe
            "paragraph", // contact line
            "rule",
            "heading", // SKILLS
            "bullet",
            "table",
            "heading",   // EMPLOYMENT HISTORY
            "paragraph", // Acme Corp
            "bullet",
            "bullet",
            "rule",
            "heading",   // EDUCATION
            "paragraph", // BSc
        ]
    );
}

#[test]
fn test_preamble_is_centered() {
    let builder = record(RESUME, "");
    let body = builder.body();
    assert!(matches!(body[0], Call::Heading(h) if h.alignment == Alignment::Center));
    assert!(matches!(body[1], Call::Paragraph(p) if p.style.alignment == Alignment::Center));
    assert!(matches!(body[3], Call::Heading(h) if h.alignment == Alignment::Left));
}

#[test]
fn test_job_block_keep_with_next() {
    let builder = record(RESUME, "");
    let body = builder.body();
    let job: Vec<bool> = body[7..10]
        .iter()
        .map(|c| match c {
            Call::Paragraph(p) => p.style.keep_with_next,
            other => panic!("expected paragraph, got {:?}", other),
        })
        .collect();
    assert_eq!(job, vec![true, true, false]);

    // Outside the employment section nothing is kept together.
    assert!(matches!(body[4], Call::Paragraph(p) if !p.style.keep_with_next));
    assert!(matches!(body[12], Call::Paragraph(p) if !p.style.keep_with_next));
}

#[test]
fn test_table_cells_styled() {
    let builder = record(RESUME, "");
    let table = builder
        .body()
        .into_iter()
        .find_map(|c| match c {
            Call::Table(t) => Some(t.clone()),
            _ => None,
        })
        .expect("table");

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.header.plain_text(), "Cert\tYear");
    for cell in &table.header.cells {
        assert_eq!(cell.style.background.as_deref(), Some("C6EFCE"));
        assert_eq!(cell.style.color.as_deref(), Some("006100"));
    }
    for cell in &table.rows[0].cells {
        assert_eq!(cell.style.background.as_deref(), Some("FFFACD"));
        assert_eq!(cell.style.color.as_deref(), Some("000000"));
    }
}

#[test]
fn test_inline_spans_reach_builder() {
    let builder = record(RESUME, "");
    let body = builder.body();
    match body[1] {
        Call::Paragraph(p) => assert_eq!(
            p.content,
            vec![
                Span::plain("Senior Engineer | "),
                Span::link("GitHub", "https://github.com/jane"),
            ]
        ),
        other => panic!("expected paragraph, got {:?}", other),
    }
    match body[4] {
        Call::Paragraph(p) => assert_eq!(p.content, vec![Span::bold("Rust"), Span::plain(", Go")]),
        other => panic!("expected bullet, got {:?}", other),
    }
}

#[test]
fn test_custom_config_flows_through() {
    let config = RenderConfig::new()
        .with_font("Calibri")
        .with_heading_style(2, "SectionTitle")
        .with_header_palette("DDEBF7", "1F4E78");
    let mut builder = RecordingBuilder::default();
    MarkupRenderer::new(config).render_into("---\n## SKILLS\n| a |\n|---|\n| b |", "", &mut builder);

    assert!(matches!(&builder.calls[1], Call::Defaults(d) if d.font == "Calibri"));
    let body = builder.body();
    assert!(matches!(body[1], Call::Heading(h) if h.style_id.as_deref() == Some("SectionTitle")));
    assert!(matches!(body[2], Call::Table(t)
        if t.header.cells[0].style.background.as_deref() == Some("DDEBF7")));
}

#[test]
fn test_model_builder_matches_recording() {
    let doc = render_markup(RESUME, "");
    let recorded = record(RESUME, "");
    assert_eq!(doc.block_count(), recorded.body().len());
    assert!(doc.blocks.iter().filter(|b| b.is_table()).count() == 1);
    assert_eq!(doc.blocks.iter().filter(|b| matches!(b, Block::Rule)).count(), 2);
}

#[test]
fn test_malformed_markup_never_fails() {
    for markup in ["", "\n\n", "|", "| a |", "****", "[x](", "#", "##", "---\n---\n---", "- "] {
        let doc = render_markup(markup, "");
        assert!(doc.block_count() <= 3, "{:?} produced {:?}", markup, doc.blocks);
    }
}

#[test]
fn test_four_line_table_three_columns() {
    let doc = render_markup(
        "---\n| Name | Issuer | Year |\n|---|---|---|\n| SA | AWS | 2023 |\n| CKA | CNCF | 2022 |",
        "",
    );
    let table = doc
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
        .expect("table");

    assert_eq!(table.column_count(), 3);
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows.iter().all(|r| r.cells.len() == 3));
    assert_eq!(table.rows[1].plain_text(), "CKA\tCNCF\t2022");
}
