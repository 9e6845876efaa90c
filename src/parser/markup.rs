//! Line-oriented markup renderer.
//!
//! The renderer walks the markup once, classifying each line and writing
//! headings, paragraphs, tables and rules through a [`DocumentBuilder`].
//! Two pieces of content are buffered before they are written:
//!
//! - job blocks: text lines inside the employment history section, written
//!   when a heading, a rule or the end of input closes them, with every
//!   paragraph but the last marked keep-with-next;
//! - tables: consecutive `|` rows, written when the next line is not a row
//!   or when the input ends.

use crate::model::{
    Alignment, CellStyle, Document, Heading, Paragraph, Span, Table, TableCell, TableRow,
};

use super::builder::{DocumentBuilder, ModelBuilder};
use super::inline::InlineSpanFormatter;
use super::line::{classify, is_table_row, parse_bullet, split_cells, LineKind, RULE_MARKER};
use super::options::RenderConfig;
use super::state::{Input, State};

/// Renders resume markup into a document.
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
    config: RenderConfig,
    formatter: InlineSpanFormatter,
}

impl MarkupRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            formatter: InlineSpanFormatter::new(),
        }
    }

    /// Get the renderer configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render markup and header text into a [`Document`].
    pub fn render(&self, markup: &str, header_text: &str) -> Document {
        let mut builder = ModelBuilder::new();
        self.render_into(markup, header_text, &mut builder);
        builder.finish()
    }

    /// Render markup and header text through an arbitrary builder.
    pub fn render_into<B: DocumentBuilder + ?Sized>(
        &self,
        markup: &str,
        header_text: &str,
        builder: &mut B,
    ) {
        builder.set_page_geometry(self.config.page);
        builder.set_defaults(self.config.text_defaults());
        if !header_text.trim().is_empty() {
            let header = Paragraph::with_spans(self.formatter.format(header_text.trim()))
                .align(Alignment::Center);
            builder.set_header(header);
        }

        let lines: Vec<&str> = markup.lines().collect();
        let mut pass = Pass::new(self, builder);
        let start = pass.render_preamble(&lines);
        pass.render_body(&lines, start);
    }
}

/// State for a single render call.
struct Pass<'r, 'a, B: ?Sized> {
    renderer: &'r MarkupRenderer,
    builder: &'r mut B,
    state: State,
    job_block: Vec<&'a str>,
    table_lines: Vec<&'a str>,
}

impl<'r, 'a, B: DocumentBuilder + ?Sized> Pass<'r, 'a, B> {
    fn new(renderer: &'r MarkupRenderer, builder: &'r mut B) -> Self {
        Self {
            renderer,
            builder,
            state: State::Default,
            job_block: Vec::new(),
            table_lines: Vec::new(),
        }
    }

    /// Render the centered name/contact block and the rules under it.
    ///
    /// Returns the index of the first line of the body.
    fn render_preamble(&mut self, lines: &[&'a str]) -> usize {
        let mut i = 0;
        while i < lines.len() && lines[i].trim() != RULE_MARKER {
            let stripped = lines[i].trim();
            match classify(stripped) {
                LineKind::Blank => {}
                LineKind::Heading { level, text } => {
                    let heading = self.heading(level, text).align(Alignment::Center);
                    self.builder.add_heading(heading);
                }
                _ => {
                    let paragraph = Paragraph::with_spans(self.format(stripped))
                        .align(Alignment::Center);
                    self.builder.add_paragraph(paragraph);
                }
            }
            i += 1;
        }

        while i < lines.len() && lines[i].trim() == RULE_MARKER {
            self.builder.add_rule();
            i += 1;
        }

        log::debug!("Preamble spans {} lines", i);
        i
    }

    fn render_body(&mut self, lines: &[&'a str], start: usize) {
        for i in start..lines.len() {
            let line = lines[i];
            match classify(line) {
                LineKind::Blank => {}
                LineKind::Rule => {
                    self.flush_job_block();
                    self.builder.add_rule();
                    self.state = self.state.next(Input::Other);
                }
                LineKind::Heading { level, text } => {
                    self.flush_job_block();
                    let heading = self.heading(level, text);
                    self.builder.add_heading(heading);
                    let input = if level == 2 && self.is_employment_heading(text) {
                        Input::EmploymentHeading
                    } else {
                        Input::OtherHeading
                    };
                    self.state = self.state.next(input);
                }
                LineKind::TableRow => {
                    self.table_lines.push(line);

                    if i + 1 == lines.len() {
                        log::debug!("Table closed by end of input");
                        self.flush_table();
                        self.state = self.state.next(Input::TableEnd);
                    } else if !is_table_row(lines[i + 1]) {
                        log::debug!("Table closed by line {}", i + 2);
                        self.flush_table();
                        self.state = self.state.next(Input::TableEnd);
                    } else {
                        self.state = self.state.next(Input::TableRow);
                    }
                }
                LineKind::ListItem { text } => {
                    if self.state.in_employment() {
                        self.job_block.push(line);
                    } else {
                        let item = Paragraph::bullet(self.format(text));
                        self.builder.add_paragraph(item);
                    }
                }
                LineKind::Text => {
                    if self.state.in_employment() {
                        self.job_block.push(line);
                    } else {
                        let paragraph = Paragraph::with_spans(self.format(line.trim()));
                        self.builder.add_paragraph(paragraph);
                    }
                }
            }
        }

        self.flush_job_block();
        if !self.table_lines.is_empty() {
            self.flush_table();
        }
    }

    fn heading(&self, level: u8, text: &str) -> Heading {
        let style = self.renderer.config.heading_style(level).map(String::from);
        Heading::new(level, self.format(text)).with_style(style)
    }

    fn is_employment_heading(&self, text: &str) -> bool {
        text.to_uppercase() == self.renderer.config.employment_heading.to_uppercase()
    }

    fn format(&self, text: &str) -> Vec<Span> {
        self.renderer.formatter.format(text)
    }

    fn flush_job_block(&mut self) {
        if self.job_block.is_empty() {
            return;
        }

        let formatter = self.renderer.formatter;
        let mut paragraphs: Vec<Paragraph> = self
            .job_block
            .drain(..)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match parse_bullet(line) {
                Some(text) => Paragraph::bullet(formatter.format(text)),
                None => Paragraph::with_spans(formatter.format(line)),
            })
            .collect();

        log::debug!("Flushing job block of {} paragraphs", paragraphs.len());

        let kept = paragraphs.len().saturating_sub(1);
        for paragraph in &mut paragraphs[..kept] {
            paragraph.style.keep_with_next = true;
        }
        for paragraph in paragraphs {
            self.builder.add_paragraph(paragraph);
        }
    }

    fn flush_table(&mut self) {
        let lines = std::mem::take(&mut self.table_lines);
        if lines.len() < 2 {
            log::debug!("Dropping table with {} line(s)", lines.len());
            return;
        }

        let config = &self.renderer.config;
        let header_style = config.header_cell_style();
        let data_style = config.data_cell_style();

        let row = |line: &str, style: &CellStyle| {
            TableRow::new(
                split_cells(line)
                    .into_iter()
                    .map(|text| TableCell::new(self.format(text)).with_style(style.clone()))
                    .collect(),
            )
        };

        let header = row(lines[0], &header_style);
        let rows = lines[2..].iter().map(|&line| row(line, &data_style)).collect();
        self.builder.add_table(Table::new(header, rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn render(markup: &str) -> Document {
        MarkupRenderer::default().render(markup, "")
    }

    fn paragraphs(doc: &Document) -> Vec<&Paragraph> {
        doc.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_preamble_is_centered() {
        let doc = render("# Jane Doe\njane@example.com\n---\n---\n## SKILLS\n- Rust");

        match &doc.blocks[0] {
            Block::Heading(h) => {
                assert_eq!(h.level, 1);
                assert_eq!(h.alignment, Alignment::Center);
                assert_eq!(h.style_id.as_deref(), Some("Heading1"));
            }
            other => panic!("expected heading, got {other:?}"),
        }
        match &doc.blocks[1] {
            Block::Paragraph(p) => assert_eq!(p.style.alignment, Alignment::Center),
            other => panic!("expected paragraph, got {other:?}"),
        }
        assert!(doc.blocks[2].is_rule());
        assert!(doc.blocks[3].is_rule());
        match &doc.blocks[5] {
            Block::Paragraph(p) => {
                assert!(p.is_list_item());
                assert_eq!(p.style.alignment, Alignment::Left);
                assert_eq!(p.content, vec![Span::plain("Rust")]);
            }
            other => panic!("expected list item, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_skipped() {
        let doc = render("---\n\nOne\n\n\nTwo\n");
        assert_eq!(doc.block_count(), 3);
    }

    #[test]
    fn test_heading_levels_and_styles() {
        let doc = render("---\n# A\n## B\n### C\n#### D\n##### E\n###### F");
        let headings: Vec<&Heading> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading(h) => Some(h),
                _ => None,
            })
            .collect();

        assert_eq!(headings.len(), 6);
        for (i, h) in headings.iter().enumerate() {
            assert_eq!(h.level as usize, i + 1);
        }
        assert_eq!(headings[2].style_id.as_deref(), Some("Heading3"));
        assert!(headings[3..].iter().all(|h| h.style_id.is_none()));
    }

    #[test]
    fn test_employment_block_keep_with_next() {
        let markup = "---\n## Employment History\n**Acme** | Engineer\n- Built things\n- Shipped things\n---\n## SKILLS\nRust";
        let doc = render(markup);
        let paras = paragraphs(&doc);

        assert_eq!(paras.len(), 4);
        assert!(paras[0].style.keep_with_next);
        assert!(paras[1].style.keep_with_next);
        assert!(!paras[2].style.keep_with_next);
        assert!(paras[2].is_list_item());
        assert!(!paras[3].style.keep_with_next);
    }

    #[test]
    fn test_other_heading_leaves_employment() {
        let doc = render("---\n## EMPLOYMENT HISTORY\nJob A\n## EDUCATION\nSchool\nDegree");
        let paras = paragraphs(&doc);
        assert!(!paras[0].style.keep_with_next);
        assert!(!paras[1].style.keep_with_next);
        assert!(!paras[2].style.keep_with_next);
    }

    #[test]
    fn test_employment_heading_must_be_level_two() {
        let doc = render("---\n### EMPLOYMENT HISTORY\nA\nB");
        assert!(paragraphs(&doc).iter().all(|p| !p.style.keep_with_next));
    }

    #[test]
    fn test_table_flush_on_lookahead_and_end() {
        let table = "| A | B | C |\n|---|---|---|\n| 1 | 2 | 3 |\n| 4 | 5 | 6 |";

        let at_end = render(&format!("---\n{table}"));
        let followed = render(&format!("---\n{table}\n\n"));
        let before_text = render(&format!("---\n{table}\nAfter"));

        assert_eq!(at_end.blocks, followed.blocks);
        assert_eq!(before_text.blocks.len(), at_end.blocks.len() + 1);
        match &at_end.blocks[1] {
            Block::Table(t) => {
                assert_eq!(t.row_count(), 2);
                assert_eq!(t.column_count(), 3);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_single_line_table_dropped() {
        let doc = render("---\n| lonely |\ntext");
        assert_eq!(doc.block_count(), 2);
        assert!(!doc.blocks.iter().any(Block::is_table));
    }

    #[test]
    fn test_table_inside_employment_leaves_job_block_open() {
        let doc = render("---\n## EMPLOYMENT HISTORY\nJob A\nJob A2\n| H |\n|---|\n| d |\nJob B");

        assert!(doc.blocks[2].is_table());
        let paras = paragraphs(&doc);
        let texts: Vec<String> = paras.iter().map(|p| p.plain_text()).collect();
        assert_eq!(texts, vec!["Job A", "Job A2", "Job B"]);
        assert!(paras[0].style.keep_with_next);
        assert!(paras[1].style.keep_with_next);
        assert!(!paras[2].style.keep_with_next);
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = MarkupRenderer::default();
        let markup = "# Name\n---\n## EMPLOYMENT HISTORY\nA\n- b\n| x | y |\n|--|--|\n| 1 | 2 |";
        assert_eq!(renderer.render(markup, "H"), renderer.render(markup, "H"));
    }

    #[test]
    fn test_header_is_formatted_and_centered() {
        let doc = MarkupRenderer::default().render("---", "**Jane** | [site](https://j.dev)\n");
        let header = doc.header.expect("header");
        assert_eq!(header.style.alignment, Alignment::Center);
        assert_eq!(
            header.content,
            vec![
                Span::bold("Jane"),
                Span::plain(" | "),
                Span::link("site", "https://j.dev"),
            ]
        );
    }
}
