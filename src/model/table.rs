//! Table types.

use super::paragraph::plain_text;
use super::Span;
use serde::{Deserialize, Serialize};

/// A table structure with exactly one header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header row
    pub header: TableRow,

    /// Data rows
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a table, normalizing every data row to the header's column count.
    ///
    /// Short rows are padded with empty cells carrying the row's style and
    /// long rows are truncated.
    pub fn new(header: TableRow, rows: Vec<TableRow>) -> Self {
        let columns = header.cells.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.cells.len() != columns {
                    log::warn!(
                        "Table row has {} cells, header has {}; normalizing",
                        row.cells.len(),
                        columns
                    );
                    let style = row
                        .cells
                        .first()
                        .map(|c| c.style.clone())
                        .unwrap_or_default();
                    row.cells.truncate(columns);
                    while row.cells.len() < columns {
                        row.cells.push(TableCell::empty().with_style(style.clone()));
                    }
                }
                row
            })
            .collect();

        Self { header, rows }
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the header).
    pub fn column_count(&self) -> usize {
        self.header.cells.len()
    }

    /// Iterate over all rows, header first.
    pub fn all_rows(&self) -> impl Iterator<Item = &TableRow> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.all_rows()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Vec<Span>,

    /// Cell shading and text color
    pub style: CellStyle,
}

impl TableCell {
    /// Create a cell from a span sequence.
    pub fn new(content: Vec<Span>) -> Self {
        Self {
            content,
            style: CellStyle::default(),
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the cell style and return self.
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

/// Cell coloring. Colors are 6-digit hex strings without `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    /// Background fill
    pub background: Option<String>,

    /// Text color
    pub color: Option<String>,
}

impl CellStyle {
    /// Create a cell style with both colors set.
    pub fn new(background: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            background: Some(background.into()),
            color: Some(color.into()),
        }
    }
}
