//! Column definitions for tables.

use super::cell::CellContent;
use super::row::TableRow;
use std::fmt;

/// Column width specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in characters
    Fixed(u16),
    /// Percentage of available width
    Percentage(f32),
    /// Flexible width with relative weight
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::Flex(1)
    }
}

type Renderer<T> = Box<dyn Fn(&T) -> CellContent>;

/// Column definition for [`Table`](super::Table).
pub struct Column<T> {
    /// Field key, also the identity used for ordering
    pub key: String,
    /// Header text
    pub label: String,
    /// Whether activating the header changes the order
    pub orderable: bool,
    /// Width specification
    pub width: ColumnWidth,
    /// Custom cell renderer
    render: Option<Renderer<T>>,
}

impl<T> Column<T> {
    /// Create a column reading the row field named `key`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            orderable: false,
            width: ColumnWidth::default(),
            render: None,
        }
    }

    /// Set whether the column is orderable.
    pub fn orderable(mut self, orderable: bool) -> Self {
        self.orderable = orderable;
        self
    }

    /// Set the column width.
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    /// Render cells with `f` instead of reading the row field.
    pub fn render(mut self, f: impl Fn(&T) -> CellContent + 'static) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    /// Whether a custom renderer is set.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }
}

impl<T: TableRow> Column<T> {
    /// Content of this column for `row`.
    pub fn cell(&self, row: &T) -> CellContent {
        match &self.render {
            Some(render) => render(row),
            None => row.field(&self.key).unwrap_or(CellContent::Empty),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("orderable", &self.orderable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Split `total_width` cells between columns, one separator cell between each.
pub(crate) fn calculate_column_widths<T>(columns: &[Column<T>], total_width: usize) -> Vec<u16> {
    let col_count = columns.len();
    if col_count == 0 {
        return vec![];
    }

    let separators = col_count.saturating_sub(1);
    let available = total_width.saturating_sub(separators);

    let mut widths = vec![0u16; col_count];
    let mut remaining = available;
    let mut total_flex: u32 = 0;

    for (i, col) in columns.iter().enumerate() {
        match col.width {
            ColumnWidth::Fixed(w) => {
                let w = w.min(u16::try_from(remaining).unwrap_or(u16::MAX));
                widths[i] = w;
                remaining -= usize::from(w);
            }
            ColumnWidth::Percentage(p) => {
                let w = ((available as f32 * p / 100.0) as usize).min(remaining);
                widths[i] = u16::try_from(w).unwrap_or(u16::MAX);
                remaining -= w;
            }
            ColumnWidth::Flex(f) => total_flex += u32::from(f),
        }
    }

    if total_flex > 0 {
        let mut last_flex = None;
        let mut handed_out = 0;
        for (i, col) in columns.iter().enumerate() {
            if let ColumnWidth::Flex(f) = col.width {
                let w = remaining * f as usize / total_flex as usize;
                widths[i] = u16::try_from(w).unwrap_or(u16::MAX);
                handed_out += w;
                last_flex = Some(i);
            }
        }
        // rounding leftovers go to the last flex column
        if let Some(i) = last_flex {
            let extra = remaining.saturating_sub(handed_out);
            widths[i] = widths[i].saturating_add(u16::try_from(extra).unwrap_or(0));
        }
    }

    widths
}
