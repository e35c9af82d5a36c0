//! Orderable table with loading and empty states.
//!
//! The table never sorts on its own. Header activations update the caller's
//! [`TableOrder`] (held in [`TableState`]) and fire `on_order_change`; the
//! caller reorders its rows in response.
//!
//! # Example
//!
//! ```ignore
//! use tui_components::table::{Column, Table, TableState};
//!
//! let mut table = Table::new(vec![
//!     Column::new("name", "Name").orderable(true),
//!     Column::new("email", "Email"),
//! ])
//! .data(rows)
//! .on_order_change(|key, direction| tracing::info!(key, %direction, "reorder"));
//!
//! let mut state = TableState::new();
//! frame.render_stateful_widget(&table, area, &mut state);
//! ```

mod cell;
mod column;
mod order;
mod row;
mod state;

pub use cell::CellContent;
pub use column::{Column, ColumnWidth};
pub use order::{SortDirection, TableOrder, UNSORTED_ARROW};
pub use row::TableRow;
pub use state::TableState;

use crate::accessibility::Accessible;
use crate::loading::Loading;
use crate::text::truncate_with_ellipsis;
use column::calculate_column_widths;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::{StatefulWidget, Widget};
use std::fmt;
use tui_style::{Rounded, TableVariant};

/// Shown when there is no data and the table is not loading.
pub const EMPTY_MESSAGE: &str = "No data found";

/// Something the table did in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The sort order changed.
    OrderChanged {
        key: String,
        direction: SortDirection,
    },
    /// A row was clicked or activated with Enter.
    RowClicked(usize),
    /// The selected row changed.
    Selected(Option<usize>),
    /// The focused header changed.
    ColumnFocused(usize),
}

type OrderCallback = Box<dyn FnMut(&str, SortDirection)>;
type RowCallback<T> = Box<dyn FnMut(&T)>;

/// Table of rows with orderable columns.
pub struct Table<T> {
    /// Column definitions
    columns: Vec<Column<T>>,
    /// Rows; `None` until the caller supplies data
    data: Option<Vec<T>>,
    /// Whether the body shows the loading indicator
    loading: bool,
    /// Animation tick for the loading indicator
    tick: u64,
    /// Visual variant
    variant: TableVariant,
    /// Corner rounding
    rounded: Rounded,
    /// Callbacks
    on_order_change: Option<OrderCallback>,
    on_row_click: Option<RowCallback<T>>,
}

impl<T> Table<T> {
    /// Create a table with no data.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            data: None,
            loading: false,
            tick: 0,
            variant: TableVariant::default(),
            rounded: Rounded::default(),
            on_order_change: None,
            on_row_click: None,
        }
    }

    /// Set the rows.
    pub fn data(mut self, data: Vec<T>) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the corner rounding.
    pub fn rounded(mut self, rounded: Rounded) -> Self {
        self.rounded = rounded;
        self
    }

    /// Called with the column key and new direction when the order changes.
    pub fn on_order_change(mut self, f: impl FnMut(&str, SortDirection) + 'static) -> Self {
        self.on_order_change = Some(Box::new(f));
        self
    }

    /// Called with the row when a row is clicked.
    pub fn on_row_click(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }

    /// Replace the rows. `None` shows the empty state.
    pub fn set_data(&mut self, data: Option<Vec<T>>) {
        self.data = data;
    }

    /// Mutable access to the rows, for caller-side sorting.
    pub fn data_mut(&mut self) -> Option<&mut Vec<T>> {
        self.data.as_mut()
    }

    /// Current rows.
    pub fn rows(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }

    /// Toggle the loading indicator.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether the loading indicator is shown.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Advance the loading animation.
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    /// Change the variant.
    pub fn set_variant(&mut self, variant: TableVariant) {
        self.variant = variant;
    }

    /// Column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Activate the header of column `index`, as a click or `s` would.
    pub fn activate_header(&mut self, index: usize, state: &mut TableState) -> Option<TableEvent> {
        let col = self.columns.get(index)?;
        if !state.order.activate(&col.key, col.orderable) {
            return None;
        }
        let direction = state.order.direction;
        if let Some(ref mut callback) = self.on_order_change {
            callback(&col.key, direction);
        }
        Some(TableEvent::OrderChanged {
            key: col.key.clone(),
            direction,
        })
    }

    /// Click row `index`. Ignored while loading or out of range.
    pub fn click_row(&mut self, index: usize, state: &mut TableState) -> Option<TableEvent> {
        if self.loading {
            return None;
        }
        let row = self.data.as_ref()?.get(index)?;
        state.select(index);
        if let Some(ref mut callback) = self.on_row_click {
            callback(row);
        }
        Some(TableEvent::RowClicked(index))
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent, state: &mut TableState) -> Option<TableEvent> {
        let page = state.visible_rows().max(1) as isize;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, state),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, state),
            KeyCode::PageUp => self.move_selection(-page, state),
            KeyCode::PageDown => self.move_selection(page, state),
            KeyCode::Home => self.select_index(0, state),
            KeyCode::End => self.select_index(self.row_count().saturating_sub(1), state),
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(-1, state),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(1, state),
            KeyCode::Char('s') => self.activate_header(state.focused_column, state),
            KeyCode::Enter => {
                let index = state.selected()?;
                self.click_row(index, state)
            }
            KeyCode::Esc => {
                state.selected()?;
                state.deselect();
                Some(TableEvent::Selected(None))
            }
            _ => None,
        }
    }

    /// Handle a mouse event against the areas of the last render.
    pub fn handle_mouse(&mut self, event: MouseEvent, state: &mut TableState) -> Option<TableEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = state.header_at(event.column, event.row) {
                    state.focused_column = index;
                    return self.activate_header(index, state);
                }
                let index = state.row_at(event.column, event.row)?;
                self.click_row(index, state)
            }
            MouseEventKind::ScrollUp => self.move_selection(-1, state),
            MouseEventKind::ScrollDown => self.move_selection(1, state),
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: isize, state: &mut TableState) -> Option<TableEvent> {
        let row_count = self.row_count();
        if row_count == 0 || self.loading {
            return None;
        }
        let current = state.selected().unwrap_or(0);
        let new_idx = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else if state.selected().is_none() {
            0
        } else {
            (current + delta as usize).min(row_count - 1)
        };
        self.select_index(new_idx, state)
    }

    fn select_index(&mut self, index: usize, state: &mut TableState) -> Option<TableEvent> {
        if self.row_count() == 0 || self.loading {
            return None;
        }
        if state.selected() == Some(index) {
            return None;
        }
        state.select(index);
        state.scroll_to(index, state.visible_rows());
        Some(TableEvent::Selected(Some(index)))
    }

    fn move_focus(&mut self, delta: isize, state: &mut TableState) -> Option<TableEvent> {
        if self.columns.is_empty() {
            return None;
        }
        let last = self.columns.len() - 1;
        let next = if delta < 0 {
            state.focused_column.saturating_sub(1)
        } else {
            (state.focused_column + 1).min(last)
        };
        if next == state.focused_column {
            return None;
        }
        state.focused_column = next;
        Some(TableEvent::ColumnFocused(next))
    }
}

impl<T: TableRow> Table<T> {
    /// Sort the rows by `order` using the columns' cell comparison.
    ///
    /// A convenience for callers without their own comparator. Unknown keys
    /// and unsorted orders leave the rows alone.
    pub fn sort_rows(&mut self, order: &TableOrder) {
        let Some(key) = order.order_by.as_deref() else {
            return;
        };
        let Some(col) = self.columns.iter().find(|c| c.key == key) else {
            return;
        };
        if let Some(rows) = self.data.as_mut() {
            // Empty cells stay last whichever way the column is ordered
            rows.sort_by(|a, b| {
                let (a, b) = (col.cell(a), col.cell(b));
                match (a.is_empty(), b.is_empty()) {
                    (true, true) => std::cmp::Ordering::Equal,
                    (true, false) => std::cmp::Ordering::Greater,
                    (false, true) => std::cmp::Ordering::Less,
                    (false, false) => order.direction.apply(a.cmp(&b)),
                }
            });
        }
    }
}

impl<T: TableRow> StatefulWidget for &Table<T> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let frame = self
            .variant
            .body()
            .border_type(self.rounded.border_type());
        let block = frame.block();
        let inner = block.inner(area);
        block.render(area, buf);

        state.header_cells.clear();
        state.body = Rect::default();
        state.visible_rows = 0;

        if inner.width < 3 || inner.height < 3 {
            return;
        }

        let widths = calculate_column_widths(&self.columns, usize::from(inner.width));

        // Header row
        let header = self.variant.header().to_style();
        buf.set_style(Rect::new(inner.x, inner.y, inner.width, 1), header);
        let mut x = inner.x;
        for (i, col) in self.columns.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(0);
            state.header_cells.push(Rect::new(x, inner.y, width, 1));
            if width > 0 {
                let mut label = col.label.clone();
                if let Some(glyph) = state.order.glyph_for(&col.key, col.orderable) {
                    label.push(' ');
                    label.push_str(glyph);
                }
                let mut style = header;
                if i == state.focused_column {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                let display = truncate_with_ellipsis(&label, usize::from(width));
                buf.set_stringn(x, inner.y, &display, usize::from(width), style);
            }
            x = x.saturating_add(width + 1);
        }

        buf.set_string(
            inner.x,
            inner.y + 1,
            "─".repeat(usize::from(inner.width)),
            frame.border_style(),
        );

        let body = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);

        if self.loading {
            Loading::new().tick(self.tick).render(body, buf);
            return;
        }

        let rows = self.rows();
        if rows.is_empty() {
            let msg_width = EMPTY_MESSAGE.len() as u16;
            let x = body.x + body.width.saturating_sub(msg_width) / 2;
            let y = body.y + body.height.saturating_sub(1) / 2;
            buf.set_stringn(
                x,
                y,
                EMPTY_MESSAGE,
                usize::from(body.width),
                self.variant.muted().to_style(),
            );
            return;
        }

        state.body = body;
        let visible = usize::from(body.height);
        state.visible_rows = visible;

        if let Some(sel) = state.selected {
            if sel >= rows.len() {
                state.selected = Some(rows.len() - 1);
            }
        }
        if let Some(sel) = state.selected {
            state.scroll_to(sel, visible);
        }
        state.scroll_offset = state.scroll_offset.min(rows.len().saturating_sub(visible));

        let body_style = self.variant.body().to_style();
        let highlight = self.variant.highlight().to_style();
        for (offset, (index, row)) in rows
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(visible)
            .enumerate()
        {
            let y = body.y + offset as u16;
            let row_style = if state.selected == Some(index) {
                highlight
            } else {
                body_style
            };
            buf.set_style(Rect::new(body.x, y, body.width, 1), row_style);

            let mut x = body.x;
            for (col_idx, col) in self.columns.iter().enumerate() {
                let width = widths.get(col_idx).copied().unwrap_or(0);
                if width > 0 {
                    let cell = col.cell(row);
                    let mut style = row_style;
                    if let Some(color) = cell.color() {
                        style = style.fg(color);
                    }
                    let display = truncate_with_ellipsis(&cell.to_string(), usize::from(width));
                    buf.set_stringn(x, y, &display, usize::from(width), style);
                }
                x = x.saturating_add(width + 1);
            }
        }
    }
}

impl<T> Accessible for Table<T> {
    fn aria_role(&self) -> &str {
        "grid"
    }

    fn aria_label(&self) -> String {
        if self.loading {
            return "Table, loading".to_string();
        }
        format!("Table with {} rows", self.row_count())
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.data.as_ref().map(Vec::len))
            .field("loading", &self.loading)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
