//! State management for Table.

use super::order::TableOrder;
use ratatui::layout::{Position, Rect};

/// State for the [`Table`](super::Table) widget.
///
/// Owned by the caller, so the sort order survives data reloads.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Current sort order
    pub order: TableOrder,
    /// Selected row index
    pub selected: Option<usize>,
    /// Column that `s` orders by
    pub focused_column: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Number of visible rows (set during render)
    pub(crate) visible_rows: usize,
    /// Header cell areas by column index (set during render)
    pub(crate) header_cells: Vec<Rect>,
    /// Body area (set during render)
    pub(crate) body: Rect,
}

impl TableState {
    /// Create a new table state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with an initial sort order.
    pub fn with_order(order: TableOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Get the currently selected row index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a specific row.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Clear selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Number of body rows that fit, as of the last render.
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Scroll to make a row visible.
    pub fn scroll_to(&mut self, row: usize, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + visible_height {
            self.scroll_offset = row.saturating_sub(visible_height - 1);
        }
    }

    /// Column whose header was drawn at the given cell.
    pub fn header_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.header_cells.iter().position(|cell| cell.contains(pos))
    }

    /// Row index drawn at the given cell, before bounds checking against the data.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.body.contains(Position::new(column, row)) {
            return None;
        }
        let offset = usize::from(row - self.body.y);
        Some(self.scroll_offset + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_selection() {
        let mut state = TableState::new();

        state.select(5);
        assert_eq!(state.selected(), Some(5));

        state.deselect();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_state_scroll() {
        let mut state = TableState::new();
        state.scroll_offset = 5;

        // Row within view - no change
        state.scroll_to(7, 10);
        assert_eq!(state.scroll_offset, 5);

        // Row above view
        state.scroll_to(2, 10);
        assert_eq!(state.scroll_offset, 2);

        // Row below view
        state.scroll_to(20, 10);
        assert_eq!(state.scroll_offset, 11);
    }

    #[test]
    fn test_hit_testing() {
        let mut state = TableState::new();
        state.header_cells = vec![Rect::new(1, 1, 10, 1), Rect::new(12, 1, 10, 1)];
        state.body = Rect::new(1, 3, 21, 5);
        state.scroll_offset = 4;

        assert_eq!(state.header_at(15, 1), Some(1));
        assert_eq!(state.header_at(11, 1), None);
        assert_eq!(state.row_at(2, 3), Some(4));
        assert_eq!(state.row_at(2, 7), Some(8));
        assert_eq!(state.row_at(2, 8), None);
    }
}
