//! Virtual terminal for headless testing.

use crate::{TestError, TestResult};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Terminal;

/// A virtual terminal for rendering widgets in tests.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { terminal }
    }

    /// Full screen area.
    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    /// Draw to the terminal.
    pub fn draw<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f).expect("Failed to draw to terminal");
    }

    /// Get a reference to the current buffer.
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Get the buffer content as a string, one line per row.
    pub fn content(&self) -> String {
        let area = self.area();
        (area.y..area.bottom())
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.x..area.right())
            .filter_map(|x| buffer.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect()
    }

    /// Content of a row with trailing blanks removed.
    pub fn line(&self, y: u16) -> String {
        if y >= self.area().bottom() {
            return String::new();
        }
        self.row(y).trim_end().to_string()
    }

    /// Symbol of a single cell.
    pub fn cell(&self, x: u16, y: u16) -> Option<String> {
        self.buffer().cell((x, y)).map(|c| c.symbol().to_string())
    }

    /// Style of a single cell.
    pub fn style_at(&self, x: u16, y: u16) -> Option<Style> {
        self.buffer().cell((x, y)).map(|c| c.style())
    }

    /// Whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        let area = self.area();
        (area.y..area.bottom()).any(|y| self.row(y).contains(needle))
    }

    /// Screen position of the first cell of `needle`, scanning rows top to bottom.
    ///
    /// Positions count cells, so wide glyphs before the match are handled.
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        let area = buffer.area;
        let first = needle.chars().next()?.to_string();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if buffer[(x, y)].symbol() != first {
                    continue;
                }
                let rest: String = (x..area.right())
                    .map(|cx| buffer[(cx, y)].symbol())
                    .collect();
                if rest.starts_with(needle) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    /// Like [`Self::find`], but an error names the missing text.
    pub fn locate(&self, needle: &str) -> TestResult<(u16, u16)> {
        self.find(needle)
            .ok_or_else(|| TestError::NotFound(needle.to_string()))
    }

    /// Assert that the buffer contains the given substring.
    pub fn assert_contains(&self, needle: &str) {
        if !self.contains(needle) {
            panic!(
                "Buffer does not contain \"{}\":\n{}",
                needle,
                self.content()
            );
        }
    }

    /// Assert that the buffer does not contain the given substring.
    pub fn assert_not_contains(&self, needle: &str) {
        if self.contains(needle) {
            panic!(
                "Buffer unexpectedly contains \"{}\":\n{}",
                needle,
                self.content()
            );
        }
    }

    /// Resize the terminal.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
