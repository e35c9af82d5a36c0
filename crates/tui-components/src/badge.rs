//! Count badge.

use crate::accessibility::Accessible;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use tui_style::{Hue, Shade, WHITE};

/// Counts above this render as `99+`.
pub const MAX_COUNT: u32 = 99;

/// Small numeric pill, usually drawn over the corner of another widget.
#[derive(Debug, Clone, Copy)]
pub struct Badge {
    count: u32,
    blink: bool,
    color: Color,
}

impl Badge {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            blink: false,
            color: Hue::Red.shade(Shade::Solid),
        }
    }

    /// Blink to draw attention.
    pub fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    /// Fill color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Text shown in the pill.
    pub fn label(&self) -> String {
        if self.count > MAX_COUNT {
            format!("{MAX_COUNT}+")
        } else {
            self.count.to_string()
        }
    }

    /// Cells needed, including one cell of padding per side.
    pub fn width(&self) -> u16 {
        u16::try_from(self.label().len() + 2).unwrap_or(u16::MAX)
    }

    fn style(&self) -> Style {
        let style = Style::default()
            .fg(WHITE)
            .bg(self.color)
            .add_modifier(Modifier::BOLD);
        if self.blink {
            style.add_modifier(Modifier::SLOW_BLINK)
        } else {
            style
        }
    }
}

impl Widget for Badge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let text = format!(" {} ", self.label());
        buf.set_stringn(area.x, area.y, text, usize::from(area.width), self.style());
    }
}

impl Accessible for Badge {
    fn aria_role(&self) -> &str {
        "status"
    }

    fn aria_label(&self) -> String {
        format!("{} notifications", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_testing::TestTerminal;

    #[test]
    fn test_label_caps_at_99() {
        assert_eq!(Badge::new(0).label(), "0");
        assert_eq!(Badge::new(99).label(), "99");
        assert_eq!(Badge::new(100).label(), "99+");
        assert_eq!(Badge::new(100).width(), 5);
    }

    #[test]
    fn test_blink_modifier() {
        let mut terminal = TestTerminal::new(10, 1);
        terminal.draw(|frame| frame.render_widget(Badge::new(7).blink(true), frame.area()));
        assert_eq!(terminal.line(0), " 7");
        let style = terminal.style_at(1, 0).unwrap();
        assert!(style.add_modifier.contains(Modifier::SLOW_BLINK));
    }
}
