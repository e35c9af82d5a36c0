//! Loading indicator.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use tui_style::{spinner_color, LoadingVariant, Size, StyleKey, DOT_COLORS};

/// Message shown next to the animation when none is given.
pub const DEFAULT_MESSAGE: &str = "Loading...";

/// Animated loading indicator. Frames advance with the tick count.
#[derive(Debug, Clone)]
pub struct Loading<'a> {
    variant: LoadingVariant,
    size: Size,
    message: Option<&'a str>,
    tick: u64,
}

impl Default for Loading<'_> {
    fn default() -> Self {
        Self {
            variant: LoadingVariant::default(),
            size: Size::default(),
            message: Some(DEFAULT_MESSAGE),
            tick: 0,
        }
    }
}

impl<'a> Loading<'a> {
    /// Spinner with the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation.
    pub fn variant(mut self, variant: LoadingVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the message. `None` hides it.
    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    /// Set the animation tick.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Animation glyphs for the current tick.
    pub fn glyphs(&self) -> Vec<Span<'static>> {
        let frames = self.variant.frames();
        let count = self.variant.width(self.size);
        (0..count)
            .map(|i| {
                let frame = frames[(self.tick as usize + i) % frames.len()];
                let color = match self.variant {
                    LoadingVariant::Dots => DOT_COLORS[i % DOT_COLORS.len()],
                    _ => spinner_color(),
                };
                Span::styled(frame, Style::default().fg(color))
            })
            .collect()
    }

    /// The indicator as a single line.
    pub fn line(&self) -> Line<'a> {
        let mut spans: Vec<Span<'a>> = self.glyphs();
        if let Some(message) = self.message {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(message));
        }
        Line::from(spans)
    }

    /// Accessible label.
    pub fn label(&self) -> String {
        format!(
            "{} ({})",
            self.message.unwrap_or(DEFAULT_MESSAGE),
            self.variant.name()
        )
    }
}

impl Widget for Loading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = self.line();
        let width = u16::try_from(line.width()).unwrap_or(u16::MAX).min(area.width);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + area.height.saturating_sub(1) / 2;
        buf.set_line(x, y, &line, width);
    }
}
