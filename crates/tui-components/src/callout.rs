//! Boxed message layout shared by alerts and toasts.

use crate::text::{display_width, truncate_with_ellipsis, wrap};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use tui_style::StyleDescriptor;

/// Glyph drawn in the top-right corner of closable callouts.
pub const CLOSE_GLYPH: &str = "✕";

const GAUGE_FILLED: &str = "━";

/// Icon and title on the first row, wrapped body below, optional close glyph
/// in the top-right corner and an optional gauge on the last row.
#[derive(Debug, Clone)]
pub(crate) struct Callout<'a> {
    style: StyleDescriptor,
    title_style: Style,
    icon: Option<&'a str>,
    title: Option<&'a str>,
    body: Option<&'a str>,
    closable: bool,
    gauge: Option<f64>,
    dimmed: bool,
}

/// Hit areas produced by rendering a callout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CalloutLayout {
    pub close: Option<Rect>,
}

impl<'a> Callout<'a> {
    pub fn new(style: StyleDescriptor) -> Self {
        Self {
            style,
            title_style: style.to_style(),
            icon: None,
            title: None,
            body: None,
            closable: false,
            gauge: None,
            dimmed: false,
        }
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn icon(mut self, icon: Option<&'a str>) -> Self {
        self.icon = icon.filter(|i| !i.is_empty());
        self
    }

    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    pub fn body(mut self, body: Option<&'a str>) -> Self {
        self.body = body;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Fraction of the gauge to fill, clamped to `0.0..=1.0`.
    pub fn gauge(mut self, ratio: Option<f64>) -> Self {
        self.gauge = ratio.map(|r| r.clamp(0.0, 1.0));
        self
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    fn frame(&self) -> (u16, u16) {
        let border = if self.style.has_border() { 2 } else { 0 };
        let pad = self.style.padding;
        (
            border + pad.left + pad.right,
            border + pad.top + pad.bottom,
        )
    }

    fn prefix_width(&self) -> usize {
        self.icon.map_or(0, |i| display_width(i) + 1)
    }

    fn text_width(&self, inner_width: u16) -> usize {
        let reserved = self.prefix_width() + if self.closable { 2 } else { 0 };
        usize::from(inner_width).saturating_sub(reserved).max(1)
    }

    fn body_lines(&self, inner_width: u16) -> Vec<String> {
        self.body
            .map(|b| wrap(b, self.text_width(inner_width)))
            .unwrap_or_default()
    }

    fn content_rows(&self, inner_width: u16) -> u16 {
        let body = self.body_lines(inner_width).len();
        let rows = usize::from(self.title.is_some()) + body;
        let rows = rows.max(1) + usize::from(self.gauge.is_some());
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Rows needed to render at `width` cells.
    pub fn height(&self, width: u16) -> u16 {
        let (fx, fy) = self.frame();
        self.content_rows(width.saturating_sub(fx))
            .saturating_add(fy)
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) -> CalloutLayout {
        let block = self.style.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let mut layout = CalloutLayout::default();
        if inner.width == 0 || inner.height == 0 {
            return layout;
        }

        let text_style = self.style.to_style();
        let text_width = self.text_width(inner.width);
        let prefix = u16::try_from(self.prefix_width()).unwrap_or(0);
        let text_x = inner.x + prefix.min(inner.width);
        let bottom = inner.bottom();
        let content_bottom = if self.gauge.is_some() {
            bottom.saturating_sub(1)
        } else {
            bottom
        };

        if let Some(icon) = self.icon {
            buf.set_stringn(inner.x, inner.y, icon, usize::from(inner.width), self.title_style);
        }

        let mut y = inner.y;
        if let Some(title) = self.title {
            let title = truncate_with_ellipsis(title, text_width);
            buf.set_stringn(text_x, y, &title, text_width, self.title_style);
            y += 1;
        }
        for line in self.body_lines(inner.width) {
            if y >= content_bottom {
                break;
            }
            buf.set_stringn(text_x, y, &line, text_width, text_style);
            y += 1;
        }

        if self.closable && inner.width >= 2 {
            let x = inner.right() - 1;
            buf.set_string(x, inner.y, CLOSE_GLYPH, self.title_style);
            layout.close = Some(Rect::new(x, inner.y, 1, 1));
        }

        if let Some(ratio) = self.gauge {
            let gauge_y = bottom.saturating_sub(1).max(inner.y);
            let filled = (f64::from(inner.width) * ratio).round() as usize;
            buf.set_stringn(
                inner.x,
                gauge_y,
                GAUGE_FILLED.repeat(filled),
                filled,
                self.style.border_style(),
            );
        }

        if self.dimmed {
            buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Padding;
    use tui_style::{BorderType, ToastVariant};

    fn boxed() -> StyleDescriptor {
        ToastVariant::Info
            .descriptor()
            .border_type(BorderType::Plain)
            .padding(Padding::ZERO)
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_height_counts_title_body_and_gauge() {
        let callout = Callout::new(boxed())
            .icon(Some("ℹ"))
            .title(Some("Heads up"))
            .body(Some("one two three four"))
            .gauge(Some(0.5));
        // inner width 10, text width 8: body wraps into "one two" and "three" and "four"
        assert_eq!(callout.height(12), 2 + 1 + 3 + 1);
    }

    #[test]
    fn test_empty_callout_keeps_one_row() {
        assert_eq!(Callout::new(boxed()).height(20), 3);
    }

    #[test]
    fn test_render_places_icon_title_and_close() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let layout = Callout::new(boxed())
            .icon(Some("✓"))
            .title(Some("Saved"))
            .body(Some("All good"))
            .closable(true)
            .render(area, &mut buf);

        assert!(row(&buf, 1).starts_with("│✓ Saved"));
        assert!(row(&buf, 2).starts_with("│  All good"));
        assert_eq!(layout.close, Some(Rect::new(18, 1, 1, 1)));
        assert_eq!(buf[(18, 1)].symbol(), CLOSE_GLYPH);
    }

    #[test]
    fn test_gauge_fills_proportionally() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        Callout::new(boxed())
            .body(Some("hi"))
            .gauge(Some(0.5))
            .render(area, &mut buf);
        assert_eq!(row(&buf, 2), "│━━━━━     │");
    }

    #[test]
    fn test_dimmed_adds_modifier() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        Callout::new(boxed())
            .body(Some("x"))
            .dimmed(true)
            .render(area, &mut buf);
        assert!(buf[(1, 1)].modifier.contains(Modifier::DIM));
    }
}
