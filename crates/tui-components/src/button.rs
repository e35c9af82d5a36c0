//! Push button.

use crate::accessibility::Accessible;
use crate::icon::IconName;
use crate::loading::Loading;
use crate::text::display_width;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use tui_style::{ButtonVariant, Rounded, Size};

/// Button with optional icons on either side.
///
/// While `loading`, both icons are replaced by a spinner on the left and the
/// button reports itself disabled.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: Size,
    rounded: Rounded,
    loading: bool,
    disabled: bool,
    focused: bool,
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
    tick: u64,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: Size::default(),
            rounded: Rounded::default(),
            loading: false,
            disabled: false,
            focused: false,
            left_icon: None,
            right_icon: None,
            tick: 0,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn rounded(mut self, rounded: Rounded) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: IconName) -> Self {
        self.right_icon = Some(icon);
        self
    }

    /// Spinner animation tick.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Whether the button accepts activation.
    pub fn is_enabled(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn content(&self) -> Line<'a> {
        let mut spans: Vec<Span<'a>> = Vec::new();
        if self.loading {
            spans.extend(Loading::new().message(None).tick(self.tick).glyphs());
            spans.push(Span::raw(" "));
        } else if let Some(icon) = self.left_icon {
            spans.push(Span::raw(icon.glyph()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(self.label));
        if !self.loading {
            if let Some(icon) = self.right_icon {
                spans.push(Span::raw(" "));
                spans.push(Span::raw(icon.glyph()));
            }
        }
        Line::from(spans)
    }

    fn descriptor(&self) -> tui_style::StyleDescriptor {
        let d = if !self.is_enabled() {
            self.variant.disabled_descriptor()
        } else if self.focused {
            self.variant.focused_descriptor()
        } else {
            self.variant.descriptor()
        };
        let d = d.padding(self.size.inline_padding());
        if d.has_border() && d.border_type == tui_style::BorderType::Plain {
            d.border_type(self.rounded.border_type())
        } else {
            d
        }
    }

    /// Cells needed to draw the button.
    pub fn width(&self) -> u16 {
        let d = self.descriptor();
        let border = if d.has_border() { 2 } else { 0 };
        let content = u16::try_from(self.content().width()).unwrap_or(u16::MAX);
        let width = content + d.padding.left + d.padding.right + border;
        width.max(self.size.min_width())
    }

    /// Rows needed to draw the button.
    pub fn height(&self) -> u16 {
        let d = self.descriptor();
        let border = if d.has_border() { 2 } else { 0 };
        1 + d.padding.top + d.padding.bottom + border
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.descriptor().block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }
        let line = self.content();
        let width = u16::try_from(line.width()).unwrap_or(u16::MAX).min(inner.width);
        let x = inner.x + (inner.width - width) / 2;
        let y = inner.y + inner.height.saturating_sub(1) / 2;
        buf.set_line(x, y, &line, width);
    }
}

impl Accessible for Button<'_> {
    fn aria_role(&self) -> &str {
        "button"
    }

    fn aria_label(&self) -> String {
        if display_width(self.label) > 0 {
            return self.label.to_string();
        }
        self.left_icon
            .or(self.right_icon)
            .map(|i| i.name().to_string())
            .unwrap_or_default()
    }

    fn aria_value(&self) -> Option<String> {
        if self.loading {
            Some("busy".to_string())
        } else if self.disabled {
            Some("disabled".to_string())
        } else {
            None
        }
    }
}
