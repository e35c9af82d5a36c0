//! Inline alert box.

use crate::accessibility::Accessible;
use crate::callout::Callout;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::StatefulWidget;
use tui_style::{AlertVariant, BorderType, Rounded, Size};

/// Alert with an icon, optional title and body, and an optional close glyph.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    variant: AlertVariant,
    size: Size,
    rounded: Rounded,
    bordered: bool,
    closable: bool,
    icon: Option<&'a str>,
    title: Option<&'a str>,
    body: Option<&'a str>,
}

impl<'a> Alert<'a> {
    pub fn new(variant: AlertVariant) -> Self {
        Self {
            variant,
            size: Size::default(),
            rounded: Rounded::default(),
            bordered: true,
            closable: false,
            icon: None,
            title: None,
            body: None,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn rounded(mut self, rounded: Rounded) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Override the variant's default icon. An empty string hides it.
    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn body(mut self, body: &'a str) -> Self {
        self.body = Some(body);
        self
    }

    fn callout(&self) -> Callout<'a> {
        let border = if self.bordered {
            self.rounded.border_type()
        } else {
            BorderType::None
        };
        let style = self
            .variant
            .descriptor()
            .border_type(border)
            .padding(self.size.container_padding());
        Callout::new(style)
            .title_style(style.modifiers(Modifier::BOLD).to_style())
            .icon(Some(self.icon.unwrap_or(self.variant.default_icon())))
            .title(self.title)
            .body(self.body)
            .closable(self.closable)
    }

    /// Rows needed at `width`.
    pub fn height(&self, width: u16) -> u16 {
        self.callout().height(width)
    }
}

/// Open state and close hit area of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertState {
    open: bool,
    close: Option<Rect>,
}

impl Default for AlertState {
    fn default() -> Self {
        Self {
            open: true,
            close: None,
        }
    }
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
        self.close = None;
    }

    pub fn reopen(&mut self) {
        self.open = true;
    }

    /// Close when a left click lands on the close glyph.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        let hit = self
            .close
            .is_some_and(|r| r.contains(Position::new(event.column, event.row)));
        if hit {
            self.close();
        }
        hit
    }
}

impl StatefulWidget for Alert<'_> {
    type State = AlertState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.open || area.is_empty() {
            state.close = None;
            return;
        }
        let height = self.height(area.width).min(area.height);
        let area = Rect::new(area.x, area.y, area.width, height);
        state.close = self.callout().render(area, buf).close;
    }
}

impl Accessible for Alert<'_> {
    fn aria_role(&self) -> &str {
        match self.variant {
            AlertVariant::Error | AlertVariant::Warning => "alert",
            _ => "status",
        }
    }

    fn aria_label(&self) -> String {
        match (self.title, self.body) {
            (Some(t), Some(b)) => format!("{t}: {b}"),
            (Some(t), None) => t.to_string(),
            (None, Some(b)) => b.to_string(),
            (None, None) => self.variant.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tui_testing::{TestResult, TestTerminal};

    #[test]
    fn test_default_icon_and_text() {
        let mut terminal = TestTerminal::new(40, 6);
        let mut state = AlertState::new();
        terminal.draw(|frame| {
            let alert = Alert::new(AlertVariant::Success)
                .title("Saved")
                .body("All changes written");
            frame.render_stateful_widget(alert, frame.area(), &mut state);
        });
        terminal.assert_contains("✓ Saved");
        terminal.assert_contains("All changes written");
        terminal.assert_not_contains("✕");
    }

    #[test]
    fn test_close_glyph_closes() -> TestResult<()> {
        let mut terminal = TestTerminal::new(40, 6);
        let mut state = AlertState::new();
        terminal.draw(|frame| {
            let alert = Alert::new(AlertVariant::Error).title("Failed").closable(true);
            frame.render_stateful_widget(alert, frame.area(), &mut state);
        });
        let (x, y) = terminal.locate("✕")?;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        assert!(state.handle_mouse(click));
        assert!(!state.is_open());

        terminal.draw(|frame| {
            let alert = Alert::new(AlertVariant::Error).title("Failed").closable(true);
            frame.render_stateful_widget(alert, frame.area(), &mut state);
        });
        terminal.assert_not_contains("Failed");
        Ok(())
    }

    #[test]
    fn test_unbordered_is_shorter() {
        let bordered = Alert::new(AlertVariant::Info).title("Note");
        let bare = Alert::new(AlertVariant::Info).title("Note").bordered(false);
        assert_eq!(bordered.height(30), bare.height(30) + 2);
    }

    #[test]
    fn test_aria() {
        let alert = Alert::new(AlertVariant::Warning).title("Disk").body("90% full");
        assert_eq!(crate::accessibility::describe(&alert), "alert: Disk: 90% full");
    }
}
