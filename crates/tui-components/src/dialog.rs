//! Modal confirm dialog.
//!
//! The dialog is drawn over whatever is below it. [`DialogState`] holds the
//! open flag, the focused button and the hit areas of the last render, and
//! turns input into a [`DialogOutcome`].

use crate::accessibility::Accessible;
use crate::button::Button;
use crate::icon::IconName;
use crate::text::{truncate_with_ellipsis, wrap};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Clear, StatefulWidget, Widget};
use tui_style::{DialogVariant, Size};

/// Label of the confirm button when none is given.
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
/// Label of the cancel button when none is given.
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// How the dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

/// Which button has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    Confirm,
    Cancel,
}

impl DialogButton {
    fn other(self) -> Self {
        match self {
            Self::Confirm => Self::Cancel,
            Self::Cancel => Self::Confirm,
        }
    }
}

/// State for [`ConfirmDialog`].
#[derive(Debug, Clone)]
pub struct DialogState {
    open: bool,
    focus: DialogButton,
    /// Esc cancels.
    pub close_on_escape: bool,
    /// A click outside the dialog cancels.
    pub close_on_backdrop: bool,
    area: Rect,
    confirm: Rect,
    cancel: Rect,
}

impl Default for DialogState {
    fn default() -> Self {
        Self {
            open: false,
            focus: DialogButton::default(),
            close_on_escape: true,
            close_on_backdrop: true,
            area: Rect::default(),
            confirm: Rect::default(),
            cancel: Rect::default(),
        }
    }
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with focus on the confirm button.
    pub fn open(&mut self) {
        self.open = true;
        self.focus = DialogButton::Confirm;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.area = Rect::default();
        self.confirm = Rect::default();
        self.cancel = Rect::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focus(&self) -> DialogButton {
        self.focus
    }

    fn finish(&mut self, outcome: DialogOutcome) -> Option<DialogOutcome> {
        tracing::debug!(?outcome, "dialog closed");
        self.close();
        Some(outcome)
    }

    /// Handle a key while open.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogOutcome> {
        if !self.open {
            return None;
        }
        match key.code {
            KeyCode::Esc if self.close_on_escape => self.finish(DialogOutcome::Cancelled),
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.focus = self.focus.other();
                None
            }
            KeyCode::Enter => match self.focus {
                DialogButton::Confirm => self.finish(DialogOutcome::Confirmed),
                DialogButton::Cancel => self.finish(DialogOutcome::Cancelled),
            },
            _ => None,
        }
    }

    /// Handle a mouse event while open, against the areas of the last render.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<DialogOutcome> {
        if !self.open || !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return None;
        }
        let pos = Position::new(event.column, event.row);
        if self.confirm.contains(pos) {
            return self.finish(DialogOutcome::Confirmed);
        }
        if self.cancel.contains(pos) {
            return self.finish(DialogOutcome::Cancelled);
        }
        if !self.area.contains(pos) && self.close_on_backdrop {
            return self.finish(DialogOutcome::Cancelled);
        }
        None
    }
}

/// Title, message and a confirm/cancel pair.
#[derive(Debug, Clone)]
pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
    confirm_label: &'a str,
    cancel_label: &'a str,
    variant: DialogVariant,
    size: Size,
    icon: Option<IconName>,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            confirm_label: DEFAULT_CONFIRM_LABEL,
            cancel_label: DEFAULT_CANCEL_LABEL,
            variant: DialogVariant::default(),
            size: Size::default(),
            icon: Some(IconName::Warning),
        }
    }

    pub fn confirm_label(mut self, label: &'a str) -> Self {
        self.confirm_label = label;
        self
    }

    pub fn cancel_label(mut self, label: &'a str) -> Self {
        self.cancel_label = label;
        self
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Icon before the title. `None` hides it.
    pub fn icon(mut self, icon: Option<IconName>) -> Self {
        self.icon = icon;
        self
    }

    fn buttons(&self, focus: DialogButton) -> (Button<'a>, Button<'a>) {
        let (confirm_variant, cancel_variant) = self.variant.button_variants();
        let confirm = Button::new(self.confirm_label)
            .variant(confirm_variant)
            .size(Size::Small)
            .focused(focus == DialogButton::Confirm);
        let cancel = Button::new(self.cancel_label)
            .variant(cancel_variant)
            .size(Size::Small)
            .focused(focus == DialogButton::Cancel);
        (confirm, cancel)
    }
}

impl StatefulWidget for ConfirmDialog<'_> {
    type State = DialogState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.open {
            return;
        }

        let frame = self.variant.descriptor().padding(self.size.container_padding());
        let (confirm, cancel) = self.buttons(state.focus);
        let button_height = confirm.height().max(cancel.height());

        let width = (area.width * 3 / 4).clamp(30, 56).min(area.width);
        let chrome_x = 2 + frame.padding.left + frame.padding.right;
        let text_width = usize::from(width.saturating_sub(chrome_x)).max(1);
        let lines = wrap(self.message, text_width);
        let chrome_y = 2 + frame.padding.top + frame.padding.bottom;
        let body_rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let height = (chrome_y + 2 + body_rows + 1 + button_height).min(area.height);

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);
        state.area = dialog_area;

        Clear.render(dialog_area, buf);
        let block = frame.block();
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);
        if inner.is_empty() {
            return;
        }

        let mut title_x = inner.x;
        if let Some(icon) = self.icon {
            buf.set_string(inner.x, inner.y, icon.glyph(), self.variant.icon().to_style());
            title_x += 2;
        }
        let title_width = usize::from(inner.right().saturating_sub(title_x));
        let title = truncate_with_ellipsis(self.title, title_width);
        buf.set_stringn(
            title_x,
            inner.y,
            &title,
            title_width,
            frame.to_style().add_modifier(Modifier::BOLD),
        );

        let mut row = inner.y + 2;
        for line in &lines {
            if row >= inner.bottom().saturating_sub(button_height) {
                break;
            }
            buf.set_stringn(inner.x, row, line, usize::from(inner.width), frame.to_style());
            row += 1;
        }

        let button_y = inner.bottom().saturating_sub(button_height);
        let cancel_w = cancel.width().min(inner.width);
        let confirm_w = confirm.width().min(inner.width.saturating_sub(cancel_w + 1));
        let confirm_x = inner.right().saturating_sub(confirm_w);
        let cancel_x = confirm_x.saturating_sub(cancel_w + 1).max(inner.x);
        state.cancel = Rect::new(cancel_x, button_y, cancel_w, button_height);
        state.confirm = Rect::new(confirm_x, button_y, confirm_w, button_height);
        cancel.render(state.cancel, buf);
        confirm.render(state.confirm, buf);
    }
}

impl Accessible for ConfirmDialog<'_> {
    fn aria_role(&self) -> &str {
        "alertdialog"
    }

    fn aria_label(&self) -> String {
        self.title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tui_testing::{InputSequence, TestResult, TestTerminal};

    fn render(state: &mut DialogState) -> TestTerminal {
        let mut terminal = TestTerminal::new(60, 20);
        terminal.draw(|frame| {
            let dialog = ConfirmDialog::new("Delete file?", "This cannot be undone.");
            frame.render_stateful_widget(dialog, frame.area(), state);
        });
        terminal
    }

    fn replay(state: &mut DialogState, input: &InputSequence) -> Vec<DialogOutcome> {
        let mut outcomes = Vec::new();
        input.play(
            |event| {
                let outcome = match event {
                    crossterm::event::Event::Key(key) => state.handle_key(*key),
                    crossterm::event::Event::Mouse(mouse) => state.handle_mouse(*mouse),
                    _ => None,
                };
                outcomes.extend(outcome);
            },
            |_| {},
        );
        outcomes
    }

    #[test]
    fn test_closed_dialog_draws_nothing() {
        let mut state = DialogState::new();
        render(&mut state).assert_not_contains("Delete file?");
    }

    #[test]
    fn test_default_labels() {
        let mut state = DialogState::new();
        state.open();
        let terminal = render(&mut state);
        terminal.assert_contains("Delete file?");
        terminal.assert_contains("This cannot be undone.");
        terminal.assert_contains(DEFAULT_CONFIRM_LABEL);
        terminal.assert_contains(DEFAULT_CANCEL_LABEL);
    }

    #[test]
    fn test_escape_cancels() {
        let mut state = DialogState::new();
        state.open();
        let mut input = InputSequence::new();
        input.esc();
        assert_eq!(replay(&mut state, &input), vec![DialogOutcome::Cancelled]);
        assert!(!state.is_open());
    }

    #[test]
    fn test_escape_ignored_when_disabled() {
        let mut state = DialogState::new();
        state.close_on_escape = false;
        state.open();
        let mut input = InputSequence::new();
        input.esc();
        assert!(replay(&mut state, &input).is_empty());
        assert!(state.is_open());
    }

    #[test]
    fn test_tab_then_enter_cancels() {
        let mut state = DialogState::new();
        state.open();
        let mut input = InputSequence::new();
        input.tab().enter();
        assert_eq!(replay(&mut state, &input), vec![DialogOutcome::Cancelled]);
    }

    #[test]
    fn test_shift_tab_wraps_focus() {
        let mut state = DialogState::new();
        state.open();
        let mut input = InputSequence::new();
        input.key_mod(KeyCode::BackTab, KeyModifiers::SHIFT).enter();
        assert_eq!(replay(&mut state, &input), vec![DialogOutcome::Cancelled]);
    }

    #[test]
    fn test_enter_confirms_by_default() {
        let mut state = DialogState::new();
        state.open();
        let mut input = InputSequence::new();
        input.enter();
        assert_eq!(replay(&mut state, &input), vec![DialogOutcome::Confirmed]);
    }

    #[test]
    fn test_backdrop_click() {
        let mut state = DialogState::new();
        state.open();
        render(&mut state);
        let mut input = InputSequence::new();
        input.click(0, 0);
        assert_eq!(replay(&mut state, &input), vec![DialogOutcome::Cancelled]);

        let mut state = DialogState::new();
        state.close_on_backdrop = false;
        state.open();
        render(&mut state);
        assert!(replay(&mut state, &input).is_empty());
        assert!(state.is_open());
    }

    #[test]
    fn test_click_confirm_button() -> TestResult<()> {
        let mut state = DialogState::new();
        state.open();
        let terminal = render(&mut state);
        let (x, y) = terminal.locate(DEFAULT_CONFIRM_LABEL)?;
        let mut input = InputSequence::new();
        input.click(x, y);
        assert_eq!(replay(&mut state, &input), vec![DialogOutcome::Confirmed]);
        Ok(())
    }

    #[test]
    fn test_click_inside_body_keeps_open() {
        let mut state = DialogState::new();
        state.open();
        let terminal = render(&mut state);
        let (x, y) = terminal.find("This cannot").unwrap();
        let mut input = InputSequence::new();
        input.click(x, y);
        assert!(replay(&mut state, &input).is_empty());
        assert!(state.is_open());
    }
}
