//! Single-line text input.

use crate::accessibility::Accessible;
use crate::icon::IconName;
use crate::text::truncate_with_ellipsis;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};
use tui_style::{BorderType, InputVariant, Rounded, Size, StyleDescriptor};
use unicode_width::UnicodeWidthChar;

/// Glyph drawn in place of each character of a masked value.
pub const MASK_GLYPH: char = '•';

/// What a key did to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The value was edited.
    Changed,
    /// Enter was pressed.
    Submitted,
}

/// Value and cursor of an [`Input`].
#[derive(Debug, Clone, Default)]
pub struct InputState {
    value: String,
    /// Cursor position in characters.
    cursor: usize,
    /// First visible character.
    offset: usize,
    focused: bool,
    /// Text row from the last render, for mouse hits.
    field: Rect,
    /// Ignore all input and draw dimmed.
    pub disabled: bool,
    /// Allow cursor movement but no edits.
    pub read_only: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.set_value(value);
        state
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and put the cursor at its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.len();
        self.offset = 0;
    }

    pub fn clear(&mut self) {
        self.set_value(String::new());
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        if !self.disabled {
            self.focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn editable(&self) -> bool {
        !self.disabled && !self.read_only
    }

    /// Handle a key while focused. Returns what changed, if anything.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        if !self.focused || self.disabled {
            return None;
        }
        match key.code {
            KeyCode::Enter => return Some(InputEvent::Submitted),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            KeyCode::Char(c)
                if self.editable()
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                return Some(InputEvent::Changed);
            }
            KeyCode::Backspace if self.editable() && self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                return Some(InputEvent::Changed);
            }
            KeyCode::Delete if self.editable() && self.cursor < self.len() => {
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                return Some(InputEvent::Changed);
            }
            _ => {}
        }
        None
    }

    /// Focus on a click in the text row and move the cursor there; blur on a
    /// click anywhere else. Returns whether the click landed on the field.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        if !self.field.contains(Position::new(event.column, event.row)) || self.disabled {
            self.blur();
            return false;
        }
        self.focused = true;
        let target = usize::from(event.column - self.field.x);
        let mut used = 0;
        let mut cursor = self.offset;
        for ch in self.value.chars().skip(self.offset) {
            used += ch.width().unwrap_or(0);
            if used > target {
                break;
            }
            cursor += 1;
        }
        self.cursor = cursor.min(self.len());
        true
    }

    /// Scroll so the cursor cell fits in `width` cells.
    fn scroll(&mut self, widths: &[usize], width: usize) {
        self.offset = self.offset.min(self.cursor);
        while self.offset < self.cursor {
            let used: usize = widths[self.offset..self.cursor].iter().sum();
            if used < width {
                break;
            }
            self.offset += 1;
        }
    }
}

/// Labelled text field with optional icons, helper and error rows.
///
/// The error text replaces the helper text and recolors the frame. Disabled
/// and read-only behaviour lives on [`InputState`].
#[derive(Debug, Clone)]
pub struct Input<'a> {
    label: Option<&'a str>,
    placeholder: Option<&'a str>,
    helper: Option<&'a str>,
    error: Option<&'a str>,
    variant: InputVariant,
    size: Size,
    rounded: Rounded,
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
    required: bool,
    masked: bool,
}

impl Default for Input<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Input<'a> {
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            helper: None,
            error: None,
            variant: InputVariant::default(),
            size: Size::default(),
            rounded: Rounded::default(),
            left_icon: None,
            right_icon: None,
            required: false,
            masked: false,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn helper(mut self, helper: &'a str) -> Self {
        self.helper = Some(helper);
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
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

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: IconName) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Draw every character as [`MASK_GLYPH`].
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn descriptor(&self, state: &InputState) -> StyleDescriptor {
        let d = if state.disabled || state.read_only {
            self.variant.disabled_descriptor()
        } else if self.error.is_some() {
            self.variant.error_descriptor()
        } else if state.focused {
            self.variant.focused_descriptor()
        } else {
            self.variant.descriptor()
        };
        let d = d.padding(self.size.inline_padding());
        if d.has_border() && d.border_type == BorderType::Plain {
            d.border_type(self.rounded.border_type())
        } else {
            d
        }
    }

    fn message(&self) -> Option<(&'a str, StyleDescriptor)> {
        match self.error {
            Some(error) => Some((error, InputVariant::message_descriptor())),
            None => self.helper.map(|h| (h, InputVariant::helper_descriptor())),
        }
    }

    fn field_height(&self) -> u16 {
        let pad = self.size.inline_padding();
        // The underline takes the place of the bottom border; there is no top.
        let frame = if self.variant.is_underlined() { 1 } else { 2 };
        1 + pad.top + pad.bottom + frame
    }

    /// Rows needed to draw the label, field and message.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label.is_some());
        let message = u16::from(self.message().is_some());
        label + self.field_height() + message
    }
}

impl StatefulWidget for Input<'_> {
    type State = InputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let mut y = area.y;

        if let Some(label) = self.label {
            let disabled = state.disabled || state.read_only;
            let mut spans = vec![Span::styled(
                label,
                InputVariant::label_descriptor(self.error.is_some(), disabled).to_style(),
            )];
            if self.required {
                spans.push(Span::styled(" *", InputVariant::required_descriptor().to_style()));
            }
            buf.set_line(area.x, y, &Line::from(spans), area.width);
            y += 1;
        }
        if y >= area.bottom() {
            return;
        }

        let d = self.descriptor(state);
        let field_height = self.field_height().min(area.bottom() - y);
        let field = Rect::new(area.x, y, area.width, field_height);
        let inner = if self.variant.is_underlined() {
            let boxed = Rect {
                height: field.height.saturating_sub(1),
                ..field
            };
            let block = d.block();
            let inner = block.inner(boxed);
            block.render(boxed, buf);
            if field.height > 0 {
                let rule = "─".repeat(usize::from(field.width));
                buf.set_stringn(field.x, field.bottom() - 1, rule, usize::from(field.width), d.border_style());
            }
            inner
        } else {
            let block = d.block();
            let inner = block.inner(field);
            block.render(field, buf);
            inner
        };
        y = field.bottom();

        if !inner.is_empty() {
            let row = inner.y + inner.height.saturating_sub(1) / 2;
            let muted = InputVariant::muted_descriptor().to_style();
            let mut left = inner.x;
            let mut right = inner.right();
            if let Some(icon) = self.left_icon {
                buf.set_stringn(left, row, icon.glyph(), usize::from(right - left), muted);
                left = (left + 2).min(right);
            }
            if let Some(icon) = self.right_icon {
                if right - left >= 2 {
                    right -= 1;
                    buf.set_stringn(right, row, icon.glyph(), 1, muted);
                    right -= 1;
                }
            }
            let text = Rect::new(left, row, right - left, 1);
            state.field = text;
            render_text(&self, text, buf, state);
        } else {
            state.field = Rect::default();
        }

        if let Some((message, style)) = self.message() {
            if y < area.bottom() {
                let message = truncate_with_ellipsis(message, usize::from(area.width));
                buf.set_stringn(area.x, y, message, usize::from(area.width), style.to_style());
            }
        }
    }
}

fn render_text(input: &Input<'_>, text: Rect, buf: &mut Buffer, state: &mut InputState) {
    let width = usize::from(text.width);
    if width == 0 {
        return;
    }
    if state.value.is_empty() {
        if let Some(placeholder) = input.placeholder {
            let style = InputVariant::muted_descriptor().to_style();
            buf.set_stringn(text.x, text.y, truncate_with_ellipsis(placeholder, width), width, style);
        }
    } else {
        let shown: Vec<char> = if input.masked {
            vec![MASK_GLYPH; state.len()]
        } else {
            state.value.chars().collect()
        };
        let widths: Vec<usize> = shown.iter().map(|c| c.width().unwrap_or(0)).collect();
        state.scroll(&widths, width);
        let visible: String = shown[state.offset..].iter().collect();
        buf.set_stringn(text.x, text.y, visible, width, Style::default());
    }

    if state.focused && !state.disabled {
        let before: usize = if input.masked {
            state.cursor - state.offset
        } else {
            state
                .value
                .chars()
                .skip(state.offset)
                .take(state.cursor - state.offset)
                .map(|c| c.width().unwrap_or(0))
                .sum()
        };
        if before < width {
            let x = text.x + u16::try_from(before).unwrap_or(text.width);
            buf[(x, text.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

impl Accessible for Input<'_> {
    fn aria_role(&self) -> &str {
        "textbox"
    }

    fn aria_label(&self) -> String {
        self.label.or(self.placeholder).unwrap_or_default().to_string()
    }

    fn aria_value(&self) -> Option<String> {
        self.error.map(|e| format!("invalid: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::Event;
    use tui_testing::{InputSequence, TestResult, TestTerminal};

    fn draw(input: Input<'_>, state: &mut InputState) -> TestTerminal {
        let mut terminal = TestTerminal::new(30, input.height());
        terminal.draw(|frame| frame.render_stateful_widget(input, frame.area(), state));
        terminal
    }

    fn replay(state: &mut InputState, input: &InputSequence) -> Vec<InputEvent> {
        let mut events = Vec::new();
        input.play(
            |event| {
                if let Event::Key(key) = event {
                    events.extend(state.handle_key(*key));
                }
            },
            |_| {},
        );
        events
    }

    #[test]
    fn test_typing_edits_at_cursor() {
        let mut state = InputState::new();
        state.focus();
        let mut input = InputSequence::new();
        input.char('a').char('c').left().char('b').key(KeyCode::End).char('d');
        let events = replay(&mut state, &input);
        assert_eq!(state.value(), "abcd");
        assert_eq!(events, vec![InputEvent::Changed; 4]);
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut state = InputState::with_value("héllo");
        state.focus();
        let mut input = InputSequence::new();
        input
            .key(KeyCode::Backspace)
            .key(KeyCode::Home)
            .right()
            .key(KeyCode::Delete);
        replay(&mut state, &input);
        assert_eq!(state.value(), "hll");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut state = InputState::new();
        let mut input = InputSequence::new();
        input.char('x').enter();
        assert!(replay(&mut state, &input).is_empty());
        assert_eq!(state.value(), "");
    }

    #[test]
    fn test_read_only_moves_but_does_not_edit() {
        let mut state = InputState::with_value("fixed");
        state.read_only = true;
        state.focus();
        let mut input = InputSequence::new();
        input.left().char('x').key(KeyCode::Backspace).enter();
        assert_eq!(replay(&mut state, &input), vec![InputEvent::Submitted]);
        assert_eq!(state.value(), "fixed");
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_disabled_cannot_focus() {
        let mut state = InputState::new();
        state.disabled = true;
        state.focus();
        assert!(!state.is_focused());
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut state = InputState::new();
        state.focus();
        let mut input = InputSequence::new();
        input.key_mod(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(replay(&mut state, &input).is_empty());
        assert_eq!(state.value(), "");
    }

    #[test]
    fn test_label_required_and_helper() {
        let mut state = InputState::new();
        let terminal = draw(
            Input::new()
                .label("Email")
                .required(true)
                .placeholder("you@example.com")
                .helper("We never share it"),
            &mut state,
        );
        terminal.assert_contains("Email *");
        terminal.assert_contains("you@example.com");
        terminal.assert_contains("We never share it");
        assert_eq!(terminal.cell(0, 1).as_deref(), Some("╭"));
    }

    #[test]
    fn test_error_replaces_helper() -> TestResult<()> {
        let mut state = InputState::with_value("nope");
        let input = Input::new()
            .label("Email")
            .helper("We never share it")
            .error(Some("Not an email address"));
        assert_eq!(input.aria_value().as_deref(), Some("invalid: Not an email address"));
        let terminal = draw(input, &mut state);
        terminal.assert_not_contains("We never share it");
        let (x, y) = terminal.locate("Not an email address")?;
        let style = terminal.style_at(x, y).unwrap();
        assert_eq!(style.fg, InputVariant::message_descriptor().fg);
        let corner = terminal.style_at(0, 1).unwrap();
        assert_eq!(corner.fg, InputVariant::Default.error_descriptor().border);
        Ok(())
    }

    #[test]
    fn test_masked_value() {
        let mut state = InputState::with_value("hunter2");
        let terminal = draw(Input::new().masked(true), &mut state);
        terminal.assert_contains("•••••••");
        terminal.assert_not_contains("hunter2");
    }

    #[test]
    fn test_icons_flank_the_text() {
        let mut state = InputState::with_value("query");
        let terminal = draw(
            Input::new()
                .left_icon(IconName::Search)
                .right_icon(IconName::Close),
            &mut state,
        );
        let line = terminal.line(1);
        let search = line.find(IconName::Search.glyph()).unwrap();
        let query = line.find("query").unwrap();
        let close = line.find(IconName::Close.glyph()).unwrap();
        assert!(search < query && query < close);
    }

    #[test]
    fn test_underlined_draws_rule() {
        let mut state = InputState::with_value("name");
        let input = Input::new().variant(InputVariant::Underlined);
        assert_eq!(input.height(), 2);
        let terminal = draw(input, &mut state);
        assert_eq!(terminal.line(0).trim_end(), "  name");
        assert!(terminal.line(1).starts_with("────"));
    }

    #[test]
    fn test_focused_cursor_cell_is_reversed() {
        let mut state = InputState::with_value("ab");
        state.focus();
        let terminal = draw(Input::new(), &mut state);
        let (x, y) = terminal.find("ab").unwrap();
        let cursor = terminal.style_at(x + 2, y).unwrap();
        assert!(cursor.add_modifier.contains(Modifier::REVERSED));
        let text = terminal.style_at(x, y).unwrap();
        assert!(!text.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let mut state = InputState::with_value("abcdefghijklmnopqrstuvwxyz0123456789");
        state.focus();
        let terminal = draw(Input::new(), &mut state);
        terminal.assert_contains("6789");
        terminal.assert_not_contains("abc");

        let mut input = InputSequence::new();
        input.key(KeyCode::Home);
        replay(&mut state, &input);
        let terminal = draw(Input::new(), &mut state);
        terminal.assert_contains("abc");
    }

    #[test]
    fn test_click_focuses_and_places_cursor() -> TestResult<()> {
        let mut state = InputState::with_value("hello");
        let terminal = draw(Input::new().label("Name"), &mut state);
        let (x, y) = terminal.locate("hello")?;

        let mut input = InputSequence::new();
        input.click(x + 2, y).click(0, 0);
        let mut hits = Vec::new();
        input.play(
            |event| {
                if let Event::Mouse(mouse) = event {
                    hits.push(state.handle_mouse(*mouse));
                    hits.push(state.is_focused());
                    if hits.len() == 2 {
                        assert_eq!(state.cursor(), 2);
                    }
                }
            },
            |_| {},
        );
        assert_eq!(hits, vec![true, true, false, false]);
        Ok(())
    }

    #[test]
    fn test_height_counts_rows() {
        assert_eq!(Input::new().height(), 3);
        assert_eq!(Input::new().label("A").helper("B").height(), 5);
        assert_eq!(Input::new().size(Size::Large).height(), 5);
    }

    #[test]
    fn test_short_area_draws_label_only() {
        let mut state = InputState::new();
        let mut terminal = TestTerminal::new(20, 1);
        terminal.draw(|frame| {
            frame.render_stateful_widget(Input::new().label("Name"), frame.area(), &mut state);
        });
        terminal.assert_contains("Name");
    }
}
