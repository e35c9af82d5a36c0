//! Hover tooltip.
//!
//! Hover is a small state machine: entering the anchor arms a show deadline,
//! `tick` reveals the bubble once it passes, and leaving hides it and drops
//! any pending show. A zero delay shows the bubble on enter.

use crate::accessibility::Accessible;
use crate::text::{display_width, truncate_with_ellipsis};
use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, StatefulWidget, Widget};
use std::time::{Duration, Instant};
use tui_style::{Align, Placement, Size, TooltipVariant};

/// Hover state of one tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    /// Shown once the deadline passes.
    Pending(Instant),
    Shown,
}

impl TooltipState {
    /// Pointer entered the anchor.
    pub fn hover_enter(&mut self, now: Instant, delay: Duration) {
        match self {
            Self::Hidden if delay.is_zero() => *self = Self::Shown,
            Self::Hidden => {
                if let Some(at) = now.checked_add(delay) {
                    *self = Self::Pending(at);
                }
            }
            Self::Pending(_) | Self::Shown => {}
        }
    }

    /// Pointer left the anchor.
    pub fn hover_leave(&mut self) {
        *self = Self::Hidden;
    }

    /// Reveal a pending bubble whose deadline has passed. Returns whether it
    /// became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        match *self {
            Self::Pending(at) if now >= at => {
                *self = Self::Shown;
                true
            }
            _ => false,
        }
    }

    /// Route a pointer move: inside `anchor` enters, outside leaves.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        anchor: Rect,
        now: Instant,
        delay: Duration,
    ) {
        if !matches!(event.kind, MouseEventKind::Moved) {
            return;
        }
        if anchor.contains(Position::new(event.column, event.row)) {
            self.hover_enter(now, delay);
        } else {
            self.hover_leave();
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }

    /// Pending show deadline.
    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Self::Pending(at) => Some(*at),
            _ => None,
        }
    }
}

/// One-line bubble placed next to an anchor rectangle.
#[derive(Debug, Clone)]
pub struct Tooltip<'a> {
    text: &'a str,
    anchor: Rect,
    variant: TooltipVariant,
    placement: Placement,
    align: Align,
    size: Size,
    show_arrow: bool,
}

impl<'a> Tooltip<'a> {
    pub fn new(text: &'a str, anchor: Rect) -> Self {
        Self {
            text,
            anchor,
            variant: TooltipVariant::default(),
            placement: Placement::default(),
            align: Align::default(),
            size: Size::Small,
            show_arrow: true,
        }
    }

    pub fn variant(mut self, variant: TooltipVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn show_arrow(mut self, show: bool) -> Self {
        self.show_arrow = show;
        self
    }

    fn bubble_size(&self, max_width: u16) -> (u16, u16) {
        let d = self.variant.descriptor();
        let pad = self.size.inline_padding();
        let border = if d.has_border() { 2 } else { 0 };
        let text = u16::try_from(display_width(self.text)).unwrap_or(u16::MAX);
        let width = (text + pad.left + pad.right + border).min(max_width);
        (width, 1 + pad.top + pad.bottom + border)
    }

    /// Bubble and arrow cells, clamped to `area`.
    pub fn layout(&self, area: Rect) -> (Rect, Position) {
        let (w, h) = self.bubble_size(area.width);
        let a = self.anchor;
        let (w, h) = (i32::from(w), i32::from(h));
        let (ax, ay) = (i32::from(a.x), i32::from(a.y));
        let (aw, ah) = (i32::from(a.width), i32::from(a.height));
        let center_x = ax + aw / 2;
        let center_y = ay + ah / 2;

        let aligned_x = match self.align {
            Align::Center => center_x - w / 2,
            Align::Left => ax + aw - w,
            Align::Right => ax,
        };
        let (x, y, arrow) = match self.placement {
            Placement::Top => (aligned_x, ay - 1 - h, (center_x, ay - 1)),
            Placement::Bottom => (aligned_x, ay + ah + 1, (center_x, ay + ah)),
            Placement::Left => (ax - 1 - w, center_y - h / 2, (ax - 1, center_y)),
            Placement::Right => (ax + aw + 1, center_y - h / 2, (ax + aw, center_y)),
        };

        let clamp_x = |v: i32, span: i32| {
            v.clamp(i32::from(area.x), (i32::from(area.right()) - span).max(i32::from(area.x)))
        };
        let clamp_y = |v: i32, span: i32| {
            v.clamp(i32::from(area.y), (i32::from(area.bottom()) - span).max(i32::from(area.y)))
        };
        let to_u16 = |v: i32| u16::try_from(v).unwrap_or(0);

        let bubble = Rect::new(
            to_u16(clamp_x(x, w)),
            to_u16(clamp_y(y, h)),
            to_u16(w),
            to_u16(h.min(i32::from(area.height))),
        );
        let arrow = Position::new(to_u16(clamp_x(arrow.0, 1)), to_u16(clamp_y(arrow.1, 1)));
        (bubble, arrow)
    }
}

impl StatefulWidget for Tooltip<'_> {
    type State = TooltipState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.is_shown() || area.is_empty() {
            return;
        }
        let (bubble, arrow) = self.layout(area);
        let d = self.variant.descriptor().padding(self.size.inline_padding());

        Clear.render(bubble, buf);
        let block = d.block();
        let inner = block.inner(bubble);
        block.render(bubble, buf);
        if !inner.is_empty() {
            let text = truncate_with_ellipsis(self.text, usize::from(inner.width));
            buf.set_stringn(inner.x, inner.y, &text, usize::from(inner.width), d.to_style());
        }

        if self.show_arrow && !bubble.contains(arrow) && !self.anchor.contains(arrow) {
            let mut style = Style::default();
            if let Some(color) = self.variant.arrow_color() {
                style = style.fg(color);
            }
            buf.set_string(arrow.x, arrow.y, self.placement.arrow(), style);
        }
    }
}

impl Accessible for Tooltip<'_> {
    fn aria_role(&self) -> &str {
        "tooltip"
    }

    fn aria_label(&self) -> String {
        self.text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use tui_testing::TestTerminal;

    #[test]
    fn test_zero_delay_shows_immediately() {
        let clock = ManualClock::new();
        let mut state = TooltipState::default();
        state.hover_enter(clock.now(), Duration::ZERO);
        assert!(state.is_shown());
    }

    #[test]
    fn test_delay_then_tick() {
        let clock = ManualClock::new();
        let mut state = TooltipState::default();
        state.hover_enter(clock.now(), Duration::from_millis(300));
        assert!(!state.is_shown());
        assert!(state.deadline().is_some());

        clock.advance_ms(299);
        assert!(!state.tick(clock.now()));
        clock.advance_ms(1);
        assert!(state.tick(clock.now()));
        assert!(state.is_shown());
    }

    #[test]
    fn test_unreachable_delay_never_shows() {
        let clock = ManualClock::new();
        let mut state = TooltipState::default();
        state.hover_enter(clock.now(), Duration::MAX);
        assert_eq!(state, TooltipState::Hidden);
        clock.advance_ms(10_000);
        assert!(!state.tick(clock.now()));
    }

    #[test]
    fn test_leave_cancels_pending() {
        let clock = ManualClock::new();
        let mut state = TooltipState::default();
        state.hover_enter(clock.now(), Duration::from_millis(300));
        state.hover_leave();
        clock.advance_ms(1000);
        assert!(!state.tick(clock.now()));
        assert_eq!(state, TooltipState::Hidden);
    }

    #[test]
    fn test_reenter_keeps_original_deadline() {
        let clock = ManualClock::new();
        let mut state = TooltipState::default();
        state.hover_enter(clock.now(), Duration::from_millis(300));
        let first = state.deadline();
        clock.advance_ms(100);
        state.hover_enter(clock.now(), Duration::from_millis(300));
        assert_eq!(state.deadline(), first);
    }

    #[test]
    fn test_top_placement_renders_above() {
        let anchor = Rect::new(20, 10, 8, 1);
        let mut state = TooltipState::Shown;
        let mut terminal = TestTerminal::new(60, 20);
        terminal.draw(|frame| {
            let tip = Tooltip::new("Copy link", anchor);
            frame.render_stateful_widget(tip, frame.area(), &mut state);
        });
        let (_, y) = terminal.find("Copy link").unwrap();
        assert!(y < anchor.y);
        assert_eq!(terminal.cell(24, 9).as_deref(), Some("▼"));
    }

    #[test]
    fn test_hidden_draws_nothing() {
        let anchor = Rect::new(20, 10, 8, 1);
        let mut state = TooltipState::Hidden;
        let mut terminal = TestTerminal::new(60, 20);
        terminal.draw(|frame| {
            let tip = Tooltip::new("Copy link", anchor);
            frame.render_stateful_widget(tip, frame.area(), &mut state);
        });
        terminal.assert_not_contains("Copy link");
    }

    #[test]
    fn test_layout_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let tip = Tooltip::new("Right at the edge", Rect::new(38, 0, 2, 1));
        let (bubble, _) = tip.layout(area);
        assert!(bubble.right() <= area.right());
        assert!(bubble.y >= area.y);
    }

    #[test]
    fn test_align_right_starts_at_anchor() {
        let area = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(30, 10, 10, 1);
        let (bubble, _) = Tooltip::new("Hi", anchor)
            .placement(Placement::Bottom)
            .align(Align::Right)
            .layout(area);
        assert_eq!(bubble.x, anchor.x);
        assert_eq!(bubble.y, anchor.bottom() + 1);
    }
}
