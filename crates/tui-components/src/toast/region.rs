//! A stack and a surface bound together for one screen.

use super::config::ToastConfig;
use super::entity::{Toast, ToastId, ToastSpec};
use super::stack::{ListenerId, StackEvent, ToastStack};
use super::surface::{ToastPhase, ToastSurface, ToastTransition};
use crate::clock::{Clock, SystemClock};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::fmt;
use std::time::{Duration, Instant};

/// One [`ToastStack`] rendered by one [`ToastSurface`], timed by a [`Clock`].
///
/// Dropping the region cancels every pending timer.
pub struct ToastRegion {
    stack: ToastStack,
    surface: ToastSurface,
    clock: Box<dyn Clock>,
    /// Transitions produced outside `tick`, returned by the next `tick`.
    backlog: Vec<ToastTransition>,
}

impl ToastRegion {
    /// Create a region on the system clock.
    pub fn new(config: ToastConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a region on the given clock.
    pub fn with_clock(config: ToastConfig, clock: impl Clock + 'static) -> Self {
        Self {
            stack: ToastStack::new(),
            surface: ToastSurface::new(config),
            clock: Box::new(clock),
            backlog: Vec::new(),
        }
    }

    /// Current instant on the region's clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    fn sync(&mut self) {
        let now = self.clock.now();
        let transitions = self.surface.sync(&self.stack, now);
        self.backlog.extend(transitions);
    }

    /// Add a toast. It mounts immediately when there is room.
    pub fn create(&mut self, spec: ToastSpec) -> ToastId {
        let id = self.stack.create(spec);
        self.sync();
        id
    }

    /// Dismiss a toast.
    ///
    /// A mounted toast plays its exit phase first. A queued toast is removed
    /// at once. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if self.surface.is_mounted(id) {
            let now = self.clock.now();
            return self.surface.request_dismiss(id, now);
        }
        if self.stack.dismiss(id) {
            self.sync();
            return true;
        }
        false
    }

    /// Remove every toast immediately, skipping exit phases.
    pub fn dismiss_all(&mut self) -> usize {
        let count = self.stack.dismiss_all();
        self.sync();
        count
    }

    /// Fire due timers. Returns every transition since the previous tick.
    pub fn tick(&mut self) -> Vec<ToastTransition> {
        let now = self.clock.now();
        let mut transitions = std::mem::take(&mut self.backlog);
        transitions.extend(self.surface.tick(&mut self.stack, now));
        transitions
    }

    /// Handle a click at a cell. Returns whether it hit a close glyph.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.surface.close_button_at(column, row) {
            Some(id) => self.dismiss(id),
            None => false,
        }
    }

    /// Handle a mouse event. Returns whether it was consumed.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.click(event.column, event.row) {
                    return true;
                }
                self.surface.toast_at(event.column, event.row).is_some()
            }
            _ => false,
        }
    }

    /// Mounted toasts in display order with their phases.
    pub fn visible(&self) -> Vec<(ToastId, ToastPhase)> {
        self.surface
            .visible_prefix(&self.stack)
            .into_iter()
            .filter_map(|id| self.surface.phase(id).map(|phase| (id, phase)))
            .collect()
    }

    /// Phase of a toast. `None` while queued or once removed.
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.surface.phase(id)
    }

    /// Look up a live toast.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.stack.get(id)
    }

    /// Number of live toasts, mounted or queued.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether there are no live toasts.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of toasts waiting for room.
    pub fn queued(&self) -> usize {
        self.stack.len().saturating_sub(self.surface.mounted_len())
    }

    /// Read access to the stack.
    pub fn stack(&self) -> &ToastStack {
        &self.stack
    }

    /// Read access to the surface.
    pub fn surface(&self) -> &ToastSurface {
        &self.surface
    }

    /// Surface configuration.
    pub fn config(&self) -> &ToastConfig {
        self.surface.config()
    }

    /// Replace the surface configuration and re-mount.
    pub fn set_config(&mut self, config: ToastConfig) {
        self.surface.set_config(config);
        self.sync();
    }

    /// Register a stack listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&StackEvent) + 'static) -> ListenerId {
        self.stack.subscribe(listener)
    }

    /// Remove a stack listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.stack.unsubscribe(id)
    }

    /// Earliest timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.surface.next_deadline()
    }

    /// Time until the earliest timer deadline.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_deadline()
            .map(|at| at.saturating_duration_since(now))
    }
}

impl Widget for &mut ToastRegion {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.sync();
        let now = self.clock.now();
        self.surface.render(&self.stack, now, area, buf);
    }
}

impl Drop for ToastRegion {
    fn drop(&mut self) {
        tracing::debug!(
            toasts = self.stack.len(),
            timers = self.surface.armed_timers(),
            "toast region torn down"
        );
        self.surface.clear();
    }
}

impl fmt::Debug for ToastRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRegion")
            .field("stack", &self.stack)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crossterm::event::KeyModifiers;
    use tui_testing::TestTerminal;

    fn region() -> (ToastRegion, ManualClock) {
        let clock = ManualClock::new();
        (
            ToastRegion::with_clock(ToastConfig::default(), clock.clone()),
            clock,
        )
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_create_mounts_immediately() {
        let (mut region, _clock) = region();
        let id = region.create(ToastSpec::info("hello"));
        assert_eq!(region.visible(), vec![(id, ToastPhase::Entering)]);

        let transitions = region.tick();
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from, None);
    }

    #[test]
    fn test_auto_dismiss_with_manual_clock() {
        let (mut region, clock) = region();
        let id = region.create(ToastSpec::success("Saved").duration_ms(1000));

        clock.advance_ms(50);
        region.tick();
        assert_eq!(region.phase(id), Some(ToastPhase::Visible));
        assert_eq!(region.time_until_next(), Some(Duration::from_millis(1000)));

        clock.advance_ms(1000);
        region.tick();
        assert_eq!(region.phase(id), Some(ToastPhase::Exiting));

        clock.advance_ms(300);
        region.tick();
        assert!(region.is_empty());
        assert_eq!(region.next_deadline(), None);
    }

    #[test]
    fn test_dismiss_queued_is_immediate() {
        let clock = ManualClock::new();
        let mut region =
            ToastRegion::with_clock(ToastConfig::default().max_visible(1), clock.clone());
        let a = region.create(ToastSpec::info("a"));
        let b = region.create(ToastSpec::info("b"));
        assert_eq!(region.queued(), 1);

        assert!(region.dismiss(b));
        assert!(region.get(b).is_none());
        assert!(region.get(a).is_some());
        assert!(!region.dismiss(b));
    }

    #[test]
    fn test_dismiss_mounted_plays_exit() {
        let (mut region, clock) = region();
        let a = region.create(ToastSpec::info("a"));

        assert!(region.dismiss(a));
        assert_eq!(region.phase(a), Some(ToastPhase::Exiting));
        assert!(!region.dismiss(a));

        clock.advance_ms(300);
        region.tick();
        assert!(region.get(a).is_none());
    }

    #[test]
    fn test_dismiss_all_is_immediate() {
        let (mut region, _clock) = region();
        for i in 0..8 {
            region.create(ToastSpec::info(format!("{i}")));
        }
        assert_eq!(region.visible().len(), 5);
        assert_eq!(region.queued(), 3);

        assert_eq!(region.dismiss_all(), 8);
        assert!(region.is_empty());
        assert!(region.visible().is_empty());
        assert_eq!(region.next_deadline(), None);
    }

    #[test]
    fn test_click_close_glyph() {
        let (mut region, clock) = region();
        let id = region.create(ToastSpec::warning("Disk almost full"));
        clock.advance_ms(50);
        region.tick();

        let mut terminal = TestTerminal::new(80, 24);
        terminal.draw(|frame| frame.render_widget(&mut region, frame.area()));
        assert!(terminal.contains("Disk almost full"));
        let (x, y) = terminal.find("✕").unwrap();

        assert!(!region.handle_mouse(left_click(0, 0)));
        assert!(region.handle_mouse(left_click(x, y)));
        assert_eq!(region.phase(id), Some(ToastPhase::Exiting));
    }

    #[test]
    fn test_subscribe_sees_removal() {
        let (mut region, clock) = region();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&seen);
        region.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let id = region.create(ToastSpec::info("x").duration_ms(10));
        clock.advance_ms(1000);
        region.tick();

        assert_eq!(
            *seen.borrow(),
            vec![StackEvent::Created(id), StackEvent::Dismissed(id)]
        );
    }
}
