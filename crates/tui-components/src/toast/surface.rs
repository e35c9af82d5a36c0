//! Toast presentation surface.
//!
//! The surface renders the first `max_visible` toasts of a [`ToastStack`] and
//! owns every lifecycle timer. A toast is *mounted* while it sits in that
//! visible prefix:
//!
//! ```text
//! mount -> Entering --enter_delay--> Visible --duration--> Exiting --exit_duration--> Removed
//!                 \                        \                  ^
//!                  `------- dismiss -------`------------------'
//! ```
//!
//! Only the `Exiting -> Removed` step writes to the stack, through
//! [`ToastStack::dismiss`]. Anything that leaves the stack by another route
//! is unmounted on the next [`ToastSurface::sync`] with its timers cancelled.

use super::config::ToastConfig;
use super::entity::{Toast, ToastId};
use super::stack::ToastStack;
use crate::callout::Callout;
use crate::scheduler::{Scheduler, TimerId};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Clear, Widget};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tui_style::Rounded;

/// Lifecycle phase of a mounted toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastPhase {
    /// Just mounted, not yet fully shown.
    Entering,
    /// Fully shown; the auto-dismiss timer runs here.
    Visible,
    /// Leaving; removal follows after the exit duration.
    Exiting,
    /// Gone from the stack.
    Removed,
}

impl fmt::Display for ToastPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entering => "entering",
            Self::Visible => "visible",
            Self::Exiting => "exiting",
            Self::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// A phase change observed by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTransition {
    /// Toast that changed.
    pub id: ToastId,
    /// Previous phase, `None` when the toast was just mounted.
    pub from: Option<ToastPhase>,
    /// New phase.
    pub to: ToastPhase,
    /// When the change took effect.
    pub at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Enter,
    AutoDismiss,
    Exit,
}

#[derive(Debug)]
struct Mounted {
    phase: ToastPhase,
    duration: Duration,
    enter: Option<TimerId>,
    auto: Option<TimerId>,
    exit: Option<TimerId>,
}

impl Mounted {
    fn armed(&self) -> impl Iterator<Item = TimerId> {
        [self.enter, self.auto, self.exit].into_iter().flatten()
    }
}

/// Renders the visible prefix of a [`ToastStack`] and drives its lifecycle.
#[derive(Debug)]
pub struct ToastSurface {
    config: ToastConfig,
    mounted: HashMap<ToastId, Mounted>,
    timers: Scheduler<(ToastId, TimerKind)>,
    pending: Vec<ToastTransition>,
    /// Close glyph hit areas from the last render.
    close_hits: Vec<(Rect, ToastId)>,
    /// Toast areas from the last render.
    toast_hits: Vec<(Rect, ToastId)>,
}

impl ToastSurface {
    /// Create a surface with the given configuration.
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            mounted: HashMap::new(),
            timers: Scheduler::new(),
            pending: Vec::new(),
            close_hits: Vec::new(),
            toast_hits: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next sync.
    pub fn set_config(&mut self, config: ToastConfig) {
        self.config = config;
    }

    /// Ids of the toasts that should be on screen, in display order.
    pub fn visible_prefix(&self, stack: &ToastStack) -> Vec<ToastId> {
        stack.iter().take(self.config.max_visible).map(Toast::id).collect()
    }

    /// Mount toasts that entered the visible prefix and unmount those that left.
    pub fn sync(&mut self, stack: &ToastStack, now: Instant) -> Vec<ToastTransition> {
        self.reconcile(stack, now);
        std::mem::take(&mut self.pending)
    }

    fn reconcile(&mut self, stack: &ToastStack, now: Instant) {
        let prefix = self.visible_prefix(stack);

        let mut gone: Vec<ToastId> = self
            .mounted
            .keys()
            .copied()
            .filter(|id| !prefix.contains(id))
            .collect();
        gone.sort();
        for id in gone {
            self.unmount(id, stack.contains(id), now);
        }

        for toast in stack.iter().take(self.config.max_visible) {
            if !self.mounted.contains_key(&toast.id()) {
                self.mount(toast, now);
            }
        }
    }

    fn mount(&mut self, toast: &Toast, now: Instant) {
        let id = toast.id();
        let enter = self
            .timers
            .schedule_after(now, self.config.enter_delay(), (id, TimerKind::Enter));
        self.mounted.insert(
            id,
            Mounted {
                phase: ToastPhase::Entering,
                duration: toast.duration(),
                enter,
                auto: None,
                exit: None,
            },
        );
        tracing::trace!(%id, "toast mounted");
        self.record(id, None, ToastPhase::Entering, now);
    }

    fn unmount(&mut self, id: ToastId, still_queued: bool, now: Instant) {
        let Some(mounted) = self.mounted.remove(&id) else {
            return;
        };
        for timer in mounted.armed() {
            self.timers.cancel(timer);
        }
        tracing::trace!(%id, still_queued, "toast unmounted");
        if !still_queued {
            self.record(id, Some(mounted.phase), ToastPhase::Removed, now);
        }
    }

    fn record(&mut self, id: ToastId, from: Option<ToastPhase>, to: ToastPhase, at: Instant) {
        self.pending.push(ToastTransition { id, from, to, at });
    }

    /// Start the exit phase of a mounted toast.
    ///
    /// Cancels whichever of the enter and auto-dismiss timers is armed before
    /// arming the exit timer. Returns `false` when the toast is not mounted
    /// or is already exiting.
    pub fn request_dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(mounted) = self.mounted.get_mut(&id) else {
            return false;
        };
        if !matches!(mounted.phase, ToastPhase::Entering | ToastPhase::Visible) {
            return false;
        }
        let from = mounted.phase;
        for timer in [mounted.enter.take(), mounted.auto.take()].into_iter().flatten() {
            self.timers.cancel(timer);
        }
        mounted.phase = ToastPhase::Exiting;
        mounted.exit = self.timers.schedule_after(
            now,
            self.config.exit_duration(),
            (id, TimerKind::Exit),
        );
        tracing::debug!(%id, %from, "toast dismiss requested");
        self.record(id, Some(from), ToastPhase::Exiting, now);
        true
    }

    /// Fire every timer due at `now`, in deadline order.
    ///
    /// Each transition takes effect at its timer's deadline, so a late tick
    /// produces the same result as a punctual one. Returns every transition
    /// since the previous call, including those from [`Self::request_dismiss`].
    pub fn tick(&mut self, stack: &mut ToastStack, now: Instant) -> Vec<ToastTransition> {
        self.reconcile(stack, now);

        while let Some(due) = self.timers.pop_due(now) {
            let (id, kind) = due.key;
            let at = due.deadline;
            tracing::trace!(%id, ?kind, timer = %due.id, "toast timer fired");
            let Some(mounted) = self.mounted.get_mut(&id) else {
                continue;
            };

            match kind {
                TimerKind::Enter => {
                    mounted.enter = None;
                    mounted.phase = ToastPhase::Visible;
                    // Zero means sticky; a duration past the clock's range never fires
                    if !mounted.duration.is_zero() {
                        mounted.auto = self.timers.schedule_after(
                            at,
                            mounted.duration,
                            (id, TimerKind::AutoDismiss),
                        );
                    }
                    self.record(id, Some(ToastPhase::Entering), ToastPhase::Visible, at);
                }
                TimerKind::AutoDismiss => {
                    mounted.auto = None;
                    mounted.phase = ToastPhase::Exiting;
                    mounted.exit = self.timers.schedule_after(
                        at,
                        self.config.exit_duration(),
                        (id, TimerKind::Exit),
                    );
                    tracing::debug!(%id, "toast expired");
                    self.record(id, Some(ToastPhase::Visible), ToastPhase::Exiting, at);
                }
                TimerKind::Exit => {
                    self.mounted.remove(&id);
                    self.record(id, Some(ToastPhase::Exiting), ToastPhase::Removed, at);
                    stack.dismiss(id);
                    self.reconcile(stack, at);
                }
            }
        }

        std::mem::take(&mut self.pending)
    }

    /// Phase of a mounted toast. `None` for queued, removed or unknown ids.
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.mounted.get(&id).map(|m| m.phase)
    }

    /// Whether a toast is mounted.
    pub fn is_mounted(&self, id: ToastId) -> bool {
        self.mounted.contains_key(&id)
    }

    /// Number of mounted toasts.
    pub fn mounted_len(&self) -> usize {
        self.mounted.len()
    }

    /// Earliest armed timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Number of armed timers.
    pub fn armed_timers(&self) -> usize {
        self.timers.len()
    }

    /// Fraction of the auto-dismiss time left, for the gauge.
    pub fn remaining(&self, id: ToastId, now: Instant) -> Option<f64> {
        let mounted = self.mounted.get(&id)?;
        if mounted.duration.is_zero() {
            return None;
        }
        let ratio = match mounted.phase {
            ToastPhase::Entering => 1.0,
            ToastPhase::Visible => {
                let deadline = mounted.auto.and_then(|t| self.timers.deadline(t))?;
                let left = deadline.saturating_duration_since(now);
                left.as_secs_f64() / mounted.duration.as_secs_f64()
            }
            ToastPhase::Exiting | ToastPhase::Removed => 0.0,
        };
        Some(ratio)
    }

    /// Toast whose close glyph was drawn at the given cell on the last render.
    pub fn close_button_at(&self, column: u16, row: u16) -> Option<ToastId> {
        hit(&self.close_hits, column, row)
    }

    /// Toast drawn at the given cell on the last render.
    pub fn toast_at(&self, column: u16, row: u16) -> Option<ToastId> {
        hit(&self.toast_hits, column, row)
    }

    /// Cancel every timer and forget every mounted toast.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.mounted.clear();
        self.pending.clear();
        self.close_hits.clear();
        self.toast_hits.clear();
    }

    /// Draw the mounted toasts into the configured anchor column of `area`.
    ///
    /// Toasts are laid out in display order until the column is full. The ones
    /// that do not fit are not drawn and get no hit areas, but they stay
    /// mounted: their timers keep running, so one can expire off screen. They
    /// show up on a later render once the column has room.
    pub fn render(&mut self, stack: &ToastStack, now: Instant, area: Rect, buf: &mut Buffer) {
        self.close_hits.clear();
        self.toast_hits.clear();

        let column = self.config.position.column(area, self.config.width);
        if column.is_empty() {
            return;
        }

        let mut placed = Vec::new();
        let mut total: u16 = 0;
        for toast in stack.iter().take(self.config.max_visible) {
            let Some(phase) = self.phase(toast.id()) else {
                continue;
            };
            let callout = self.callout(toast, phase, now);
            let height = callout.height(column.width);
            if total + height > column.height {
                break;
            }
            total += height;
            placed.push((toast.id(), callout, height));
        }

        let mut y = if self.config.position.is_top() {
            column.y
        } else {
            column.bottom() - total
        };
        for (id, callout, height) in placed {
            let rect = Rect::new(column.x, y, column.width, height);
            Clear.render(rect, buf);
            let layout = callout.render(rect, buf);
            if let Some(close) = layout.close {
                self.close_hits.push((close, id));
            }
            self.toast_hits.push((rect, id));
            y += height;
        }
    }

    fn callout<'a>(&self, toast: &'a Toast, phase: ToastPhase, now: Instant) -> Callout<'a> {
        let variant = toast.variant();
        let style = variant
            .descriptor()
            .border_type(Rounded::Md.border_type())
            .padding(toast.size().container_padding());
        Callout::new(style)
            .title_style(variant.title_descriptor().to_style())
            .icon(Some(toast.icon()))
            .title(toast.title())
            .body(toast.message())
            .closable(toast.closable())
            .gauge(self.remaining(toast.id(), now))
            .dimmed(phase != ToastPhase::Visible)
    }
}

impl Default for ToastSurface {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

fn hit(areas: &[(Rect, ToastId)], column: u16, row: u16) -> Option<ToastId> {
    let pos = Position::new(column, row);
    areas
        .iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::entity::ToastSpec;
    use crate::toast::ToastPosition;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup(max_visible: usize) -> (ToastStack, ToastSurface, Instant) {
        let config = ToastConfig::default().max_visible(max_visible);
        (ToastStack::new(), ToastSurface::new(config), Instant::now())
    }

    #[test]
    fn test_sync_mounts_entering() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a"));
        let b = stack.create(ToastSpec::info("b"));

        let transitions = surface.sync(&stack, t0);
        assert_eq!(transitions.len(), 2);
        assert!(transitions.iter().all(|t| t.from.is_none() && t.to == ToastPhase::Entering));
        assert_eq!(surface.phase(a), Some(ToastPhase::Entering));
        assert_eq!(surface.phase(b), Some(ToastPhase::Entering));
        assert_eq!(surface.next_deadline(), Some(t0 + ms(50)));
    }

    #[test]
    fn test_full_lifecycle_timing() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a").duration_ms(1000));
        surface.sync(&stack, t0);

        surface.tick(&mut stack, t0 + ms(49));
        assert_eq!(surface.phase(a), Some(ToastPhase::Entering));

        surface.tick(&mut stack, t0 + ms(50));
        assert_eq!(surface.phase(a), Some(ToastPhase::Visible));

        surface.tick(&mut stack, t0 + ms(1049));
        assert_eq!(surface.phase(a), Some(ToastPhase::Visible));

        surface.tick(&mut stack, t0 + ms(1050));
        assert_eq!(surface.phase(a), Some(ToastPhase::Exiting));

        surface.tick(&mut stack, t0 + ms(1349));
        assert!(stack.contains(a));

        let transitions = surface.tick(&mut stack, t0 + ms(1350));
        assert!(!stack.contains(a));
        assert_eq!(surface.phase(a), None);
        assert_eq!(
            transitions,
            vec![ToastTransition {
                id: a,
                from: Some(ToastPhase::Exiting),
                to: ToastPhase::Removed,
                at: t0 + ms(1350),
            }]
        );
        assert_eq!(surface.armed_timers(), 0);
    }

    #[test]
    fn test_late_tick_applies_every_step() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a").duration_ms(100));
        surface.sync(&stack, t0);

        let transitions = surface.tick(&mut stack, t0 + ms(10_000));
        let phases: Vec<_> = transitions.iter().map(|t| (t.to, t.at)).collect();
        assert_eq!(
            phases,
            vec![
                (ToastPhase::Visible, t0 + ms(50)),
                (ToastPhase::Exiting, t0 + ms(150)),
                (ToastPhase::Removed, t0 + ms(450)),
            ]
        );
        assert!(!stack.contains(a));
    }

    #[test]
    fn test_zero_duration_never_expires() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("sticky").sticky());
        surface.sync(&stack, t0);
        surface.tick(&mut stack, t0 + ms(50));
        surface.tick(&mut stack, t0 + Duration::from_secs(3600));

        assert_eq!(surface.phase(a), Some(ToastPhase::Visible));
        assert_eq!(surface.armed_timers(), 0);
        assert_eq!(surface.next_deadline(), None);
        assert_eq!(surface.remaining(a, t0), None);
    }

    #[test]
    fn test_unbounded_duration_stays_visible() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("long").duration(Duration::MAX));
        surface.sync(&stack, t0);

        surface.tick(&mut stack, t0 + ms(50));
        assert_eq!(surface.phase(a), Some(ToastPhase::Visible));
        assert_eq!(surface.armed_timers(), 0);
        assert_eq!(surface.remaining(a, t0 + ms(60)), None);

        assert!(surface.request_dismiss(a, t0 + ms(100)));
        surface.tick(&mut stack, t0 + ms(400));
        assert!(!stack.contains(a));
    }

    #[test]
    fn test_dismiss_while_entering_cancels_enter() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a"));
        surface.sync(&stack, t0);

        assert!(surface.request_dismiss(a, t0 + ms(10)));
        surface.tick(&mut stack, t0 + ms(60));
        assert_eq!(surface.phase(a), Some(ToastPhase::Exiting));
        assert_eq!(surface.armed_timers(), 1);

        surface.tick(&mut stack, t0 + ms(310));
        assert!(!stack.contains(a));
    }

    #[test]
    fn test_dismiss_while_visible_cancels_auto() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a").duration_ms(200));
        surface.sync(&stack, t0);
        surface.tick(&mut stack, t0 + ms(50));

        assert!(surface.request_dismiss(a, t0 + ms(100)));
        assert_eq!(surface.armed_timers(), 1);
        assert_eq!(surface.next_deadline(), Some(t0 + ms(400)));

        let transitions = surface.tick(&mut stack, t0 + ms(400));
        assert_eq!(transitions.first().map(|t| t.to), Some(ToastPhase::Exiting));
        assert_eq!(transitions.last().map(|t| t.to), Some(ToastPhase::Removed));
    }

    #[test]
    fn test_dismiss_while_exiting_is_noop() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a"));
        surface.sync(&stack, t0);

        assert!(surface.request_dismiss(a, t0));
        assert!(!surface.request_dismiss(a, t0 + ms(100)));
        assert_eq!(surface.next_deadline(), Some(t0 + ms(300)));
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a"));
        assert!(!surface.request_dismiss(a, t0));
        surface.sync(&stack, t0);
        surface.request_dismiss(a, t0);
        surface.tick(&mut stack, t0 + ms(300));
        assert!(!surface.request_dismiss(a, t0 + ms(301)));
    }

    #[test]
    fn test_overflow_promotes_fifo() {
        let (mut stack, mut surface, t0) = setup(2);
        let a = stack.create(ToastSpec::info("a"));
        let b = stack.create(ToastSpec::info("b"));
        let c = stack.create(ToastSpec::info("c"));
        surface.sync(&stack, t0);

        assert!(surface.is_mounted(a));
        assert!(surface.is_mounted(b));
        assert!(!surface.is_mounted(c));
        assert_eq!(surface.visible_prefix(&stack), vec![a, b]);

        surface.request_dismiss(a, t0 + ms(60));
        surface.tick(&mut stack, t0 + ms(360));

        assert_eq!(surface.visible_prefix(&stack), vec![b, c]);
        assert_eq!(surface.phase(c), Some(ToastPhase::Entering));
        assert_eq!(surface.next_deadline(), Some(t0 + ms(410)));
    }

    #[test]
    fn test_dismiss_all_unmounts_and_cancels() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a"));
        let b = stack.create(ToastSpec::info("b"));
        surface.sync(&stack, t0);
        surface.request_dismiss(b, t0);

        stack.dismiss_all();
        let transitions = surface.sync(&stack, t0 + ms(1));

        assert_eq!(surface.armed_timers(), 0);
        assert_eq!(surface.mounted_len(), 0);
        let removed: Vec<_> = transitions
            .iter()
            .filter(|t| t.to == ToastPhase::Removed)
            .map(|t| t.id)
            .collect();
        assert_eq!(removed, vec![a, b]);

        assert!(surface.tick(&mut stack, t0 + ms(10_000)).is_empty());
    }

    #[test]
    fn test_remaining_ratio() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a").duration_ms(1000));
        surface.sync(&stack, t0);
        assert_eq!(surface.remaining(a, t0), Some(1.0));

        surface.tick(&mut stack, t0 + ms(50));
        assert_eq!(surface.remaining(a, t0 + ms(550)), Some(0.5));
    }

    #[test]
    fn test_render_records_close_hits() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::success("Saved").title("Done"));
        let b = stack.create(ToastSpec::info("Note").closable(false));
        surface.sync(&stack, t0);
        surface.tick(&mut stack, t0 + ms(50));

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        surface.render(&stack, t0 + ms(50), area, &mut buf);

        let close = surface
            .close_hits
            .iter()
            .find(|(_, id)| *id == a)
            .map(|(rect, _)| *rect)
            .unwrap();
        assert_eq!(surface.close_button_at(close.x, close.y), Some(a));
        assert!(surface.close_hits.iter().all(|(_, id)| *id != b));
        assert_eq!(surface.toast_hits.len(), 2);
        // top-right anchor: 40 wide, one cell from the right edge
        assert_eq!(surface.toast_hits[0].0.x, 39);
        assert_eq!(surface.toast_hits[0].0.y, 1);
        assert_eq!(surface.toast_at(45, 2), Some(a));
    }

    #[test]
    fn test_render_short_column_keeps_timers_running() {
        let (mut stack, mut surface, t0) = setup(5);
        let a = stack.create(ToastSpec::info("a").duration_ms(100));
        let b = stack.create(ToastSpec::info("b").duration_ms(100));
        surface.sync(&stack, t0);

        let short = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(short);
        surface.render(&stack, t0, short, &mut buf);
        assert!(surface.toast_hits.is_empty());
        assert_eq!(surface.toast_at(45, 1), None);
        assert!(surface.is_mounted(a) && surface.is_mounted(b));

        surface.tick(&mut stack, t0 + ms(150));
        assert_eq!(surface.phase(a), Some(ToastPhase::Exiting));
        assert_eq!(surface.phase(b), Some(ToastPhase::Exiting));

        let tall = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(tall);
        surface.render(&stack, t0 + ms(150), tall, &mut buf);
        assert_eq!(surface.toast_hits.len(), 2);
    }

    #[test]
    fn test_render_bottom_anchor_hugs_bottom() {
        let config = ToastConfig::default().position(ToastPosition::BottomLeft);
        let mut surface = ToastSurface::new(config);
        let mut stack = ToastStack::new();
        let t0 = Instant::now();
        stack.create(ToastSpec::info("hello"));
        surface.sync(&stack, t0);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        surface.render(&stack, t0, area, &mut buf);

        let rect = surface.toast_hits[0].0;
        assert_eq!(rect.x, 1);
        assert_eq!(rect.bottom(), 23);
    }
}
