//! Scripted input for testing.
//!
//! A sequence interleaves terminal events with clock advances. Tests replay
//! it against a component and a manual clock, so timing stays deterministic.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// One step of an [`InputSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Deliver a terminal event.
    Event(Event),
    /// Advance the test clock.
    Wait(Duration),
}

/// A sequence of input events and clock advances.
#[derive(Debug, Clone, Default)]
pub struct InputSequence {
    steps: Vec<Step>,
}

impl InputSequence {
    /// Create a new empty input sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key event.
    pub fn key(&mut self, key: KeyCode) -> &mut Self {
        self.key_mod(key, KeyModifiers::NONE)
    }

    /// Add a key event with modifiers.
    pub fn key_mod(&mut self, key: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        let event = KeyEvent::new(key, modifiers);
        self.steps.push(Step::Event(Event::Key(event)));
        self
    }

    /// Add a character key event.
    pub fn char(&mut self, c: char) -> &mut Self {
        self.key(KeyCode::Char(c))
    }

    /// Add an Enter key event.
    pub fn enter(&mut self) -> &mut Self {
        self.key(KeyCode::Enter)
    }

    /// Add an Escape key event.
    pub fn esc(&mut self) -> &mut Self {
        self.key(KeyCode::Esc)
    }

    /// Add a Tab key event.
    pub fn tab(&mut self) -> &mut Self {
        self.key(KeyCode::Tab)
    }

    /// Add an Up arrow key event.
    pub fn up(&mut self) -> &mut Self {
        self.key(KeyCode::Up)
    }

    /// Add a Down arrow key event.
    pub fn down(&mut self) -> &mut Self {
        self.key(KeyCode::Down)
    }

    /// Add a Left arrow key event.
    pub fn left(&mut self) -> &mut Self {
        self.key(KeyCode::Left)
    }

    /// Add a Right arrow key event.
    pub fn right(&mut self) -> &mut Self {
        self.key(KeyCode::Right)
    }

    /// Add a left click.
    pub fn click(&mut self, x: u16, y: u16) -> &mut Self {
        self.mouse(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    /// Add a pointer move, for hover.
    pub fn moved(&mut self, x: u16, y: u16) -> &mut Self {
        self.mouse(MouseEventKind::Moved, x, y)
    }

    /// Add a scroll event. Positive deltas scroll up.
    pub fn scroll(&mut self, x: u16, y: u16, delta: i16) -> &mut Self {
        let kind = if delta > 0 {
            MouseEventKind::ScrollUp
        } else {
            MouseEventKind::ScrollDown
        };
        for _ in 0..delta.unsigned_abs() {
            self.mouse(kind, x, y);
        }
        self
    }

    fn mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) -> &mut Self {
        let event = MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        self.steps.push(Step::Event(Event::Mouse(event)));
        self
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn wait(&mut self, ms: u64) -> &mut Self {
        self.steps.push(Step::Wait(Duration::from_millis(ms)));
        self
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Events only, without waits.
    pub fn events(&self) -> Vec<Event> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Event(e) => Some(e.clone()),
                Step::Wait(_) => None,
            })
            .collect()
    }

    /// Total time the sequence waits.
    pub fn total_wait(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Wait(d) => *d,
                Step::Event(_) => Duration::ZERO,
            })
            .sum()
    }

    /// Number of events (excluding waits).
    pub fn len(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Event(_)))
            .count()
    }

    /// Check if the sequence has no events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replay the sequence: events go to `on_event`, waits to `on_wait`.
    pub fn play(&self, mut on_event: impl FnMut(&Event), mut on_wait: impl FnMut(Duration)) {
        for step in &self.steps {
            match step {
                Step::Event(event) => on_event(event),
                Step::Wait(d) => on_wait(*d),
            }
        }
    }
}
