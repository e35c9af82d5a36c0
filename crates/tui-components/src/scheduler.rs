//! Cancellable one-shot timers.
//!
//! The scheduler does not run anything on its own. Owners arm timers with a
//! deadline and a key, then pull due timers out with [`Scheduler::pop_due`]
//! whenever their event loop wakes up.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::{Duration, Instant};

/// Handle to an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// A timer that has come due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due<K> {
    /// Handle the timer was armed with.
    pub id: TimerId,
    /// When the timer was due, which may be earlier than the instant it was popped.
    pub deadline: Instant,
    /// Payload given when arming.
    pub key: K,
}

/// Arena of one-shot timers keyed by [`TimerId`].
#[derive(Debug)]
pub struct Scheduler<K> {
    /// Armed timers ordered by deadline, then by arming order.
    queue: BTreeMap<(Instant, u64), K>,
    /// Deadline of every armed timer.
    deadlines: HashMap<TimerId, Instant>,
    /// Next timer sequence number.
    next_seq: u64,
}

impl<K> Scheduler<K> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 1,
        }
    }

    /// Arm a timer that fires at `at`.
    pub fn schedule(&mut self, at: Instant, key: K) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = TimerId(seq);
        self.queue.insert((at, seq), key);
        self.deadlines.insert(id, at);
        id
    }

    /// Arm a timer that fires `delay` after `now`.
    ///
    /// Returns `None` without arming anything when the deadline is past what
    /// an `Instant` can represent; such a timer would never fire.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, key: K) -> Option<TimerId> {
        let at = now.checked_add(delay)?;
        Some(self.schedule(at, key))
    }

    /// Disarm a timer, returning its key if it was still armed.
    pub fn cancel(&mut self, id: TimerId) -> Option<K> {
        let at = self.deadlines.remove(&id)?;
        self.queue.remove(&(at, id.0))
    }

    /// Whether a timer is still armed.
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Deadline of an armed timer.
    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.deadlines.get(&id).copied()
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Timers with equal deadlines come out in the order they were armed.
    pub fn pop_due(&mut self, now: Instant) -> Option<Due<K>> {
        let (&(deadline, seq), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        let key = self.queue.remove(&(deadline, seq))?;
        let id = TimerId(seq);
        self.deadlines.remove(&id);
        Some(Due { id, deadline, key })
    }

    /// Earliest armed deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Time left until the earliest deadline, zero if already due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|at| at.saturating_duration_since(now))
    }

    /// Number of armed timers.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no timers are armed.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Disarm every timer.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
