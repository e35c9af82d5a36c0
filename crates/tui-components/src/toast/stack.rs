//! The ordered collection of live toasts.

use super::entity::{Toast, ToastId, ToastSpec};
use std::fmt;

/// A mutation of a [`ToastStack`], delivered to every listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEvent {
    /// A toast was appended.
    Created(ToastId),
    /// A toast was removed.
    Dismissed(ToastId),
    /// Every toast was removed; carries the removed ids in display order.
    Cleared(Vec<ToastId>),
}

/// Handle returned by [`ToastStack::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&StackEvent)>;

/// Ordered collection of live toasts.
///
/// Insertion order is display order. The stack never drops toasts on its
/// own: capping and timers are the surface's business.
pub struct ToastStack {
    /// Live toasts, oldest first.
    toasts: Vec<Toast>,
    /// Next toast ID.
    next_id: u64,
    /// Mutation listeners.
    listeners: Vec<(ListenerId, Listener)>,
    /// Next listener ID.
    next_listener: u64,
}

impl ToastStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    /// Append a toast and return its id.
    pub fn create(&mut self, spec: ToastSpec) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        tracing::debug!(%id, variant = %spec.variant, "toast created");
        self.toasts.push(Toast::new(id, spec));
        self.notify(StackEvent::Created(id));
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.position(id) else {
            tracing::trace!(%id, "dismiss of unknown toast ignored");
            return false;
        };
        self.toasts.remove(pos);
        tracing::debug!(%id, "toast dismissed");
        self.notify(StackEvent::Dismissed(id));
        true
    }

    /// Remove every toast, returning how many were removed.
    pub fn dismiss_all(&mut self) -> usize {
        if self.toasts.is_empty() {
            return 0;
        }
        let removed: Vec<ToastId> = self.toasts.drain(..).map(|t| t.id()).collect();
        let count = removed.len();
        tracing::debug!(count, "all toasts dismissed");
        self.notify(StackEvent::Cleared(removed));
        count
    }

    /// Register a listener called synchronously after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StackEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StackEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Look up a toast.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    /// Whether a toast is live.
    pub fn contains(&self, id: ToastId) -> bool {
        self.position(id).is_some()
    }

    /// Display position of a toast.
    pub fn position(&self, id: ToastId) -> Option<usize> {
        self.toasts.iter().position(|t| t.id() == id)
    }

    /// Live toasts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.iter().map(|t| t.id()).collect()
    }

    /// Number of live toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether there are no live toasts.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToastStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastStack")
            .field("toasts", &self.toasts)
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_create_appends() {
        let mut stack = ToastStack::new();
        let a = stack.create(ToastSpec::info("a"));
        let b = stack.create(ToastSpec::info("b"));
        assert_eq!(stack.ids(), vec![a, b]);
        assert_eq!(stack.position(b), Some(1));
        assert_eq!(stack.get(a).and_then(|t| t.message()), Some("a"));
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut stack = ToastStack::new();
        let a = stack.create(ToastSpec::info("a"));
        let b = stack.create(ToastSpec::info("b"));

        assert!(stack.dismiss(a));
        let after_first = stack.ids();
        assert!(!stack.dismiss(a));
        assert_eq!(stack.ids(), after_first);
        assert_eq!(stack.ids(), vec![b]);
    }

    #[test]
    fn test_dismiss_all_then_dismiss_is_noop() {
        let mut stack = ToastStack::new();
        let ids: Vec<_> = (0..4).map(|i| stack.create(ToastSpec::info(format!("{i}")))).collect();

        assert_eq!(stack.dismiss_all(), 4);
        assert!(stack.is_empty());
        for id in ids {
            assert!(!stack.dismiss(id));
        }
        assert_eq!(stack.dismiss_all(), 0);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut stack = ToastStack::new();
        let a = stack.create(ToastSpec::info("a"));
        stack.dismiss(a);
        stack.dismiss_all();
        let b = stack.create(ToastSpec::info("b"));
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_listeners_see_every_mutation() {
        let mut stack = ToastStack::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let listener = stack.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let a = stack.create(ToastSpec::info("a"));
        let b = stack.create(ToastSpec::info("b"));
        stack.dismiss(a);
        stack.dismiss(a);
        stack.dismiss_all();

        assert_eq!(
            *seen.borrow(),
            vec![
                StackEvent::Created(a),
                StackEvent::Created(b),
                StackEvent::Dismissed(a),
                StackEvent::Cleared(vec![b]),
            ]
        );

        assert!(stack.unsubscribe(listener));
        assert!(!stack.unsubscribe(listener));
        stack.create(ToastSpec::info("c"));
        assert_eq!(seen.borrow().len(), 4);
    }

    proptest! {
        #[test]
        fn test_order_matches_creation(durations in proptest::collection::vec(0u64..20_000, 0..40)) {
            let mut stack = ToastStack::new();
            let ids: Vec<_> = durations
                .iter()
                .map(|ms| stack.create(ToastSpec::info("x").duration_ms(*ms)))
                .collect();
            prop_assert_eq!(stack.ids(), ids);
        }

        #[test]
        fn test_double_dismiss_equals_single(count in 1usize..20, pick in 0usize..20) {
            let mut once = ToastStack::new();
            let mut twice = ToastStack::new();
            let mut target = None;
            for i in 0..count {
                let a = once.create(ToastSpec::info(format!("{i}")));
                twice.create(ToastSpec::info(format!("{i}")));
                if i == pick % count {
                    target = Some(a);
                }
            }
            let target = target.unwrap();

            once.dismiss(target);
            twice.dismiss(target);
            let second = twice.dismiss(target);

            prop_assert!(!second);
            prop_assert_eq!(once.ids(), twice.ids());
        }
    }
}
