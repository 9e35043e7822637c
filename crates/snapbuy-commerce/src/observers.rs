//! Change notification for stores.
//!
//! Listeners are called synchronously, after the state change has been
//! committed, with the event and a read-only view of the new state.

use std::fmt;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener<E, S> = Box<dyn Fn(&E, &S) + Send + Sync>;

/// Registry of listeners for events of type `E` about state `S`.
pub struct Observers<E, S> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<E, S>)>,
}

impl<E, S> Observers<E, S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&E, &S) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    /// Call every listener in subscription order.
    pub fn notify(&self, event: &E, state: &S) {
        for (_, listener) in &self.listeners {
            listener(event, state);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E, S> Default for Observers<E, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> fmt::Debug for Observers<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
