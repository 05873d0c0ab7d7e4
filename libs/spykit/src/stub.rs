use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::Behavior;

/// Configured overrides: a FIFO queue of one-shot behaviors in front of an
/// optional persistent behavior.
pub struct Stub<A, R> {
    once: Mutex<VecDeque<Behavior<A, R>>>,
    persistent: Mutex<Option<Behavior<A, R>>>,
}

impl<A, R> Default for Stub<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> Stub<A, R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            once: Mutex::new(VecDeque::new()),
            persistent: Mutex::new(None),
        }
    }

    /// Replace the persistent behavior.
    pub fn set(&self, behavior: Behavior<A, R>) {
        *self.persistent.lock() = Some(behavior);
    }

    /// Queue a behavior for exactly one call.
    pub fn push_once(&self, behavior: Behavior<A, R>) {
        self.once.lock().push_back(behavior);
    }

    /// Number of one-shot behaviors not consumed yet.
    #[must_use]
    pub fn pending_once(&self) -> usize {
        self.once.lock().len()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.once.lock().is_empty() || self.persistent.lock().is_some()
    }

    /// Drop the queue and the persistent behavior.
    pub fn clear(&self) {
        self.once.lock().clear();
        *self.persistent.lock() = None;
    }
}

impl<A, R: Clone> Stub<A, R> {
    /// Behavior for the next call: the head of the queue, else the persistent
    /// behavior, else `None` (fall through).
    ///
    /// The returned behavior is owned, so no lock is held while it is applied.
    #[must_use]
    pub fn next(&self) -> Option<Behavior<A, R>> {
        if let Some(behavior) = self.once.lock().pop_front() {
            return Some(behavior);
        }
        self.persistent.lock().clone()
    }
}
