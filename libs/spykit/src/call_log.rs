use parking_lot::Mutex;

/// Ordered record of the arguments every call was made with.
#[derive(Debug)]
pub struct CallLog<A> {
    calls: Mutex<Vec<A>>,
}

impl<A> Default for CallLog<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> CallLog<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, args: A) {
        self.calls.lock().push(args);
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn was_called(&self) -> bool {
        !self.calls.lock().is_empty()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<A: Clone> CallLog<A> {
    /// Snapshot of all recorded calls, oldest first.
    #[must_use]
    pub fn all(&self) -> Vec<A> {
        self.calls.lock().clone()
    }

    /// Arguments of the `n`-th call, counting from 1.
    #[must_use]
    pub fn nth_call(&self, n: usize) -> Option<A> {
        let index = n.checked_sub(1)?;
        self.calls.lock().get(index).cloned()
    }

    #[must_use]
    pub fn last_call(&self) -> Option<A> {
        self.calls.lock().last().cloned()
    }
}

impl<A: PartialEq> CallLog<A> {
    /// Whether any recorded call was made with exactly `args`.
    #[must_use]
    pub fn was_called_with(&self, args: &A) -> bool {
        self.calls.lock().iter().any(|call| call == args)
    }
}
