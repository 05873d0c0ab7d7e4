use std::future::Future;

use crate::{Behavior, CallLog, Stub};

/// A recorder with configurable overrides in front of a fall-through
/// implementation.
///
/// Every call is logged before anything else happens. The outcome comes from
/// the next queued one-shot behavior, then the persistent behavior, and only
/// when neither is configured from the fall-through passed to [`Spy::invoke`].
///
/// Configuration methods take `&self` and return `&Self`, so a shared spy can
/// be configured in one chain:
///
/// ```
/// # use spykit::Spy;
/// let spy: Spy<i64, i64> = Spy::new();
/// spy.implements_once(|a| a + 2).implements_once(|a| a + 3);
/// ```
pub struct Spy<A, R> {
    calls: CallLog<A>,
    stub: Stub<A, R>,
}

impl<A, R> Default for Spy<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> Spy<A, R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: CallLog::new(),
            stub: Stub::new(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &CallLog<A> {
        &self.calls
    }

    #[must_use]
    pub fn stub(&self) -> &Stub<A, R> {
        &self.stub
    }

    /// Persistent fixed outcome.
    pub fn returns(&self, value: R) -> &Self {
        self.stub.set(Behavior::Value(value));
        self
    }

    /// Fixed outcome for the next unconsumed call.
    pub fn returns_once(&self, value: R) -> &Self {
        self.stub.push_once(Behavior::Value(value));
        self
    }

    pub fn implements<F>(&self, f: F) -> &Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.stub.set(Behavior::call(f));
        self
    }

    pub fn implements_once<F>(&self, f: F) -> &Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.stub.push_once(Behavior::call(f));
        self
    }

    pub fn implements_async<F, Fut>(&self, f: F) -> &Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        self.stub.set(Behavior::call_async(f));
        self
    }

    pub fn implements_async_once<F, Fut>(&self, f: F) -> &Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        self.stub.push_once(Behavior::call_async(f));
        self
    }

    /// Drop every override; calls fall through again. History is kept.
    pub fn restore(&self) {
        self.stub.clear();
    }

    /// Drop the history only.
    pub fn clear(&self) {
        self.calls.clear();
    }

    /// Drop the history and every override.
    pub fn reset(&self) {
        self.calls.clear();
        self.stub.clear();
    }
}

impl<A: Clone, R: Clone> Spy<A, R> {
    /// Record `args` and produce the outcome of this call.
    pub async fn invoke<F, Fut>(&self, args: A, fallthrough: F) -> R
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = R>,
    {
        self.calls.record(args.clone());
        match self.stub.next() {
            Some(behavior) => behavior.apply(args).await,
            None => fallthrough(args).await,
        }
    }
}
