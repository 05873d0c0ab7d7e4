use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

type SyncFn<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;
type AsyncFn<A, R> = Arc<dyn Fn(A) -> BoxFuture<'static, R> + Send + Sync>;

/// A configured outcome for one or more calls.
pub enum Behavior<A, R> {
    /// Produce a copy of the value on every application.
    Value(R),
    /// Compute the outcome synchronously from the call arguments.
    Call(SyncFn<A, R>),
    /// Compute the outcome by awaiting a future built from the call arguments.
    CallAsync(AsyncFn<A, R>),
}

impl<A, R> Behavior<A, R> {
    /// Wrap a synchronous implementation.
    pub fn call<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::Call(Arc::new(f))
    }

    /// Wrap an asynchronous implementation.
    pub fn call_async<F, Fut>(f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        Self::CallAsync(Arc::new(move |args| f(args).boxed()))
    }
}

impl<A, R: Clone> Behavior<A, R> {
    /// Produce the outcome for a call made with `args`.
    pub async fn apply(&self, args: A) -> R {
        match self {
            Self::Value(value) => value.clone(),
            Self::Call(f) => f(args),
            Self::CallAsync(f) => f(args).await,
        }
    }
}

impl<A, R: Clone> Clone for Behavior<A, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Call(f) => Self::Call(Arc::clone(f)),
            Self::CallAsync(f) => Self::CallAsync(Arc::clone(f)),
        }
    }
}

impl<A, R: fmt::Debug> fmt::Debug for Behavior<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Call(_) => f.write_str("Call(..)"),
            Self::CallAsync(_) => f.write_str("CallAsync(..)"),
        }
    }
}
