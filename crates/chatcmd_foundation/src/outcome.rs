//! Command outcomes and pending (asynchronous) results.
//!
//! Resolving a command never awaits anything. Actions that produce their
//! result asynchronously hand back a [`PendingResult`], which travels to the
//! caller untouched; settling it is the caller's concern.

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use crate::value::Value;

/// A shareable handle on a value that may not be available yet.
///
/// Cloning the handle does not restart the computation: every clone observes
/// the same underlying future and the same settled value.
#[derive(Clone)]
pub struct PendingResult(Shared<BoxFuture<'static, Value>>);

impl PendingResult {
    /// Wraps a future producing a value.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Value> + Send + 'static,
    {
        Self(future.boxed().shared())
    }

    /// Creates a pending result that settles immediately to `value`.
    #[must_use]
    pub fn ready(value: impl Into<Value>) -> Self {
        Self::new(futures::future::ready(value.into()))
    }

    /// Returns the value if some clone of this handle has already settled it.
    #[must_use]
    pub fn peek(&self) -> Option<&Value> {
        self.0.peek()
    }

    /// Waits for the value.
    pub async fn resolve(self) -> Value {
        self.0.await
    }
}

impl fmt::Debug for PendingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(value) => write!(f, "PendingResult(settled: {value:?})"),
            None => write!(f, "PendingResult(<pending>)"),
        }
    }
}

/// The result of resolving one command against an action registry.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// A value available right away (a static value or a synchronous return).
    Ready(Value),
    /// An asynchronous result, returned unsettled.
    Pending(PendingResult),
}

impl Outcome {
    /// Returns the value if it is available without waiting.
    #[must_use]
    pub fn ready_value(&self) -> Option<&Value> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending(pending) => pending.peek(),
        }
    }

    /// Returns true if this outcome is an asynchronous result.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Settles the outcome into a value, waiting on pending results.
    pub async fn resolve(self) -> Value {
        match self {
            Self::Ready(value) => value,
            Self::Pending(pending) => pending.resolve().await,
        }
    }
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        Self::Ready(value)
    }
}

impl From<PendingResult> for Outcome {
    fn from(pending: PendingResult) -> Self {
        Self::Pending(pending)
    }
}
