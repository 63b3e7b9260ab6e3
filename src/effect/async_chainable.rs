//! `AsyncChainable` - the chaining vocabulary over pending futures.
//!
//! An `AsyncChainable<T, E>` wraps a future that settles into a
//! [`Chainable<T, E>`], either on the resolved channel or the rejected one
//! (see [`Settled`]). It re-exposes `chain`, `check`, `task` and `task_check`,
//! deferring each until the previous step has settled, and ends with
//! [`AsyncChainable::will_match`], which folds a rejection back into the same
//! matcher as a resolution.
//!
//! A synchronous chain is lifted with [`Chainable::task`] or
//! [`Chainable::task_check`] as soon as one step has to wait.
//!
//! # Examples
//!
//! ```rust,ignore
//! use chainable::control::{Arms, Chainable};
//! use chainable::effect::task;
//!
//! async fn promise_ok(value: i32) -> Chainable<i32, i32> {
//!     Chainable::ok(value + 1)
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = task(promise_ok(1))
//!         .task(promise_ok)
//!         .task(promise_ok)
//!         .chain(|x| Chainable::ok(x + 1))
//!         .will_match_arms(
//!             Arms::new()
//!                 .ok(|x| format!("ok {x}"))
//!                 .error(|x| format!("error {x}")),
//!         )
//!         .await;
//!     assert_eq!(result, "ok 5");
//! }
//! ```
//!
//! # Evaluation Semantics
//!
//! Steps run strictly in composition order, one after the other, on whatever
//! executor polls the outermost future. Nothing runs until that future is
//! polled; dropping an `AsyncChainable` drops every pending step.
//!
//! Steps that keep the `T`/`E` types (`chain`, `check`, `task`, `task_check`,
//! `then_resolved`, `catch`) are queued on the `AsyncChainable` rather than
//! nested inside one another, and `poll` drains that queue in a loop. A chain
//! of any length therefore settles in constant stack depth. Only the
//! type-changing [`AsyncChainable::then`] wraps its predecessor.

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;
use pin_project_lite::pin_project;

use super::{Settle, Settled, Validate};
use crate::control::{Arms, Chainable, Check, Matcher};

/// A queued step: receives the previous settlement and returns the next
/// computation.
type Continuation<T, E> = Box<dyn FnOnce(Settled<T, E>) -> AsyncChainable<T, E> + Send>;

// =============================================================================
// AsyncChainable Struct Definition
// =============================================================================

pin_project! {
    /// A pending computation whose settlement is a [`Chainable`].
    ///
    /// `AsyncChainable` implements `Future<Output = Settled<T, E>>`, so it can
    /// be awaited directly. Terminal matching is done with
    /// [`will_match`](Self::will_match) or [`will_match_arms`](Self::will_match_arms).
    ///
    /// # Type Parameters
    ///
    /// - `T`: The payload of the continuing variants.
    /// - `E`: The payload of the `Error` variant.
    pub struct AsyncChainable<T, E> {
        #[pin]
        state: AsyncChainableState<T, E>,
        // FIFO; applied to the settlement of `state`
        continuations: VecDeque<Continuation<T, E>>,
    }
}

pin_project! {
    /// Internal state machine for `AsyncChainable`.
    ///
    /// - `Ready` -> `Completed` (already settled, returned on first poll)
    /// - `Pending` -> `Completed` (when the inner future settles)
    ///
    /// While continuations remain, a settlement is handed to the next one and
    /// the state is replaced by whatever that continuation returns.
    #[project = AsyncChainableStateProj]
    enum AsyncChainableState<T, E> {
        Ready {
            settled: Option<Settled<T, E>>,
        },
        Pending {
            #[pin]
            future: BoxFuture<'static, Settled<T, E>>,
        },
        Completed,
    }
}

static_assertions::assert_impl_all!(AsyncChainable<i32, String>: Send);

// =============================================================================
// Future Implementation
// =============================================================================

impl<T, E> Future for AsyncChainable<T, E> {
    type Output = Settled<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            let settled = match this.state.as_mut().project() {
                AsyncChainableStateProj::Ready { settled } => {
                    // INVARIANT: Ready is taken at most once before the state is replaced
                    settled.take().expect(
                        "AsyncChainable internal error: settlement was already consumed. \
                         This indicates the AsyncChainable was polled after completion.",
                    )
                }
                AsyncChainableStateProj::Pending { future } => match future.poll(context) {
                    Poll::Ready(settled) => settled,
                    Poll::Pending => return Poll::Pending,
                },
                AsyncChainableStateProj::Completed => {
                    panic!(
                        "AsyncChainable internal error: AsyncChainable was polled after completion. \
                         Futures should not be polled after returning Poll::Ready."
                    );
                }
            };

            let Some(continuation) = this.continuations.pop_front() else {
                this.state.set(AsyncChainableState::Completed);
                return Poll::Ready(settled);
            };

            // The next computation's own queue runs before the remaining steps
            let Self {
                state,
                continuations,
            } = continuation(settled);
            for queued in continuations.into_iter().rev() {
                this.continuations.push_front(queued);
            }
            this.state.set(state);
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> AsyncChainable<T, E> {
    /// Creates an already-resolved `AsyncChainable`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use chainable::control::Chainable;
    /// use chainable::effect::AsyncChainable;
    ///
    /// let lifted = AsyncChainable::of(Chainable::<i32, i32>::ok(1));
    /// assert_eq!(lifted.await, Ok(Chainable::ok(1)));
    /// ```
    #[must_use]
    pub const fn of(chainable: Chainable<T, E>) -> Self {
        Self::settled(Ok(chainable))
    }

    /// Creates an already-resolved `AsyncChainable` holding `Ok(value)`.
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self::of(Chainable::Ok(value))
    }

    /// Creates an already-rejected `AsyncChainable`.
    ///
    /// Every chaining operation skips a rejection; terminal matching treats
    /// the rejected container exactly like a resolved one.
    #[must_use]
    pub const fn rejected(chainable: Chainable<T, E>) -> Self {
        Self::settled(Err(chainable))
    }

    /// Creates an `AsyncChainable` from an existing settlement.
    #[must_use]
    pub const fn settled(settled: Settled<T, E>) -> Self {
        Self {
            state: AsyncChainableState::Ready {
                settled: Some(settled),
            },
            continuations: VecDeque::new(),
        }
    }

    /// Returns `true` if the settlement is already available without polling
    /// a future or running a queued step.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, AsyncChainableState::Ready { .. }) && self.continuations.is_empty()
    }
}

impl<T: Send + 'static, E: Send + 'static> AsyncChainable<T, E> {
    /// Wraps a future that settles into a [`Chainable`].
    ///
    /// The future's output may be a `Chainable<T, E>` (it resolves) or a
    /// [`Settled<T, E>`] (it may reject).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use chainable::control::Chainable;
    /// use chainable::effect::AsyncChainable;
    ///
    /// let lifted = AsyncChainable::new(async { Chainable::<i32, i32>::ok(1) });
    /// assert_eq!(lifted.await, Ok(Chainable::ok(1)));
    /// ```
    pub fn new<Fut, S>(future: Fut) -> Self
    where
        Fut: Future<Output = S> + Send + 'static,
        S: Settle<T, E> + 'static,
    {
        Self {
            state: AsyncChainableState::Pending {
                future: future.map(<S as Settle<T, E>>::into_settled).boxed(),
            },
            continuations: VecDeque::new(),
        }
    }

    // =========================================================================
    // Continuation
    // =========================================================================

    /// Continues with `on_resolved` or `on_rejected`, depending on how this
    /// step settles, and may change the payload types.
    ///
    /// Each handler receives the settled container and returns either a plain
    /// [`Chainable`] or another `AsyncChainable`. A rejected `Chainable<T, E>`
    /// cannot be carried into `AsyncChainable<U, E2>` unchanged, so both
    /// handlers are required here; [`then_resolved`](Self::then_resolved) is
    /// the resolved-only form for steps that keep the types.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use chainable::control::Chainable;
    /// use chainable::effect::AsyncChainable;
    ///
    /// let recovered = AsyncChainable::<i32, i32>::rejected(Chainable::error(3)).then(
    ///     |resolved| resolved,
    ///     |rejected| Chainable::ok(rejected.into_error().unwrap_or_default()),
    /// );
    /// assert_eq!(recovered.await, Ok(Chainable::ok(3)));
    /// ```
    pub fn then<U, E2, F, G, R1, R2>(self, on_resolved: F, on_rejected: G) -> AsyncChainable<U, E2>
    where
        U: Send + 'static,
        E2: Send + 'static,
        F: FnOnce(Chainable<T, E>) -> R1 + Send + 'static,
        G: FnOnce(Chainable<T, E>) -> R2 + Send + 'static,
        R1: Into<AsyncChainable<U, E2>>,
        R2: Into<AsyncChainable<U, E2>>,
    {
        AsyncChainable::new(async move {
            let next: AsyncChainable<U, E2> = match self.await {
                Ok(resolved) => on_resolved(resolved).into(),
                Err(rejected) => on_rejected(rejected).into(),
            };
            next.await
        })
    }

    /// Continues with `on_resolved` once this step resolves; a rejection
    /// passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use chainable::control::Chainable;
    /// use chainable::effect::AsyncChainable;
    ///
    /// let doubled = AsyncChainable::<i32, i32>::ok(2)
    ///     .then_resolved(|resolved| resolved.chain(|x| Chainable::ok(x * 2)));
    /// assert_eq!(doubled.await, Ok(Chainable::ok(4)));
    /// ```
    #[must_use]
    pub fn then_resolved<F, R>(self, on_resolved: F) -> Self
    where
        F: FnOnce(Chainable<T, E>) -> R + Send + 'static,
        R: Into<Self>,
    {
        self.enqueue(move |settled| match settled {
            Ok(resolved) => on_resolved(resolved).into(),
            Err(rejected) => Self::pass_rejection(rejected),
        })
    }

    /// Handles only the rejected channel; a resolution passes through.
    #[must_use]
    pub fn catch<F, R>(self, on_rejected: F) -> Self
    where
        F: FnOnce(Chainable<T, E>) -> R + Send + 'static,
        R: Into<Self>,
    {
        self.enqueue(move |settled| match settled {
            Ok(resolved) => Self::of(resolved),
            Err(rejected) => on_rejected(rejected).into(),
        })
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Once this step resolves, feeds the payload of a continuing variant to
    /// `function` and adopts what it returns.
    ///
    /// `function` may return a plain [`Chainable`] or another
    /// `AsyncChainable`. `Error`, `Nothing` and rejections are passed through
    /// and `function` is not called.
    #[must_use]
    pub fn chain<F, R>(self, function: F) -> Self
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: Into<Self>,
    {
        self.then_resolved(move |resolved| -> Self {
            match resolved.into_continuing() {
                Ok(value) => function(value).into(),
                Err(absorbed) => {
                    tracing::trace!(path = %absorbed.path(), "chain step skipped by short circuit");
                    Self::of(absorbed)
                }
            }
        })
    }

    /// Once this step resolves, validates the payload of a continuing variant.
    ///
    /// `function` may return a plain [`Check`] or a future of one (see
    /// [`Validate`]). `Check::Pass` keeps the container, `Check::Replace`
    /// adopts the replacement, and `Error`, `Nothing` and rejections skip
    /// `function` entirely.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use chainable::control::{Chainable, Check};
    /// use chainable::effect::AsyncChainable;
    ///
    /// let checked = AsyncChainable::<i32, i32>::ok(12).check(|x| {
    ///     let x = *x;
    ///     async move { Check::ensure(x < 10, || Chainable::error(x)) }
    /// });
    /// assert_eq!(checked.await, Ok(Chainable::error(12)));
    /// ```
    #[must_use]
    pub fn check<F, V>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> V + Send + 'static,
        V: Validate<T, E>,
    {
        self.then_resolved(move |resolved| -> Self {
            let Some(value) = resolved.continuing_ref() else {
                tracing::trace!(path = %resolved.path(), "check step skipped by short circuit");
                return Self::of(resolved);
            };
            function(value).validate(resolved)
        })
    }

    /// Once this step resolves, runs the asynchronous step `function` on the
    /// payload of a continuing variant.
    ///
    /// See [`Chainable::task`].
    #[must_use]
    pub fn task<F, Fut, S>(self, function: F) -> Self
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = S> + Send + 'static,
        S: Settle<T, E> + 'static,
    {
        self.then_resolved(move |resolved| -> Self { resolved.task(function) })
    }

    /// Once this step resolves, runs the asynchronous validation `function`.
    ///
    /// Equivalent to [`check`](Self::check) with a step that always returns a
    /// future. See [`Chainable::task_check`].
    #[must_use]
    pub fn task_check<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = Check<T, E>> + Send + 'static,
    {
        self.check(function)
    }

    fn enqueue<F>(mut self, continuation: F) -> Self
    where
        F: FnOnce(Settled<T, E>) -> Self + Send + 'static,
    {
        self.continuations.push_back(Box::new(continuation));
        self
    }

    fn pass_rejection(rejected: Chainable<T, E>) -> Self {
        tracing::trace!(path = %rejected.path(), "step skipped by rejection");
        Self::rejected(rejected)
    }
}

// =============================================================================
// Terminal Operations
// =============================================================================

impl<T, E> AsyncChainable<T, E> {
    /// Awaits the settlement and collapses both channels into one container.
    pub async fn settle(self) -> Chainable<T, E> {
        match self.await {
            Ok(resolved) => resolved,
            Err(rejected) => {
                tracing::trace!(path = %rejected.path(), "folding rejection into terminal match");
                rejected
            }
        }
    }

    /// Awaits the settlement and matches it with an exhaustive [`Matcher`].
    ///
    /// A rejected container is matched exactly like a resolved one.
    pub async fn will_match<M>(self, matcher: M) -> M::Output
    where
        M: Matcher<T, E>,
    {
        self.settle().await.match_with(matcher)
    }

    /// Awaits the settlement and matches it with a partial handler set.
    ///
    /// # Panics
    ///
    /// Panics if `arms` has no handler for the settled path.
    pub async fn will_match_arms<R>(self, arms: Arms<'_, T, E, R>) -> R {
        self.settle().await.match_arms(arms)
    }

    /// Awaits the settlement, runs `on_finally`, and returns the settlement.
    ///
    /// `on_finally` runs exactly once whether this step resolves, rejects, or
    /// the underlying future panics; a panic is resumed after `on_finally`
    /// has run.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use chainable::control::Chainable;
    /// use chainable::effect::AsyncChainable;
    ///
    /// let mut cleaned_up = false;
    /// let settled = AsyncChainable::<i32, i32>::rejected(Chainable::error(1))
    ///     .finally(|| cleaned_up = true)
    ///     .await;
    /// assert_eq!(settled, Err(Chainable::error(1)));
    /// assert!(cleaned_up);
    /// ```
    pub async fn finally<F>(self, on_finally: F) -> Settled<T, E>
    where
        F: FnOnce(),
    {
        let outcome = AssertUnwindSafe(self).catch_unwind().await;

        on_finally();

        match outcome {
            Ok(settled) => settled,
            Err(panic_info) => {
                tracing::warn!("AsyncChainable::finally: settlement panicked; resuming after cleanup");
                std::panic::resume_unwind(panic_info)
            }
        }
    }
}

// =============================================================================
// Lifting From Chainable
// =============================================================================

impl<T, E> Chainable<T, E> {
    /// Lifts this container into an [`AsyncChainable`] by running the
    /// asynchronous step `function` on the payload of a continuing variant.
    ///
    /// `Error` and `Nothing` produce an already-resolved `AsyncChainable`
    /// holding the unchanged container, and `function` is not called. The
    /// future's output may be a `Chainable<U, E>` or a [`Settled<U, E>`].
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use chainable::control::Chainable;
    ///
    /// let lifted = Chainable::<i32, i32>::ok(2)
    ///     .task(|x| async move { Chainable::ok(x + 1) })
    ///     .chain(|x| Chainable::ok(x + 1));
    /// assert_eq!(lifted.await, Ok(Chainable::ok(4)));
    /// ```
    pub fn task<U, F, Fut, S>(self, function: F) -> AsyncChainable<U, E>
    where
        U: Send + 'static,
        E: Send + 'static,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = S> + Send + 'static,
        S: Settle<U, E> + 'static,
    {
        match self.into_continuing() {
            Ok(value) => AsyncChainable::new(function(value)),
            Err(absorbed) => {
                tracing::trace!(path = %absorbed.path(), "task skipped by short circuit");
                AsyncChainable::of(absorbed)
            }
        }
    }

    /// Lifts this container into an [`AsyncChainable`] by running an
    /// asynchronous validation step.
    ///
    /// The asynchronous analog of [`Chainable::check`]: `Check::Pass` keeps
    /// this container, `Check::Replace` adopts the replacement, and `Error`
    /// or `Nothing` skip `function` entirely.
    pub fn task_check<F, Fut>(self, function: F) -> AsyncChainable<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Check<T, E>> + Send + 'static,
    {
        let Some(value) = self.continuing_ref() else {
            tracing::trace!(path = %self.path(), "task_check skipped by short circuit");
            return AsyncChainable::of(self);
        };
        function(value).validate(self)
    }
}

// =============================================================================
// From / Debug Implementations
// =============================================================================

impl<T, E> From<Chainable<T, E>> for AsyncChainable<T, E> {
    #[inline]
    fn from(chainable: Chainable<T, E>) -> Self {
        Self::of(chainable)
    }
}

impl<T, E> fmt::Debug for AsyncChainable<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            AsyncChainableState::Ready { .. } => "ready",
            AsyncChainableState::Pending { .. } => "pending",
            AsyncChainableState::Completed => "completed",
        };
        formatter
            .debug_struct("AsyncChainable")
            .field("state", &state)
            .field("continuations", &self.continuations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_is_ready() {
        let lifted: AsyncChainable<i32, i32> = AsyncChainable::of(Chainable::ok(1));
        assert!(lifted.is_ready());
        assert_eq!(format!("{lifted:?}"), "AsyncChainable { state: \"ready\", continuations: 0 }");
    }

    #[rstest]
    fn test_new_is_pending_until_polled() {
        let lifted: AsyncChainable<i32, i32> =
            AsyncChainable::new(async { Chainable::<i32, i32>::ok(1) });
        assert!(!lifted.is_ready());
        assert_eq!(format!("{lifted:?}"), "AsyncChainable { state: \"pending\", continuations: 0 }");
    }

    #[rstest]
    fn test_short_circuited_task_does_not_call_function() {
        let error: Chainable<i32, i32> = Chainable::error(1);
        let lifted: AsyncChainable<i32, i32> = error.task(|_: i32| -> futures::future::Ready<Chainable<i32, i32>> {
            panic!("task must not run on an error")
        });
        assert!(lifted.is_ready());
    }

    #[rstest]
    #[tokio::test]
    async fn test_settle_collapses_rejection() {
        let lifted: AsyncChainable<i32, i32> = AsyncChainable::rejected(Chainable::error(7));
        assert_eq!(lifted.settle().await, Chainable::error(7));
    }
}
