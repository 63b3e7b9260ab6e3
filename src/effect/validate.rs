//! Outputs a validation step may produce.

use std::future::Future;

use super::AsyncChainable;
use crate::control::{Chainable, Check};

/// Values a validation step passed to
/// [`AsyncChainable::check`](super::AsyncChainable::check) may return.
///
/// A plain [`Check`] applies as soon as the step runs; a future of one is
/// awaited first. Either way the verdict is resolved against the container
/// that was validated.
///
/// # Examples
///
/// ```rust,ignore
/// use chainable::control::{Chainable, Check};
/// use chainable::effect::AsyncChainable;
///
/// let checked = AsyncChainable::<i32, i32>::ok(2)
///     .check(|x| Check::ensure(*x > 0, Chainable::nothing))
///     .check(|x| {
///         let x = *x;
///         async move { Check::ensure(x < 10, || Chainable::error(x)) }
///     });
/// assert_eq!(checked.await, Ok(Chainable::ok(2)));
/// ```
pub trait Validate<T, E> {
    /// Resolves this verdict against `current`.
    fn validate(self, current: Chainable<T, E>) -> AsyncChainable<T, E>;
}

impl<T, E> Validate<T, E> for Check<T, E> {
    #[inline]
    fn validate(self, current: Chainable<T, E>) -> AsyncChainable<T, E> {
        AsyncChainable::of(self.resolve(current))
    }
}

impl<T, E, Fut> Validate<T, E> for Fut
where
    T: Send + 'static,
    E: Send + 'static,
    Fut: Future<Output = Check<T, E>> + Send + 'static,
{
    fn validate(self, current: Chainable<T, E>) -> AsyncChainable<T, E> {
        AsyncChainable::new(async move { self.await.resolve(current) })
    }
}
