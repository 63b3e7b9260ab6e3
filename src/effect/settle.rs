//! The settlement of an asynchronous step.

use crate::control::Chainable;

/// How an [`AsyncChainable`](super::AsyncChainable) settles.
///
/// `Ok` is the resolved channel and `Err` the rejected one. Both carry a
/// [`Chainable`]; terminal matching collapses them into one.
pub type Settled<T, E> = Result<Chainable<T, E>, Chainable<T, E>>;

/// Values an asynchronous step may produce.
///
/// A bare [`Chainable`] resolves; a [`Settled`] is taken as-is, so a step can
/// reject explicitly with `Err(container)`.
///
/// # Examples
///
/// ```rust
/// use chainable::control::Chainable;
/// use chainable::effect::Settle;
///
/// let resolved: Chainable<i32, i32> = Chainable::ok(1);
/// assert_eq!(resolved.into_settled(), Ok(Chainable::ok(1)));
///
/// let rejected: Result<Chainable<i32, i32>, _> = Err(Chainable::error(2));
/// assert_eq!(rejected.into_settled(), Err(Chainable::error(2)));
/// ```
pub trait Settle<T, E> {
    /// Converts the step's output into a settlement.
    fn into_settled(self) -> Settled<T, E>;
}

impl<T, E> Settle<T, E> for Chainable<T, E> {
    #[inline]
    fn into_settled(self) -> Settled<T, E> {
        Ok(self)
    }
}

impl<T, E> Settle<T, E> for Settled<T, E> {
    #[inline]
    fn into_settled(self) -> Self {
        self
    }
}
