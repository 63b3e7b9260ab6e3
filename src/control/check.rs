//! The outcome of a validation step.

use super::Chainable;

/// What a validation step decided about the value it inspected.
///
/// A step passed to [`Chainable::check`] either lets the current container
/// through untouched, or hands back a replacement (typically an `Error`).
///
/// # Examples
///
/// ```rust
/// use chainable::control::{Chainable, Check};
///
/// let positive = |value: &i32| Check::ensure(*value > 0, || Chainable::error("negative"));
///
/// assert_eq!(Chainable::ok(3).check(positive), Chainable::ok(3));
/// assert_eq!(Chainable::ok(-3).check(positive), Chainable::error("negative"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Check<T, E> {
    /// The value passed; keep the current container.
    Pass,
    /// The value failed; adopt this container instead.
    Replace(Chainable<T, E>),
}

impl<T, E> Check<T, E> {
    /// Shorthand for [`Check::Pass`].
    #[inline]
    pub const fn pass() -> Self {
        Self::Pass
    }

    /// Passes when `condition` holds, otherwise replaces with `otherwise()`.
    #[inline]
    pub fn ensure<F>(condition: bool, otherwise: F) -> Self
    where
        F: FnOnce() -> Chainable<T, E>,
    {
        if condition {
            Self::Pass
        } else {
            Self::Replace(otherwise())
        }
    }

    /// Returns `true` if this is [`Check::Pass`].
    #[inline]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Applies the decision to `current`.
    #[inline]
    pub fn resolve(self, current: Chainable<T, E>) -> Chainable<T, E> {
        match self {
            Self::Pass => current,
            Self::Replace(replacement) => replacement,
        }
    }
}

impl<T, E> From<Chainable<T, E>> for Check<T, E> {
    #[inline]
    fn from(replacement: Chainable<T, E>) -> Self {
        Self::Replace(replacement)
    }
}
