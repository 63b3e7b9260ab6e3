//! Chainable type - a tagged outcome with short-circuit sequencing.
//!
//! This module provides the `Chainable<T, E>` type, which represents the
//! outcome of a step as one of five variants:
//!
//! - `Left(T)` / `Right(T)`: two branches of a computation
//! - `Ok(T)`: a successful result
//! - `Error(E)`: a modeled failure
//! - `Nothing`: a modeled absence
//!
//! `Left`, `Right` and `Ok` are *continuing*: [`Chainable::chain`] feeds their
//! payload to the next step. `Error` and `Nothing` are *absorbing*: every
//! chaining operation passes them through untouched until a terminal match.
//!
//! # Examples
//!
//! ```rust
//! use chainable::control::{Arms, Chainable};
//!
//! fn increment(value: i32) -> Chainable<i32, i32> {
//!     Chainable::ok(value + 1)
//! }
//!
//! fn fail(value: i32) -> Chainable<i32, i32> {
//!     Chainable::error(value + 1)
//! }
//!
//! let arms = || {
//!     Arms::new()
//!         .ok(|x| format!("ok {x}"))
//!         .error(|x| format!("error {x}"))
//! };
//!
//! let passed = Chainable::ok(2).chain(increment).chain(increment);
//! assert_eq!(passed.match_arms(arms()), "ok 4");
//!
//! let failed = Chainable::ok(2)
//!     .chain(fail)
//!     .chain(increment)
//!     .chain(increment);
//! assert_eq!(failed.match_arms(arms()), "error 3");
//! ```

use std::fmt;

use super::{Arms, Check, Matcher, NOTHING, Path, UnhandledPathError};

/// A value tagged with the path a computation took.
///
/// # Type Parameters
///
/// * `T` - The payload of the continuing variants (`Left`, `Right`, `Ok`)
/// * `E` - The payload of the `Error` variant
///
/// # Examples
///
/// ```rust
/// use chainable::control::Chainable;
///
/// let parsed: Chainable<i32, String> = "42"
///     .parse::<i32>()
///     .map_err(|error| error.to_string())
///     .into();
///
/// let doubled = parsed.chain(|x| Chainable::ok(x * 2));
/// assert_eq!(doubled.get_ok(), Some(&84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Chainable<T, E> {
    /// The left branch.
    Left(T),
    /// The right branch.
    Right(T),
    /// A successful outcome.
    Ok(T),
    /// A modeled failure. Absorbing under chaining.
    Error(E),
    /// A modeled absence. Absorbing under chaining.
    Nothing,
}

impl<T, E> Chainable<T, E> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a `Left` container.
    #[inline]
    pub const fn left(value: T) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` container.
    #[inline]
    pub const fn right(value: T) -> Self {
        Self::Right(value)
    }

    /// Creates an `Ok` container.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an `Error` container.
    #[inline]
    pub const fn error(error: E) -> Self {
        Self::Error(error)
    }

    /// Creates a `Nothing` container.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Path Inspection
    // =========================================================================

    /// Returns the path this container is on.
    #[inline]
    pub const fn path(&self) -> Path {
        match self {
            Self::Left(_) => Path::Left,
            Self::Right(_) => Path::Right,
            Self::Ok(_) => Path::Ok,
            Self::Error(_) => Path::Error,
            Self::Nothing => Path::Nothing,
        }
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Error` value.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` if chaining operations will pass this container through
    /// untouched (`Error` or `Nothing`).
    #[inline]
    pub const fn is_short_circuit(&self) -> bool {
        self.path().is_short_circuit()
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Feeds the payload of a continuing variant to `function` and adopts the
    /// container it returns.
    ///
    /// `Error` and `Nothing` are returned unchanged and `function` is not
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainable::control::Chainable;
    ///
    /// let right: Chainable<i32, ()> = Chainable::right(1);
    /// let chained = right
    ///     .chain(|x| Chainable::right(x + 1))
    ///     .chain(|x| Chainable::left(x + 1));
    /// assert_eq!(chained, Chainable::left(3));
    ///
    /// let nothing: Chainable<i32, ()> = Chainable::nothing();
    /// assert_eq!(nothing.chain(|x| Chainable::ok(x + 1)), Chainable::nothing());
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Chainable<U, E>
    where
        F: FnOnce(T) -> Chainable<U, E>,
    {
        match self.into_continuing() {
            Ok(value) => function(value),
            Err(absorbed) => absorbed,
        }
    }

    /// Runs a validation step against the payload of a continuing variant.
    ///
    /// [`Check::Pass`] keeps the container as it is; [`Check::Replace`] adopts
    /// the replacement. `Error` and `Nothing` are returned unchanged and
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainable::control::{Chainable, Check};
    ///
    /// let ok: Chainable<i32, i32> = Chainable::ok(2);
    /// assert_eq!(ok.check(|_| Check::Pass), Chainable::ok(2));
    ///
    /// let ok: Chainable<i32, i32> = Chainable::ok(2);
    /// assert_eq!(ok.check(|x| Chainable::error(x + 1).into()), Chainable::error(3));
    /// ```
    pub fn check<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Check<T, E>,
    {
        let Some(value) = self.continuing_ref() else {
            tracing::trace!(path = %self.path(), "check skipped by short circuit");
            return self;
        };
        function(value).resolve(self)
    }

    // =========================================================================
    // Branching
    // =========================================================================

    /// Applies `on_left` to a `Left` payload or `on_right` to a `Right`
    /// payload and adopts the result.
    ///
    /// Any other variant is returned unchanged. This only looks at
    /// `Left`/`Right`; it is not a chaining operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainable::control::Chainable;
    ///
    /// let recover = |x: i32| Chainable::ok(x * 10);
    /// let reject = |x: i32| Chainable::error(x);
    ///
    /// let left: Chainable<i32, i32> = Chainable::left(1);
    /// assert_eq!(left.either(recover, reject), Chainable::ok(10));
    ///
    /// let right: Chainable<i32, i32> = Chainable::right(1);
    /// assert_eq!(right.either(recover, reject), Chainable::error(1));
    ///
    /// let ok: Chainable<i32, i32> = Chainable::ok(1);
    /// assert_eq!(ok.either(recover, reject), Chainable::ok(1));
    /// ```
    pub fn either<F, G>(self, on_left: F, on_right: G) -> Self
    where
        F: FnOnce(T) -> Self,
        G: FnOnce(T) -> Self,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
            other => other,
        }
    }

    /// Applies `function` to a `Left` payload and adopts the result; any other
    /// variant is returned unchanged.
    pub fn on_left<F>(self, function: F) -> Self
    where
        F: FnOnce(T) -> Self,
    {
        match self {
            Self::Left(value) => function(value),
            other => other,
        }
    }

    /// Applies `function` to a `Right` payload and adopts the result; any
    /// other variant is returned unchanged.
    pub fn on_right<F>(self, function: F) -> Self
    where
        F: FnOnce(T) -> Self,
    {
        match self {
            Self::Right(value) => function(value),
            other => other,
        }
    }

    // =========================================================================
    // Terminal Matching
    // =========================================================================

    /// Eliminates the container with an exhaustive [`Matcher`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainable::control::{Cases, Chainable};
    ///
    /// let error: Chainable<i32, &str> = Chainable::error("boom");
    /// let message = error.match_with(Cases {
    ///     left: |x| format!("left {x}"),
    ///     right: |x| format!("right {x}"),
    ///     ok: |x| format!("ok {x}"),
    ///     error: |e| format!("error {e}"),
    ///     nothing: || String::from("nothing"),
    /// });
    /// assert_eq!(message, "error boom");
    /// ```
    #[inline]
    pub fn match_with<M>(self, matcher: M) -> M::Output
    where
        M: Matcher<T, E>,
    {
        match self {
            Self::Left(value) => matcher.left(value),
            Self::Right(value) => matcher.right(value),
            Self::Ok(value) => matcher.ok(value),
            Self::Error(error) => matcher.error(error),
            Self::Nothing => matcher.nothing(),
        }
    }

    /// Eliminates the container with a partial handler set.
    ///
    /// # Errors
    ///
    /// Returns [`UnhandledPathError`] if `arms` has no handler for the active
    /// path.
    #[inline]
    pub fn try_match_arms<R>(self, arms: Arms<'_, T, E, R>) -> Result<R, UnhandledPathError> {
        arms.dispatch(self)
    }

    /// Eliminates the container with a partial handler set.
    ///
    /// # Panics
    ///
    /// Panics if `arms` has no handler for the active path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainable::control::{Arms, Chainable};
    ///
    /// let nothing: Chainable<i32, i32> = Chainable::nothing();
    /// let result = nothing.match_arms(
    ///     Arms::new()
    ///         .ok(|x| format!("ok {x}"))
    ///         .nothing(|| "nothing".to_string()),
    /// );
    /// assert_eq!(result, "nothing");
    /// ```
    pub fn match_arms<R>(self, arms: Arms<'_, T, E, R>) -> R {
        match self.try_match_arms(arms) {
            Ok(result) => result,
            Err(error) => panic!("called `Chainable::match_arms()` with {error}"),
        }
    }

    /// Projects an `Ok`/`Error` container, mapping `Nothing` to [`NOTHING`].
    ///
    /// # Panics
    ///
    /// Panics on `Left` and `Right`, which have no handler here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainable::control::Chainable;
    ///
    /// let ok: Chainable<i32, i32> = Chainable::ok(1);
    /// assert_eq!(ok.result(|x| format!("ok {x}"), |e| format!("error {e}")), "ok 1");
    ///
    /// let nothing: Chainable<i32, i32> = Chainable::nothing();
    /// assert_eq!(nothing.result(|x| format!("ok {x}"), |e| format!("error {e}")), "nothing");
    /// ```
    pub fn result<R, F, G>(self, on_ok: F, on_error: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
        R: From<&'static str>,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Error(error) => on_error(error),
            Self::Nothing => R::from(NOTHING),
            unhandled => unhandled_projection("result", unhandled.path()),
        }
    }

    /// Projects an `Ok`/`Nothing` container, mapping `Nothing` to [`NOTHING`].
    ///
    /// # Panics
    ///
    /// Panics on `Left`, `Right` and `Error`.
    pub fn just<R, F>(self, on_ok: F) -> R
    where
        F: FnOnce(T) -> R,
        R: From<&'static str>,
    {
        self.just_or(on_ok, || R::from(NOTHING))
    }

    /// Projects an `Ok`/`Nothing` container with an explicit `Nothing` handler.
    ///
    /// # Panics
    ///
    /// Panics on `Left`, `Right` and `Error`.
    pub fn just_or<R, F, G>(self, on_ok: F, on_nothing: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Nothing => on_nothing(),
            unhandled => unhandled_projection("just", unhandled.path()),
        }
    }

    /// Projects a `Left`/`Right` container, mapping `Nothing` to [`NOTHING`].
    ///
    /// # Panics
    ///
    /// Panics on `Ok` and `Error`.
    pub fn match_either<R, F, G>(self, on_left: F, on_right: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(T) -> R,
        R: From<&'static str>,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
            Self::Nothing => R::from(NOTHING),
            unhandled => unhandled_projection("match_either", unhandled.path()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the payload if this is `Ok`.
    #[inline]
    pub const fn get_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the payload if this is `Left`.
    #[inline]
    pub const fn get_left(&self) -> Option<&T> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the payload if this is `Right`.
    #[inline]
    pub const fn get_right(&self) -> Option<&T> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error if this is `Error`.
    #[inline]
    pub const fn get_error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns `Some(true)` if this is `Nothing`, otherwise `None`.
    #[inline]
    pub const fn get_nothing(&self) -> Option<bool> {
        match self {
            Self::Nothing => Some(true),
            _ => None,
        }
    }

    /// Converts into the `Ok` payload, consuming the container.
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into the `Left` payload, consuming the container.
    #[inline]
    pub fn into_left(self) -> Option<T> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into the `Right` payload, consuming the container.
    #[inline]
    pub fn into_right(self) -> Option<T> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into the `Error` payload, consuming the container.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Collapses the container into a standard `Result`.
    ///
    /// Continuing variants become `Ok(Some(value))`, `Nothing` becomes
    /// `Ok(None)` and `Error(e)` becomes `Err(e)`.
    ///
    /// # Errors
    ///
    /// Returns the error payload if this is `Error`.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Self::Left(value) | Self::Right(value) | Self::Ok(value) => Ok(Some(value)),
            Self::Error(error) => Err(error),
            Self::Nothing => Ok(None),
        }
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Splits off the payload of a continuing variant, or re-types an
    /// absorbing one so it can stand in for any successor payload type.
    #[inline]
    pub(crate) fn into_continuing<U>(self) -> Result<T, Chainable<U, E>> {
        match self {
            Self::Left(value) | Self::Right(value) | Self::Ok(value) => Ok(value),
            Self::Error(error) => Err(Chainable::Error(error)),
            Self::Nothing => Err(Chainable::Nothing),
        }
    }

    #[inline]
    pub(crate) const fn continuing_ref(&self) -> Option<&T> {
        match self {
            Self::Left(value) | Self::Right(value) | Self::Ok(value) => Some(value),
            Self::Error(_) | Self::Nothing => None,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Chainable<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Chainable<T, E> {
    /// `Ok(v)` becomes `Ok(v)`, `Err(e)` becomes `Error(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Option<T>> for Chainable<T, E> {
    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Ok)
    }
}

#[cold]
#[track_caller]
fn unhandled_projection(projection: &str, path: Path) -> ! {
    panic!(
        "called `Chainable::{projection}()` with {}",
        UnhandledPathError { path }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_into_continuing_retypes_absorbing_variants() {
        let error: Chainable<i32, &str> = Chainable::error("boom");
        let retyped: Result<i32, Chainable<String, &str>> = error.into_continuing();
        assert_eq!(retyped, Err(Chainable::error("boom")));

        let nothing: Chainable<i32, &str> = Chainable::nothing();
        let retyped: Result<i32, Chainable<String, &str>> = nothing.into_continuing();
        assert_eq!(retyped, Err(Chainable::nothing()));
    }

    #[rstest]
    #[case(Chainable::left(1), Some(&1))]
    #[case(Chainable::right(2), Some(&2))]
    #[case(Chainable::ok(3), Some(&3))]
    #[case(Chainable::error(4), None)]
    #[case(Chainable::nothing(), None)]
    fn test_continuing_ref(#[case] chainable: Chainable<i32, i32>, #[case] expected: Option<&i32>) {
        assert_eq!(chainable.continuing_ref(), expected);
    }

    #[rstest]
    fn test_debug_format() {
        let ok: Chainable<i32, i32> = Chainable::ok(1);
        let nothing: Chainable<i32, i32> = Chainable::nothing();
        assert_eq!(format!("{ok:?}"), "Ok(1)");
        assert_eq!(format!("{nothing:?}"), "Nothing");
    }

    #[rstest]
    fn test_check_skips_function_when_short_circuited() {
        let error: Chainable<i32, i32> = Chainable::error(1);
        let result = error.check(|_| panic!("check must not run on an error"));
        assert_eq!(result, Chainable::error(1));
    }
}
