//! Terminal matching on a [`Chainable`].
//!
//! Two flavors are provided:
//!
//! - [`Matcher`]: exhaustive. Every path has a required method, so a matcher
//!   that forgets a case does not compile. [`Cases`] implements it with one
//!   closure per path.
//! - [`Arms`]: partial. Handlers are registered one by one and a missing
//!   handler for the active path is reported as [`UnhandledPathError`].
//!
//! # Examples
//!
//! ```rust
//! use chainable::control::{Arms, Cases, Chainable};
//!
//! let value: Chainable<i32, i32> = Chainable::ok(4);
//!
//! let exhaustive = value.clone().match_with(Cases {
//!     left: |x| format!("left {x}"),
//!     right: |x| format!("right {x}"),
//!     ok: |x| format!("ok {x}"),
//!     error: |x| format!("error {x}"),
//!     nothing: || "nothing".to_string(),
//! });
//! assert_eq!(exhaustive, "ok 4");
//!
//! let partial = value.match_arms(
//!     Arms::new()
//!         .ok(|x| format!("ok {x}"))
//!         .error(|x| format!("error {x}")),
//! );
//! assert_eq!(partial, "ok 4");
//! ```

use super::{Chainable, Path, UnhandledPathError};

/// The sentinel projections return for `Nothing` unless told otherwise.
pub const NOTHING: &str = "nothing";

/// An exhaustive handler set, one method per path.
///
/// Implement it on your own type, or use [`Cases`] to build one from closures.
pub trait Matcher<T, E> {
    /// The value every handler produces.
    type Output;

    /// Handles `Left(value)`.
    fn left(self, value: T) -> Self::Output;

    /// Handles `Right(value)`.
    fn right(self, value: T) -> Self::Output;

    /// Handles `Ok(value)`.
    fn ok(self, value: T) -> Self::Output;

    /// Handles `Error(error)`.
    fn error(self, error: E) -> Self::Output;

    /// Handles `Nothing`.
    fn nothing(self) -> Self::Output;
}

/// A [`Matcher`] built from one closure per path.
#[derive(Clone, Copy, Debug)]
pub struct Cases<FL, FR, FO, FE, FN> {
    /// Handler for `Left`.
    pub left: FL,
    /// Handler for `Right`.
    pub right: FR,
    /// Handler for `Ok`.
    pub ok: FO,
    /// Handler for `Error`.
    pub error: FE,
    /// Handler for `Nothing`.
    pub nothing: FN,
}

impl<T, E, R, FL, FR, FO, FE, FN> Matcher<T, E> for Cases<FL, FR, FO, FE, FN>
where
    FL: FnOnce(T) -> R,
    FR: FnOnce(T) -> R,
    FO: FnOnce(T) -> R,
    FE: FnOnce(E) -> R,
    FN: FnOnce() -> R,
{
    type Output = R;

    fn left(self, value: T) -> R {
        (self.left)(value)
    }

    fn right(self, value: T) -> R {
        (self.right)(value)
    }

    fn ok(self, value: T) -> R {
        (self.ok)(value)
    }

    fn error(self, error: E) -> R {
        (self.error)(error)
    }

    fn nothing(self) -> R {
        (self.nothing)()
    }
}

type Handler<'a, A, R> = Box<dyn FnOnce(A) -> R + Send + 'a>;

/// A partial handler set. Paths without a handler fail when matched.
///
/// Built with [`Arms::new`] and the per-path builder methods; consumed by
/// [`Chainable::match_arms`] and [`Chainable::try_match_arms`].
pub struct Arms<'a, T, E, R> {
    left: Option<Handler<'a, T, R>>,
    right: Option<Handler<'a, T, R>>,
    ok: Option<Handler<'a, T, R>>,
    error: Option<Handler<'a, E, R>>,
    nothing: Option<Box<dyn FnOnce() -> R + Send + 'a>>,
}

impl<'a, T, E, R> Arms<'a, T, E, R> {
    /// Creates an empty handler set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left: None,
            right: None,
            ok: None,
            error: None,
            nothing: None,
        }
    }

    /// Registers the `Left` handler.
    #[must_use]
    pub fn left<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T) -> R + Send + 'a,
    {
        self.left = Some(Box::new(handler));
        self
    }

    /// Registers the `Right` handler.
    #[must_use]
    pub fn right<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T) -> R + Send + 'a,
    {
        self.right = Some(Box::new(handler));
        self
    }

    /// Registers the `Ok` handler.
    #[must_use]
    pub fn ok<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T) -> R + Send + 'a,
    {
        self.ok = Some(Box::new(handler));
        self
    }

    /// Registers the `Error` handler.
    #[must_use]
    pub fn error<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(E) -> R + Send + 'a,
    {
        self.error = Some(Box::new(handler));
        self
    }

    /// Registers the `Nothing` handler.
    #[must_use]
    pub fn nothing<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + Send + 'a,
    {
        self.nothing = Some(Box::new(handler));
        self
    }

    /// Returns `true` if a handler is registered for `path`.
    pub const fn handles(&self, path: Path) -> bool {
        match path {
            Path::Left => self.left.is_some(),
            Path::Right => self.right.is_some(),
            Path::Ok => self.ok.is_some(),
            Path::Error => self.error.is_some(),
            Path::Nothing => self.nothing.is_some(),
        }
    }

    /// Runs the handler for the active path of `chainable`.
    ///
    /// # Errors
    ///
    /// Returns [`UnhandledPathError`] if no handler is registered for that path.
    pub fn dispatch(self, chainable: Chainable<T, E>) -> Result<R, UnhandledPathError> {
        let unhandled = UnhandledPathError {
            path: chainable.path(),
        };
        match chainable {
            Chainable::Left(value) => self.left.map(|handler| handler(value)),
            Chainable::Right(value) => self.right.map(|handler| handler(value)),
            Chainable::Ok(value) => self.ok.map(|handler| handler(value)),
            Chainable::Error(error) => self.error.map(|handler| handler(error)),
            Chainable::Nothing => self.nothing.map(|handler| handler()),
        }
        .ok_or(unhandled)
    }
}

impl<T, E, R> Default for Arms<'_, T, E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, R> std::fmt::Debug for Arms<'_, T, E, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handled: Vec<Path> = Path::ALL
            .into_iter()
            .filter(|path| self.handles(*path))
            .collect();
        formatter
            .debug_struct("Arms")
            .field("handled", &handled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_arms_handles_only_registered_paths() {
        let arms: Arms<'_, i32, i32, i32> = Arms::new().ok(|x| x).nothing(|| 0);
        assert!(arms.handles(Path::Ok));
        assert!(arms.handles(Path::Nothing));
        assert!(!arms.handles(Path::Left));
        assert!(!arms.handles(Path::Error));
    }

    #[rstest]
    fn test_dispatch_reports_missing_path() {
        let arms: Arms<'_, i32, i32, i32> = Arms::new().ok(|x| x);
        assert_eq!(
            arms.dispatch(Chainable::Left(1)),
            Err(UnhandledPathError { path: Path::Left })
        );
    }

    #[rstest]
    fn test_arms_debug_lists_handled_paths() {
        let arms: Arms<'_, i32, i32, i32> = Arms::new().error(|x| x).left(|x| x);
        assert_eq!(format!("{arms:?}"), "Arms { handled: [Left, Error] }");
    }
}
