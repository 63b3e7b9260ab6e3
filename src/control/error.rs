//! Error types for matching on a [`Chainable`](super::Chainable).
//!
//! Matching through [`Arms`](super::Arms) is partial: a handler may be left
//! out. When the container sits on a path with no handler, matching reports
//! [`UnhandledPathError`] instead of producing a silent default.

use super::Path;

/// Represents an attempt to match a container whose active path has no handler.
///
/// # Examples
///
/// ```rust
/// use chainable::control::{Path, UnhandledPathError};
///
/// let error = UnhandledPathError { path: Path::Nothing };
/// assert_eq!(
///     format!("{}", error),
///     "no handler registered for the `nothing` path"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnhandledPathError {
    /// The path the container was on when it was matched.
    pub path: Path,
}

impl std::fmt::Display for UnhandledPathError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "no handler registered for the `{}` path",
            self.path
        )
    }
}

impl std::error::Error for UnhandledPathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhandled_path_error_display() {
        let error = UnhandledPathError { path: Path::Left };
        assert_eq!(
            format!("{error}"),
            "no handler registered for the `left` path"
        );
    }

    #[test]
    fn test_unhandled_path_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(UnhandledPathError { path: Path::Ok });
        assert_eq!(error.to_string(), "no handler registered for the `ok` path");
    }
}
