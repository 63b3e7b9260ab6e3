//! The tag that identifies which variant a [`Chainable`](super::Chainable) holds.

use std::fmt;

/// The discriminant of a [`Chainable`](super::Chainable), without its payload.
///
/// `Error` and `Nothing` are the short-circuiting paths: every chaining
/// operation leaves a container on one of them untouched.
///
/// # Examples
///
/// ```rust
/// use chainable::control::{Chainable, Path};
///
/// let value: Chainable<i32, String> = Chainable::ok(1);
/// assert_eq!(value.path(), Path::Ok);
/// assert_eq!(value.path().to_string(), "ok");
/// assert!(Path::Nothing.is_short_circuit());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Path {
    /// The `left` branch.
    Left,
    /// The `right` branch.
    Right,
    /// A successful outcome.
    Ok,
    /// A modeled failure.
    Error,
    /// A modeled absence.
    Nothing,
}

impl Path {
    /// Every path, in declaration order.
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Ok, Self::Error, Self::Nothing];

    /// Returns `true` for the absorbing paths, `Error` and `Nothing`.
    #[inline]
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::Error | Self::Nothing)
    }

    /// The lowercase tag name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Ok => "ok",
            Self::Error => "error",
            Self::Nothing => "nothing",
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Path::Left, "left", false)]
    #[case(Path::Right, "right", false)]
    #[case(Path::Ok, "ok", false)]
    #[case(Path::Error, "error", true)]
    #[case(Path::Nothing, "nothing", true)]
    fn test_path_display_and_short_circuit(
        #[case] path: Path,
        #[case] name: &str,
        #[case] short_circuit: bool,
    ) {
        assert_eq!(path.to_string(), name);
        assert_eq!(path.is_short_circuit(), short_circuit);
    }
}
