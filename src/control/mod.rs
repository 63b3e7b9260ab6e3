//! The variant container and its matching vocabulary.
//!
//! - [`Chainable`]: a value tagged as `Left`, `Right`, `Ok`, `Error` or `Nothing`
//! - [`Path`]: the tag on its own
//! - [`Check`]: the outcome of a validation step
//! - [`Matcher`] / [`Cases`]: exhaustive terminal matching
//! - [`Arms`]: partial terminal matching, failing loudly on a missing handler
//!
//! # Examples
//!
//! ## Short-Circuiting
//!
//! ```rust
//! use chainable::control::Chainable;
//!
//! let result: Chainable<i32, i32> = Chainable::ok(1)
//!     .chain(|x| Chainable::ok(x + 1))
//!     .chain(|_| Chainable::nothing())
//!     .chain(|x: i32| Chainable::ok(x + 1));
//!
//! assert!(result.is_nothing());
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use chainable::control::{Chainable, Check};
//!
//! let result: Chainable<i32, String> = Chainable::ok(150)
//!     .check(|x| Check::ensure(*x <= 100, || Chainable::error(format!("{x} is too large"))))
//!     .chain(|x| Chainable::ok(x * 2));
//!
//! assert_eq!(result.get_error().map(String::as_str), Some("150 is too large"));
//! ```

mod chainable;
mod check;
mod error;
mod matcher;
mod path;

pub use chainable::Chainable;
pub use check::Check;
pub use error::UnhandledPathError;
pub use matcher::{Arms, Cases, Matcher, NOTHING};
pub use path::Path;
