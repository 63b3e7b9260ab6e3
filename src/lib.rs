//! # chainable
//!
//! Tagged outcome containers with short-circuit chaining, and an
//! asynchronous lifter that applies the same chaining to pending futures.
//!
//! ## Overview
//!
//! - **Variant Container**: [`Chainable`](control::Chainable) holds a value on
//!   one of five paths (`Left`, `Right`, `Ok`, `Error`, `Nothing`). `chain`,
//!   `check` and friends run the next step on the continuing paths and pass
//!   `Error`/`Nothing` through untouched until a terminal match.
//! - **Async Lifter**: [`AsyncChainable`](effect::AsyncChainable) wraps a
//!   future that settles into a `Chainable` and re-exposes the same
//!   vocabulary, ending in `will_match`.
//!
//! ## Feature Flags
//!
//! - `control`: The variant container and matchers
//! - `async`: The async lifter (requires `control`)
//! - `serde`: `Serialize`/`Deserialize` for `Chainable` and `Path`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chainable::prelude::*;
//!
//! fn increment(value: i32) -> Chainable<i32, i32> {
//!     Chainable::ok(value + 1)
//! }
//!
//! let result = Chainable::ok(2)
//!     .chain(increment)
//!     .chain(increment)
//!     .match_arms(
//!         Arms::new()
//!             .ok(|x| format!("ok {x}"))
//!             .error(|x| format!("error {x}")),
//!     );
//! assert_eq!(result, "ok 4");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use chainable::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "async")]
    pub use crate::effect::{AsyncChainable, Settle, Settled, Validate, task};
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "async")]
pub mod effect;
