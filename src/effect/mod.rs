//! Asynchronous chaining over pending futures.
//!
//! [`AsyncChainable`] lets a chain of [`Chainable`] steps continue uniformly
//! once one of its steps has to wait on a future. Each step settles into a
//! [`Settled`] value: resolved (`Ok`) or rejected (`Err`), both carrying a
//! container. Terminal matching collapses the two channels, so a rejection
//! holding `Error(e)` is matched exactly like a resolution holding `Error(e)`.
//!
//! ```rust,ignore
//! use chainable::control::{Arms, Chainable};
//! use chainable::effect::task;
//!
//! async fn promise_ok(value: i32) -> Chainable<i32, i32> {
//!     Chainable::ok(value + 1)
//! }
//!
//! async fn promise_nothing(_: i32) -> Chainable<i32, i32> {
//!     Chainable::nothing()
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let result = task(promise_ok(1))
//!         .task(promise_nothing)
//!         .task(promise_ok)
//!         .will_match_arms(
//!             Arms::new()
//!                 .ok(|x| format!("ok {x}"))
//!                 .nothing(|| "nothing".to_string()),
//!         )
//!         .await;
//!     assert_eq!(result, "nothing");
//! }
//! ```

mod async_chainable;
mod settle;
mod validate;

use std::future::Future;

pub use async_chainable::AsyncChainable;
pub use settle::{Settle, Settled};
pub use validate::Validate;

use crate::control::Chainable;

/// Lifts a future that settles into a [`Chainable`].
///
/// Shorthand for [`AsyncChainable::new`].
pub fn task<T, E, Fut, S>(future: Fut) -> AsyncChainable<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    Fut: Future<Output = S> + Send + 'static,
    S: Settle<T, E> + 'static,
{
    AsyncChainable::new(future)
}

/// Seeds an [`AsyncChainable`] with an already-settled container.
///
/// Shorthand for [`AsyncChainable::of`].
pub const fn of<T, E>(chainable: Chainable<T, E>) -> AsyncChainable<T, E> {
    AsyncChainable::of(chainable)
}
