//! Effect system: deferred, composable descriptions of side effects.
//!
//! An [`Effect`] describes a computation without running it. Descriptions
//! are built from a few constructors and combined with combinators; side
//! effects happen only when [`Effect::run`] is called, and each call
//! executes the described chain again from the start.
//!
//! - Construction: [`Effect::new`], [`Effect::attempt`], [`Effect::succeed`],
//!   [`Effect::succeed_with`], [`Effect::fail`], [`Effect::raise`]
//! - Sequencing: [`Effect::and_then`], [`Effect::flat_map`], [`Effect::map`],
//!   [`Effect::then`] (also `>>`)
//! - Recovery: [`Effect::recover`], [`Effect::retry`]
//! - Repetition: [`Effect::repeat`]
//! - Selection: [`Effect::if_else`]
//!
//! Failures are explicit [`Failure`] values returned from `run`, never
//! panics.
//!
//! ```rust
//! use effio::effect::Effect;
//!
//! let effect = Effect::succeed(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| Effect::succeed(x + 1));
//!
//! // Side effects don't occur until run is called
//! assert_eq!(effect.run().unwrap(), 21);
//! ```
//!
//! # Recovery and Retry
//!
//! ```rust
//! use effio::effect::Effect;
//!
//! let fallback = Effect::fail("boom").recover(|failure| {
//!     Effect::succeed(failure.message().len())
//! });
//! assert_eq!(fallback.run().unwrap(), 4);
//!
//! let exhausted = Effect::<()>::fail("boom").retry(3).run().unwrap_err();
//! assert!(exhausted.is_retry_exhausted());
//! ```

// =============================================================================
// Failure
// =============================================================================

mod failure;

pub use failure::{Cause, Failure};

// =============================================================================
// Effect
// =============================================================================

mod deferred;

pub use deferred::{Effect, Never};

// =============================================================================
// Combinators
// =============================================================================

mod recovery;
mod repetition;
