//! # effio
//!
//! Deferred, composable effect descriptions for Rust.
//!
//! ## Overview
//!
//! An [`Effect`](effect::Effect) is an inert value describing a computation
//! that may perform side effects. Effects are built, chained and wrapped in
//! recovery logic without running anything; the side effects happen only
//! when the effect is run, and every run executes the description again.
//!
//! - **Effect**: construction, sequencing, recovery, retry and repeat
//! - **Console**: the host's line-oriented console as a trait, with effects
//!   lifting its primitives
//! - **Greeter**: an interactive prompt/check/retry program built from the
//!   above
//!
//! ## Feature Flags
//!
//! - `effect`: The `Effect` type and its combinators
//! - `console`: Console trait and console effects
//! - `greeter`: The greeter program and its configuration
//! - `cli`: The `effio` binary (not enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for configuration types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effio::prelude::*;
//!
//! let program = Effect::succeed(20)
//!     .map(|x| x + 1)
//!     .and_then(|x| Effect::if_else(x > 20, Effect::succeed(x * 2), Effect::fail("too small")));
//!
//! assert_eq!(program.run().unwrap(), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effio::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "console")]
    pub use crate::console::{Console, ScriptedConsole, StdConsole};

    #[cfg(feature = "greeter")]
    pub use crate::greeter::GreeterConfig;
}

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "greeter")]
pub mod greeter;
