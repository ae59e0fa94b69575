//! The `Effect` type: a deferred, re-runnable description of a computation.
//!
//! An `Effect<A>` wraps a zero-argument operation that produces either a
//! value of type `A` or a [`Failure`]. Building an effect, or combining
//! effects, never executes anything. Execution happens only in
//! [`Effect::run`], and every call to `run` executes the whole chain again.
//!
//! # Design Philosophy
//!
//! An effect "describes" side effects but doesn't "execute" them. `run`
//! should be called at the program's edge (e.g., in `main`).
//!
//! # Examples
//!
//! ```rust
//! use effio::effect::Effect;
//!
//! let effect = Effect::succeed(10)
//!     .map(|x| x * 2)
//!     .and_then(|x| Effect::succeed(x + 1));
//! assert_eq!(effect.run().unwrap(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use effio::effect::Effect;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//!
//! let effect = Effect::new(move || {
//!     counter.set(counter.get() + 1);
//!     42
//! });
//!
//! // Not executed yet
//! assert_eq!(runs.get(), 0);
//!
//! assert_eq!(effect.run().unwrap(), 42);
//! assert_eq!(effect.run().unwrap(), 42);
//! assert_eq!(runs.get(), 2);
//! ```

use std::fmt;
use std::ops::Shr;
use std::rc::Rc;
use std::time::Duration;

use super::Failure;

type Operation<A> = Rc<dyn Fn() -> Result<A, Failure>>;

/// Marker type for effects that can never succeed.
///
/// `Never` has no values, so an `Effect<Never>` can only fail. Use
/// [`Effect::widen`] to use it wherever an effect of another value type is
/// expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Never {}

/// A deferred computation producing an `A` or a [`Failure`].
///
/// Cloning an `Effect` is cheap and shares the same description; it does
/// not share any execution state, because none is kept.
///
/// # Monad Laws
///
/// Observed through `run`, `Effect` satisfies the monad laws:
///
/// 1. **Left Identity**: `Effect::succeed(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Effect::succeed) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[must_use = "an Effect does nothing until it is run"]
pub struct Effect<A> {
    operation: Operation<A>,
}

impl<A> Clone for Effect<A> {
    fn clone(&self) -> Self {
        Self {
            operation: Rc::clone(&self.operation),
        }
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Effect").finish_non_exhaustive()
    }
}

impl<A: 'static> Effect<A> {
    pub(crate) fn from_operation<F>(operation: F) -> Self
    where
        F: Fn() -> Result<A, Failure> + 'static,
    {
        Self {
            operation: Rc::new(operation),
        }
    }

    /// Lifts a deferred operation into an effect.
    ///
    /// The closure will not be executed until `run` is called, and is
    /// executed again on every `run`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let effect = Effect::new(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// assert_eq!(effect.run().unwrap(), 42);
    /// ```
    pub fn new<F>(operation: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::from_operation(move || Ok(operation()))
    }

    /// Lifts a deferred operation that may fail.
    ///
    /// The operation's error is converted into a [`Failure`] when the effect
    /// runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let parse = Effect::attempt(|| "12".parse::<i32>().map_err(|e| e.to_string()));
    /// assert_eq!(parse.run().unwrap(), 12);
    ///
    /// let broken = Effect::attempt(|| "x".parse::<i32>().map_err(|e| e.to_string()));
    /// assert_eq!(broken.run().unwrap_err().message(), "invalid digit found in string");
    /// ```
    pub fn attempt<F, E>(operation: F) -> Self
    where
        F: Fn() -> Result<A, E> + 'static,
        E: Into<Failure>,
    {
        Self::from_operation(move || operation().map_err(Into::into))
    }

    /// Creates an effect that yields `value` on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let effect = Effect::succeed(42);
    /// assert_eq!(effect.run().unwrap(), 42);
    /// ```
    pub fn succeed(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_operation(move || Ok(value.clone()))
    }

    /// Creates an effect that evaluates `thunk` on every run, and never
    /// before.
    ///
    /// This is [`Effect::new`] under the name used for lazily computed
    /// results, and works for values that are not `Clone`.
    pub fn succeed_with<F>(thunk: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::new(thunk)
    }

    /// Creates an effect that always fails with `message`.
    ///
    /// The value type is free, so a failing effect fits wherever an effect
    /// is expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let as_number: Effect<i32> = Effect::fail("boom");
    /// let as_text: Effect<String> = Effect::fail("boom");
    /// assert_eq!(as_number.run().unwrap_err().message(), "boom");
    /// assert_eq!(as_text.run().unwrap_err().message(), "boom");
    /// ```
    pub fn fail(message: impl Into<String>) -> Self {
        Self::raise(Failure::new(message))
    }

    /// Creates an effect that always fails with an empty message.
    pub fn fail_empty() -> Self {
        Self::raise(Failure::default())
    }

    /// Creates an effect that always fails with the given failure.
    pub fn raise(failure: Failure) -> Self {
        Self::from_operation(move || Err(failure.clone()))
    }

    /// Executes the described chain and returns its outcome.
    ///
    /// This is the only place where side effects happen. Each call is an
    /// independent execution; nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] of the first step that failed and was not
    /// recovered.
    pub fn run(&self) -> Result<A, Failure> {
        (self.operation)()
    }

    /// Transforms the produced value.
    ///
    /// Equivalent to `flat_map(|a| Effect::succeed(function(a)))` without
    /// requiring the result to be `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let effect = Effect::succeed(21).map(|x| x * 2);
    /// assert_eq!(effect.run().unwrap(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Effect::from_operation(move || self.run().map(&function))
    }

    /// Chains effects, passing the value of this one to a function that
    /// builds the next.
    ///
    /// A failure of this effect aborts the chain: `function` is not called
    /// and the failure is returned as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let effect = Effect::succeed(10).and_then(|x| Effect::succeed(x + 5));
    /// assert_eq!(effect.run().unwrap(), 15);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> Effect<B> + 'static,
        B: 'static,
    {
        Effect::from_operation(move || {
            let value = self.run()?;
            function(value).run()
        })
    }

    /// Alias for `and_then`.
    ///
    /// This is the `bind` operation from Monad.
    pub fn flat_map<B, F>(self, function: F) -> Effect<B>
    where
        F: Fn(A) -> Effect<B> + 'static,
        B: 'static,
    {
        self.and_then(function)
    }

    /// Sequences two effects, discarding the value of the first.
    ///
    /// The first effect is still executed for its side effects. The `>>`
    /// operator does the same.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let effect = Effect::succeed(10).then(Effect::succeed(20));
    /// assert_eq!(effect.run().unwrap(), 20);
    ///
    /// let effect = Effect::succeed(10) >> Effect::succeed("twenty");
    /// assert_eq!(effect.run().unwrap(), "twenty");
    /// ```
    pub fn then<B>(self, next: Effect<B>) -> Effect<B>
    where
        B: 'static,
    {
        self.and_then(move |_| next.clone())
    }

    /// Combines the values of two effects, running `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let effect = Effect::succeed(10).map2(Effect::succeed(20), |a, b| a + b);
    /// assert_eq!(effect.run().unwrap(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Effect<B>, function: F) -> Effect<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Effect::from_operation(move || {
            let first = self.run()?;
            let second = other.run()?;
            Ok(function(first, second))
        })
    }

    /// Combines two effects into a tuple of their values.
    pub fn product<B>(self, other: Effect<B>) -> Effect<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Transforms the failure of an unsuccessful run.
    ///
    /// Successful runs are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::{Effect, Failure};
    ///
    /// let effect: Effect<i32> = Effect::fail("timeout")
    ///     .map_failure(|failure| Failure::new(format!("fetch: {}", failure.message())));
    /// assert_eq!(effect.run().unwrap_err().message(), "fetch: timeout");
    /// ```
    pub fn map_failure<F>(self, function: F) -> Self
    where
        F: Fn(Failure) -> Failure + 'static,
    {
        Self::from_operation(move || self.run().map_err(&function))
    }

    /// Selects one of two effects with an ordinary boolean.
    ///
    /// Neither effect is run here; the selected one runs when the result
    /// is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let name = "Joe";
    /// let greeting = Effect::if_else(
    ///     name == "Joe",
    ///     Effect::succeed("welcome"),
    ///     Effect::fail("go away"),
    /// );
    /// assert_eq!(greeting.run().unwrap(), "welcome");
    /// ```
    pub fn if_else(predicate: bool, if_true: Self, if_false: Self) -> Self {
        if predicate { if_true } else { if_false }
    }
}

impl Effect<Never> {
    /// Reinterprets an effect that can never succeed as an effect of any
    /// value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::{Effect, Never};
    ///
    /// let rejected: Effect<Never> = Effect::fail("rejected");
    /// let fallback: Effect<u8> = rejected.clone().widen();
    /// let label: Effect<String> = rejected.widen();
    /// assert!(fallback.run().is_err());
    /// assert!(label.run().is_err());
    /// ```
    pub fn widen<B: 'static>(self) -> Effect<B> {
        Effect::from_operation(move || match self.run() {
            Ok(never) => match never {},
            Err(failure) => Err(failure),
        })
    }
}

impl Effect<()> {
    /// Creates an effect that blocks the calling thread for `duration`.
    ///
    /// The delay does not occur until `run` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    /// use std::time::Duration;
    ///
    /// let pause = Effect::delay(Duration::from_millis(1));
    /// pause.run().unwrap();
    /// ```
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || std::thread::sleep(duration))
    }
}

impl<A: 'static, B: 'static> Shr<Effect<B>> for Effect<A> {
    type Output = Effect<B>;

    fn shr(self, next: Effect<B>) -> Self::Output {
        self.then(next)
    }
}

static_assertions::assert_not_impl_any!(Effect<i32>: Send, Sync);
static_assertions::assert_impl_all!(Effect<String>: Clone);
