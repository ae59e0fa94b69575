//! Failure recovery and bounded retry.
//!
//! [`Effect::recover`] is the primitive: it inspects the outcome of a run
//! and substitutes another effect when the run failed. [`Effect::retry`]
//! re-runs the same description until it succeeds or the attempt budget is
//! spent. Retries are driven by a loop, so the attempt budget does not
//! grow the call stack.

use std::time::Duration;

use super::{Effect, Failure};

impl<A: 'static> Effect<A> {
    /// Runs this effect and, if it fails, runs the effect built by `handler`
    /// from the failure.
    ///
    /// `handler` is never invoked when the run succeeds. A failure of the
    /// substitute effect propagates unchanged; it is not recovered again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    ///
    /// let recovered = Effect::fail("boom").recover(|_| Effect::succeed(42));
    /// assert_eq!(recovered.run().unwrap(), 42);
    ///
    /// let untouched = Effect::succeed(42).recover(|_| Effect::succeed(0));
    /// assert_eq!(untouched.run().unwrap(), 42);
    /// ```
    pub fn recover<F>(self, handler: F) -> Self
    where
        F: Fn(&Failure) -> Self + 'static,
    {
        Self::from_operation(move || match self.run() {
            Ok(value) => Ok(value),
            Err(failure) => {
                tracing::debug!(%failure, "recovering from failure");
                handler(&failure).run()
            }
        })
    }

    /// Runs `fallback` if this effect fails, ignoring the failure.
    pub fn or_else(self, fallback: Self) -> Self {
        self.recover(move |_| fallback.clone())
    }

    /// Runs this effect up to `attempts` times, stopping at the first
    /// success.
    ///
    /// Every attempt re-executes the full description. When all attempts
    /// fail, the run fails with [`Failure::RetryExhausted`] carrying the
    /// attempt count and the last underlying message. `retry(1)` is a
    /// single attempt; `retry(0)` makes no attempt and fails immediately.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let attempts = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&attempts);
    /// let flaky = Effect::attempt(move || {
    ///     counter.set(counter.get() + 1);
    ///     if counter.get() < 2 { Err("not yet") } else { Ok("done") }
    /// });
    ///
    /// assert_eq!(flaky.retry(3).run().unwrap(), "done");
    /// assert_eq!(attempts.get(), 2);
    /// ```
    pub fn retry(self, attempts: usize) -> Self {
        self.retry_with_backoff(attempts, Duration::ZERO)
    }

    /// Like [`Effect::retry`], sleeping between attempts.
    ///
    /// The pause before the second attempt is `initial_delay`, and it
    /// doubles before each attempt after that. A zero `initial_delay` never
    /// sleeps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    /// use std::time::Duration;
    ///
    /// let failing: Effect<()> = Effect::fail("unreachable host");
    /// let failure = failing
    ///     .retry_with_backoff(3, Duration::from_millis(1))
    ///     .run()
    ///     .unwrap_err();
    /// assert_eq!(failure.attempts(), Some(3));
    /// assert_eq!(failure.message(), "unreachable host");
    /// ```
    pub fn retry_with_backoff(self, attempts: usize, initial_delay: Duration) -> Self {
        Self::from_operation(move || {
            let mut delay = initial_delay;
            let mut last_message = String::from("no attempt was made");

            for attempt in 1..=attempts {
                if attempt > 1 && !delay.is_zero() {
                    std::thread::sleep(delay);
                    delay = delay.saturating_mul(2);
                }

                match self.run() {
                    Ok(value) => return Ok(value),
                    Err(failure) => {
                        tracing::debug!(attempt, attempts, %failure, "attempt failed");
                        last_message = failure.message().to_owned();
                    }
                }
            }

            tracing::debug!(attempts, message = %last_message, "retry budget exhausted");
            Err(Failure::retry_exhausted(attempts, last_message))
        })
    }
}
