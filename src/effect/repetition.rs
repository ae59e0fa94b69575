//! Fixed-count repetition of an effect.

use super::Effect;

impl<A: 'static> Effect<A> {
    /// Runs this effect `times` times in sequence and yields the value of
    /// the last run.
    ///
    /// Each repetition re-executes the whole description, side effects
    /// included. The first failure stops the repetition and propagates.
    /// `repeat(0)` behaves like `repeat(1)`: the effect always runs at
    /// least once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effio::effect::Effect;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let runs = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&runs);
    /// let tick = Effect::new(move || {
    ///     counter.set(counter.get() + 1);
    ///     counter.get()
    /// });
    ///
    /// assert_eq!(tick.repeat(3).run().unwrap(), 3);
    /// assert_eq!(runs.get(), 3);
    /// ```
    pub fn repeat(self, times: usize) -> Self {
        Self::from_operation(move || {
            let mut value = self.run()?;
            for repetition in 2..=times {
                tracing::trace!(repetition, times, "repeating effect");
                value = self.run()?;
            }
            Ok(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counted(counter: &Rc<Cell<usize>>) -> Effect<usize> {
        let counter = Rc::clone(counter);
        Effect::new(move || {
            counter.set(counter.get() + 1);
            counter.get()
        })
    }

    #[test]
    fn test_repeat_zero_runs_once() {
        let runs = Rc::new(Cell::new(0));
        assert_eq!(counted(&runs).repeat(0).run().unwrap(), 1);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_repeat_one_runs_once() {
        let runs = Rc::new(Cell::new(0));
        assert_eq!(counted(&runs).repeat(1).run().unwrap(), 1);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_repeat_stops_at_failure() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let effect = Effect::attempt(move || {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                Err("second run failed")
            } else {
                Ok(counter.get())
            }
        });

        let failure = effect.repeat(5).run().unwrap_err();
        assert_eq!(failure.message(), "second run failed");
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_repeat_is_not_stack_bound() {
        let runs = Rc::new(Cell::new(0));
        assert_eq!(counted(&runs).repeat(100_000).run().unwrap(), 100_000);
    }

    #[test]
    fn test_repeated_effect_reruns_on_each_run() {
        let runs = Rc::new(Cell::new(0));
        let repeated = counted(&runs).repeat(2);
        repeated.run().unwrap();
        repeated.run().unwrap();
        assert_eq!(runs.get(), 4);
    }
}
