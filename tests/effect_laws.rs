#![cfg(feature = "effect")]
//! Property-based tests for Effect laws.
//!
//! This module verifies, through `run`, that Effect satisfies the Monad
//! and Functor laws, and checks the counting properties of `retry` and
//! `repeat` over arbitrary budgets.

use effio::effect::Effect;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: succeed(a).flat_map(f) == f(a)
    #[test]
    fn prop_effect_left_identity(value: i32) {
        let function = |n: i32| Effect::succeed(n.wrapping_mul(2));

        let left_result = Effect::succeed(value).flat_map(function).run().unwrap();
        let right_result = function(value).run().unwrap();

        prop_assert_eq!(left_result, right_result);
    }

    /// Right Identity Law: m.flat_map(succeed) == m
    #[test]
    fn prop_effect_right_identity(value: i32) {
        let left_result = Effect::succeed(value).flat_map(Effect::succeed).run().unwrap();

        prop_assert_eq!(left_result, value);
    }

    /// Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_effect_associativity(value: i32) {
        let function1 = |n: i32| Effect::succeed(n.wrapping_add(1));
        let function2 = |n: i32| Effect::succeed(n.wrapping_mul(2));

        let left_result = Effect::succeed(value)
            .flat_map(function1)
            .flat_map(function2)
            .run()
            .unwrap();
        let right_result = Effect::succeed(value)
            .flat_map(move |x| function1(x).flat_map(function2))
            .run()
            .unwrap();

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: map(id) == id
    #[test]
    fn prop_effect_functor_identity(value: i32) {
        prop_assert_eq!(Effect::succeed(value).map(|x| x).run().unwrap(), value);
    }

    /// Functor Composition Law: map(f . g) == map(g).map(f)
    #[test]
    fn prop_effect_functor_composition(value: i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left_result = Effect::succeed(value)
            .map(move |x| function2(function1(x)))
            .run()
            .unwrap();
        let right_result = Effect::succeed(value)
            .map(function1)
            .map(function2)
            .run()
            .unwrap();

        prop_assert_eq!(left_result, right_result);
    }

    /// map(g) == flat_map(|a| succeed(g(a)))
    #[test]
    fn prop_effect_map_is_flat_map_succeed(value: i32) {
        let function = |x: i32| x.wrapping_sub(7);

        let left_result = Effect::succeed(value).map(function).run().unwrap();
        let right_result = Effect::succeed(value)
            .flat_map(move |x| Effect::succeed(function(x)))
            .run()
            .unwrap();

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Recovery, Retry and Repeat Properties
// =============================================================================

proptest! {
    /// recover is never consulted when the effect succeeds
    #[test]
    fn prop_recover_passes_success_through(value: i32, fallback: i32) {
        let result = Effect::succeed(value)
            .recover(move |_| Effect::succeed(fallback))
            .run()
            .unwrap();

        prop_assert_eq!(result, value);
    }

    /// An always-failing effect is executed exactly `attempts` times
    #[test]
    fn prop_retry_executes_exactly_budget(attempts in 0usize..50) {
        let runs = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&runs);
        let failing = Effect::attempt(move || {
            counter.set(counter.get() + 1);
            Err::<(), _>("always")
        });

        let failure = failing.retry(attempts).run().unwrap_err();

        prop_assert_eq!(runs.get(), attempts);
        prop_assert_eq!(failure.attempts(), Some(attempts));
    }

    /// An effect that succeeds on attempt `k` stops there when the budget allows it
    #[test]
    fn prop_retry_stops_at_first_success(succeed_on in 1usize..20, extra in 0usize..5) {
        let runs = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&runs);
        let flaky = Effect::attempt(move || {
            counter.set(counter.get() + 1);
            if counter.get() < succeed_on { Err("not yet") } else { Ok(counter.get()) }
        });

        let result = flaky.retry(succeed_on + extra).run().unwrap();

        prop_assert_eq!(result, succeed_on);
        prop_assert_eq!(runs.get(), succeed_on);
    }

    /// repeat(n) executes the chain max(n, 1) times and keeps the last value
    #[test]
    fn prop_repeat_executes_chain_n_times(times in 0usize..50) {
        let runs = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&runs);
        let effect = Effect::new(move || {
            counter.set(counter.get() + 1);
            counter.get()
        })
        .map(|x| x * 10);

        let expected = times.max(1);
        prop_assert_eq!(effect.repeat(times).run().unwrap(), expected * 10);
        prop_assert_eq!(runs.get(), expected);
    }
}
