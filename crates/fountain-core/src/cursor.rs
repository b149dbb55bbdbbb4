//! Lazy label cursor over an arithmetic progression.

use std::iter::FusedIterator;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::errors::FountainError;

/// Compute the label for a single integer against the given divisors.
///
/// Exact-divisibility test only; the sign convention of the remainder is
/// irrelevant because only a zero remainder counts.
pub(crate) fn label(n: &BigInt, fizz: &BigInt, buzz: &BigInt) -> Result<String, FountainError> {
    if fizz.is_zero() {
        return Err(FountainError::ZeroDivisor("fizz"));
    }
    if buzz.is_zero() {
        return Err(FountainError::ZeroDivisor("buzz"));
    }
    let mut out = String::new();
    if (n % fizz).is_zero() {
        out.push_str("Fizz");
    }
    if (n % buzz).is_zero() {
        out.push_str("Buzz");
    }
    if out.is_empty() {
        Ok(n.to_string())
    } else {
        Ok(out)
    }
}

/// Lazy, single-pass cursor over FizzBuzz labels.
///
/// Yields one `Result<String, FountainError>` per integer of the arithmetic
/// progression `start, start + step, start + 2*step, ...`, bounded by `stop`
/// when present (half-open, direction given by the sign of `step`) and
/// unbounded otherwise. Each cursor owns its entire position state; cursors
/// created from the same [`Fountain`](crate::Fountain) never interact.
///
/// A zero divisor surfaces as an `Err` at the first pulled value, after
/// which the cursor is exhausted. An exhausted cursor keeps yielding `None`.
#[derive(Debug, Clone)]
pub struct Labels {
    fizz: BigInt,
    buzz: BigInt,
    cursor: BigInt,
    stop: Option<BigInt>,
    step: BigInt,
    done: bool,
}

impl Labels {
    /// Build a cursor. `step` must be nonzero; callers validate.
    pub(crate) fn new(
        fizz: BigInt,
        buzz: BigInt,
        start: BigInt,
        stop: Option<BigInt>,
        step: BigInt,
    ) -> Self {
        Self {
            fizz,
            buzz,
            cursor: start,
            stop,
            step,
            done: false,
        }
    }
}

impl Iterator for Labels {
    type Item = Result<String, FountainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(stop) = &self.stop {
            let past = if self.step.is_positive() {
                self.cursor >= *stop
            } else {
                self.cursor <= *stop
            };
            if past {
                self.done = true;
                return None;
            }
        }
        let item = label(&self.cursor, &self.fizz, &self.buzz);
        if item.is_err() {
            self.done = true;
        }
        self.cursor += &self.step;
        Some(item)
    }
}

impl FusedIterator for Labels {}
