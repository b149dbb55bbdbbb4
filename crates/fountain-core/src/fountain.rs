//! The `Fountain` configuration value and its access modes.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::cursor::{label, Labels};
use crate::errors::FountainError;

/// Immutable FizzBuzz configuration: the two divisors.
///
/// A `Fountain` holds no cursor state of its own; every generation call
/// returns a fresh, independent [`Labels`] cursor. Two fountains with equal
/// `(fizz, buzz)` are behaviorally identical.
///
/// # Example
/// ```
/// use fountain_core::Fountain;
///
/// let f = Fountain::new(3, 5);
/// assert_eq!(f.to_string(), "Fountain(fizz=3, buzz=5)");
/// let labels: Vec<_> = f
///     .generate(1, Some(6.into()), 1)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(labels, ["1", "2", "Fizz", "4", "Buzz"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fountain {
    fizz: BigInt,
    buzz: BigInt,
}

impl Fountain {
    /// Create a fountain from the given divisors.
    ///
    /// Zero and negative divisors are accepted here; a zero divisor only
    /// fails once a label is actually computed.
    pub fn new(fizz: impl Into<BigInt>, buzz: impl Into<BigInt>) -> Self {
        Self {
            fizz: fizz.into(),
            buzz: buzz.into(),
        }
    }

    /// Parse divisors from text, e.g. CLI flag values.
    ///
    /// # Errors
    ///
    /// Returns [`FountainError::InvalidDivisor`] if either input is not an
    /// integer.
    pub fn parse(fizz: &str, buzz: &str) -> Result<Self, FountainError> {
        let parse = |name: &'static str, text: &str| {
            text.trim()
                .parse::<BigInt>()
                .map_err(|_| FountainError::InvalidDivisor {
                    name,
                    value: text.to_owned(),
                })
        };
        Ok(Self {
            fizz: parse("fizz", fizz)?,
            buzz: parse("buzz", buzz)?,
        })
    }

    /// The `(fizz, buzz)` divisor pair.
    #[must_use]
    pub fn shape(&self) -> (&BigInt, &BigInt) {
        (&self.fizz, &self.buzz)
    }

    /// Lazily generate labels over an arithmetic progression.
    ///
    /// With `stop = None` the cursor is unbounded in the direction of
    /// `step`'s sign; otherwise it enumerates the half-open range
    /// `start..stop` by `step`, with reversed bounds yielding an empty
    /// cursor. Each call returns a fresh single-pass cursor.
    ///
    /// # Errors
    ///
    /// Returns [`FountainError::ZeroStep`] if `step == 0`; the progression
    /// would never advance.
    pub fn generate(
        &self,
        start: impl Into<BigInt>,
        stop: Option<BigInt>,
        step: impl Into<BigInt>,
    ) -> Result<Labels, FountainError> {
        let step = step.into();
        if step.is_zero() {
            return Err(FountainError::ZeroStep);
        }
        Ok(Labels::new(
            self.fizz.clone(),
            self.buzz.clone(),
            start.into(),
            stop,
            step,
        ))
    }

    /// The label of the integer `i` itself.
    ///
    /// Equivalent to the first element of `generate(i, None, 1)`. There is
    /// no notion of "from the end": `at(-3)` labels the integer `-3`.
    ///
    /// # Errors
    ///
    /// Returns [`FountainError::ZeroDivisor`] if either divisor is zero.
    pub fn at(&self, i: impl Into<BigInt>) -> Result<String, FountainError> {
        label(&i.into(), &self.fizz, &self.buzz)
    }

    /// Eagerly materialize a bounded range of labels.
    ///
    /// `start` defaults to 0 and `step` to 1 when omitted; `stop` is
    /// mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`FountainError::EndlessSlice`] if `stop` is `None` (the
    /// materialization would never finish), [`FountainError::ZeroStep`] if
    /// `step == 0`, and [`FountainError::ZeroDivisor`] if a zero divisor is
    /// hit while labeling.
    pub fn slice(
        &self,
        start: Option<BigInt>,
        stop: Option<BigInt>,
        step: Option<BigInt>,
    ) -> Result<Vec<String>, FountainError> {
        let stop = stop.ok_or(FountainError::EndlessSlice)?;
        let start = start.unwrap_or_else(BigInt::zero);
        let step = step.unwrap_or_else(BigInt::one);
        self.generate(start, Some(stop), step)?.collect()
    }

    /// The sequence is infinite in both directions, so this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`FountainError::Endless`] ("FizzBuzz forever").
    pub fn length(&self) -> Result<usize, FountainError> {
        Err(FountainError::Endless)
    }

    /// Unbounded forward cursor from 0: `generate(0, None, 1)`.
    #[must_use]
    pub fn iter(&self) -> Labels {
        Labels::new(
            self.fizz.clone(),
            self.buzz.clone(),
            BigInt::zero(),
            None,
            BigInt::one(),
        )
    }

    /// Unbounded backward cursor from 0: `generate(0, None, -1)`.
    #[must_use]
    pub fn iter_rev(&self) -> Labels {
        Labels::new(
            self.fizz.clone(),
            self.buzz.clone(),
            BigInt::zero(),
            None,
            -BigInt::one(),
        )
    }
}

impl Default for Fountain {
    fn default() -> Self {
        Self::new(3, 5)
    }
}

impl fmt::Display for Fountain {
    /// Reproducible representation: `Fountain(fizz=3, buzz=5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fountain(fizz={}, buzz={})", self.fizz, self.buzz)
    }
}

impl<'a> IntoIterator for &'a Fountain {
    type Item = Result<String, FountainError>;
    type IntoIter = Labels;

    fn into_iter(self) -> Labels {
        self.iter()
    }
}
