//! Error type shared by all Fountain operations.

/// Error type for Fountain construction and generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FountainError {
    /// A divisor could not be parsed as an integer.
    #[error("invalid {name} divisor {value:?}: not an integer")]
    InvalidDivisor {
        /// Which divisor ("fizz" or "buzz").
        name: &'static str,
        /// The rejected input text.
        value: String,
    },

    /// A zero divisor was used in a divisibility test.
    #[error("integer modulo by zero: {0} divisor is zero")]
    ZeroDivisor(&'static str),

    /// The sequence is infinite in both directions and has no length.
    #[error("FizzBuzz forever")]
    Endless,

    /// A slice without a stop bound would never finish materializing.
    #[error("endless slice")]
    EndlessSlice,

    /// A zero step would never advance the progression.
    #[error("zero step")]
    ZeroStep,
}
