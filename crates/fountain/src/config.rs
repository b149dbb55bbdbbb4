//! Application configuration from CLI flags and environment.

use clap::Parser;
use num_bigint::BigInt;

/// Fountain — print results of the FizzBuzz game.
#[derive(Parser, Debug)]
#[command(name = "fountain", version, about)]
pub struct AppConfig {
    /// Start at this number.
    #[arg(default_value = "1", allow_negative_numbers = true)]
    pub start: BigInt,

    /// Stop before this number.
    #[arg(default_value = "101", allow_negative_numbers = true)]
    pub stop: BigInt,

    /// Slice interval.
    #[arg(default_value = "1", allow_negative_numbers = true)]
    pub step: BigInt,

    /// "Fizz" interval.
    #[arg(long, default_value = "3", env = "FOUNTAIN_FIZZ")]
    pub fizz: String,

    /// "Buzz" interval.
    #[arg(long, default_value = "5", env = "FOUNTAIN_BUZZ")]
    pub buzz: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
