//! Fountain library — application logic for the FizzBuzz generator.

pub mod app;
pub mod completion;
pub mod config;
