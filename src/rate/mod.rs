//! Interest rate value type with its text grammar

mod data;
mod parse;

pub use data::{InterestRate, Periodicity, RateKind, DEFAULT_PRECISION};
