//! Rate System - interest rate conversion and comparison engine
//!
//! This library provides:
//! - An immutable rate value with the nominal/effective text grammar
//! - Conversions between periodicities and quotation forms
//! - Loan installment, simple interest, and present/future value calculators
//! - Standardization of rate lists to the annual effective comparison key
//! - Credit and investment rankings with stable tie-breaking

pub mod calculator;
pub mod compare;
pub mod convert;
pub mod error;
pub mod rate;
pub mod standardize;

// Re-export commonly used types
pub use calculator::{AmortizationRow, CreditCalculator};
pub use compare::{RankedOption, RateComparator};
pub use convert::RateConverter;
pub use error::{RateError, Result};
pub use rate::{InterestRate, Periodicity, RateKind};
pub use standardize::{CompareMode, EaRow, RateOption, SeriesRow, Standardizer};
