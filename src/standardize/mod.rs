//! Rate standardization and chart series generation
//!
//! Batch reduction of rate lists to the annual effective comparison key,
//! future-value projection, and the simple/compound growth series used to
//! feed charts. Output rows carry the Spanish column names the
//! presentation layer renders as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::{validate_amount, MONEY_PRECISION};
use crate::convert::{round_to, RateConverter};
use crate::error::{RateError, Result};
use crate::rate::{InterestRate, DEFAULT_PRECISION};

/// A named rate candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateOption {
    /// Display name of the option
    pub name: String,
    /// The quoted rate
    pub rate: InterestRate,
}

impl RateOption {
    pub fn new(name: impl Into<String>, rate: InterestRate) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// One standardized option: name plus annual effective value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EaRow {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "EA")]
    pub annual_effective: f64,
}

/// One point of a growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    /// Period index; 0 is the principal before any growth
    #[serde(rename = "Periodo")]
    pub period: u32,
    #[serde(rename = "Valor")]
    pub value: f64,
}

/// What "best" means when ranking rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareMode {
    /// Lower EA wins: cheaper debt
    #[serde(rename = "credito")]
    Credit,
    /// Higher EA wins: better return
    #[serde(rename = "inversion")]
    Investment,
}

impl FromStr for CompareMode {
    type Err = RateError;

    fn from_str(mode: &str) -> Result<Self> {
        match mode.trim().to_lowercase().as_str() {
            "credito" => Ok(CompareMode::Credit),
            "inversion" => Ok(CompareMode::Investment),
            other => Err(RateError::validation(format!(
                "unrecognized mode {other:?} (expected \"credito\" or \"inversion\")"
            ))),
        }
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareMode::Credit => f.write_str("credito"),
            CompareMode::Investment => f.write_str("inversion"),
        }
    }
}

/// Standardizes rate lists and generates plot-ready series
#[derive(Debug, Clone, Copy)]
pub struct Standardizer {
    converter: RateConverter,
    money_round: u32,
}

impl Default for Standardizer {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, MONEY_PRECISION)
    }
}

impl Standardizer {
    /// Create a standardizer with explicit rate precision and money rounding
    pub fn new(precision: u32, money_round: u32) -> Self {
        Self {
            converter: RateConverter::new(precision),
            money_round,
        }
    }

    /// Annual effective (EA) value of one rate
    pub fn annual_effective(&self, rate: &InterestRate) -> Result<f64> {
        self.converter.annual_effective(rate)
    }

    /// Standardize a list of named options to EA, preserving input order
    pub fn standardize_options(&self, options: &[RateOption]) -> Result<Vec<EaRow>> {
        options
            .iter()
            .map(|option| {
                let ea = self.annual_effective(&option.rate)?;
                Ok(EaRow {
                    name: option.name.clone(),
                    annual_effective: round_to(ea, self.converter.precision()),
                })
            })
            .collect()
    }

    /// Future value of a present amount under compound interest
    ///
    /// Unlike the calculator variant, a zero term count is accepted and
    /// returns the present amount unchanged.
    pub fn future_value_from_present(
        &self,
        present: f64,
        terms: u32,
        rate: &InterestRate,
    ) -> Result<f64> {
        validate_amount(present)?;
        let i = self.converter.periodic_rate(rate)?;
        Ok(round_to(present * (1.0 + i).powi(terms as i32), self.money_round))
    }

    /// Growth series `P * (1 + i * t)` for `t = 0..=terms`
    pub fn simple_interest_series(
        &self,
        principal: f64,
        rate: &InterestRate,
        terms: u32,
    ) -> Result<Vec<SeriesRow>> {
        validate_amount(principal)?;
        let i = self.converter.periodic_rate(rate)?;
        Ok((0..=terms)
            .map(|t| SeriesRow {
                period: t,
                value: round_to(principal * (1.0 + i * f64::from(t)), self.money_round),
            })
            .collect())
    }

    /// Growth series `P * (1 + i)^t` for `t = 0..=terms`
    pub fn compound_interest_series(
        &self,
        principal: f64,
        rate: &InterestRate,
        terms: u32,
    ) -> Result<Vec<SeriesRow>> {
        validate_amount(principal)?;
        let i = self.converter.periodic_rate(rate)?;
        Ok((0..=terms)
            .map(|t| SeriesRow {
                period: t,
                value: round_to(principal * (1.0 + i).powi(t as i32), self.money_round),
            })
            .collect())
    }

    /// Best option under the given mode, or `None` for an empty list
    pub fn best_rate(&self, options: &[RateOption], mode: CompareMode) -> Result<Option<EaRow>> {
        if options.is_empty() {
            return Ok(None);
        }
        let mut rows = self.standardize_options(options)?;
        match mode {
            CompareMode::Credit => {
                rows.sort_by(|a, b| a.annual_effective.total_cmp(&b.annual_effective))
            }
            CompareMode::Investment => {
                rows.sort_by(|a, b| b.annual_effective.total_cmp(&a.annual_effective))
            }
        }
        Ok(rows.into_iter().next())
    }
}
