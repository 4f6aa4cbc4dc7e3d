//! Rate value types: periodicity, quotation kind, and the immutable rate

use serde::{Deserialize, Serialize};

use crate::error::{RateError, Result};

/// Default number of decimal places for rate values and display
pub const DEFAULT_PRECISION: u32 = 6;

/// Months covered by one capitalization period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    /// One month per period (MV / NM)
    Monthly,
    /// Three months per period (TV / NT)
    Quarterly,
    /// Six months per period (SV / NS)
    Semiannual,
    /// Twelve months per period (EA / NA)
    Annual,
}

impl Periodicity {
    /// All supported periodicities, shortest first
    pub const ALL: [Periodicity; 4] = [
        Periodicity::Monthly,
        Periodicity::Quarterly,
        Periodicity::Semiannual,
        Periodicity::Annual,
    ];

    /// Months represented by one period
    pub fn months(&self) -> u32 {
        match self {
            Periodicity::Monthly => 1,
            Periodicity::Quarterly => 3,
            Periodicity::Semiannual => 6,
            Periodicity::Annual => 12,
        }
    }

    /// Build from a month count; only 1, 3, 6 and 12 are supported
    pub fn from_months(months: u32) -> Result<Self> {
        match months {
            1 => Ok(Periodicity::Monthly),
            3 => Ok(Periodicity::Quarterly),
            6 => Ok(Periodicity::Semiannual),
            12 => Ok(Periodicity::Annual),
            other => Err(RateError::validation(format!(
                "unsupported period of {other} months (expected 1, 3, 6 or 12)"
            ))),
        }
    }

    /// Single-letter code used by the nominal grammar
    pub(crate) fn letter(&self) -> char {
        match self {
            Periodicity::Monthly => 'M',
            Periodicity::Quarterly => 'T',
            Periodicity::Semiannual => 'S',
            Periodicity::Annual => 'A',
        }
    }

    /// Two-letter code used by the effective grammar
    pub(crate) fn effective_code(&self) -> &'static str {
        match self {
            Periodicity::Monthly => "MV",
            Periodicity::Quarterly => "TV",
            Periodicity::Semiannual => "SV",
            Periodicity::Annual => "EA",
        }
    }

    pub(crate) fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(Periodicity::Monthly),
            'T' => Some(Periodicity::Quarterly),
            'S' => Some(Periodicity::Semiannual),
            'A' => Some(Periodicity::Annual),
            _ => None,
        }
    }
}

/// Whether a rate is quoted as effective or nominal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateKind {
    /// True periodic growth rate for its stated period
    Effective,
    /// Annualized-style quote that divides down to the periodic rate
    Nominal {
        /// Reference period of the quote (NM=1, NT=3, NS=6, NA=12 months)
        reference: Periodicity,
    },
}

/// An immutable interest rate
///
/// `value` is the decimal fraction (24% -> 0.24). For effective rates
/// `period` is the rate's own periodicity; for nominal rates it is the
/// capitalization periodicity, and the quote's reference period lives in
/// `RateKind::Nominal`. Conversions never mutate a rate; they return a
/// new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRate")]
pub struct InterestRate {
    value: f64,
    period: Periodicity,
    kind: RateKind,
    anticipated: bool,
}

impl InterestRate {
    /// Create an effective in-arrears rate
    pub fn effective(value: f64, period: Periodicity) -> Result<Self> {
        Self::new(value, period, RateKind::Effective, false)
    }

    /// Create a nominal rate from its reference and capitalization periods
    pub fn nominal(
        value: f64,
        reference: Periodicity,
        capitalization: Periodicity,
        anticipated: bool,
    ) -> Result<Self> {
        Self::new(
            value,
            capitalization,
            RateKind::Nominal { reference },
            anticipated,
        )
    }

    /// Create a rate, validating every invariant
    ///
    /// No invalid rate can exist: a value at or below -100%, a non-finite
    /// value, or a nominal reference shorter than its capitalization
    /// period are all rejected here.
    pub fn new(value: f64, period: Periodicity, kind: RateKind, anticipated: bool) -> Result<Self> {
        if !value.is_finite() {
            return Err(RateError::argument("rate value must be a finite number"));
        }
        if value <= -1.0 {
            return Err(RateError::validation(
                "rate cannot be <= -100% (value <= -1)",
            ));
        }
        if let RateKind::Nominal { reference } = kind {
            if reference.months() < period.months() {
                return Err(RateError::validation(
                    "nominal reference period cannot be shorter than the capitalization period",
                ));
            }
        }
        Ok(Self {
            value,
            period,
            kind,
            anticipated,
        })
    }

    /// Rate value as a decimal fraction
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Periodicity of the rate (capitalization period for nominal rates)
    pub fn period(&self) -> Periodicity {
        self.period
    }

    /// Effective or nominal
    pub fn kind(&self) -> RateKind {
        self.kind
    }

    /// Reference period of a nominal quote, if any
    pub fn reference_period(&self) -> Option<Periodicity> {
        match self.kind {
            RateKind::Nominal { reference } => Some(reference),
            RateKind::Effective => None,
        }
    }

    /// True if quoted in advance (discount-style)
    pub fn is_anticipated(&self) -> bool {
        self.anticipated
    }

    pub fn is_effective(&self) -> bool {
        matches!(self.kind, RateKind::Effective)
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self.kind, RateKind::Nominal { .. })
    }
}

/// Mirror of `InterestRate` used to validate deserialized data
#[derive(Deserialize)]
struct RawRate {
    value: f64,
    period: Periodicity,
    kind: RateKind,
    #[serde(default)]
    anticipated: bool,
}

impl TryFrom<RawRate> for InterestRate {
    type Error = RateError;

    fn try_from(raw: RawRate) -> Result<Self> {
        InterestRate::new(raw.value, raw.period, raw.kind, raw.anticipated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodicity_months() {
        assert_eq!(Periodicity::Monthly.months(), 1);
        assert_eq!(Periodicity::Quarterly.months(), 3);
        assert_eq!(Periodicity::Semiannual.months(), 6);
        assert_eq!(Periodicity::Annual.months(), 12);
    }

    #[test]
    fn test_periodicity_from_months() {
        assert_eq!(Periodicity::from_months(3).unwrap(), Periodicity::Quarterly);
        assert_eq!(Periodicity::from_months(12).unwrap(), Periodicity::Annual);
        assert!(Periodicity::from_months(0).is_err());
        assert!(Periodicity::from_months(4).is_err());
    }

    #[test]
    fn test_effective_construction() {
        let rate = InterestRate::effective(0.06, Periodicity::Quarterly).unwrap();
        assert_eq!(rate.value(), 0.06);
        assert_eq!(rate.period(), Periodicity::Quarterly);
        assert!(rate.is_effective());
        assert!(!rate.is_anticipated());
        assert_eq!(rate.reference_period(), None);
    }

    #[test]
    fn test_nominal_construction() {
        let rate =
            InterestRate::nominal(0.24, Periodicity::Annual, Periodicity::Monthly, false).unwrap();
        assert!(rate.is_nominal());
        assert_eq!(rate.period(), Periodicity::Monthly);
        assert_eq!(rate.reference_period(), Some(Periodicity::Annual));
    }

    #[test]
    fn test_rejects_rate_at_or_below_minus_one() {
        assert!(InterestRate::effective(-1.0, Periodicity::Monthly).is_err());
        assert!(InterestRate::effective(-1.5, Periodicity::Monthly).is_err());
        // -99% is extreme but still inside the domain
        assert!(InterestRate::effective(-0.99, Periodicity::Monthly).is_ok());
    }

    #[test]
    fn test_rejects_short_nominal_reference() {
        let result =
            InterestRate::nominal(0.24, Periodicity::Monthly, Periodicity::Annual, false);
        assert!(matches!(result, Err(RateError::Validation { .. })));
        // equal periods are fine (NM/MV style quotes)
        assert!(
            InterestRate::nominal(0.02, Periodicity::Monthly, Periodicity::Monthly, false).is_ok()
        );
    }

    #[test]
    fn test_rejects_non_finite_value() {
        assert!(matches!(
            InterestRate::effective(f64::NAN, Periodicity::Monthly),
            Err(RateError::Argument { .. })
        ));
        assert!(matches!(
            InterestRate::effective(f64::INFINITY, Periodicity::Monthly),
            Err(RateError::Argument { .. })
        ));
    }
}
