//! Rate conversion engine
//!
//! Pure conversions between periodicities and between nominal and
//! effective quotation. Every operation returns a new rate rounded to the
//! converter's precision; inputs are never mutated.

use crate::error::{RateError, Result};
use crate::rate::{InterestRate, Periodicity, RateKind, DEFAULT_PRECISION};

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Converter between rate periodicities and quotation forms
#[derive(Debug, Clone, Copy)]
pub struct RateConverter {
    precision: u32,
}

impl Default for RateConverter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl RateConverter {
    /// Create a converter rounding results to `precision` decimal places
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Decimal places applied to returned rate values
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Change the periodicity of an effective rate
    ///
    /// `i_new = (1 + i)^(new_months / old_months) - 1`. Converting to the
    /// same periodicity returns a copy rounded to the configured
    /// precision.
    pub fn with_periodicity(
        &self,
        rate: &InterestRate,
        new_period: Periodicity,
    ) -> Result<InterestRate> {
        if !rate.is_effective() {
            return Err(RateError::validation(
                "periodicity change requires an effective rate; reduce the nominal first",
            ));
        }
        if new_period == rate.period() {
            return InterestRate::new(
                round_to(rate.value(), self.precision),
                new_period,
                rate.kind(),
                rate.is_anticipated(),
            );
        }
        let exponent = f64::from(new_period.months()) / f64::from(rate.period().months());
        let converted = (1.0 + rate.value()).powf(exponent) - 1.0;
        InterestRate::new(
            round_to(converted, self.precision),
            new_period,
            RateKind::Effective,
            rate.is_anticipated(),
        )
    }

    /// Reduce a nominal rate to its periodic effective in-arrears rate
    ///
    /// `i = value / m` with `m = reference / capitalization` in months. An
    /// anticipated quote is a discount rate and converts via
    /// `i = d / (1 - d)`, which requires `d < 1`.
    pub fn nominal_to_effective(&self, rate: &InterestRate) -> Result<InterestRate> {
        if !rate.is_nominal() {
            return Err(RateError::validation(
                "nominal-to-effective conversion requires a nominal rate",
            ));
        }
        let periodic = self.periodic_rate(rate)?;
        InterestRate::effective(periodic, rate.period())
    }

    /// Quote a periodic effective rate as a nominal rate
    ///
    /// `n = reference / capitalization` in months; an in-advance target
    /// quotes the equivalent discount `d = i / (1 + i)` instead of `i`.
    /// The effective rate is taken at the capitalization periodicity.
    pub fn effective_to_nominal(
        &self,
        rate: &InterestRate,
        reference: Periodicity,
        capitalization: Periodicity,
        anticipated: bool,
    ) -> Result<InterestRate> {
        if !rate.is_effective() {
            return Err(RateError::validation(
                "effective-to-nominal conversion requires an effective rate",
            ));
        }
        let n = f64::from(reference.months()) / f64::from(capitalization.months());
        let periodic = if anticipated {
            rate.value() / (1.0 + rate.value())
        } else {
            rate.value()
        };
        InterestRate::nominal(
            round_to(periodic * n, self.precision),
            reference,
            capitalization,
            anticipated,
        )
    }

    /// Change the capitalization frequency of any rate
    ///
    /// Effective rates re-periodize directly. Nominal rates go through
    /// their periodic effective form and come back as a nominal quote
    /// with the original reference period and anticipation flag; there is
    /// no direct nominal-to-nominal formula.
    pub fn change_frequency(
        &self,
        rate: &InterestRate,
        new_period: Periodicity,
    ) -> Result<InterestRate> {
        match rate.kind() {
            RateKind::Effective => self.with_periodicity(rate, new_period),
            RateKind::Nominal { reference } => {
                let periodic = self.nominal_to_effective(rate)?;
                let rebased = self.with_periodicity(&periodic, new_period)?;
                self.effective_to_nominal(&rebased, reference, new_period, rate.is_anticipated())
            }
        }
    }

    /// Standardize any rate to its annual effective (EA) value
    ///
    /// The canonical comparison key: every quotation form reduces to the
    /// 12-month effective rate.
    pub fn annual_effective(&self, rate: &InterestRate) -> Result<f64> {
        let effective = match rate.kind() {
            RateKind::Effective => *rate,
            RateKind::Nominal { .. } => self.nominal_to_effective(rate)?,
        };
        Ok(self
            .with_periodicity(&effective, Periodicity::Annual)?
            .value())
    }

    /// Periodic effective in-arrears rate as a plain rounded decimal
    ///
    /// Effective values pass through, nominal values divide by the period
    /// ratio, and an anticipated quote converts to its in-arrears
    /// equivalent. Every calculator operation reduces its rate through
    /// here, so callers never pre-convert.
    pub fn periodic_rate(&self, rate: &InterestRate) -> Result<f64> {
        let mut periodic = match rate.kind() {
            RateKind::Effective => rate.value(),
            RateKind::Nominal { reference } => {
                let m = f64::from(reference.months()) / f64::from(rate.period().months());
                rate.value() / m
            }
        };
        if rate.is_anticipated() {
            periodic = due_from_anticipated(periodic)?;
        }
        Ok(round_to(periodic, self.precision))
    }
}

/// Convert an in-advance (discount) periodic rate to its in-arrears form
fn due_from_anticipated(discount: f64) -> Result<f64> {
    if discount >= 1.0 {
        return Err(RateError::validation(
            "anticipated periodic rate must be below 100% per period",
        ));
    }
    Ok(discount / (1.0 - discount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rate(text: &str) -> InterestRate {
        text.parse().unwrap()
    }

    #[test]
    fn test_same_period_is_identity() {
        let converter = RateConverter::default();
        let quarterly = rate("6% TV");
        let same = converter
            .with_periodicity(&quarterly, Periodicity::Quarterly)
            .unwrap();
        assert_eq!(same.value(), 0.06);
        assert_eq!(same.period(), Periodicity::Quarterly);
    }

    #[test]
    fn test_monthly_to_annual() {
        let converter = RateConverter::default();
        let annual = converter
            .with_periodicity(&rate("2% MV"), Periodicity::Annual)
            .unwrap();
        assert_relative_eq!(annual.value(), 0.268242, epsilon = 1e-6);
        assert_eq!(annual.period(), Periodicity::Annual);
    }

    #[test]
    fn test_periodicity_round_trip() {
        let converter = RateConverter::new(10);
        for a in Periodicity::ALL {
            for b in Periodicity::ALL {
                let start = InterestRate::effective(0.06, a).unwrap();
                let there = converter.with_periodicity(&start, b).unwrap();
                let back = converter.with_periodicity(&there, a).unwrap();
                assert_relative_eq!(back.value(), 0.06, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_nominal_to_effective() {
        let converter = RateConverter::default();
        let effective = converter.nominal_to_effective(&rate("24% NA/MV")).unwrap();
        assert_eq!(effective.value(), 0.02);
        assert_eq!(effective.period(), Periodicity::Monthly);
        assert!(effective.is_effective());
        assert!(!effective.is_anticipated());
    }

    #[test]
    fn test_anticipated_nominal_converts_to_due() {
        let converter = RateConverter::default();
        // 22% NA/MA: a monthly discount of 22%/12, then d / (1 - d)
        let effective = converter.nominal_to_effective(&rate("22% NA/MA")).unwrap();
        assert_relative_eq!(effective.value(), 0.018676, epsilon = 1e-6);
        assert!(!effective.is_anticipated());
    }

    #[test]
    fn test_anticipated_discount_must_stay_below_one() {
        let converter = RateConverter::default();
        let degenerate =
            InterestRate::nominal(1.0, Periodicity::Monthly, Periodicity::Monthly, true).unwrap();
        assert!(matches!(
            converter.nominal_to_effective(&degenerate),
            Err(RateError::Validation { .. })
        ));
    }

    #[test]
    fn test_effective_to_nominal_inverse() {
        let converter = RateConverter::default();
        for text in ["24% NA/MV", "18% NS/TV", "22% NA/MA"] {
            let nominal = rate(text);
            let periodic = converter.nominal_to_effective(&nominal).unwrap();
            let reference = nominal.reference_period().unwrap();
            let back = converter
                .effective_to_nominal(
                    &periodic,
                    reference,
                    nominal.period(),
                    nominal.is_anticipated(),
                )
                .unwrap();
            assert_relative_eq!(back.value(), nominal.value(), epsilon = 1e-4);
            assert_eq!(back.period(), nominal.period());
            assert_eq!(back.reference_period(), Some(reference));
            assert_eq!(back.is_anticipated(), nominal.is_anticipated());
        }
    }

    #[test]
    fn test_kind_mismatches_are_rejected() {
        let converter = RateConverter::default();
        let nominal = rate("24% NA/MV");
        let effective = rate("6% TV");

        assert!(converter
            .with_periodicity(&nominal, Periodicity::Annual)
            .is_err());
        assert!(converter.nominal_to_effective(&effective).is_err());
        assert!(converter
            .effective_to_nominal(&nominal, Periodicity::Annual, Periodicity::Monthly, false)
            .is_err());
    }

    #[test]
    fn test_change_frequency_nominal_pipeline() {
        let converter = RateConverter::default();
        // 24% NA/MV re-based to quarterly capitalization:
        // 2% monthly -> 6.1208% quarterly -> 24.4832% NA/TV
        let rebased = converter
            .change_frequency(&rate("24% NA/MV"), Periodicity::Quarterly)
            .unwrap();
        assert_relative_eq!(rebased.value(), 0.244832, epsilon = 1e-6);
        assert_eq!(rebased.period(), Periodicity::Quarterly);
        assert_eq!(rebased.reference_period(), Some(Periodicity::Annual));
        assert!(!rebased.is_anticipated());
    }

    #[test]
    fn test_change_frequency_effective_delegates() {
        let converter = RateConverter::default();
        let annual = converter
            .change_frequency(&rate("2% MV"), Periodicity::Annual)
            .unwrap();
        assert_relative_eq!(annual.value(), 0.268242, epsilon = 1e-6);
        assert!(annual.is_effective());
    }

    #[test]
    fn test_annual_effective_standardization() {
        let converter = RateConverter::default();
        assert_relative_eq!(
            converter.annual_effective(&rate("24% NA/MV")).unwrap(),
            0.268242,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            converter.annual_effective(&rate("6% TV")).unwrap(),
            0.262477,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            converter.annual_effective(&rate("10% EA")).unwrap(),
            0.10,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_periodic_rate() {
        let converter = RateConverter::default();
        assert_eq!(converter.periodic_rate(&rate("6% TV")).unwrap(), 0.06);
        assert_eq!(converter.periodic_rate(&rate("24% NA/MV")).unwrap(), 0.02);
        assert_relative_eq!(
            converter.periodic_rate(&rate("22% NA/MA")).unwrap(),
            0.018676,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.2682417945, 6), 0.268242);
        assert_eq!(round_to(1234.567, 2), 1234.57);
        assert_eq!(round_to(0.5, 0), 1.0);
    }
}
