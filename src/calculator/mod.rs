//! Credit and investment calculators
//!
//! Loan installments, simple interest, and compound present/future value.
//! Every operation reduces its rate to the periodic effective form
//! internally, so callers hand in any quotation and a term count in the
//! rate's own periods.

use serde::{Deserialize, Serialize};

use crate::convert::{round_to, RateConverter};
use crate::error::{RateError, Result};
use crate::rate::{InterestRate, DEFAULT_PRECISION};

/// Decimal places used for monetary results
pub const MONEY_PRECISION: u32 = 2;

/// One period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Period number, 1-based
    #[serde(rename = "Periodo")]
    pub period: u32,
    /// Installment paid this period
    #[serde(rename = "Cuota")]
    pub payment: f64,
    /// Interest portion of the installment
    #[serde(rename = "Interes")]
    pub interest: f64,
    /// Principal portion of the installment
    #[serde(rename = "Abono")]
    pub principal: f64,
    /// Outstanding balance after the payment
    #[serde(rename = "Saldo")]
    pub balance: f64,
}

/// Calculator for loan and investment cash amounts
#[derive(Debug, Clone, Copy)]
pub struct CreditCalculator {
    converter: RateConverter,
    money_round: u32,
}

impl Default for CreditCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, MONEY_PRECISION)
    }
}

impl CreditCalculator {
    /// Create a calculator with explicit rate precision and money rounding
    pub fn new(precision: u32, money_round: u32) -> Self {
        Self {
            converter: RateConverter::new(precision),
            money_round,
        }
    }

    /// Periodic effective in-arrears rate used by every operation here
    pub fn periodic_rate(&self, rate: &InterestRate) -> Result<f64> {
        self.converter.periodic_rate(rate)
    }

    /// Fixed installment of a loan (French/annuity method)
    ///
    /// `installment = amount * i / (1 - (1 + i)^-terms)`. A zero rate
    /// degrades to straight-line `amount / terms`.
    pub fn fixed_installment(&self, amount: f64, rate: &InterestRate, terms: u32) -> Result<f64> {
        validate_amount(amount)?;
        validate_positive_terms(terms)?;
        let i = self.periodic_rate(rate)?;
        let installment = if i == 0.0 {
            amount / f64::from(terms)
        } else {
            amount * i / (1.0 - (1.0 + i).powi(-(terms as i32)))
        };
        Ok(round_to(installment, self.money_round))
    }

    /// Simple (non-compounding) interest over `terms` periods
    ///
    /// A zero term count is allowed and earns nothing.
    pub fn simple_interest(&self, principal: f64, rate: &InterestRate, terms: u32) -> Result<f64> {
        validate_amount(principal)?;
        let i = self.periodic_rate(rate)?;
        Ok(round_to(principal * i * f64::from(terms), self.money_round))
    }

    /// Future value of a present amount under compound interest
    pub fn future_value(&self, present: f64, rate: &InterestRate, terms: u32) -> Result<f64> {
        validate_amount(present)?;
        validate_positive_terms(terms)?;
        let i = self.periodic_rate(rate)?;
        Ok(round_to(present * (1.0 + i).powi(terms as i32), self.money_round))
    }

    /// Present value of a future amount under compound discounting
    pub fn present_value(&self, future: f64, rate: &InterestRate, terms: u32) -> Result<f64> {
        validate_amount(future)?;
        validate_positive_terms(terms)?;
        let i = self.periodic_rate(rate)?;
        Ok(round_to(future / (1.0 + i).powi(terms as i32), self.money_round))
    }

    /// Value of an investment after `terms` periods
    pub fn investment_return(&self, investment: f64, rate: &InterestRate, terms: u32) -> Result<f64> {
        self.future_value(investment, rate, terms)
    }

    /// Amount to invest today to reach `target` after `terms` periods
    pub fn principal_for_target(&self, target: f64, rate: &InterestRate, terms: u32) -> Result<f64> {
        self.present_value(target, rate, terms)
    }

    /// Amortization schedule for a fixed-installment loan
    ///
    /// One row per period 1..=terms. The final period pays off the exact
    /// remaining balance, so its installment absorbs the accumulated
    /// rounding residue and the schedule closes at zero.
    pub fn amortization_schedule(
        &self,
        amount: f64,
        rate: &InterestRate,
        terms: u32,
    ) -> Result<Vec<AmortizationRow>> {
        let payment = self.fixed_installment(amount, rate, terms)?;
        let i = self.periodic_rate(rate)?;

        let mut rows = Vec::with_capacity(terms as usize);
        let mut balance = round_to(amount, self.money_round);
        for period in 1..=terms {
            let interest = round_to(balance * i, self.money_round);
            let (row_payment, principal) = if period == terms {
                let principal = balance;
                (round_to(interest + principal, self.money_round), principal)
            } else {
                (payment, round_to(payment - interest, self.money_round))
            };
            balance = round_to(balance - principal, self.money_round).max(0.0);
            rows.push(AmortizationRow {
                period,
                payment: row_payment,
                interest,
                principal,
                balance,
            });
        }
        Ok(rows)
    }
}

pub(crate) fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(RateError::argument("amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(RateError::validation("amount must be >= 0"));
    }
    Ok(())
}

fn validate_positive_terms(terms: u32) -> Result<()> {
    if terms == 0 {
        return Err(RateError::validation("term count must be >= 1"));
    }
    Ok(())
}
