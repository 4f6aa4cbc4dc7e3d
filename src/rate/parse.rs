//! Text grammar for rate values
//!
//! Two forms are accepted, case-insensitive, with whitespace stripped
//! before matching:
//! - Nominal: `24% NA/MV`, `18,5% NS/SV` - trailing `V` = due (vencida),
//!   `A` = anticipated (anticipada)
//! - Effective: `6% TV`, `10% EA`, `10EA` - the `%` sign is optional
//!
//! The percent literal accepts `.` or `,` as decimal separator and is
//! stored divided by 100.

use std::fmt;
use std::str::FromStr;

use super::data::{InterestRate, Periodicity, RateKind, DEFAULT_PRECISION};
use crate::error::{RateError, Result};

impl FromStr for InterestRate {
    type Err = RateError;

    fn from_str(text: &str) -> Result<Self> {
        parse(text)
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted(DEFAULT_PRECISION))
    }
}

impl InterestRate {
    /// Render the rate at the given display precision
    ///
    /// Trailing zeros and a trailing decimal point are trimmed, so 24.0%
    /// renders as `24% NA/MV` and 6.50% as `6.5% TV`. An annual effective
    /// rate always renders with the `EA` code.
    pub fn formatted(&self, precision: u32) -> String {
        let pct = percent_string(self.value(), precision);
        match self.kind() {
            RateKind::Effective => format!("{pct}% {}", self.period().effective_code()),
            RateKind::Nominal { reference } => {
                let suffix = if self.is_anticipated() { 'A' } else { 'V' };
                format!(
                    "{pct}% N{}/{}{suffix}",
                    reference.letter(),
                    self.period().letter()
                )
            }
        }
    }
}

fn percent_string(value: f64, precision: u32) -> String {
    let formatted = format!("{:.*}", precision as usize, value * 100.0);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn parse(text: &str) -> Result<InterestRate> {
    let raw: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let format_err = || RateError::Format {
        input: text.trim().to_string(),
    };

    if raw.is_empty() {
        return Err(format_err());
    }

    let (value, code) = split_percent(&raw).ok_or_else(format_err)?;

    if let Some(nominal_code) = code.strip_prefix('N') {
        let chars: Vec<char> = nominal_code.chars().collect();
        if chars.len() != 4 || chars[1] != '/' {
            return Err(format_err());
        }
        let reference = Periodicity::from_letter(chars[0]).ok_or_else(format_err)?;
        let capitalization = Periodicity::from_letter(chars[2]).ok_or_else(format_err)?;
        let anticipated = match chars[3] {
            'V' => false,
            'A' => true,
            _ => return Err(format_err()),
        };
        return InterestRate::nominal(value, reference, capitalization, anticipated);
    }

    let period = match code {
        "MV" => Periodicity::Monthly,
        "TV" => Periodicity::Quarterly,
        "SV" => Periodicity::Semiannual,
        // AV is an accepted alias for the annual effective code
        "EA" | "AV" => Periodicity::Annual,
        _ => return Err(format_err()),
    };
    InterestRate::effective(value, period)
}

/// Split the leading percent literal from the convention code
fn split_percent(raw: &str) -> Option<(f64, &str)> {
    let bytes = raw.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'.' || bytes[end] == b',') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end == fraction_start {
            return None;
        }
        end = fraction_end;
    }

    let literal = raw[..end].replace(',', ".");
    let percent: f64 = literal.parse().ok()?;
    let mut code = &raw[end..];
    code = code.strip_prefix('%').unwrap_or(code);
    Some((percent / 100.0, code))
}
