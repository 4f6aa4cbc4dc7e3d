//! Ranking of rate options by their annual effective value
//!
//! The comparator retains the most recent ranking so a follow-up best
//! option query needs no recomputation. Every ranking call replaces the
//! retained table in full; there is no incremental update.

use serde::{Deserialize, Serialize};

use crate::convert::{round_to, RateConverter};
use crate::error::Result;
use crate::rate::DEFAULT_PRECISION;
use crate::standardize::RateOption;

/// One row of a ranking table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOption {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "EA")]
    pub annual_effective: f64,
    /// 1-based position after sorting
    #[serde(rename = "Ranking")]
    pub rank: usize,
}

/// Ranks rate options and keeps the latest ranking
///
/// The retained ranking is the only mutable state in the engine; each
/// comparator instance owns its own copy, so independent comparisons can
/// coexist freely.
#[derive(Debug, Clone)]
pub struct RateComparator {
    converter: RateConverter,
    ranking: Option<Vec<RankedOption>>,
}

impl Default for RateComparator {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl RateComparator {
    /// Create a comparator rounding EA values to `precision` decimals
    pub fn new(precision: u32) -> Self {
        Self {
            converter: RateConverter::new(precision),
            ranking: None,
        }
    }

    /// Rank options for credit: lowest EA (cheapest debt) first
    pub fn rank_for_credit(&mut self, options: &[RateOption]) -> Result<Vec<RankedOption>> {
        self.rank(options, false)
    }

    /// Rank options for investment: highest EA (best return) first
    pub fn rank_for_investment(&mut self, options: &[RateOption]) -> Result<Vec<RankedOption>> {
        self.rank(options, true)
    }

    /// Rank-1 row of the most recent ranking
    ///
    /// `None` before the first ranking call or when the last ranking was
    /// computed over an empty list.
    pub fn best_option(&self) -> Option<&RankedOption> {
        self.ranking.as_ref().and_then(|ranking| ranking.first())
    }

    /// The most recent ranking table, if one has been computed
    pub fn last_ranking(&self) -> Option<&[RankedOption]> {
        self.ranking.as_deref()
    }

    fn rank(&mut self, options: &[RateOption], descending: bool) -> Result<Vec<RankedOption>> {
        let precision = self.converter.precision();
        let mut rows = options
            .iter()
            .map(|option| {
                let ea = self.converter.annual_effective(&option.rate)?;
                Ok(RankedOption {
                    name: option.name.clone(),
                    annual_effective: round_to(ea, precision),
                    rank: 0,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // stable sort: ties keep their input order
        if descending {
            rows.sort_by(|a, b| b.annual_effective.total_cmp(&a.annual_effective));
        } else {
            rows.sort_by(|a, b| a.annual_effective.total_cmp(&b.annual_effective));
        }
        for (index, row) in rows.iter_mut().enumerate() {
            row.rank = index + 1;
        }

        self.ranking = Some(rows.clone());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::InterestRate;

    fn rate(text: &str) -> InterestRate {
        text.parse().unwrap()
    }

    fn credit_offers() -> Vec<RateOption> {
        vec![
            RateOption::new("Banco A", rate("24% NA/MV")),
            RateOption::new("Banco B", rate("1.8% MV")),
            RateOption::new("Banco C", rate("30% NA/MV")),
        ]
    }

    #[test]
    fn test_credit_ranking_is_non_decreasing() {
        let mut comparator = RateComparator::default();
        let ranking = comparator.rank_for_credit(&credit_offers()).unwrap();
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].name, "Banco B");
        assert_eq!(ranking[2].name, "Banco C");
        for pair in ranking.windows(2) {
            assert!(pair[0].annual_effective <= pair[1].annual_effective);
        }
        for (index, row) in ranking.iter().enumerate() {
            assert_eq!(row.rank, index + 1);
        }
    }

    #[test]
    fn test_investment_ranking_is_non_increasing() {
        let mut comparator = RateComparator::default();
        let ranking = comparator.rank_for_investment(&credit_offers()).unwrap();
        assert_eq!(ranking[0].name, "Banco C");
        assert_eq!(ranking[0].rank, 1);
        for pair in ranking.windows(2) {
            assert!(pair[0].annual_effective >= pair[1].annual_effective);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        // 24% NA/MV reduces to 2% monthly, the same EA as 2% MV
        let mut comparator = RateComparator::default();
        let options = vec![
            RateOption::new("Banco A", rate("24% NA/MV")),
            RateOption::new("Banco B", rate("2% MV")),
        ];
        let ranking = comparator.rank_for_credit(&options).unwrap();
        assert_eq!(ranking[0].annual_effective, ranking[1].annual_effective);
        assert_eq!(ranking[0].name, "Banco A");
        assert_eq!(ranking[1].name, "Banco B");
    }

    #[test]
    fn test_best_option_tracks_latest_ranking() {
        let mut comparator = RateComparator::default();
        assert!(comparator.best_option().is_none());

        comparator.rank_for_credit(&credit_offers()).unwrap();
        assert_eq!(comparator.best_option().unwrap().name, "Banco B");

        // re-ranking replaces the retained table in full
        comparator.rank_for_investment(&credit_offers()).unwrap();
        assert_eq!(comparator.best_option().unwrap().name, "Banco C");
    }

    #[test]
    fn test_empty_ranking_has_no_best_option() {
        let mut comparator = RateComparator::default();
        comparator.rank_for_credit(&[]).unwrap();
        assert!(comparator.best_option().is_none());
        assert_eq!(comparator.last_ranking().unwrap().len(), 0);
    }
}
