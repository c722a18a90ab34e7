//! Maximum-sum and minimum-period search.
//!
//! A sum `S` qualifies at period `P` under credit modifier `M` when the credit score
//! `(M / S) * P` reaches 1.0, i.e. when `S <= M * P`. The score only falls as the sum grows,
//! so the largest qualifying sum is `M * P` clamped to the amount ceiling and the search
//! never has to scan individual amounts.

use super::domain::LoanOffer;
use super::rules::RuleTable;

/// Credit score of `amount` borrowed over `period` months.
pub fn credit_score(period: u32, modifier: u32, amount: u32) -> f64 {
    (f64::from(modifier) / f64::from(amount)) * f64::from(period)
}

/// Exact integer form of `credit_score(..) >= 1.0`.
pub fn qualifies(period: u32, modifier: u32, amount: u32) -> bool {
    u64::from(modifier) * u64::from(period) >= u64::from(amount)
}

#[derive(Debug, Clone, Copy)]
pub struct LoanSearch<'a> {
    rules: &'a RuleTable,
}

impl<'a> LoanSearch<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Largest qualifying amount at exactly `period` months, if any amount in range qualifies.
    pub fn max_sum_at_period(&self, period: u32, modifier: u32) -> Option<LoanOffer> {
        let ceiling = u64::from(modifier) * u64::from(period);
        if ceiling < u64::from(self.rules.minimum_loan_amount) {
            return None;
        }

        let amount = ceiling.min(u64::from(self.rules.maximum_loan_amount));
        u32::try_from(amount)
            .ok()
            .map(|amount| LoanOffer::new(amount, period))
    }

    /// First period from `requested_period` up to the maximum period that admits a qualifying
    /// amount, paired with the largest such amount.
    pub fn search_across_periods(&self, requested_period: u32, modifier: u32) -> Option<LoanOffer> {
        (requested_period..=self.rules.maximum_loan_period)
            .find_map(|period| self.max_sum_at_period(period, modifier))
    }
}
