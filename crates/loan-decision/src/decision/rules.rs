use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Country, CreditSegment};

pub const MINIMUM_LOAN_AMOUNT: u32 = 2000;
pub const MAXIMUM_LOAN_AMOUNT: u32 = 10000;
pub const MINIMUM_LOAN_PERIOD: u32 = 12;
pub const MAXIMUM_LOAN_PERIOD: u32 = 60;
pub const MINIMUM_AGE: u32 = 18;
pub const AGE_BUFFER: u32 = 10;

/// Credit modifier per creditworthy segment. `Debt` has no modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentModifiers {
    pub segment_1: u32,
    pub segment_2: u32,
    pub segment_3: u32,
}

impl Default for SegmentModifiers {
    fn default() -> Self {
        Self {
            segment_1: 100,
            segment_2: 300,
            segment_3: 1000,
        }
    }
}

/// Immutable business-rule parameters handed to the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    pub minimum_loan_amount: u32,
    pub maximum_loan_amount: u32,
    pub minimum_loan_period: u32,
    pub maximum_loan_period: u32,
    pub credit_modifiers: SegmentModifiers,
    pub life_expectancy: BTreeMap<Country, u32>,
    pub minimum_age: u32,
    pub age_buffer: u32,
    pub home_country: Country,
}

impl RuleTable {
    /// Baltic lending rules: 2000–10000 over 12–60 months, applicants aged 18 up to life
    /// expectancy minus a ten year buffer.
    pub fn standard() -> Self {
        let life_expectancy = BTreeMap::from([
            (Country::Estonia, 78),
            (Country::Latvia, 75),
            (Country::Lithuania, 75),
        ]);

        Self {
            minimum_loan_amount: MINIMUM_LOAN_AMOUNT,
            maximum_loan_amount: MAXIMUM_LOAN_AMOUNT,
            minimum_loan_period: MINIMUM_LOAN_PERIOD,
            maximum_loan_period: MAXIMUM_LOAN_PERIOD,
            credit_modifiers: SegmentModifiers::default(),
            life_expectancy,
            minimum_age: MINIMUM_AGE,
            age_buffer: AGE_BUFFER,
            home_country: Country::Estonia,
        }
    }

    pub fn credit_modifier(&self, segment: CreditSegment) -> u32 {
        match segment {
            CreditSegment::Debt => 0,
            CreditSegment::Segment1 => self.credit_modifiers.segment_1,
            CreditSegment::Segment2 => self.credit_modifiers.segment_2,
            CreditSegment::Segment3 => self.credit_modifiers.segment_3,
        }
    }

    /// Countries absent from the table resolve to zero, which fails every age.
    pub fn life_expectancy_for(&self, country: Country) -> u32 {
        self.life_expectancy.get(&country).copied().unwrap_or(0)
    }

    pub fn maximum_age_for(&self, country: Country) -> Option<u32> {
        self.life_expectancy_for(country).checked_sub(self.age_buffer)
    }

    pub fn amount_in_range(&self, amount: i64) -> bool {
        (i64::from(self.minimum_loan_amount)..=i64::from(self.maximum_loan_amount))
            .contains(&amount)
    }

    pub fn period_in_range(&self, period: i64) -> bool {
        (i64::from(self.minimum_loan_period)..=i64::from(self.maximum_loan_period))
            .contains(&period)
    }

    pub fn check(&self) -> Result<(), RuleTableError> {
        if self.minimum_loan_amount == 0 {
            return Err(RuleTableError::ZeroMinimumAmount);
        }
        if self.minimum_loan_amount > self.maximum_loan_amount {
            return Err(RuleTableError::AmountBounds {
                minimum: self.minimum_loan_amount,
                maximum: self.maximum_loan_amount,
            });
        }
        if self.minimum_loan_period > self.maximum_loan_period {
            return Err(RuleTableError::PeriodBounds {
                minimum: self.minimum_loan_period,
                maximum: self.maximum_loan_period,
            });
        }
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleTableError {
    #[error("minimum loan amount must be positive")]
    ZeroMinimumAmount,
    #[error("minimum loan amount {minimum} exceeds maximum {maximum}")]
    AmountBounds { minimum: u32, maximum: u32 },
    #[error("minimum loan period {minimum} exceeds maximum {maximum}")]
    PeriodBounds { minimum: u32, maximum: u32 },
}
