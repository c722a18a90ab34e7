use super::domain::{DecisionRequest, RejectionKind};
use super::personal_code::{PersonalCode, PersonalCodeError};
use super::rules::RuleTable;

/// Shape errors in an inbound request. Reported to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid personal ID code: {0}")]
    InvalidIdentifier(#[source] PersonalCodeError),
    #[error("invalid loan amount {requested} (must be between {minimum} and {maximum})")]
    InvalidAmount {
        requested: i64,
        minimum: u32,
        maximum: u32,
    },
    #[error("invalid loan period {requested} (must be between {minimum} and {maximum} months)")]
    InvalidPeriod {
        requested: i64,
        minimum: u32,
        maximum: u32,
    },
}

impl ValidationError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            ValidationError::InvalidIdentifier(_) => RejectionKind::InvalidIdentifier,
            ValidationError::InvalidAmount { .. } => RejectionKind::InvalidAmount,
            ValidationError::InvalidPeriod { .. } => RejectionKind::InvalidPeriod,
        }
    }
}

/// Range and format checks that run before any applicant data is derived.
#[derive(Debug, Clone, Copy)]
pub struct InputValidator<'a> {
    rules: &'a RuleTable,
}

impl<'a> InputValidator<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Checks identifier, amount and period in that order; the first failure wins.
    pub fn validate(&self, request: &DecisionRequest) -> Result<(), ValidationError> {
        PersonalCode::parse(&request.personal_code).map_err(ValidationError::InvalidIdentifier)?;

        if !self.rules.amount_in_range(request.loan_amount) {
            return Err(ValidationError::InvalidAmount {
                requested: request.loan_amount,
                minimum: self.rules.minimum_loan_amount,
                maximum: self.rules.maximum_loan_amount,
            });
        }

        if !self.rules.period_in_range(request.loan_period) {
            return Err(ValidationError::InvalidPeriod {
                requested: request.loan_period,
                minimum: self.rules.minimum_loan_period,
                maximum: self.rules.maximum_loan_period,
            });
        }

        Ok(())
    }
}
