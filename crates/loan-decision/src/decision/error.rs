use super::domain::RejectionKind;
use super::eligibility::EligibilityError;
use super::profile::ProfileError;
use super::validation::ValidationError;

/// Every way the decision pipeline can decline a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("no valid loan found")]
    NoValidLoan,
    #[error("{0}")]
    AgeOutOfRange(EligibilityError),
}

impl DecisionError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            DecisionError::Validation(error) => error.kind(),
            DecisionError::Profile(_) => RejectionKind::InvalidIdentifier,
            DecisionError::NoValidLoan => RejectionKind::NoValidLoan,
            DecisionError::AgeOutOfRange(_) => RejectionKind::AgeOutOfRange,
        }
    }
}

impl From<EligibilityError> for DecisionError {
    fn from(error: EligibilityError) -> Self {
        match error {
            EligibilityError::NoCreditStanding => DecisionError::NoValidLoan,
            other @ EligibilityError::AgeOutOfRange { .. } => DecisionError::AgeOutOfRange(other),
        }
    }
}
