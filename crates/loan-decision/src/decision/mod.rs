//! Loan decision pipeline: validation, applicant profiling, eligibility and loan search.

pub mod clock;
pub mod domain;
mod eligibility;
mod engine;
mod error;
pub mod personal_code;
mod profile;
pub mod router;
pub mod rules;
pub mod search;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    ApplicantProfile, Country, CreditSegment, Decision, DecisionRequest, LoanOffer,
    RejectionKind, UnknownCountry,
};
pub use eligibility::{EligibilityError, EligibilityGate};
pub use engine::DecisionEngine;
pub use error::DecisionError;
pub use personal_code::{PersonalCode, PersonalCodeError, Sex};
pub use profile::{ProfileError, ProfileResolver};
pub use router::decision_router;
pub use rules::{RuleTable, RuleTableError, SegmentModifiers};
pub use search::LoanSearch;
pub use validation::{InputValidator, ValidationError};
