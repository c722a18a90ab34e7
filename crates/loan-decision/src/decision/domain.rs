use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::DecisionError;
use super::personal_code::Sex;

/// Jurisdiction whose life expectancy bounds the applicant's age window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Country {
    #[serde(rename = "EE")]
    Estonia,
    #[serde(rename = "LV")]
    Latvia,
    #[serde(rename = "LT")]
    Lithuania,
    /// Any jurisdiction outside the Baltic set; carries no life expectancy.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Estonia, Country::Latvia, Country::Lithuania];

    pub const fn code(self) -> &'static str {
        match self {
            Country::Estonia => "EE",
            Country::Latvia => "LV",
            Country::Lithuania => "LT",
            Country::Unknown => "unknown",
        }
    }

    /// Lenient lookup used at the wire boundary: unrecognised codes become `Unknown`.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or(Country::Unknown)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EE" => Ok(Country::Estonia),
            "LV" => Ok(Country::Latvia),
            "LT" => Ok(Country::Lithuania),
            _ => Err(UnknownCountry(value.to_string())),
        }
    }
}

impl From<String> for Country {
    fn from(value: String) -> Self {
        Country::from_code(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised country code '{0}' (expected EE, LV or LT)")]
pub struct UnknownCountry(pub String);

/// Creditworthiness bucket derived from the last four digits of the personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditSegment {
    /// Outstanding debt; never eligible.
    Debt,
    Segment1,
    Segment2,
    Segment3,
}

impl CreditSegment {
    pub const fn from_suffix(suffix: u16) -> Self {
        match suffix {
            0..=2499 => CreditSegment::Debt,
            2500..=4999 => CreditSegment::Segment1,
            5000..=7499 => CreditSegment::Segment2,
            _ => CreditSegment::Segment3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CreditSegment::Debt => "debt",
            CreditSegment::Segment1 => "segment_1",
            CreditSegment::Segment2 => "segment_2",
            CreditSegment::Segment3 => "segment_3",
        }
    }

    pub const fn has_credit_standing(self) -> bool {
        !matches!(self, CreditSegment::Debt)
    }
}

/// Transient view of the applicant, rebuilt from the personal code on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantProfile {
    pub personal_code: String,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub age_years: u32,
    pub credit_segment: CreditSegment,
    pub country: Country,
}

/// Raw request as received from a caller. Amount and period stay signed so that
/// out-of-range wire values reach validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

impl DecisionRequest {
    pub fn new(personal_code: impl Into<String>, loan_amount: i64, loan_period: i64) -> Self {
        Self {
            personal_code: personal_code.into(),
            loan_amount,
            loan_period,
            country: None,
        }
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }
}

/// Approved amount and period pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOffer {
    #[serde(rename = "loanAmount")]
    pub amount: u32,
    #[serde(rename = "loanPeriod")]
    pub period_months: u32,
}

impl LoanOffer {
    pub const fn new(amount: u32, period_months: u32) -> Self {
        Self {
            amount,
            period_months,
        }
    }
}

/// Rejection categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Body could not be read as a decision request.
    MalformedRequest,
    InvalidIdentifier,
    InvalidAmount,
    InvalidPeriod,
    NoValidLoan,
    AgeOutOfRange,
}

impl RejectionKind {
    pub const fn label(self) -> &'static str {
        match self {
            RejectionKind::MalformedRequest => "malformed_request",
            RejectionKind::InvalidIdentifier => "invalid_identifier",
            RejectionKind::InvalidAmount => "invalid_amount",
            RejectionKind::InvalidPeriod => "invalid_period",
            RejectionKind::NoValidLoan => "no_valid_loan",
            RejectionKind::AgeOutOfRange => "age_out_of_range",
        }
    }
}

/// Single result shape for every outcome of the decision pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Decision {
    Approved {
        #[serde(rename = "loanAmount")]
        loan_amount: u32,
        #[serde(rename = "loanPeriod")]
        loan_period: u32,
    },
    Rejected {
        kind: RejectionKind,
        message: String,
    },
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approved { .. })
    }

    pub fn offer(&self) -> Option<LoanOffer> {
        match self {
            Decision::Approved {
                loan_amount,
                loan_period,
            } => Some(LoanOffer::new(*loan_amount, *loan_period)),
            Decision::Rejected { .. } => None,
        }
    }

    pub fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Decision::Approved { .. } => None,
            Decision::Rejected { kind, .. } => Some(*kind),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::Approved {
                loan_amount,
                loan_period,
            } => format!("approved {loan_amount} over {loan_period} months"),
            Decision::Rejected { kind, message } => {
                format!("rejected ({}): {}", kind.label(), message)
            }
        }
    }
}

impl From<LoanOffer> for Decision {
    fn from(offer: LoanOffer) -> Self {
        Decision::Approved {
            loan_amount: offer.amount,
            loan_period: offer.period_months,
        }
    }
}

impl From<DecisionError> for Decision {
    fn from(error: DecisionError) -> Self {
        Decision::Rejected {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<Result<LoanOffer, DecisionError>> for Decision {
    fn from(result: Result<LoanOffer, DecisionError>) -> Self {
        match result {
            Ok(offer) => offer.into(),
            Err(error) => error.into(),
        }
    }
}
