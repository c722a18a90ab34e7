use chrono::NaiveDate;

use super::domain::{ApplicantProfile, Country, CreditSegment};
use super::personal_code::{PersonalCode, PersonalCodeError};
use super::rules::RuleTable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("invalid personal ID code: {0}")]
    InvalidIdentifier(#[from] PersonalCodeError),
    #[error("invalid personal ID code: birth date {date_of_birth} is after {today}")]
    BornAfterReferenceDate {
        date_of_birth: NaiveDate,
        today: NaiveDate,
    },
}

/// Builds an [`ApplicantProfile`] from a personal code.
#[derive(Debug, Clone, Copy)]
pub struct ProfileResolver<'a> {
    rules: &'a RuleTable,
}

impl<'a> ProfileResolver<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Resolve age and credit segment as of `today`. Without an explicit jurisdiction the
    /// applicant is placed in the rule table's home country.
    pub fn resolve(
        &self,
        personal_code: &str,
        country: Option<Country>,
        today: NaiveDate,
    ) -> Result<ApplicantProfile, ProfileError> {
        let code = PersonalCode::parse(personal_code)?;
        let age_years = code
            .age_on(today)
            .ok_or_else(|| ProfileError::BornAfterReferenceDate {
                date_of_birth: code.date_of_birth(),
                today,
            })?;

        Ok(ApplicantProfile {
            personal_code: code.as_str().to_string(),
            date_of_birth: code.date_of_birth(),
            sex: code.sex(),
            age_years,
            credit_segment: CreditSegment::from_suffix(code.suffix()),
            country: country.unwrap_or(self.rules.home_country),
        })
    }
}
