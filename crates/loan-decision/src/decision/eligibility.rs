use super::domain::{ApplicantProfile, Country};
use super::rules::RuleTable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("applicant has no credit standing")]
    NoCreditStanding,
    #[error(
        "applicant aged {age} is outside the approved age range for {country} ({minimum}..={maximum})"
    )]
    AgeOutOfRange {
        age: u32,
        country: Country,
        minimum: u32,
        maximum: u32,
    },
}

/// Gate applied to a resolved profile before any loan search.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityGate<'a> {
    rules: &'a RuleTable,
}

impl<'a> EligibilityGate<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    pub fn check_eligible(&self, profile: &ApplicantProfile) -> Result<(), EligibilityError> {
        if !profile.credit_segment.has_credit_standing() {
            return Err(EligibilityError::NoCreditStanding);
        }

        let minimum = self.rules.minimum_age;
        let maximum = self.rules.maximum_age_for(profile.country);
        let within = profile.age_years >= minimum
            && maximum.is_some_and(|maximum| profile.age_years <= maximum);

        if within {
            Ok(())
        } else {
            Err(EligibilityError::AgeOutOfRange {
                age: profile.age_years,
                country: profile.country,
                minimum,
                maximum: maximum.unwrap_or(0),
            })
        }
    }
}
