use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::domain::{Decision, DecisionRequest, LoanOffer};
use super::eligibility::EligibilityGate;
use super::error::DecisionError;
use super::profile::ProfileResolver;
use super::rules::RuleTable;
use super::search::{credit_score, LoanSearch};
use super::validation::InputValidator;

/// Stateless engine applying the rule table to one request at a time.
pub struct DecisionEngine<C = SystemClock> {
    rules: RuleTable,
    clock: C,
}

impl DecisionEngine<SystemClock> {
    pub fn new(rules: RuleTable) -> Self {
        Self::with_clock(rules, SystemClock)
    }
}

impl<C> DecisionEngine<C>
where
    C: Clock,
{
    pub fn with_clock(rules: RuleTable, clock: C) -> Self {
        Self { rules, clock }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Largest approvable amount at the requested period, or failing that the shortest longer
    /// period that admits one.
    pub fn calculate_approved_loan(
        &self,
        request: &DecisionRequest,
    ) -> Result<LoanOffer, DecisionError> {
        InputValidator::new(&self.rules).validate(request)?;

        let today = self.clock.today();
        let profile =
            ProfileResolver::new(&self.rules).resolve(&request.personal_code, request.country, today)?;
        debug!(
            segment = profile.credit_segment.label(),
            age = profile.age_years,
            country = %profile.country,
            "applicant profile resolved"
        );

        EligibilityGate::new(&self.rules).check_eligible(&profile)?;

        let modifier = self.rules.credit_modifier(profile.credit_segment);
        // Validation has already bounded the period to the rule table's range.
        let requested_period = u32::try_from(request.loan_period).unwrap_or(u32::MAX);
        let search = LoanSearch::new(&self.rules);

        let offer = match search.max_sum_at_period(requested_period, modifier) {
            Some(offer) => offer,
            None => {
                debug!(
                    requested_period,
                    modifier, "no qualifying amount at requested period, extending"
                );
                search
                    .search_across_periods(requested_period, modifier)
                    .ok_or(DecisionError::NoValidLoan)?
            }
        };

        debug!(
            score = credit_score(offer.period_months, modifier, offer.amount),
            "qualifying offer found"
        );
        Ok(offer)
    }

    /// Run the pipeline and fold the outcome into a single [`Decision`].
    pub fn decide(&self, request: &DecisionRequest) -> Decision {
        let result = self.calculate_approved_loan(request);
        match &result {
            Ok(offer) => info!(
                amount = offer.amount,
                period = offer.period_months,
                "loan approved"
            ),
            Err(error) => info!(kind = error.kind().label(), %error, "loan rejected"),
        }
        Decision::from(result)
    }
}
