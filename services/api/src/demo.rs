use crate::infra::parse_country;
use chrono::NaiveDate;
use clap::Args;
use loan_decision::config::AppConfig;
use loan_decision::decision::{
    Clock, Decision, DecisionEngine, DecisionRequest, FixedClock, SystemClock,
};
use loan_decision::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Estonian personal identification code (11 digits)
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount in euros
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) period: i64,
    /// Jurisdiction for the age check (EE, LV or LT). Defaults to the configured home country.
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Reference date for the applicant's age (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the decision as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for applicant ages (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

struct SampleApplicant {
    label: &'static str,
    personal_code: &'static str,
    amount: i64,
    period: i64,
}

const SAMPLE_APPLICANTS: [SampleApplicant; 4] = [
    SampleApplicant {
        label: "debt",
        personal_code: "37001022499",
        amount: 4000,
        period: 24,
    },
    SampleApplicant {
        label: "segment 1",
        personal_code: "37001072500",
        amount: 2000,
        period: 12,
    },
    SampleApplicant {
        label: "segment 2",
        personal_code: "37001165000",
        amount: 4000,
        period: 12,
    },
    SampleApplicant {
        label: "segment 3",
        personal_code: "37001089999",
        amount: 10000,
        period: 60,
    },
];

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        country,
        today,
        json,
    } = args;

    let country = country.as_deref().map(parse_country).transpose()?;
    let engine = engine_for(today)?;

    let mut request = DecisionRequest::new(personal_code, amount, period);
    if let Some(country) = country {
        request = request.with_country(country);
    }

    let decision = engine.decide(&request);
    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{}", describe(&request, &decision));
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = engine_for(args.today)?;
    let rules = engine.rules();

    println!("Loan decision demo");
    println!(
        "- amounts {}..={} EUR | periods {}..={} months | home country {}",
        rules.minimum_loan_amount,
        rules.maximum_loan_amount,
        rules.minimum_loan_period,
        rules.maximum_loan_period,
        rules.home_country
    );

    for sample in &SAMPLE_APPLICANTS {
        let request = DecisionRequest::new(sample.personal_code, sample.amount, sample.period);
        let decision = engine.decide(&request);
        println!("  - {}: {}", sample.label, describe(&request, &decision));
    }

    Ok(())
}

fn engine_for(today: Option<NaiveDate>) -> Result<DecisionEngine<FixedClock>, AppError> {
    let config = AppConfig::load()?;
    let today = today.unwrap_or_else(|| SystemClock.today());
    Ok(DecisionEngine::with_clock(config.rules, FixedClock(today)))
}

fn describe(request: &DecisionRequest, decision: &Decision) -> String {
    let requested = format!(
        "{} requested {} over {} months",
        request.personal_code, request.loan_amount, request.loan_period
    );
    format!("{requested} -> {}", decision.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_decision::decision::{CreditSegment, PersonalCode, RejectionKind, RuleTable};

    fn demo_engine() -> DecisionEngine<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
        DecisionEngine::with_clock(RuleTable::standard(), FixedClock(today))
    }

    #[test]
    fn sample_applicants_cover_every_segment() {
        let segments: Vec<CreditSegment> = SAMPLE_APPLICANTS
            .iter()
            .map(|sample| {
                let code = PersonalCode::parse(sample.personal_code).expect("valid sample code");
                CreditSegment::from_suffix(code.suffix())
            })
            .collect();

        assert_eq!(
            segments,
            vec![
                CreditSegment::Debt,
                CreditSegment::Segment1,
                CreditSegment::Segment2,
                CreditSegment::Segment3,
            ]
        );
    }

    #[test]
    fn only_the_debt_sample_is_declined() {
        let engine = demo_engine();

        for sample in &SAMPLE_APPLICANTS {
            let request = DecisionRequest::new(sample.personal_code, sample.amount, sample.period);
            let decision = engine.decide(&request);
            if sample.label == "debt" {
                assert_eq!(decision.rejection_kind(), Some(RejectionKind::NoValidLoan));
            } else {
                assert!(decision.is_approved(), "{} declined", sample.label);
            }
        }
    }

    #[test]
    fn describe_renders_both_outcomes() {
        let engine = demo_engine();

        let request = DecisionRequest::new("37001072500", 2000, 12);
        let line = describe(&request, &engine.decide(&request));
        assert_eq!(
            line,
            "37001072500 requested 2000 over 12 months -> approved 2000 over 20 months"
        );

        let request = DecisionRequest::new("37001072500", 2000, 61);
        let line = describe(&request, &engine.decide(&request));
        assert!(line.contains("rejected (invalid_period)"));
    }
}
