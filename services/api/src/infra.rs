use chrono::NaiveDate;
use loan_decision::decision::Country;
use loan_decision::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Strict country lookup for operator input; the HTTP boundary is lenient instead.
pub(crate) fn parse_country(raw: &str) -> Result<Country, AppError> {
    raw.parse::<Country>()
        .map_err(|err| AppError::InvalidArgument(err.to_string()))
}
