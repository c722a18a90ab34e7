use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::decision::{DecisionEngine, DecisionRequest, FixedClock, RuleTable};

pub(super) const DEBT_2499: &str = "37001022499";
pub(super) const SEGMENT_1_2500: &str = "37001072500";
pub(super) const SEGMENT_1_4999: &str = "37001094999";
pub(super) const SEGMENT_2_5000: &str = "37001165000";
pub(super) const SEGMENT_2_7499: &str = "37001017499";
pub(super) const SEGMENT_3_7500: &str = "37001067500";
pub(super) const SEGMENT_3_9999: &str = "37001089999";

// Ages below are as of `reference_date()`; every code sits in segment 3.
pub(super) const AGED_17: &str = "50706167507";
pub(super) const AGED_18: &str = "50706157500";
pub(super) const AGED_65: &str = "36006157500";
pub(super) const AGED_66: &str = "35906157503";
pub(super) const AGED_68: &str = "35706157508";
pub(super) const AGED_68_TURNING_69_TOMORROW: &str = "35606167501";
pub(super) const AGED_69: &str = "35606157505";
pub(super) const BORN_2030: &str = "63001017504";

pub(super) const FEBRUARY_30: &str = "39002307507";
pub(super) const BAD_CHECKSUM: &str = "49002010966";

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid reference date")
}

pub(super) fn rules() -> RuleTable {
    RuleTable::standard()
}

pub(super) fn engine() -> DecisionEngine<FixedClock> {
    engine_with_rules(rules())
}

pub(super) fn engine_with_rules(rules: RuleTable) -> DecisionEngine<FixedClock> {
    DecisionEngine::with_clock(rules, FixedClock(reference_date()))
}

pub(super) fn shared_engine() -> Arc<DecisionEngine<FixedClock>> {
    Arc::new(engine())
}

pub(super) fn request(code: &str, amount: i64, period: i64) -> DecisionRequest {
    DecisionRequest::new(code, amount, period)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
