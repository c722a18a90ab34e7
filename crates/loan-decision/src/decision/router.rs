use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::info;

use super::clock::Clock;
use super::domain::{Decision, DecisionRequest, RejectionKind};
use super::engine::DecisionEngine;

pub const DECISION_PATH: &str = "/api/v1/loan/decision";

/// Router exposing the decision endpoint.
pub fn decision_router<C>(engine: Arc<DecisionEngine<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route(DECISION_PATH, post(decision_handler::<C>))
        .with_state(engine)
}

/// Unreadable bodies are answered with the same `Decision` shape as every other rejection.
pub(crate) async fn decision_handler<C>(
    State(engine): State<Arc<DecisionEngine<C>>>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response
where
    C: Clock + 'static,
{
    match payload {
        Ok(Json(request)) => engine.decide(&request).into_response(),
        Err(rejection) => {
            let message = rejection.body_text();
            info!(kind = RejectionKind::MalformedRequest.label(), %message, "loan rejected");
            Decision::Rejected {
                kind: RejectionKind::MalformedRequest,
                message,
            }
            .into_response()
        }
    }
}

pub fn status_for(kind: RejectionKind) -> StatusCode {
    match kind {
        RejectionKind::MalformedRequest
        | RejectionKind::InvalidIdentifier
        | RejectionKind::InvalidAmount
        | RejectionKind::InvalidPeriod => StatusCode::BAD_REQUEST,
        RejectionKind::NoValidLoan => StatusCode::NOT_FOUND,
        RejectionKind::AgeOutOfRange => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for Decision {
    fn into_response(self) -> Response {
        let status = self.rejection_kind().map_or(StatusCode::OK, status_for);
        (status, Json(self)).into_response()
    }
}
