use axum::Json;

use crate::calc::arraigo;
use shared_types::{AppError, RiskEvaluationRequest, RiskEvaluationResponse};

/// POST /api/risk/evaluate
#[utoipa::path(
    post,
    path = "/api/risk/evaluate",
    request_body = RiskEvaluationRequest,
    responses(
        (status = 200, description = "Risk matrix evaluated", body = RiskEvaluationResponse),
        (status = 422, description = "Invalid input", body = AppError)
    ),
    tag = "risk"
)]
pub async fn evaluate_risk(
    Json(body): Json<RiskEvaluationRequest>,
) -> Result<Json<RiskEvaluationResponse>, AppError> {
    Ok(Json(arraigo::evaluate(&body)))
}
