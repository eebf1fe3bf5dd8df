use axum::Json;
use validator::Validate;

use crate::calc::liquidation;
use shared_types::{AppError, UnificationRequest, UnificationResult};

/// POST /api/liquidations/unify
#[utoipa::path(
    post,
    path = "/api/liquidations/unify",
    request_body = UnificationRequest,
    responses(
        (status = 200, description = "Unified liquidation computed", body = UnificationResult),
        (status = 422, description = "Invalid input", body = AppError)
    ),
    tag = "liquidations"
)]
pub async fn unify_sentences(
    Json(body): Json<UnificationRequest>,
) -> Result<Json<UnificationResult>, AppError> {
    body.validate()?;
    Ok(Json(liquidation::unify(&body)))
}
