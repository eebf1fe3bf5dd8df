use axum::Json;
use validator::Validate;

use crate::calc::dosage;
use shared_types::{AppError, DosageRequest, DosageResponse};

/// POST /api/penalties/dosage
#[utoipa::path(
    post,
    path = "/api/penalties/dosage",
    request_body = DosageRequest,
    responses(
        (status = 200, description = "Penalty dosage computed", body = DosageResponse),
        (status = 400, description = "Inconsistent punitive frame", body = AppError),
        (status = 422, description = "Invalid input", body = AppError)
    ),
    tag = "penalties"
)]
pub async fn compute_dosage(
    Json(body): Json<DosageRequest>,
) -> Result<Json<DosageResponse>, AppError> {
    body.validate()?;
    let result = dosage::compute_dosage(&body)?;
    Ok(Json(result))
}
