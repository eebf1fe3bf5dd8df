use axum::Json;
use validator::Validate;

use crate::calc::prescription;
use shared_types::{AppError, PrescriptionRequest, PrescriptionResponse};

/// POST /api/prescription/estimate
#[utoipa::path(
    post,
    path = "/api/prescription/estimate",
    request_body = PrescriptionRequest,
    responses(
        (status = 200, description = "Prescription window estimated", body = PrescriptionResponse),
        (status = 422, description = "Invalid input", body = AppError)
    ),
    tag = "prescription"
)]
pub async fn estimate_prescription(
    Json(body): Json<PrescriptionRequest>,
) -> Result<Json<PrescriptionResponse>, AppError> {
    body.validate()?;
    Ok(Json(prescription::estimate(&body)))
}
