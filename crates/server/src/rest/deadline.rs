use axum::Json;

use crate::calc::deadline;
use shared_types::{AppealDeadlineRequest, AppealDeadlineResponse, AppError};

/// POST /api/deadlines/appeal
#[utoipa::path(
    post,
    path = "/api/deadlines/appeal",
    request_body = AppealDeadlineRequest,
    responses(
        (status = 200, description = "Filing window computed", body = AppealDeadlineResponse),
        (status = 422, description = "Appeal kind not admissible against the deciding body", body = AppError)
    ),
    tag = "deadlines"
)]
pub async fn compute_appeal_deadline(
    Json(body): Json<AppealDeadlineRequest>,
) -> Result<Json<AppealDeadlineResponse>, AppError> {
    let result = deadline::compute_appeal_deadline(&body)?;
    Ok(Json(result))
}
