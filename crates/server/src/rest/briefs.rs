use axum::Json;
use validator::Validate;

use crate::documents;
use shared_types::{
    AppError, BriefRecommendationRequest, BriefRecommendationResponse, BriefRequest, BriefResponse,
};

/// POST /api/briefs/generate
#[utoipa::path(
    post,
    path = "/api/briefs/generate",
    request_body = BriefRequest,
    responses(
        (status = 200, description = "Brief generated", body = BriefResponse),
        (status = 422, description = "Invalid branding data", body = AppError)
    ),
    tag = "briefs"
)]
pub async fn generate_brief(Json(body): Json<BriefRequest>) -> Result<Json<BriefResponse>, AppError> {
    body.branding.validate()?;
    Ok(Json(documents::generate_brief(&body)))
}

/// POST /api/briefs/recommend
#[utoipa::path(
    post,
    path = "/api/briefs/recommend",
    request_body = BriefRecommendationRequest,
    responses(
        (status = 200, description = "Recommended brief kind", body = BriefRecommendationResponse)
    ),
    tag = "briefs"
)]
pub async fn recommend_brief(
    Json(body): Json<BriefRecommendationRequest>,
) -> Json<BriefRecommendationResponse> {
    Json(BriefRecommendationResponse {
        recomendado: documents::recommend(body.rol, body.estadio),
    })
}
