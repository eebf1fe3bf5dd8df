use axum::extract::Path;
use axum::Json;

use crate::calc::{arraigo, deadline, dosage};
use shared_types::{AppError, HolidayCalendar, RiskIndicatorGroup};

/// GET /api/catalogs/measures
#[utoipa::path(
    get,
    path = "/api/catalogs/measures",
    responses(
        (status = 200, description = "Non-custodial measure catalog", body = Vec<String>)
    ),
    tag = "catalogs"
)]
pub async fn list_measures() -> Json<Vec<String>> {
    Json(
        arraigo::MEDIDAS_ALTERNATIVAS
            .iter()
            .map(|m| m.to_string())
            .collect(),
    )
}

/// GET /api/catalogs/aggravating
#[utoipa::path(
    get,
    path = "/api/catalogs/aggravating",
    responses(
        (status = 200, description = "Aggravating circumstances (CP Art. 88)", body = Vec<String>)
    ),
    tag = "catalogs"
)]
pub async fn list_aggravating() -> Json<Vec<String>> {
    Json(dosage::AGRAVANTES.iter().map(|a| a.to_string()).collect())
}

/// GET /api/catalogs/mitigating
#[utoipa::path(
    get,
    path = "/api/catalogs/mitigating",
    responses(
        (status = 200, description = "Mitigating circumstances (CP Art. 90)", body = Vec<String>)
    ),
    tag = "catalogs"
)]
pub async fn list_mitigating() -> Json<Vec<String>> {
    Json(dosage::ATENUANTES.iter().map(|a| a.to_string()).collect())
}

/// GET /api/catalogs/risk-indicators
#[utoipa::path(
    get,
    path = "/api/catalogs/risk-indicators",
    responses(
        (status = 200, description = "Risk indicators grouped by category", body = Vec<RiskIndicatorGroup>)
    ),
    tag = "catalogs"
)]
pub async fn list_risk_indicators() -> Json<Vec<RiskIndicatorGroup>> {
    Json(arraigo::indicator_catalog())
}

/// GET /api/catalogs/holidays/{year}
#[utoipa::path(
    get,
    path = "/api/catalogs/holidays/{year}",
    params(
        ("year" = i32, Path, description = "Calendar year")
    ),
    responses(
        (status = 200, description = "National holidays for the year", body = HolidayCalendar),
        (status = 404, description = "No holiday list maintained for the year", body = AppError)
    ),
    tag = "catalogs"
)]
pub async fn list_holidays(Path(year): Path<i32>) -> Result<Json<HolidayCalendar>, AppError> {
    let feriados = deadline::national_holidays(year);
    if feriados.is_empty() {
        return Err(AppError::not_found(format!(
            "No holiday calendar maintained for {year}"
        )));
    }
    Ok(Json(HolidayCalendar {
        anio: year,
        feriados,
    }))
}
