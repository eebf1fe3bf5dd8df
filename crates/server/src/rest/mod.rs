pub mod briefs;
pub mod catalog;
pub mod deadline;
pub mod dosage;
pub mod liquidation;
pub mod pdf;
pub mod prescription;
pub mod risk;

use axum::{
    routing::{get, post},
    Router,
};

/// Build the calculator REST API router. The PDF export route is mounted
/// separately so the feature flag can gate it.
pub fn api_router() -> Router {
    Router::new()
        .route("/api/liquidations/unify", post(liquidation::unify_sentences))
        .route("/api/deadlines/appeal", post(deadline::compute_appeal_deadline))
        .route("/api/risk/evaluate", post(risk::evaluate_risk))
        .route("/api/penalties/dosage", post(dosage::compute_dosage))
        .route("/api/prescription/estimate", post(prescription::estimate_prescription))
        .route("/api/briefs/generate", post(briefs::generate_brief))
        .route("/api/briefs/recommend", post(briefs::recommend_brief))
        .route("/api/catalogs/measures", get(catalog::list_measures))
        .route("/api/catalogs/aggravating", get(catalog::list_aggravating))
        .route("/api/catalogs/mitigating", get(catalog::list_mitigating))
        .route("/api/catalogs/risk-indicators", get(catalog::list_risk_indicators))
        .route("/api/catalogs/holidays/{year}", get(catalog::list_holidays))
}
