use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::health_check,
        crate::rest::liquidation::unify_sentences,
        crate::rest::deadline::compute_appeal_deadline,
        crate::rest::risk::evaluate_risk,
        crate::rest::dosage::compute_dosage,
        crate::rest::prescription::estimate_prescription,
        crate::rest::briefs::generate_brief,
        crate::rest::briefs::recommend_brief,
        crate::rest::catalog::list_measures,
        crate::rest::catalog::list_aggravating,
        crate::rest::catalog::list_mitigating,
        crate::rest::catalog::list_risk_indicators,
        crate::rest::catalog::list_holidays,
        crate::rest::pdf::generate_report_pdf,
    ),
    components(schemas(
        shared_types::AppError,
        shared_types::AppErrorKind,
        shared_types::Role,
        shared_types::SentenceTerm,
        shared_types::SentenceCredits,
        shared_types::OffenseInput,
        shared_types::OffenseLiquidation,
        shared_types::UnificationRequest,
        shared_types::UnificationResult,
        shared_types::AppealKind,
        shared_types::DecidingBody,
        shared_types::AppealDeadlineRequest,
        shared_types::AppealDeadlineResponse,
        shared_types::CalendarDay,
        shared_types::MigratoryStatus,
        shared_types::FlightResources,
        shared_types::ArraigoFactors,
        shared_types::ArraigoLevel,
        shared_types::RiskCategory,
        shared_types::RiskSeverity,
        shared_types::RiskRow,
        shared_types::CaseHeader,
        shared_types::RiskEvaluationRequest,
        shared_types::RiskEvaluationResponse,
        shared_types::RiskIndicator,
        shared_types::RiskIndicatorGroup,
        shared_types::HolidayCalendar,
        shared_types::CircumstanceIntensity,
        shared_types::ExecutionDegree,
        shared_types::KinshipEffect,
        shared_types::DosageRequest,
        shared_types::DosageResponse,
        shared_types::Province,
        shared_types::ConsummationKind,
        shared_types::Regime,
        shared_types::PrescriptionRequest,
        shared_types::PrescriptionResponse,
        shared_types::Entity,
        shared_types::Stage,
        shared_types::BriefKind,
        shared_types::Branding,
        shared_types::CaseMeta,
        shared_types::BriefRequest,
        shared_types::BriefResponse,
        shared_types::BriefRecommendationRequest,
        shared_types::BriefRecommendationResponse,
        shared_types::ReportExportRequest,
        crate::health::HealthResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "liquidations", description = "Sentence liquidation and unification"),
        (name = "deadlines", description = "Appeal filing windows (business days)"),
        (name = "risk", description = "Arraigo scoring and the procedural risk matrix"),
        (name = "penalties", description = "Penalty dosage over a punitive frame"),
        (name = "prescription", description = "Prescription window estimates (CPP/CJ)"),
        (name = "briefs", description = "Forensic brief templates"),
        (name = "catalogs", description = "Fixed legal catalogs"),
        (name = "pdf", description = "Branded PDF export"),
    ),
    info(
        title = "FlowPenal API",
        description = "Calculators and drafting aids for Panamanian criminal procedure: sentence liquidation, appeal deadlines, risk matrices, penalty dosage, prescription and briefs.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Assemble the full application router: REST API, health check and the
/// flag-gated PDF and docs routes.
pub fn api_router() -> Router {
    let flags = &crate::config::config().features;

    let mut router = Router::new()
        .merge(rest::api_router())
        .route("/health", get(health::health_check));

    if flags.pdf_export {
        router = router.route("/api/pdf/report", post(rest::pdf::generate_report_pdf));
    }

    if flags.docs {
        router = router
            .route(
                "/api-docs/openapi.json",
                get(|| async { axum::Json(ApiDoc::openapi()) }),
            )
            .merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router
}
