use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::typst::{build_report_source, compile_typst, ReportParams};
use shared_types::{AppError, ReportExportRequest};

/// POST /api/pdf/report
///
/// Renders a calculator report as a branded PDF. The title and body come
/// from the caller; letterhead, accent color and footer come from the
/// `[branding]` section of `config.toml`.
#[utoipa::path(
    post,
    path = "/api/pdf/report",
    request_body = ReportExportRequest,
    responses(
        (status = 200, description = "PDF generated", content_type = "application/pdf"),
        (status = 422, description = "Invalid input", body = AppError),
        (status = 500, description = "PDF generation failed", body = AppError)
    ),
    tag = "pdf"
)]
pub async fn generate_report_pdf(
    Json(body): Json<ReportExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let branding = &crate::config::config().branding;
    let params = ReportParams {
        title: body.titulo,
        content_body: body.contenido,
        studio_name: branding.nombre_estudio.clone(),
        accent_color: branding.color_primario.clone(),
        footer_line: branding
            .pie_pagina
            .clone()
            .unwrap_or_else(|| branding.nombre_estudio.clone()),
        document_date: chrono::Local::now().format("%d/%m/%Y").to_string(),
    };

    let source = build_report_source(&params);
    let pdf_bytes = compile_typst(&source).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"informe.pdf\"".to_string(),
            ),
        ],
        pdf_bytes,
    ))
}
