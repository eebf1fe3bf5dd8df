use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{get, post_json, test_app};

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app();
    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "FlowPenal API");
}

#[tokio::test]
async fn unify_endpoint_returns_totals_and_report() {
    let app = test_app();
    let body = json!({
        "rol": "Juez",
        "delitos": [
            {
                "nombre": "Hurto agravado",
                "pena": { "anios": 6, "meses": 0, "dias": 0 },
                "abonos": { "detencion_preventiva_dias": 120 }
            }
        ],
        "tope_legal_anios": 50
    });

    let (status, json) = post_json(&app, "/api/liquidations/unify", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_base_dias"], 2160);
    assert_eq!(json["neto_tras_tope_dias"], 2040);
    assert_eq!(json["mitad_dias"], 1080);
    assert_eq!(json["dos_tercios_dias"], 1440);
    assert!(json["informe"].as_str().unwrap().contains("LIQUIDACIÓN DE PENA"));
}

#[tokio::test]
async fn unify_rejects_more_than_three_offenses() {
    let app = test_app();
    let delito = json!({ "pena": { "anios": 1 } });
    let body = json!({
        "rol": "Juez",
        "delitos": [delito.clone(), delito.clone(), delito.clone(), delito],
        "tope_legal_anios": 50
    });

    let (status, json) = post_json(&app, "/api/liquidations/unify", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "ValidationError");
    assert!(json["field_errors"]["delitos"].is_string());
}

#[tokio::test]
async fn appeal_endpoint_computes_the_window() {
    let app = test_app();
    let body = json!({
        "recurso": "anulacion",
        "organo_decisor": "TribunalJuicio",
        "fecha_notificacion": "2025-08-01",
        "hoy": "2025-08-01"
    });

    let (status, json) = post_json(&app, "/api/deadlines/appeal", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["inicio_computo"], "2025-08-04");
    assert_eq!(json["fecha_limite"], "2025-08-08");
    assert_eq!(json["calendario"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn appeal_endpoint_rejects_cassation_against_guarantees_judge() {
    let app = test_app();
    let body = json!({
        "recurso": "casacion",
        "organo_decisor": "JuezGarantias",
        "fecha_notificacion": "2025-08-01"
    });

    let (status, json) = post_json(&app, "/api/deadlines/appeal", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json["message"],
        "El recurso de casación solo procede contra sentencias del Tribunal de Juicio"
    );
}

#[tokio::test]
async fn risk_endpoint_scores_and_classifies() {
    let app = test_app();
    let body = json!({
        "rol": "Fiscalía",
        "caso": {
            "provincia": "Panamá",
            "circuito": "Primer Circuito",
            "juzgado": "Juzgado de Garantías",
            "numero_causa": "2025-001234",
            "imputado": "Juan Pérez",
            "delito": "Robo agravado",
            "fecha": "15/08/2025"
        },
        "arraigo": {
            "es_nacional": true,
            "tiene_otras_ciudadanias": false,
            "residencia_legal_extranjero": false,
            "estatus_migratorio_panama": "Regular",
            "domicilio_fijo": true,
            "empleo_formal": true,
            "contrato_indefinido": false,
            "familia_primaria_en_pa": true,
            "estudios_activos": false,
            "antecedentes_evasion": false,
            "pasaporte_vigente": false,
            "recursos_para_fugarse": "Medios"
        },
        "filas": []
    });

    let (status, json) = post_json(&app, "/api/risk/evaluate", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["puntaje_arraigo"], 80);
    assert_eq!(json["nivel_arraigo"], "Alto");
    assert!(json["informe"].as_str().unwrap().contains("Matriz de riesgos"));
}

#[tokio::test]
async fn dosage_endpoint_validates_the_frame() {
    let app = test_app();
    let body = json!({
        "pena_min_meses": 0,
        "pena_max_meses": 36,
        "intensidad_agravantes": "moderada",
        "intensidad_atenuantes": "moderada"
    });

    let (status, json) = post_json(&app, "/api/penalties/dosage", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["field_errors"]["pena_min_meses"].is_string());
}

#[tokio::test]
async fn dosage_endpoint_computes_the_probable_penalty() {
    let app = test_app();
    let body = json!({
        "pena_min_meses": 12,
        "pena_max_meses": 36,
        "grado": "consumado",
        "intensidad_agravantes": "moderada",
        "intensidad_atenuantes": "moderada"
    });

    let (status, json) = post_json(&app, "/api/penalties/dosage", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pena_probable_meses"], 24);
}

#[tokio::test]
async fn prescription_endpoint_estimates_the_window() {
    let app = test_app();
    let body = json!({
        "distrito": "Panamá",
        "fecha_hecho": "2020-01-01",
        "pena_maxima_anios": 4,
        "tipo_consumacion": "instantanea",
        "hoy": "2020-01-01"
    });

    let (status, json) = post_json(&app, "/api/prescription/estimate", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["regimen"], "CPP");
    assert_eq!(json["plazo_base_anios"], 6);
    assert_eq!(json["fecha_estimada"], "2026-01-01");
}

#[tokio::test]
async fn brief_generation_requires_branding() {
    let app = test_app();
    let body = json!({
        "tipo": "Imputación (CPP 280-281)",
        "caso": {
            "circuito": "Primer Circuito",
            "provincia": "Panamá",
            "numero_causa": "2025-004567",
            "delito": "Estafa",
            "imputado": "Carlos Ruiz",
            "fecha": "20/08/2025"
        },
        "branding": {
            "entidad": "Ministerio Público",
            "nombre_entidad": "",
            "firma_nombre": "María Gómez",
            "firma_linea": "Fiscal de Circuito"
        }
    });

    let (status, json) = post_json(&app, "/api/briefs/generate", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["field_errors"]["nombre_entidad"].is_string());
}

#[tokio::test]
async fn brief_recommendation_endpoint() {
    let app = test_app();
    let body = json!({ "rol": "Defensa", "estadio": "Juicio" });

    let (status, json) = post_json(&app, "/api/briefs/recommend", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["recomendado"], "Sobreseimiento (CPP 350)");
}

#[tokio::test]
async fn catalogs_expose_the_fixed_lists() {
    let app = test_app();

    let (status, measures) = get(&app, "/api/catalogs/measures").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(measures.as_array().unwrap().len(), 9);

    let (_, aggravating) = get(&app, "/api/catalogs/aggravating").await;
    assert_eq!(aggravating.as_array().unwrap().len(), 14);

    let (_, mitigating) = get(&app, "/api/catalogs/mitigating").await;
    assert_eq!(mitigating.as_array().unwrap().len(), 7);

    let (_, indicators) = get(&app, "/api/catalogs/risk-indicators").await;
    assert_eq!(indicators.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn holiday_catalog_known_and_unknown_years() {
    let app = test_app();

    let (status, known) = get(&app, "/api/catalogs/holidays/2025").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(known["feriados"].as_array().unwrap().len(), 12);

    let (status, missing) = get(&app, "/api/catalogs/holidays/1999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["kind"], "NotFound");
}
