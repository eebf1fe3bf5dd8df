use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::common::{post_json, send_raw, test_app};

#[tokio::test]
async fn report_export_produces_a_pdf() {
    let app = test_app();
    let body = json!({
        "titulo": "Liquidación de pena",
        "contenido": "LIQUIDACIÓN DE PENA – UNIFICACIÓN (Rol: Juez)\n\nPena efectiva tras tope y abonos: 5 años 8 meses"
    });

    let req = Request::builder()
        .method("POST")
        .uri("/api/pdf/report")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, content_type, bytes) = send_raw(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn report_export_rejects_empty_title() {
    let app = test_app();
    let body = json!({ "titulo": "", "contenido": "cuerpo" });

    let (status, json) = post_json(&app, "/api/pdf/report", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["field_errors"]["titulo"].is_string());
}

#[tokio::test]
async fn quotes_and_hashes_survive_escaping() {
    let app = test_app();
    let body = json!({
        "titulo": "Informe \"especial\" #1",
        "contenido": "Línea con # y \"comillas\" y \\ barra"
    });

    let req = Request::builder()
        .method("POST")
        .uri("/api/pdf/report")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, _, bytes) = send_raw(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bytes.starts_with(b"%PDF"));
}
