use tower_http::trace::TraceLayer;
use tracing::info;

use server::{config, health, openapi, telemetry};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    config::load_config();
    let cfg = config::config();

    telemetry::init(&cfg.server.log_level)?;
    health::record_start_time();

    let app = openapi::api_router().layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, docs = cfg.features.docs, pdf_export = cfg.features.pdf_export, "penal calculator service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
