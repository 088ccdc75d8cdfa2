use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;
use service::assessment::ClaimAssessor;
use service::{ClaimAssessmentService, Simulator};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    // Shared assessment service; simulator runs go through its ClaimAssessor seam
    let assessment_service = Arc::new(ClaimAssessmentService::new(config.assessment.clone()));

    let simulator = web::Data::new(Simulator::new(
        Arc::clone(&assessment_service) as Arc<dyn ClaimAssessor>
    ));
    let assessment_data = web::Data::from(assessment_service);

    tracing::info!("Starting AgriGuard AI server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(simulator.clone())
            .app_data(assessment_data.clone())
            .configure(api::simulator::configure)
            .configure(api::demo::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
