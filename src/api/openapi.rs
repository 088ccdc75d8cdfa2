//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api;
use crate::api::health::{DependencyHealth, HealthStatus, ReadinessStatus};
use crate::model::{
    AssessmentResult, ClaimInput, ClaimInputPatch, ClaimRecord, ClaimStatus, FraudClassification,
    ModelMetric,
};
use crate::service::simulator::SimulatorSnapshot;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::simulator::get_simulator,
        api::simulator::update_input,
        api::simulator::run_simulation,
        api::demo::list_claims,
        api::demo::list_metrics,
        api::health::liveness,
        api::health::readiness,
    ),
    components(schemas(
        ClaimInput,
        ClaimInputPatch,
        SimulatorSnapshot,
        AssessmentResult,
        FraudClassification,
        ClaimRecord,
        ClaimStatus,
        ModelMetric,
        HealthStatus,
        ReadinessStatus,
        DependencyHealth,
    )),
    tags(
        (name = "simulator", description = "Interactive fraud simulator"),
        (name = "demo", description = "Canned data for the marketing page"),
        (name = "health", description = "Liveness and readiness probes"),
    ),
    info(
        title = "AgriGuard AI API",
        description = "Claim assessment backend for the AgriGuard AI fraud detection demo"
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/yaml")
        .body(ApiDoc::openapi().to_yaml().unwrap())
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
