//! Demo data endpoints backing the marketing page tables and charts

use actix_web::{HttpResponse, get, web};

use crate::model::claim::sample_claims;
use crate::model::metrics::evaluation_metrics;

/// Canned claim history
#[utoipa::path(
    get,
    path = "/v1/claims",
    responses(
        (status = 200, description = "Demo claim records", body = [crate::model::ClaimRecord])
    ),
    tag = "demo"
)]
#[get("/v1/claims")]
pub async fn list_claims() -> HttpResponse {
    HttpResponse::Ok().json(sample_claims())
}

/// Published evaluation figures for the deployed classifier
#[utoipa::path(
    get,
    path = "/v1/metrics",
    responses(
        (status = 200, description = "Model evaluation metrics", body = [crate::model::ModelMetric])
    ),
    tag = "demo"
)]
#[get("/v1/metrics")]
pub async fn list_metrics() -> HttpResponse {
    HttpResponse::Ok().json(evaluation_metrics())
}

/// Configure demo data routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_claims).service(list_metrics);
}
