//! REST API endpoints for the fraud simulator

use actix_web::{HttpResponse, get, patch, post, web};

use crate::api::error::ApiError;
use crate::model::ClaimInputPatch;
use crate::service::simulator::{RunOutcome, Simulator};

/// Current simulator state
#[utoipa::path(
    get,
    path = "/v1/simulator",
    responses(
        (status = 200, description = "Current simulator state", body = crate::service::simulator::SimulatorSnapshot)
    ),
    tag = "simulator"
)]
#[get("/v1/simulator")]
pub async fn get_simulator(simulator: web::Data<Simulator>) -> HttpResponse {
    HttpResponse::Ok().json(simulator.snapshot().await)
}

/// Apply field edits to the draft claim input
#[utoipa::path(
    patch,
    path = "/v1/simulator/input",
    request_body = ClaimInputPatch,
    responses(
        (status = 200, description = "Updated draft input", body = crate::model::ClaimInput)
    ),
    tag = "simulator"
)]
#[patch("/v1/simulator/input")]
pub async fn update_input(
    simulator: web::Data<Simulator>,
    patch: web::Json<ClaimInputPatch>,
) -> HttpResponse {
    let input = simulator.update_input(patch.into_inner()).await;
    HttpResponse::Ok().json(input)
}

/// Run one fraud analysis over the current draft input
#[utoipa::path(
    post,
    path = "/v1/simulator/run",
    responses(
        (status = 200, description = "Verdict produced and stored", body = crate::model::AssessmentResult),
        (status = 409, description = "A run is already in progress"),
        (status = 502, description = "Model call failed or returned a malformed verdict"),
        (status = 503, description = "No API key configured")
    ),
    tag = "simulator"
)]
#[post("/v1/simulator/run")]
pub async fn run_simulation(simulator: web::Data<Simulator>) -> Result<HttpResponse, ApiError> {
    match simulator.run().await {
        RunOutcome::Completed(result) => Ok(HttpResponse::Ok().json(result)),
        RunOutcome::AlreadyRunning => Err(ApiError::RunInProgress),
        RunOutcome::Failed(e) => Err(e.into()),
        RunOutcome::Superseded => Err(ApiError::Internal(
            "assessment superseded by a newer run".to_string(),
        )),
    }
}

/// Configure simulator routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_simulator)
        .service(update_input)
        .service(run_simulation);
}
