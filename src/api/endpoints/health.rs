//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub patients: usize,
}

/// `GET /api/health` — liveness check for external monitors.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let patients = ctx.store.patients()?.len();
    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        patients,
    }))
}
