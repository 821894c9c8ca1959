//! Simulation control endpoint.
//!
//! `POST /api/simulation` — adjust speed or pause the vitals
//! simulation. Admin only.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Role;
use crate::monitor::{SimStatus, SimUpdate};

/// `POST /api/simulation`
pub async fn update(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Json(update): Json<SimUpdate>,
) -> Result<Json<SimStatus>, ApiError> {
    ctx.tokens.require_role(&headers, Role::Admin)?;
    let status = ctx.settings.apply(update);
    tracing::info!(
        speed = ?status.speed,
        paused = status.paused,
        "simulation settings changed"
    );
    Ok(Json(status))
}
