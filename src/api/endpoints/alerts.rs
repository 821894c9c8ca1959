//! Alert endpoints.
//!
//! `GET /api/alerts` — recent alerts, newest first.
//! `POST /api/alerts/:id/ack` — acknowledge; requires the nurse role.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Alert, Role};

/// How many alerts the list endpoint returns.
const RECENT_LIMIT: usize = 20;

#[derive(Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

/// `GET /api/alerts`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Alert>>, ApiError> {
    Ok(Json(ctx.store.recent_alerts(RECENT_LIMIT)?))
}

/// `POST /api/alerts/:id/ack`
pub async fn ack(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<AckResponse>, ApiError> {
    let role = ctx.tokens.require_role(&headers, Role::Nurse)?;
    if !ctx.store.acknowledge(id)? {
        return Err(ApiError::NotFound("Alert not found".into()));
    }
    tracing::info!(alert_id = id, role = role.as_str(), "alert acknowledged");
    Ok(Json(AckResponse { ok: true }))
}
