//! Patient endpoints.
//!
//! `GET /api/patients` — summaries with latest vitals.
//! `GET /api/patients/:id/history` — full reading history.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Patient, Severity, VitalSigns};

/// Wire shape of one patient on the list endpoint: the full history is
/// deliberately omitted, only the latest reading travels.
#[derive(Serialize)]
pub struct PatientSummary {
    pub id: u32,
    pub name: String,
    pub room: String,
    pub condition: String,
    pub status: Severity,
    pub vitals: Option<VitalSigns>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Patient> for PatientSummary {
    fn from(p: &Patient) -> Self {
        let latest = p.latest_vitals().cloned();
        Self {
            id: p.id,
            name: p.name.clone(),
            room: p.room.clone(),
            condition: p.condition.clone(),
            status: p.status,
            updated_at: latest.as_ref().map(|v| v.timestamp),
            vitals: latest,
        }
    }
}

/// `GET /api/patients`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<PatientSummary>>, ApiError> {
    let patients = ctx.store.patients()?;
    Ok(Json(patients.iter().map(PatientSummary::from).collect()))
}

/// `GET /api/patients/:id/history`
pub async fn history(
    State(ctx): State<ApiContext>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<VitalSigns>>, ApiError> {
    let history = ctx
        .store
        .history(id)?
        .ok_or_else(|| ApiError::NotFound("Patient not found".into()))?;
    Ok(Json(history))
}
