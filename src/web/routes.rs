//! Page and static-asset handlers.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::web::{assets, pages};

/// How many alerts the dashboard lists.
const DASHBOARD_ALERTS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Raw `?filter=` value; unrecognized values fail closed.
    pub filter: Option<String>,
}

/// `GET /` — the ward dashboard.
pub async fn dashboard(
    State(ctx): State<ApiContext>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, ApiError> {
    let patients = ctx.store.patients()?;
    let alerts = ctx.store.recent_alerts(DASHBOARD_ALERTS)?;
    Ok(Html(pages::dashboard(
        &patients,
        &alerts,
        query.filter.as_deref(),
    )))
}

/// `GET /patients/:id` — patient detail, 404 page for unknown ids.
pub async fn patient_detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<u32>,
) -> Result<Response, ApiError> {
    match ctx.store.patient(id)? {
        Some(patient) => Ok(Html(pages::patient_detail(&patient)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Html(pages::not_found("Patient not found")),
        )
            .into_response()),
    }
}

/// `POST /alerts/:id/ack` — acknowledge, then bounce back to where the
/// form was submitted from.
pub async fn acknowledge(
    State(ctx): State<ApiContext>,
    headers: axum::http::HeaderMap,
    Path(id): Path<u64>,
) -> Result<Redirect, ApiError> {
    if !ctx.store.acknowledge(id)? {
        tracing::debug!(alert_id = id, "acknowledge for unknown alert ignored");
    }
    let back = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");
    Ok(Redirect::to(back))
}

/// `GET /static/app.js` — generated client script.
pub async fn app_js(State(ctx): State<ApiContext>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        assets::app_js(ctx.config.dashboard_refresh_ms),
    )
}

/// `GET /static/style.css`.
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::STYLE_CSS,
    )
}
