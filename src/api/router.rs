//! Route table.
//!
//! Pages and static assets are served at the root, the JSON API under
//! `/api` (permissive CORS, same stance as the original deployment),
//! and the live event stream at `/ws`.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::api::websocket;
use crate::web::routes as web_routes;

/// Build the full application router.
pub fn app_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/patients", get(endpoints::patients::list))
        .route("/patients/:id/history", get(endpoints::patients::history))
        .route("/alerts", get(endpoints::alerts::list))
        .route("/alerts/:id/ack", post(endpoints::alerts::ack))
        .route("/simulation", post(endpoints::simulation::update))
        .with_state(ctx.clone())
        .layer(CorsLayer::permissive());

    let pages = Router::new()
        .route("/", get(web_routes::dashboard))
        .route("/patients/:id", get(web_routes::patient_detail))
        .route("/alerts/:id/ack", post(web_routes::acknowledge))
        .route("/static/app.js", get(web_routes::app_js))
        .route("/static/style.css", get(web_routes::style_css))
        .with_state(ctx.clone());

    let ws = Router::new()
        .route("/ws", get(websocket::ws_upgrade))
        .with_state(ctx);

    Router::new().nest("/api", api).merge(pages).merge(ws)
}
