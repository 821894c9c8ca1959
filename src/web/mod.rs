//! Server-rendered web UI: view state, HTML pages, generated assets,
//! and the axum handlers that serve them.

pub mod assets;
pub mod pages;
pub mod routes;
pub mod view;
