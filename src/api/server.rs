//! HTTP server lifecycle.
//!
//! Pattern: bind → spawn background task → return a handle with a
//! shutdown channel. Tests bind to an ephemeral localhost port.

use std::net::{IpAddr, SocketAddr};

use tokio::sync::oneshot;

use crate::api::router::app_router;
use crate::api::types::ApiContext;

/// Handle to the running dashboard server.
pub struct DashboardServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    /// Signal the server to shut down gracefully. Safe to call twice.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("dashboard server shutdown signal sent");
        }
    }
}

/// Bind the configured address and spawn the server.
pub async fn start(ctx: ApiContext, bind: SocketAddr) -> std::io::Result<DashboardServer> {
    start_on(ctx, bind.ip(), bind.port()).await
}

/// Start on a specific ip/port. Port 0 picks an ephemeral port, which
/// the returned handle reports via `addr`.
pub async fn start_on(ctx: ApiContext, ip: IpAddr, port: u16) -> std::io::Result<DashboardServer> {
    let listener = tokio::net::TcpListener::bind(SocketAddr::new(ip, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "dashboard server binding");

    let app = app_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("dashboard server received shutdown signal");
        };

        tracing::info!(%addr, "dashboard server started");
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!(error = %e, "dashboard server error");
        }
        tracing::info!("dashboard server stopped");
    });

    Ok(DashboardServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::events::EventHub;
    use crate::monitor::SimSettings;
    use crate::store::WardStore;

    fn test_ctx() -> ApiContext {
        ApiContext::new(
            Arc::new(WardStore::with_demo_patients(200)),
            EventHub::new(32),
            Arc::new(SimSettings::default()),
            Arc::new(Config::default()),
        )
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let mut server = start_on(test_ctx(), IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/api/health", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "ok");

        server.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn server_serves_dashboard_page() {
        let mut server = start_on(test_ctx(), IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
            .await
            .expect("server should start");

        let url = format!("http://{}/", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let html = resp.text().await.unwrap();
        assert!(html.contains("alert-filters"));

        server.shutdown();
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let mut server = start_on(test_ctx(), IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
            .await
            .expect("server should start");

        let url = format!("http://{}/nonexistent", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_on(test_ctx(), IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
            .await
            .expect("server should start");
        server.shutdown();
        server.shutdown();
    }
}
