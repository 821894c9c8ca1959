//! WebSocket event stream for live dashboards.
//!
//! `GET /ws` upgrades and then forwards every hub event to the client
//! as tagged JSON. The connection is one-way: incoming frames other
//! than close are ignored. A client that falls behind the broadcast
//! channel skips the missed events instead of stalling producers.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::api::types::ApiContext;

/// WebSocket upgrade handler.
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(ctx): State<ApiContext>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, ctx))
}

async fn handle_ws(socket: WebSocket, ctx: ApiContext) {
    let session_id = Uuid::new_v4();
    tracing::info!(%session_id, "dashboard client connected");

    let (mut sink, mut stream) = socket.split();
    let mut rx = ctx.events.subscribe();

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Ok(event) => {
                    let json = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::error!(error = %e, "event serialization failed");
                            continue;
                        }
                    };
                    if sink.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(%session_id, skipped, "slow client, events dropped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {} // clients have nothing to tell us
                Some(Err(_)) => break,
            },
        }
    }

    let _ = sink.close().await;
    tracing::info!(%session_id, "dashboard client disconnected");
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;

    use futures_util::StreamExt;
    use tokio_tungstenite::connect_async;

    use crate::api::server::start_on;
    use crate::api::types::ApiContext;
    use crate::config::Config;
    use crate::events::{Event, EventHub};
    use crate::models::Severity;
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
    async fn connected_client_receives_alert_events() {
        let ctx = test_ctx();
        let events = ctx.events.clone();
        let store = ctx.store.clone();
        let mut server = start_on(ctx, IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
            .await
            .expect("server should start");

        let url = format!("ws://{}/ws", server.addr);
        let (mut ws, _) = connect_async(url.as_str()).await.expect("ws connect");

        // Give the subscription a moment to register before publishing.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let alert = store
            .record_alert(2, Severity::Critical, "SpO2 80%".into(), chrono::Utc::now())
            .unwrap();
        events.publish(Event::AlertRaised { alert });

        let frame = tokio::time::timeout(std::time::Duration::from_secs(2), ws.next())
            .await
            .expect("event within two seconds")
            .expect("stream open")
            .expect("frame ok");
        let text = frame.into_text().unwrap();
        assert!(text.contains("\"event\":\"alert_raised\""));
        assert!(text.contains("SpO2 80%"));

        server.shutdown();
    }
}
