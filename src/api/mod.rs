//! HTTP surface: router, server lifecycle, JSON endpoints, WebSocket
//! event stream, and the shared request context.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;
pub mod websocket;

pub use server::DashboardServer;
pub use types::ApiContext;
