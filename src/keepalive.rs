use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tracing::{error, info};

const ALIVE_BODY: &str = "GRx Manager is alive!";

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Answers every GET with a static body so the host sees a bound port.
pub fn router() -> Router {
    Router::new().fallback_service(get(alive))
}

pub fn spawn(addr: SocketAddr) {
    tokio::spawn(async move {
        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(l) => l,
            Err(e) => {
                error!(%addr, error = %e, "Keep-alive server failed to bind");
                return;
            }
        };
        info!(%addr, "Keep-alive server listening");
        if let Err(e) = axum::serve(listener, router()).await {
            error!(error = %e, "Keep-alive server stopped");
        }
    });
}
