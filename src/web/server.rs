//! Liveness HTTP server.
//!
//! Hosting platforms probe an HTTP port to decide whether the process is
//! alive; this endpoint exists only for that probe and says nothing about
//! the Discord session.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tracing::info;

async fn liveness() -> &'static str {
    "Bot is running"
}

pub fn liveness_router() -> Router {
    Router::new().route("/", get(liveness))
}

/// Bind 0.0.0.0:{port} and serve until the process exits
pub async fn start_liveness_server(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Web server started on port {}", port);
    axum::serve(listener, liveness_router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness_body() {
        assert_eq!(liveness().await, "Bot is running");
    }

    #[tokio::test]
    async fn test_liveness_route_over_http() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, liveness_router()).await.unwrap();
        });

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "Bot is running");
    }
}
