use std::{net::SocketAddr, sync::Arc};

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

use depth::DepthLadder;

#[derive(Clone)]
pub struct AppState {
    pub ladder: Arc<RwLock<Option<DepthLadder>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ladder: Arc::new(RwLock::new(None)),
        }
    }
}

/// 현재 표시 모델 반환. 첫 성공 틱 전에는 null (렌더러는 대기 상태 표시)
async fn orderbook_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let data = state.ladder.read().await.clone();
    Json(data)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn serve(state: Arc<AppState>, port: u16) -> eyre::Result<()> {
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/orderbook", get(orderbook_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_state_starts_empty() {
        let state = AppState::new();
        assert!(state.ladder.read().await.is_none());
    }
}
