//! Health check endpoint
//!
//! Always answers 200; store reachability is reported in the body.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" when the song store answers, "degraded" otherwise
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    /// Current row count; null when the store is unreachable
    pub songs: Option<i64>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let songs = match state.store.count().await {
        Ok(count) => Some(count),
        Err(e) => {
            warn!("Health check could not reach song store: {}", e);
            None
        }
    };

    let (status, database) = if songs.is_some() {
        ("ok", "ok")
    } else {
        ("degraded", "unavailable")
    };

    Json(HealthResponse {
        status,
        module: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        database,
        songs,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
