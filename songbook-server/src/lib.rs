//! songbook-server library
//!
//! HTTP service exposing a random sample of stored songs.

use axum::Router;
use songbook_common::db::SongStore;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod import;

pub use error::ApiError;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Song store, injected at startup
    pub store: SongStore,
}

impl AppState {
    pub fn new(store: SongStore) -> Self {
        Self { store }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/songs", get(api::list_songs))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
