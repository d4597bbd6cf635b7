//! HTTP API handlers for songbook-server

pub mod health;
pub mod songs;

pub use health::health_routes;
pub use songs::list_songs;
