//! # Songbook Common Library
//!
//! Shared code for the songbook service:
//! - Song records and the SQLite-backed song store
//! - Schema migrations and database initialization
//! - Response projection and random sampling of songs
//! - Configuration loading and root folder resolution

pub mod config;
pub mod db;
pub mod error;
pub mod projection;
pub mod sampling;

pub use error::{Error, Result};
pub use projection::SongSummary;
pub use sampling::{sample_songs, SAMPLE_SIZE};
