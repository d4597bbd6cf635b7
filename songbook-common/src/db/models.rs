//! Song records as stored in the `songs` table

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted song
///
/// `id` is assigned by SQLite on insert and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: i64,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input for creating a song; also one entry of an import file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSong {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i64>,
}

impl NewSong {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: i64) -> Self {
        Self {
            title: Some(title.into()),
            artist: Some(artist.into()),
            year: Some(year),
        }
    }
}
