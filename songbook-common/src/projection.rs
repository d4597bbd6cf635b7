//! Public view of a song
//!
//! Timestamps stay inside the store; only these four fields leave the service.

use crate::db::models::Song;
use serde::Serialize;

/// A song as returned by `GET /songs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongSummary {
    pub id: i64,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i64>,
}

impl From<&Song> for SongSummary {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            year: song.year,
        }
    }
}
