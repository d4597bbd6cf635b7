//! Bulk song import from a JSON file
//!
//! The file holds a JSON array of `{title, artist, year}` objects; any field
//! may be missing or null.

use songbook_common::db::{NewSong, SongStore};
use songbook_common::{Error, Result};
use std::path::Path;
use tracing::info;

/// Parse the contents of an import file
pub fn parse_songs(content: &str) -> Result<Vec<NewSong>> {
    serde_json::from_str(content).map_err(|e| Error::Import(e.to_string()))
}

/// Insert every song in `path`, returning how many were stored
///
/// The file is imported atomically: a failing row leaves the table untouched.
pub async fn import_file(store: &SongStore, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)?;
    let songs = parse_songs(&content)?;

    let saved = store.insert_many(&songs).await?;

    info!("Imported {} songs from {}", saved.len(), path.display());
    Ok(saved.len())
}
