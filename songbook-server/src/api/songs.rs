//! Random song sample endpoint

use axum::{extract::State, Json};
use songbook_common::{sample_songs, SongSummary, SAMPLE_SIZE};
use tracing::debug;

use crate::{error::ApiError, AppState};

/// GET /songs
///
/// Returns up to 12 distinct songs chosen at random, each projected to
/// `{id, title, artist, year}`. Every call re-reads the store.
pub async fn list_songs(
    State(state): State<AppState>,
) -> Result<Json<Vec<SongSummary>>, ApiError> {
    let songs = state.store.fetch_all().await?;

    // ThreadRng is not Send; create it after the await
    let sample = sample_songs(&songs, SAMPLE_SIZE, &mut rand::thread_rng());
    debug!("Sampled {} of {} songs", sample.len(), songs.len());

    Ok(Json(sample))
}
