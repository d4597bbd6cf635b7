//! Song store
//!
//! Owns the `songs` table: schema creation, inserts, and full-table reads.

use crate::db::models::{NewSong, Song};
use crate::Result;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Create the `songs` table
///
/// Deliberately not `IF NOT EXISTS`: calling this on a database that already
/// has the table is an error. Startup goes through the migration runner,
/// which applies it once.
pub async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            artist TEXT,
            year INTEGER,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Handle to the song table, cheap to clone
#[derive(Debug, Clone)]
pub struct SongStore {
    pool: SqlitePool,
}

impl SongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Read every song, in no particular order
    ///
    /// Any database failure surfaces as `Error::StorageUnavailable`.
    pub async fn fetch_all(&self) -> Result<Vec<Song>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, artist, year, created_at, updated_at
            FROM songs
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let songs = rows.iter().map(song_from_row).collect::<Result<Vec<_>>>()?;
        debug!("Fetched {} songs", songs.len());
        Ok(songs)
    }

    /// Insert a song, stamping both timestamps, and return the stored record
    pub async fn insert(&self, song: &NewSong) -> Result<Song> {
        let mut conn = self.pool.acquire().await?;
        insert_song(&mut conn, song).await
    }

    /// Insert a batch of songs in one transaction
    ///
    /// Either every song is stored or, on the first failure, none are.
    pub async fn insert_many(&self, songs: &[NewSong]) -> Result<Vec<Song>> {
        let mut tx = self.pool.begin().await?;

        let mut saved = Vec::with_capacity(songs.len());
        for song in songs {
            saved.push(insert_song(&mut *tx, song).await?);
        }

        tx.commit().await?;
        debug!("Inserted {} songs", saved.len());
        Ok(saved)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

async fn insert_song(conn: &mut SqliteConnection, song: &NewSong) -> Result<Song> {
    let row = sqlx::query(
        r#"
        INSERT INTO songs (title, artist, year, created_at, updated_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        RETURNING id, title, artist, year, created_at, updated_at
        "#,
    )
    .bind(&song.title)
    .bind(&song.artist)
    .bind(song.year)
    .fetch_one(&mut *conn)
    .await?;

    song_from_row(&row)
}

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    Ok(Song {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        year: row.try_get("year")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
