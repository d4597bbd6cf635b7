//! Integration tests for JSON song import

use songbook_common::db::{init_in_memory, SongStore};
use songbook_server::import::import_file;
use tempfile::TempDir;

#[tokio::test]
async fn test_import_file_inserts_every_song() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("songs.json");
    std::fs::write(
        &path,
        r#"[
            {"title": "A", "artist": "X", "year": 2000},
            {"title": "B", "artist": "Y"},
            {"artist": "Z", "year": 2002}
        ]"#,
    )
    .unwrap();

    let store = SongStore::new(init_in_memory().await.unwrap());
    let imported = import_file(&store, &path).await.unwrap();

    assert_eq!(imported, 3);
    assert_eq!(store.count().await.unwrap(), 3);

    let mut songs = store.fetch_all().await.unwrap();
    songs.sort_by_key(|song| song.id);
    assert_eq!(songs[1].year, None);
    assert_eq!(songs[2].title, None);
}

#[tokio::test]
async fn test_import_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let store = SongStore::new(init_in_memory().await.unwrap());

    let err = import_file(&store, &dir.path().join("absent.json"))
        .await
        .unwrap_err();

    assert!(matches!(err, songbook_common::Error::Io(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_import_malformed_file_inserts_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("songs.json");
    std::fs::write(&path, "[{\"title\": \"A\"},").unwrap();

    let store = SongStore::new(init_in_memory().await.unwrap());
    let err = import_file(&store, &path).await.unwrap_err();

    assert!(matches!(err, songbook_common::Error::Import(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_import_failing_row_leaves_table_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("songs.json");
    std::fs::write(
        &path,
        r#"[{"title": "A"}, {"title": "BAD"}, {"title": "C"}]"#,
    )
    .unwrap();

    let store = SongStore::new(init_in_memory().await.unwrap());
    sqlx::query(
        "CREATE TRIGGER reject_bad_title BEFORE INSERT ON songs \
         WHEN NEW.title = 'BAD' BEGIN SELECT RAISE(ABORT, 'rejected'); END",
    )
    .execute(store.pool())
    .await
    .unwrap();

    let err = import_file(&store, &path).await.unwrap_err();

    assert!(matches!(err, songbook_common::Error::StorageUnavailable(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}
