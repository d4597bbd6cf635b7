//! songbook-server - random song sample service
//!
//! Serves `GET /songs` from the SQLite database under the resolved root
//! folder, or imports songs from a JSON file with `--import`.

use anyhow::{Context, Result};
use clap::Parser;
use songbook_common::config::{config_file_path, CliOverrides, ServerConfig, TomlConfig};
use songbook_common::db::{init_database, SongStore};
use songbook_server::{build_router, import, AppState};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "songbook-server", version, about = "Serve a random sample of songs as JSON")]
struct Args {
    /// Folder holding songbook.db
    #[arg(long)]
    root_folder: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Import songs from a JSON file and exit
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config file is read before tracing so its log_level can apply
    let config_file = config_file_path();
    let loaded = config_file.as_deref().map(TomlConfig::load);
    let toml = match &loaded {
        Some(Ok(toml)) => toml.clone(),
        _ => TomlConfig::default(),
    };

    let overrides = CliOverrides {
        root_folder: args.root_folder,
        bind: args.bind,
        port: args.port,
    };
    let config = ServerConfig::resolve(&overrides, &toml);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting songbook-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match (&config_file, &loaded) {
        (Some(path), Some(Ok(_))) => info!("Loaded config file: {}", path.display()),
        (Some(path), Some(Err(e))) => warn!("Ignoring config file {}: {}", path.display(), e),
        _ => info!("No config file found, using defaults"),
    }

    let db_path = config.database_path();
    info!("Database path: {}", db_path.display());

    let pool = match init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };
    let store = SongStore::new(pool);

    if let Some(path) = args.import {
        let imported = import::import_file(&store, &path)
            .await
            .with_context(|| format!("Failed to import {}", path.display()))?;
        let total = store.count().await?;
        info!("✓ Import complete: {} songs added, {} total", imported, total);
        return Ok(());
    }

    let available = store.count().await?;
    info!("{} songs available", available);

    let app = build_router(AppState::new(store));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("songbook-server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
