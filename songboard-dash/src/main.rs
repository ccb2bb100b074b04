//! songboard-dash - Top-songs analytics dashboard
//!
//! Loads the cleaned top-songs table once at startup, then serves the
//! interactive dashboard: filter controls drive recomputation of the word
//! cloud input, genre legend, correlation matrix, and scatter dataset.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use songboard_common::{config, Dataset};
use songboard_dash::{build_router, AppState};

/// Command-line arguments for songboard-dash
#[derive(Parser, Debug)]
#[command(name = "songboard-dash")]
#[command(about = "Interactive analytics dashboard over the top-songs table")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8050", env = "SONGBOARD_PORT")]
    port: u16,

    /// Path to the cleaned dataset CSV (falls back to SONGBOARD_DATA,
    /// then the config file, then data/cleandata.csv)
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!(
        "Starting Songboard Dashboard (songboard-dash) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let data_path = config::resolve_dataset_path(args.data.as_deref());
    info!("Dataset path: {}", data_path.display());

    let dataset = Dataset::from_csv_path(&data_path)
        .with_context(|| format!("Failed to load dataset from {}", data_path.display()))?;

    let (min_year, max_year) = dataset.year_bounds();
    info!(
        "✓ Loaded {} rows, {} feature columns, {} genres, years {}-{}",
        dataset.rows().len(),
        dataset.available_columns().len(),
        dataset.genre_universe().len(),
        min_year,
        max_year
    );

    // Create application state and router
    let state = AppState::new(Arc::new(dataset));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port))
        .await
        .with_context(|| format!("Failed to bind port {}", args.port))?;
    info!("songboard-dash listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
