//! statefacts server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite-backed fun-fact store, and serves the states REST API. Store
//! readiness gates the listen socket: a store that fails to open aborts
//! startup.
//!
//! # Seeding
//!
//! Documents are only ever created by seeding (the API appends to existing
//! documents but never creates them):
//!
//! ```
//! cargo run -p statefacts-server -- --seed seed.json
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use statefacts_api::AppState;
use statefacts_core::{funfacts::FunFactDoc, state::Dataset, store::FunFactStore as _};
use statefacts_server::ServerConfig;
use statefacts_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "statefacts REST API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Seed fun-fact documents from a JSON file and exit.
  #[arg(long)]
  seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("STATEFACTS"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Load the reference dataset and open the store.
  let dataset = Dataset::load().context("failed to load state reference dataset")?;

  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;

  // Helper mode: seed documents and exit.
  if let Some(seed_path) = cli.seed {
    let count = seed(&dataset, &store, &seed_path).await?;
    tracing::info!("seeded {count} fun-fact documents");
    return Ok(());
  }

  let state = AppState {
    dataset: Arc::new(dataset),
    store:   Arc::new(store),
  };

  let app = statefacts_server::app(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Upsert every document in the seed file, validating each state code
/// against the reference dataset first.
async fn seed(
  dataset: &Dataset,
  store: &SqliteStore,
  path: &Path,
) -> anyhow::Result<usize> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read seed file {path:?}"))?;
  let docs: Vec<FunFactDoc> = serde_json::from_str(&raw)
    .context("seed file is not a JSON array of fun-fact documents")?;

  let mut count = 0;
  for mut doc in docs {
    doc.state_code = doc.state_code.trim().to_ascii_uppercase();
    dataset
      .get(&doc.state_code)
      .with_context(|| format!("seed file references {:?}", doc.state_code))?;

    store.save(&doc).await?;
    count += 1;
  }
  Ok(count)
}
