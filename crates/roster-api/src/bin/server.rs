//! roster API server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the JSON API over HTTP. `--seed`
//! loads the demo reference data into an empty store before serving.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use roster_core::{
  person::{Gender, PersonInput},
  store::PersonStore,
};
use roster_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "roster personnel-record server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Populate an empty store with demo countries and persons.
  #[arg(long)]
  seed: bool,
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
    .add_source(config::Environment::with_prefix("ROSTER"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: roster_api::ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open SQLite store.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;

  if cli.seed {
    seed_demo_data(&store).await?;
  }

  let app = roster_api::api_router(Arc::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Insert demo reference data into an empty store; a no-op otherwise.
async fn seed_demo_data(store: &SqliteStore) -> anyhow::Result<()> {
  if !store.list_countries().await?.is_empty()
    || !store.list_persons().await?.is_empty()
  {
    tracing::info!("store is not empty; skipping demo seed");
    return Ok(());
  }

  let mut country_ids = Vec::new();
  for name in ["USA", "UK", "Germany", "Switzerland", "Canada"] {
    country_ids.push(store.add_country(name).await?.country_id);
  }

  let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d);
  let persons = [
    PersonInput {
      name:               "Fredrick Amoako".into(),
      email:              "fredrickamoako@example.com".into(),
      date_of_birth:      date(1997, 11, 30),
      gender:             Some(Gender::Male),
      country_id:         Some(country_ids[0]),
      address:            Some("1660 Topping Ave".into()),
      receive_newsletter: true,
    },
    PersonInput {
      name:               "Ellen Amoako Dankwah".into(),
      email:              "ellenamoakod@example.com".into(),
      date_of_birth:      date(1998, 7, 20),
      gender:             Some(Gender::Female),
      country_id:         Some(country_ids[0]),
      address:            Some("LA".into()),
      receive_newsletter: true,
    },
    PersonInput {
      name:               "Kingsley Kwarteng".into(),
      email:              "kingsleykwarteng@example.com".into(),
      date_of_birth:      date(1996, 8, 11),
      gender:             Some(Gender::Male),
      country_id:         Some(country_ids[1]),
      address:            Some("Milton Keynes".into()),
      receive_newsletter: false,
    },
    PersonInput {
      name:               "Owura".into(),
      email:              "owura@example.com".into(),
      date_of_birth:      date(2001, 12, 2),
      gender:             Some(Gender::Male),
      country_id:         Some(country_ids[2]),
      address:            Some("Hamburg".into()),
      receive_newsletter: false,
    },
    PersonInput {
      name:               "Janet Dwomoh".into(),
      email:              "jdwomoh@example.com".into(),
      date_of_birth:      date(1998, 5, 3),
      gender:             Some(Gender::Female),
      country_id:         Some(country_ids[4]),
      address:            Some("Ontario".into()),
      receive_newsletter: true,
    },
  ];

  for input in persons {
    store.add_person(input).await?;
  }

  tracing::info!("seeded demo data");
  Ok(())
}
