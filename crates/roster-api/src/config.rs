//! Server configuration, loaded from a TOML file layered with `ROSTER_*`
//! environment variables.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  /// Interface to bind.
  #[serde(default = "default_host")]
  pub host:       String,
  /// Port to bind.
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Path of the SQLite database file.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("roster.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      store_path: default_store_path(),
    }
  }
}
