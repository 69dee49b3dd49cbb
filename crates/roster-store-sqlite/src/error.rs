//! Error type for `roster-store-sqlite`.
//!
//! Domain conditions (not-found, duplicate name, blank name) are raised as
//! [`roster_core::Error`] through the `Core` variant so every backend
//! surfaces the same taxonomy; the remaining variants are backend faults.

use roster_core::store::{ClassifyError, StoreErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] roster_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date parse error: {0}")]
  DateParse(String),
}

impl ClassifyError for Error {
  fn kind(&self) -> StoreErrorKind {
    match self {
      Error::Core(e) => e.kind(),
      _ => StoreErrorKind::Other,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
