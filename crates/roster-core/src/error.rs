//! Error types for `roster-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::store::{ClassifyError, StoreErrorKind};

#[derive(Debug, Error)]
pub enum Error {
  #[error("person not found: {0}")]
  PersonNotFound(Uuid),

  #[error("country name must not be blank")]
  MissingCountryName,

  #[error("country name already exists: {0:?}")]
  DuplicateCountryName(String),

  #[error("validation failed on {field}: {message}")]
  Validation {
    field:   &'static str,
    message: &'static str,
  },
}

impl ClassifyError for Error {
  fn kind(&self) -> StoreErrorKind {
    match self {
      Error::PersonNotFound(_) => StoreErrorKind::NotFound,
      Error::DuplicateCountryName(_) => StoreErrorKind::Duplicate,
      Error::MissingCountryName | Error::Validation { .. } => {
        StoreErrorKind::InvalidArgument
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  #[test]
  fn classification_matches_taxonomy() {
    assert_eq!(
      Error::PersonNotFound(Uuid::new_v4()).kind(),
      StoreErrorKind::NotFound
    );
    assert_eq!(
      Error::DuplicateCountryName("USA".into()).kind(),
      StoreErrorKind::Duplicate
    );
    assert_eq!(Error::MissingCountryName.kind(), StoreErrorKind::InvalidArgument);
    assert_eq!(
      Error::Validation {
        field:   "PersonName",
        message: "person name can't be blank",
      }
      .kind(),
      StoreErrorKind::InvalidArgument
    );
  }
}
