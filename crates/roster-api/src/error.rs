//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::store::{ClassifyError, StoreErrorKind};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("validation failed on {field}: {message}")]
  Validation {
    field:   &'static str,
    message: &'static str,
  },

  #[error("export error: {0}")]
  Export(#[from] roster_export::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a backend error into the matching HTTP-facing variant.
  pub fn from_store<E>(e: E) -> Self
  where
    E: std::error::Error + ClassifyError + Send + Sync + 'static,
  {
    match e.kind() {
      StoreErrorKind::NotFound => Self::NotFound(e.to_string()),
      StoreErrorKind::Duplicate => Self::Conflict(e.to_string()),
      StoreErrorKind::InvalidArgument => Self::BadRequest(e.to_string()),
      StoreErrorKind::Other => Self::Store(Box::new(e)),
    }
  }
}

impl From<roster_core::Error> for ApiError {
  fn from(e: roster_core::Error) -> Self {
    match e {
      // Keep the field name in the response body.
      roster_core::Error::Validation { field, message } => {
        Self::Validation { field, message }
      }
      other => Self::from_store(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, json!({ "error": m }))
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, json!({ "error": m }))
      }
      ApiError::Conflict(m) => (StatusCode::CONFLICT, json!({ "error": m })),
      ApiError::Validation { field, message } => (
        StatusCode::BAD_REQUEST,
        json!({ "error": message, "field": field }),
      ),
      ApiError::Export(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": e.to_string() }),
      ),
      ApiError::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": e.to_string() }),
      ),
    };
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::*;

  #[test]
  fn core_errors_map_to_http_variants() {
    let e = ApiError::from(roster_core::Error::PersonNotFound(Uuid::new_v4()));
    assert!(matches!(e, ApiError::NotFound(_)));

    let e =
      ApiError::from(roster_core::Error::DuplicateCountryName("USA".into()));
    assert!(matches!(e, ApiError::Conflict(_)));

    let e = ApiError::from(roster_core::Error::MissingCountryName);
    assert!(matches!(e, ApiError::BadRequest(_)));

    let e = ApiError::from(roster_core::Error::Validation {
      field:   "Email",
      message: "email can't be blank",
    });
    assert!(matches!(e, ApiError::Validation { field: "Email", .. }));
  }
}
