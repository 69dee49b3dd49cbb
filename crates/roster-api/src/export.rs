//! Handlers for `/persons/export/*` download endpoints.
//!
//! Both honour the same `search_by`/`search`/`sort_by`/`order` query params
//! as the person list, so what the caller sees is what the caller downloads.
//! The whole buffer is built before the response starts; an encoding fault
//! surfaces as a 500 rather than a truncated file.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
  response::IntoResponse,
};
use roster_core::store::PersonStore;

use crate::{
  error::ApiError,
  persons::{ListParams, load_views},
};

fn attachment(filename: &str) -> String {
  format!("attachment; filename=\"{filename}\"")
}

/// `GET /persons/export/csv`
pub async fn csv<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let views = load_views(store.as_ref(), &params).await?;
  let bytes = roster_export::to_csv(&views)?;
  Ok((
    [
      (CONTENT_TYPE, roster_export::CSV_MIME.to_owned()),
      (CONTENT_DISPOSITION, attachment(roster_export::CSV_FILENAME)),
    ],
    bytes,
  ))
}

/// `GET /persons/export/xlsx`
pub async fn xlsx<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let views = load_views(store.as_ref(), &params).await?;
  let bytes = roster_export::to_xlsx(&views)?;
  Ok((
    [
      (CONTENT_TYPE, roster_export::XLSX_MIME.to_owned()),
      (CONTENT_DISPOSITION, attachment(roster_export::XLSX_FILENAME)),
    ],
    bytes,
  ))
}
