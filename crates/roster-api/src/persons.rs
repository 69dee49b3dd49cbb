//! Handlers for `/persons` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/persons` | `?search_by=&search=&sort_by=&order=asc\|desc` |
//! | `POST`   | `/persons` | Body: a `PersonInput`; 201 on success |
//! | `GET`    | `/persons/:id` | 404 if not found |
//! | `PUT`    | `/persons/:id` | Full replacement; 404 if not found |
//! | `DELETE` | `/persons/:id` | 204 on success, 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use roster_core::{
  person::{Person, PersonInput, PersonView, materialize},
  query::{SortDirection, filter, sort},
  store::PersonStore,
  validate::validate,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── Query params ─────────────────────────────────────────────────────────────

/// Filter and sort parameters, shared by the list and export endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
  /// Field key to filter by, e.g. `PersonName`. Unrecognised keys pass
  /// everything through.
  pub search_by: Option<String>,
  /// Case-insensitive substring to look for.
  pub search:    Option<String>,
  /// Field key to sort by. Unrecognised keys leave the order unchanged.
  pub sort_by:   Option<String>,
  /// `asc` or `desc` in any casing; defaults to ascending.
  pub order:     Option<String>,
}

/// Load the full snapshot, materialise views, then apply filter and sort.
pub(crate) async fn load_views<S>(
  store: &S,
  params: &ListParams,
) -> Result<Vec<PersonView>, ApiError>
where
  S: PersonStore,
{
  let persons = store
    .list_persons()
    .await
    .map_err(ApiError::from_store)?;
  let countries = store
    .list_countries()
    .await
    .map_err(ApiError::from_store)?;

  let mut views =
    materialize(persons, &countries, Utc::now().date_naive());

  if let (Some(by), Some(text)) = (&params.search_by, &params.search) {
    views = filter(views, by, text);
  }
  if let Some(by) = &params.sort_by {
    let direction = params
      .order
      .as_deref()
      .map(SortDirection::parse)
      .unwrap_or_default();
    views = sort(views, by, direction);
  }

  Ok(views)
}

/// Materialise the view for a single person.
async fn view_one<S>(store: &S, person: Person) -> Result<PersonView, ApiError>
where
  S: PersonStore,
{
  let country_name = match person.country_id {
    Some(id) => store
      .get_country(id)
      .await
      .map_err(ApiError::from_store)?
      .map(|c| c.name),
    None => None,
  };
  Ok(PersonView::from_person(
    person,
    country_name,
    Utc::now().date_naive(),
  ))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /persons[?search_by=&search=&sort_by=&order=]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<PersonView>>, ApiError>
where
  S: PersonStore,
{
  let views = load_views(store.as_ref(), &params).await?;
  Ok(Json(views))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /persons` — body: a `PersonInput`.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(input): Json<PersonInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  validate(&input)?;
  let person = store
    .add_person(input)
    .await
    .map_err(ApiError::from_store)?;
  let view = view_one(store.as_ref(), person).await?;
  Ok((StatusCode::CREATED, Json(view)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /persons/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<PersonView>, ApiError>
where
  S: PersonStore,
{
  let person = store
    .get_person(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  let view = view_one(store.as_ref(), person).await?;
  Ok(Json(view))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /persons/:id` — full replacement with the same validation as create.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(input): Json<PersonInput>,
) -> Result<Json<PersonView>, ApiError>
where
  S: PersonStore,
{
  validate(&input)?;
  let person = store
    .update_person(id, input)
    .await
    .map_err(ApiError::from_store)?;
  let view = view_one(store.as_ref(), person).await?;
  Ok(Json(view))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /persons/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
{
  let removed = store
    .delete_person(id)
    .await
    .map_err(ApiError::from_store)?;
  if removed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("person {id} not found")))
  }
}
