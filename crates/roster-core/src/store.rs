//! The `PersonStore` trait — the storage collaborator boundary.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The query engine never calls it; callers load a snapshot through the read
//! operations and hand the materialised sequence to the pure transforms.

use std::future::Future;

use uuid::Uuid;

use crate::{
  country::Country,
  person::{Person, PersonInput},
};

/// Coarse classification of a backend error, so HTTP layers can map errors
/// to status codes without knowing the concrete backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
  /// The addressed record does not exist.
  NotFound,
  /// A uniqueness rule was violated (e.g. a duplicate country name).
  Duplicate,
  /// The request itself was malformed (e.g. a blank country name).
  InvalidArgument,
  /// Anything else — I/O, corruption, decoding.
  Other,
}

/// Implemented by backend error types so callers can classify failures.
pub trait ClassifyError {
  fn kind(&self) -> StoreErrorKind;
}

/// Abstraction over a roster storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + ClassifyError + Send + Sync + 'static;

  // ── Persons ───────────────────────────────────────────────────────────

  /// Persist a new person with a store-assigned id. Callers are expected to
  /// have validated `input` first.
  fn add_person(
    &self,
    input: PersonInput,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get_person(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Load all person records, unordered.
  fn list_persons(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Replace every stored field of the person with `id`. Fails with the
  /// backend's not-found condition when `id` does not exist.
  fn update_person(
    &self,
    id: Uuid,
    input: PersonInput,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Remove the person with `id`. Returns `false` when nothing was removed.
  fn delete_person(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Country directory ─────────────────────────────────────────────────

  /// Create a country. Fails on a blank name, and with the duplicate-name
  /// condition when an exact match already exists.
  fn add_country(
    &self,
    name: &str,
  ) -> impl Future<Output = Result<Country, Self::Error>> + Send;

  /// Retrieve a country by id. Returns `None` if not found — an orphaned
  /// person reference is not an error.
  fn get_country(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send + '_;

  /// Load all countries, unordered.
  fn list_countries(
    &self,
  ) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;
}
