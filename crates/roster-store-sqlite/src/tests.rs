//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use roster_core::{
  person::{Gender, PersonInput},
  store::PersonStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn input(name: &str, email: &str) -> PersonInput {
  PersonInput {
    name:               name.into(),
    email:              email.into(),
    date_of_birth:      None,
    gender:             None,
    country_id:         None,
    address:            None,
    receive_newsletter: false,
  }
}

// ─── Persons ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_person() {
  let s = store().await;

  let person = s.add_person(input("Kweku", "kweku@x.com")).await.unwrap();
  assert_eq!(person.name, "Kweku");

  let fetched = s.get_person(person.person_id).await.unwrap();
  assert!(fetched.is_some());
  let fetched = fetched.unwrap();
  assert_eq!(fetched.person_id, person.person_id);
  assert_eq!(fetched.email, "kweku@x.com");
}

#[tokio::test]
async fn get_person_missing_returns_none() {
  let s = store().await;
  let result = s.get_person(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn all_fields_roundtrip() {
  let s = store().await;
  let country = s.add_country("Ghana").await.unwrap();

  let mut i = input("Kweku", "kweku@x.com");
  i.date_of_birth = NaiveDate::from_ymd_opt(1995, 11, 29);
  i.gender = Some(Gender::Male);
  i.country_id = Some(country.country_id);
  i.address = Some("1660 Topping Ave".into());
  i.receive_newsletter = true;

  let person = s.add_person(i).await.unwrap();
  let fetched = s.get_person(person.person_id).await.unwrap().unwrap();

  assert_eq!(fetched.date_of_birth, NaiveDate::from_ymd_opt(1995, 11, 29));
  assert_eq!(fetched.gender, Some(Gender::Male));
  assert_eq!(fetched.country_id, Some(country.country_id));
  assert_eq!(fetched.address.as_deref(), Some("1660 Topping Ave"));
  assert!(fetched.receive_newsletter);
}

#[tokio::test]
async fn list_persons_all() {
  let s = store().await;
  s.add_person(input("A", "a@x.com")).await.unwrap();
  s.add_person(input("B", "b@x.com")).await.unwrap();
  s.add_person(input("C", "c@x.com")).await.unwrap();

  let all = s.list_persons().await.unwrap();
  assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn update_person_replaces_all_fields() {
  let s = store().await;
  let person = s.add_person(input("Old", "old@x.com")).await.unwrap();

  let mut replacement = input("New", "new@x.com");
  replacement.address = Some("Milton Keynes".into());
  let updated = s
    .update_person(person.person_id, replacement)
    .await
    .unwrap();
  assert_eq!(updated.name, "New");

  let fetched = s.get_person(person.person_id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "New");
  assert_eq!(fetched.email, "new@x.com");
  assert_eq!(fetched.address.as_deref(), Some("Milton Keynes"));
}

#[tokio::test]
async fn update_unknown_person_errors() {
  let s = store().await;
  let err = s
    .update_person(Uuid::new_v4(), input("X", "x@x.com"))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(roster_core::Error::PersonNotFound(_))
  ));
}

#[tokio::test]
async fn delete_person_true_then_false() {
  let s = store().await;
  let person = s.add_person(input("Gone", "gone@x.com")).await.unwrap();

  assert!(s.delete_person(person.person_id).await.unwrap());
  assert!(!s.delete_person(person.person_id).await.unwrap());
  assert!(s.get_person(person.person_id).await.unwrap().is_none());
}

// ─── Country directory ───────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_country() {
  let s = store().await;
  let country = s.add_country("USA").await.unwrap();

  let fetched = s.get_country(country.country_id).await.unwrap();
  assert_eq!(fetched, Some(country));
}

#[tokio::test]
async fn get_country_missing_returns_none() {
  let s = store().await;
  let result = s.get_country(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn duplicate_country_name_rejected_once() {
  let s = store().await;
  s.add_country("USA").await.unwrap();

  let err = s.add_country("USA").await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(roster_core::Error::DuplicateCountryName(_))
  ));

  // Exactly one USA entry survives both calls.
  let all = s.list_countries().await.unwrap();
  assert_eq!(all.iter().filter(|c| c.name == "USA").count(), 1);
}

#[test]
fn unique_violation_detection() {
  let unique = tokio_rusqlite::Error::Rusqlite(
    rusqlite::Error::SqliteFailure(
      rusqlite::ffi::Error {
        code:          rusqlite::ErrorCode::ConstraintViolation,
        extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
      },
      Some("UNIQUE constraint failed: countries.name".into()),
    ),
  );
  assert!(crate::store::is_unique_violation(&unique));

  // Other constraint failures stay backend faults.
  let not_null = tokio_rusqlite::Error::Rusqlite(
    rusqlite::Error::SqliteFailure(
      rusqlite::ffi::Error {
        code:          rusqlite::ErrorCode::ConstraintViolation,
        extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL,
      },
      None,
    ),
  );
  assert!(!crate::store::is_unique_violation(&not_null));

  let closed = tokio_rusqlite::Error::ConnectionClosed;
  assert!(!crate::store::is_unique_violation(&closed));
}

#[tokio::test]
async fn country_name_uniqueness_is_case_sensitive() {
  let s = store().await;
  s.add_country("USA").await.unwrap();
  // Different casing is a different name.
  s.add_country("usa").await.unwrap();
  assert_eq!(s.list_countries().await.unwrap().len(), 2);
}

#[tokio::test]
async fn blank_country_name_is_invalid_argument() {
  let s = store().await;
  let err = s.add_country("   ").await.unwrap_err();
  // Distinct from the duplicate-name condition.
  assert!(matches!(
    err,
    crate::Error::Core(roster_core::Error::MissingCountryName)
  ));
}

#[tokio::test]
async fn list_countries_all() {
  let s = store().await;
  for name in ["USA", "UK", "Germany", "Switzerland", "Canada"] {
    s.add_country(name).await.unwrap();
  }
  assert_eq!(s.list_countries().await.unwrap().len(), 5);
}
