//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use roster_core::{
  country::Country,
  person::{Person, PersonInput},
  store::PersonStore,
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{
    RawCountry, RawPerson, encode_date, encode_gender, encode_uuid,
  },
  schema::SCHEMA,
};

const PERSON_COLUMNS: &str = "person_id, name, email, date_of_birth, gender, \
                              country_id, address, receive_newsletter";

/// Whether a backend error is a UNIQUE-constraint violation.
pub(crate) fn is_unique_violation(e: &tokio_rusqlite::Error) -> bool {
  matches!(
    e,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(err, _))
      if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

fn raw_person_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawPerson> {
  Ok(RawPerson {
    person_id:          row.get(0)?,
    name:               row.get(1)?,
    email:              row.get(2)?,
    date_of_birth:      row.get(3)?,
    gender:             row.get(4)?,
    country_id:         row.get(5)?,
    address:            row.get(6)?,
    receive_newsletter: row.get(7)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Column values for an INSERT or UPDATE, in `PERSON_COLUMNS` order after
  /// the id.
  fn person_params(
    input: &PersonInput,
  ) -> (
    Option<String>,
    Option<&'static str>,
    Option<String>,
    Option<String>,
  ) {
    (
      input.date_of_birth.map(encode_date),
      input.gender.map(encode_gender),
      input.country_id.map(encode_uuid),
      input.address.clone(),
    )
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  // ── Persons ───────────────────────────────────────────────────────────────

  async fn add_person(&self, input: PersonInput) -> Result<Person> {
    let person = Person {
      person_id:          Uuid::new_v4(),
      name:               input.name.clone(),
      email:              input.email.clone(),
      date_of_birth:      input.date_of_birth,
      gender:             input.gender,
      country_id:         input.country_id,
      address:            input.address.clone(),
      receive_newsletter: input.receive_newsletter,
    };

    let id_str = encode_uuid(person.person_id);
    let (dob_str, gender_str, country_str, address) =
      Self::person_params(&input);
    let name = input.name;
    let email = input.email;
    let newsletter = input.receive_newsletter;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO persons (
             person_id, name, email, date_of_birth, gender,
             country_id, address, receive_newsletter
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            name,
            email,
            dob_str,
            gender_str,
            country_str,
            address,
            newsletter,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(person)
  }

  async fn get_person(&self, id: Uuid) -> Result<Option<Person>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PERSON_COLUMNS} FROM persons WHERE person_id = ?1"),
              rusqlite::params![id_str],
              raw_person_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn list_persons(&self) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PERSON_COLUMNS} FROM persons"))?;
        let rows = stmt
          .query_map([], raw_person_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn update_person(&self, id: Uuid, input: PersonInput) -> Result<Person> {
    let id_str = encode_uuid(id);
    let (dob_str, gender_str, country_str, address) =
      Self::person_params(&input);
    let name = input.name.clone();
    let email = input.email.clone();
    let newsletter = input.receive_newsletter;

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE persons SET
             name = ?2, email = ?3, date_of_birth = ?4, gender = ?5,
             country_id = ?6, address = ?7, receive_newsletter = ?8
           WHERE person_id = ?1",
          rusqlite::params![
            id_str,
            name,
            email,
            dob_str,
            gender_str,
            country_str,
            address,
            newsletter,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(roster_core::Error::PersonNotFound(id).into());
    }

    Ok(Person {
      person_id:          id,
      name:               input.name,
      email:              input.email,
      date_of_birth:      input.date_of_birth,
      gender:             input.gender,
      country_id:         input.country_id,
      address:            input.address,
      receive_newsletter: input.receive_newsletter,
    })
  }

  async fn delete_person(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM persons WHERE person_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }

  // ── Country directory ─────────────────────────────────────────────────────

  async fn add_country(&self, name: &str) -> Result<Country> {
    if name.trim().is_empty() {
      return Err(roster_core::Error::MissingCountryName.into());
    }

    // Check-then-insert; the UNIQUE constraint catches concurrent races.
    let name_owned = name.to_owned();
    let exists: bool = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM countries WHERE name = ?1",
              rusqlite::params![name_owned],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    if exists {
      return Err(
        roster_core::Error::DuplicateCountryName(name.to_owned()).into(),
      );
    }

    let country = Country {
      country_id: Uuid::new_v4(),
      name:       name.to_owned(),
    };

    let id_str = encode_uuid(country.country_id);
    let name_owned = country.name.clone();
    let inserted = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO countries (country_id, name) VALUES (?1, ?2)",
          rusqlite::params![id_str, name_owned],
        )?;
        Ok(())
      })
      .await;

    // A writer that lost the check-then-insert race hits the UNIQUE
    // constraint; report it as the duplicate-name condition, not a raw
    // database fault.
    if let Err(e) = inserted {
      if is_unique_violation(&e) {
        return Err(
          roster_core::Error::DuplicateCountryName(name.to_owned()).into(),
        );
      }
      return Err(e.into());
    }

    Ok(country)
  }

  async fn get_country(&self, id: Uuid) -> Result<Option<Country>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawCountry> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT country_id, name FROM countries WHERE country_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawCountry {
                  country_id: row.get(0)?,
                  name:       row.get(1)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawCountry::into_country).transpose()
  }

  async fn list_countries(&self) -> Result<Vec<Country>> {
    let raws: Vec<RawCountry> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT country_id, name FROM countries")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawCountry {
              country_id: row.get(0)?,
              name:       row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCountry::into_country).collect()
  }
}
