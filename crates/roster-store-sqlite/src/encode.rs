//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings, calendar dates as
//! `YYYY-MM-DD`, gender as a lowercase code, and the newsletter flag as a
//! SQLite integer.

use chrono::NaiveDate;
use roster_core::{
  country::Country,
  person::{Gender, Person},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Gender ───────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> &'static str {
  match g {
    Gender::Male => "male",
    Gender::Female => "female",
    Gender::Other => "other",
  }
}

pub fn decode_gender(s: &str) -> Result<Gender> {
  match s {
    "male" => Ok(Gender::Male),
    "female" => Ok(Gender::Female),
    "other" => Ok(Gender::Other),
    unknown => Err(Error::DateParse(format!("unknown gender: {unknown:?}"))),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `persons` row.
pub struct RawPerson {
  pub person_id:          String,
  pub name:               String,
  pub email:              String,
  pub date_of_birth:      Option<String>,
  pub gender:             Option<String>,
  pub country_id:         Option<String>,
  pub address:            Option<String>,
  pub receive_newsletter: bool,
}

impl RawPerson {
  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      person_id:          decode_uuid(&self.person_id)?,
      name:               self.name,
      email:              self.email,
      date_of_birth:      self
        .date_of_birth
        .as_deref()
        .map(decode_date)
        .transpose()?,
      gender:             self.gender.as_deref().map(decode_gender).transpose()?,
      country_id:         self.country_id.as_deref().map(decode_uuid).transpose()?,
      address:            self.address,
      receive_newsletter: self.receive_newsletter,
    })
  }
}

/// Raw strings read directly from a `countries` row.
pub struct RawCountry {
  pub country_id: String,
  pub name:       String,
}

impl RawCountry {
  pub fn into_country(self) -> Result<Country> {
    Ok(Country {
      country_id: decode_uuid(&self.country_id)?,
      name:       self.name,
    })
  }
}
