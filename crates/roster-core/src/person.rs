//! Person records and the materialised read model.
//!
//! `Person` is what the store persists. `PersonView` is what every read path
//! (listing, filtering, sorting, export) operates on: the stored fields plus
//! the resolved country name and the age derived from the date of birth.
//! Derived values are never stored; they are recomputed on every read.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::country::Country;

// ─── Gender ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
  Other,
}

impl Gender {
  /// Human-facing label, used in views and exports.
  pub fn label(self) -> &'static str {
    match self {
      Self::Male => "Male",
      Self::Female => "Female",
      Self::Other => "Other",
    }
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A stored personnel record. The id is store-assigned on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
  pub person_id:          Uuid,
  pub name:               String,
  pub email:              String,
  pub date_of_birth:      Option<NaiveDate>,
  pub gender:             Option<Gender>,
  /// Not required to resolve to an existing [`Country`].
  pub country_id:         Option<Uuid>,
  pub address:            Option<String>,
  pub receive_newsletter: bool,
}

/// Input to create and update operations. Identical shape for both; the id
/// is never accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonInput {
  pub name:               String,
  pub email:              String,
  #[serde(default)]
  pub date_of_birth:      Option<NaiveDate>,
  #[serde(default)]
  pub gender:             Option<Gender>,
  #[serde(default)]
  pub country_id:         Option<Uuid>,
  #[serde(default)]
  pub address:            Option<String>,
  #[serde(default)]
  pub receive_newsletter: bool,
}

// ─── Derived age ─────────────────────────────────────────────────────────────

/// Whole years between `dob` and `today`, one less before the anniversary.
/// A date of birth in the future clamps to zero.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
  let mut years = today.year() - dob.year();
  if (today.month(), today.day()) < (dob.month(), dob.day()) {
    years -= 1;
  }
  years.max(0) as u32
}

// ─── Materialised view ───────────────────────────────────────────────────────

/// The computed read model for a person — never stored, always derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonView {
  pub person_id:          Uuid,
  pub name:               String,
  pub email:              String,
  pub date_of_birth:      Option<NaiveDate>,
  /// Derived from `date_of_birth` at materialisation time.
  pub age:                Option<u32>,
  pub gender:             Option<Gender>,
  pub country_id:         Option<Uuid>,
  /// Resolved country name; `None` when the reference is absent or orphaned.
  pub country_name:       Option<String>,
  pub address:            Option<String>,
  pub receive_newsletter: bool,
}

impl PersonView {
  /// Build the view for one person against a resolved country name.
  pub fn from_person(
    person: Person,
    country_name: Option<String>,
    today: NaiveDate,
  ) -> Self {
    let age = person.date_of_birth.map(|dob| age_on(dob, today));
    Self {
      person_id: person.person_id,
      name: person.name,
      email: person.email,
      date_of_birth: person.date_of_birth,
      age,
      gender: person.gender,
      country_id: person.country_id,
      country_name,
      address: person.address,
      receive_newsletter: person.receive_newsletter,
    }
  }
}

/// Materialise views for a batch of persons, resolving country names from
/// `countries`. Output order equals input order.
pub fn materialize(
  persons: Vec<Person>,
  countries: &[Country],
  today: NaiveDate,
) -> Vec<PersonView> {
  let by_id: HashMap<Uuid, &str> = countries
    .iter()
    .map(|c| (c.country_id, c.name.as_str()))
    .collect();

  persons
    .into_iter()
    .map(|p| {
      let name = p
        .country_id
        .and_then(|id| by_id.get(&id))
        .map(|n| n.to_string());
      PersonView::from_person(p, name, today)
    })
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
  }

  #[test]
  fn age_after_anniversary() {
    assert_eq!(age_on(d(1995, 11, 29), d(2023, 11, 30)), 28);
  }

  #[test]
  fn age_before_anniversary() {
    assert_eq!(age_on(d(1995, 11, 29), d(2023, 11, 28)), 27);
  }

  #[test]
  fn age_on_anniversary() {
    assert_eq!(age_on(d(1995, 11, 29), d(2023, 11, 29)), 28);
  }

  #[test]
  fn age_future_dob_clamps_to_zero() {
    assert_eq!(age_on(d(2030, 1, 1), d(2023, 11, 29)), 0);
  }

  #[test]
  fn materialize_resolves_country_and_age() {
    let country = Country {
      country_id: Uuid::new_v4(),
      name:       "Ghana".into(),
    };
    let person = Person {
      person_id:          Uuid::new_v4(),
      name:               "Kweku".into(),
      email:              "kweku@x.com".into(),
      date_of_birth:      Some(d(1995, 11, 29)),
      gender:             Some(Gender::Male),
      country_id:         Some(country.country_id),
      address:            None,
      receive_newsletter: true,
    };

    let views =
      materialize(vec![person], std::slice::from_ref(&country), d(2023, 11, 30));
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].country_name.as_deref(), Some("Ghana"));
    assert_eq!(views[0].age, Some(28));
  }

  #[test]
  fn materialize_orphaned_country_yields_none() {
    let person = Person {
      person_id:          Uuid::new_v4(),
      name:               "Koo Nimo".into(),
      email:              "koonimo@x.com".into(),
      date_of_birth:      None,
      gender:             None,
      country_id:         Some(Uuid::new_v4()),
      address:            None,
      receive_newsletter: false,
    };

    let views = materialize(vec![person], &[], d(2023, 11, 30));
    assert_eq!(views[0].country_name, None);
    assert_eq!(views[0].age, None);
  }
}
