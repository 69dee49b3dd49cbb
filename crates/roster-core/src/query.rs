//! The person query engine — field-keyed filtering and sorting.
//!
//! Both operations are pure: they take an already-materialised sequence of
//! [`PersonView`]s and return a new one without touching the store. Field
//! keys arrive as strings from the HTTP layer; unknown keys make either
//! operation the identity function rather than an error.

use std::cmp::Ordering;

use crate::person::PersonView;

// ─── Field keys ──────────────────────────────────────────────────────────────

/// The attributes a caller can filter or sort by. Parsing is an explicit
/// lookup, not reflection; the strings match the exported column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
  PersonName,
  Email,
  DateOfBirth,
  Gender,
  Address,
  CountryName,
  Age,
}

impl PersonField {
  /// Parse a field key. `None` means "unrecognised" and callers treat the
  /// whole operation as a pass-through.
  pub fn parse(key: &str) -> Option<Self> {
    match key {
      "PersonName" => Some(Self::PersonName),
      "Email" => Some(Self::Email),
      "DateOfBirth" => Some(Self::DateOfBirth),
      "Gender" => Some(Self::Gender),
      "Address" => Some(Self::Address),
      "CountryName" => Some(Self::CountryName),
      "Age" => Some(Self::Age),
      _ => None,
    }
  }

  /// Textual rendering of this field on a view, as used by the filter.
  /// `None` when the underlying value is absent. Fields with no filterable
  /// text (Age, CountryName is sort-only) are excluded by [`filter`].
  fn filter_text(self, view: &PersonView) -> Option<String> {
    match self {
      Self::PersonName => Some(view.name.clone()),
      Self::Email => Some(view.email.clone()),
      Self::DateOfBirth => {
        view.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string())
      }
      Self::Gender => view.gender.map(|g| g.label().to_string()),
      Self::Address => view.address.clone(),
      Self::CountryName | Self::Age => None,
    }
  }
}

// ─── Sort direction ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending,
}

impl SortDirection {
  /// Parse `asc`/`desc` in any casing; anything else is ascending.
  pub fn parse(s: &str) -> Self {
    if s.eq_ignore_ascii_case("desc") || s.eq_ignore_ascii_case("descending") {
      Self::Descending
    } else {
      Self::Ascending
    }
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Keep the views whose `field_key` rendering contains `search`,
/// case-insensitively. An empty or unrecognised key, or an empty search
/// string, returns the input unchanged. A view whose target field is absent
/// never matches a non-empty search. Output order equals input order.
pub fn filter(
  views: Vec<PersonView>,
  field_key: &str,
  search: &str,
) -> Vec<PersonView> {
  if search.is_empty() {
    return views;
  }
  let Some(field) = PersonField::parse(field_key) else {
    return views;
  };
  // Only these fields participate in filtering; the rest pass through.
  if !matches!(
    field,
    PersonField::PersonName
      | PersonField::Email
      | PersonField::DateOfBirth
      | PersonField::Gender
      | PersonField::Address
  ) {
    return views;
  }

  let needle = search.to_lowercase();
  views
    .into_iter()
    .filter(|v| {
      field
        .filter_text(v)
        .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
    .collect()
}

// ─── Sort ────────────────────────────────────────────────────────────────────

/// Case-insensitive comparison of optional text; absent sorts as minimum.
fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
  match (a, b) {
    (None, None) => Ordering::Equal,
    (None, Some(_)) => Ordering::Less,
    (Some(_), None) => Ordering::Greater,
    (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
  }
}

/// Order the views by `field_key` in the given direction. An empty or
/// unrecognised key returns the input unchanged. The sort is stable in both
/// directions: descending reverses the comparator, never the sequence, so
/// equal keys keep their input order.
pub fn sort(
  views: Vec<PersonView>,
  field_key: &str,
  direction: SortDirection,
) -> Vec<PersonView> {
  let Some(field) = PersonField::parse(field_key) else {
    return views;
  };
  // Gender is not a sort key; treat it like an unrecognised one.
  if field == PersonField::Gender {
    return views;
  }

  let key_cmp = |a: &PersonView, b: &PersonView| -> Ordering {
    match field {
      PersonField::PersonName => {
        cmp_text(Some(a.name.as_str()), Some(b.name.as_str()))
      }
      PersonField::Email => {
        cmp_text(Some(a.email.as_str()), Some(b.email.as_str()))
      }
      PersonField::Address => cmp_text(a.address.as_deref(), b.address.as_deref()),
      PersonField::CountryName => {
        cmp_text(a.country_name.as_deref(), b.country_name.as_deref())
      }
      PersonField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
      PersonField::Age => a.age.cmp(&b.age),
      // Excluded above.
      PersonField::Gender => Ordering::Equal,
    }
  };

  let mut sorted = views;
  match direction {
    SortDirection::Ascending => sorted.sort_by(key_cmp),
    SortDirection::Descending => sorted.sort_by(|a, b| key_cmp(b, a)),
  }
  sorted
}

// ─── Tests ───────────────────────────────────────────────────────────────────
