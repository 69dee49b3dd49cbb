//! Request validation — an ordered rule list, evaluated first-fail.
//!
//! Each rule is a `(field, predicate, message)` triple. Rules run in
//! declaration order and the first violation is surfaced as
//! [`Error::Validation`]; passing input succeeds silently. The same rules
//! gate both create and update.

use crate::{Error, Result, person::PersonInput};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const ADDRESS_MAX: usize = 200;

type Rule = (&'static str, fn(&PersonInput) -> bool, &'static str);

/// Minimal plausibility check: one `@` with a non-empty local part and a
/// dotted, non-empty domain. Full RFC 5322 parsing is out of scope.
fn plausible_email(s: &str) -> bool {
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && !domain.is_empty()
    && domain.contains('.')
    && !domain.starts_with('.')
    && !domain.ends_with('.')
}

const RULES: &[Rule] = &[
  (
    "PersonName",
    |p| !p.name.trim().is_empty(),
    "person name can't be blank",
  ),
  (
    "PersonName",
    |p| p.name.chars().count() <= NAME_MAX,
    "person name is too long",
  ),
  (
    "Email",
    |p| !p.email.trim().is_empty(),
    "email can't be blank",
  ),
  (
    "Email",
    |p| p.email.chars().count() <= EMAIL_MAX,
    "email is too long",
  ),
  (
    "Email",
    |p| plausible_email(&p.email),
    "email should be a valid email address",
  ),
  (
    "Address",
    |p| {
      p.address
        .as_deref()
        .is_none_or(|a| a.chars().count() <= ADDRESS_MAX)
    },
    "address is too long",
  ),
];

/// Check `input` against every rule in declaration order, failing on the
/// first violation.
pub fn validate(input: &PersonInput) -> Result<()> {
  for &(field, predicate, message) in RULES {
    if !predicate(input) {
      return Err(Error::Validation { field, message });
    }
  }
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
