//! Country — the small reference directory persons point into.
//!
//! Countries are immutable once created; there is no update or delete. Name
//! uniqueness is checked at add time (case-sensitive exact match) and backed
//! by a UNIQUE constraint in the SQLite schema.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference-data entry. A person's `country_id` points here, but is not
/// required to resolve — orphaned references read back as "no country".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub country_id: Uuid,
  pub name:       String,
}
