//! Tabular export encoders for roster.
//!
//! Turns an already filtered and sorted sequence of
//! [`roster_core::person::PersonView`]s into complete in-memory CSV and XLSX
//! byte buffers. Pure synchronous; no HTTP or database dependencies. Any
//! encoding fault aborts the whole export — a caller never receives a
//! truncated file.

pub mod error;
mod serialize;

pub use error::{Error, Result};
pub use serialize::{to_csv, to_xlsx};

/// Suggested download filename for the CSV export.
pub const CSV_FILENAME: &str = "persons.csv";
/// Suggested download filename for the XLSX export.
pub const XLSX_FILENAME: &str = "persons.xlsx";

/// MIME type of the CSV export.
pub const CSV_MIME: &str = "text/csv";
/// MIME type of the XLSX export.
pub const XLSX_MIME: &str =
  "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
