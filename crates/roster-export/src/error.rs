//! Error types for the roster-export encoders.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("CSV encoding error: {0}")]
  Csv(#[from] csv::Error),

  #[error("CSV buffer error: {0}")]
  CsvBuffer(String),

  #[error("XLSX encoding error: {0}")]
  Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
