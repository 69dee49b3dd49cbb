//! SQLite backend for the roster personnel store.
//!
//! All database access goes through [`tokio_rusqlite`], which runs each
//! statement on a dedicated thread so the async runtime never blocks.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
