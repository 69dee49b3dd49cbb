//! Core types for the roster personnel store: the domain model, the pure
//! query engine (filter/sort), request validation, and the `PersonStore`
//! storage trait.
//!
//! Deliberately free of HTTP and database dependencies; every other crate
//! in the workspace depends on this one.

// Store trait methods are declared as `impl Future + Send`; silence the
// advisory lint for backends that implement them with `async fn`.
#![allow(async_fn_in_trait)]

pub mod country;
pub mod error;
pub mod person;
pub mod query;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
