//! JSON REST API for roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::store::PersonStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(store.clone()))
//! ```

pub mod config;
pub mod countries;
pub mod error;
pub mod export;
pub mod persons;

use std::sync::Arc;

use axum::{
  Router,
  routing::get,
};
use roster_core::store::PersonStore;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PersonStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Persons
    .route("/persons", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/persons/{id}",
      get(persons::get_one::<S>)
        .put(persons::update::<S>)
        .delete(persons::delete::<S>),
    )
    // Exports
    .route("/persons/export/csv", get(export::csv::<S>))
    .route("/persons/export/xlsx", get(export::xlsx::<S>))
    // Country directory
    .route(
      "/countries",
      get(countries::list::<S>).post(countries::create::<S>),
    )
    .route("/countries/{id}", get(countries::get_one::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}
