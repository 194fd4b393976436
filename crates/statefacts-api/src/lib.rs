//! JSON REST API for statefacts.
//!
//! Exposes an axum [`Router`] backed by the immutable state reference
//! [`Dataset`] and any [`FunFactStore`]. Transport concerns (listening,
//! trace middleware, the site-wide 404 fallback) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = statefacts_api::router(AppState { dataset, store });
//! ```

pub mod error;
pub mod funfacts;
pub mod states;

use std::sync::Arc;

use axum::{Router, routing::get};
use statefacts_core::{
  state::{Dataset, StateRecord},
  store::FunFactStore,
};

pub use error::ApiError;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all handlers. The dataset is read-only
/// after load; the store handle is cheap to clone.
#[derive(Clone)]
pub struct AppState<S: FunFactStore> {
  pub dataset: Arc<Dataset>,
  pub store:   Arc<S>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router` can be merged into any parent router regardless of
/// its own state type.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: FunFactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/states", get(states::list::<S>))
    .route("/states/{state}", get(states::get_one::<S>))
    .route("/states/{state}/capital", get(states::capital::<S>))
    .route("/states/{state}/nickname", get(states::nickname::<S>))
    .route("/states/{state}/population", get(states::population::<S>))
    .route("/states/{state}/admission", get(states::admission::<S>))
    .route(
      "/states/{state}/funfact",
      get(funfacts::random::<S>)
        .post(funfacts::add::<S>)
        .patch(funfacts::update::<S>)
        .delete(funfacts::remove::<S>),
    )
    .with_state(state)
}

// ─── Shared validation ───────────────────────────────────────────────────────

/// Validate the `{state}` path parameter against the reference dataset.
///
/// Runs before any store access. A blank parameter is a missing-input client
/// error, distinct from a non-blank code with no matching record.
pub(crate) fn lookup_state<'a>(
  dataset: &'a Dataset,
  raw: &str,
) -> Result<&'a StateRecord, ApiError> {
  if raw.trim().is_empty() {
    return Err(ApiError::BadRequest(
      "State code parameter is required".to_string(),
    ));
  }
  dataset.find(raw).ok_or_else(|| {
    ApiError::NotFound("Invalid state abbreviation parameter".to_string())
  })
}
