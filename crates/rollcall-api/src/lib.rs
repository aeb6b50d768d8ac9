//! JSON REST API for rollcall.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rollcall_core::store::ElectionStore`]. Transport, configuration, and
//! process lifecycle are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rollcall_api::api_router(store.clone()))
//! ```

pub mod candidates;
pub mod error;
pub mod parties;
pub mod response;

use std::sync::Arc;

use axum::{
  Router,
  http::StatusCode,
  routing::{get, post},
};
use rollcall_core::store::ElectionStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. A known path hit with the wrong method falls
/// through to the same empty 404 as an unknown path.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ElectionStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Candidates
    .route("/candidates", get(candidates::list::<S>))
    .route("/candidate", post(candidates::create::<S>))
    .route(
      "/candidate/{id}",
      get(candidates::get_one::<S>)
        .put(candidates::update_party::<S>)
        .delete(candidates::delete_one::<S>),
    )
    // Parties
    .route("/parties", get(parties::list::<S>))
    .route(
      "/party/{id}",
      get(parties::get_one::<S>).delete(parties::delete_one::<S>),
    )
    .method_not_allowed_fallback(not_found)
    .with_state(store)
}

async fn not_found() -> StatusCode { StatusCode::NOT_FOUND }

#[cfg(test)]
mod tests;
