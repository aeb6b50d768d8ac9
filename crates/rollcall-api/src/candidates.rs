//! Handlers for the candidate endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/candidates`    | All candidates, `party_name` resolved |
//! | `GET`    | `/candidate/:id` | `data` is `null` when the id is absent |
//! | `PUT`    | `/candidate/:id` | Body: `{"party_id": <int>}` |
//! | `POST`   | `/candidate`     | Body: `first_name`, `last_name`, `industry_connected` |
//! | `DELETE` | `/candidate/:id` | `changes` is `0` when the id is absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use rollcall_core::{
  candidate::{CandidateRecord, NewCandidate},
  store::ElectionStore,
  validate::input_check,
};
use serde_json::{Map, Value};

use crate::{
  error::ApiError,
  response::{CreateResponse, DataResponse, DeleteResponse, UpdateResponse},
};

/// Extract a required string field after [`input_check`] has passed.
/// A present-but-non-string value is reported in the same array-of-messages
/// shape as the validator's own errors.
fn require_str(body: &Map<String, Value>, field: &str) -> Result<String, ApiError> {
  body
    .get(field)
    .and_then(Value::as_str)
    .map(str::to_owned)
    .ok_or_else(|| ApiError::Validation(vec![format!("{field} must be a string")]))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /candidates`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<DataResponse<Vec<CandidateRecord>>>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let candidates = store
    .list_candidates()
    .await
    .map_err(ApiError::store_list)?;
  Ok(Json(DataResponse {
    message: "success",
    data:    candidates,
  }))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /candidate/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<DataResponse<Option<CandidateRecord>>>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let candidate = store.get_candidate(id).await.map_err(ApiError::store)?;
  Ok(Json(DataResponse {
    message: "success",
    data:    candidate,
  }))
}

// ─── Update party ────────────────────────────────────────────────────────────

/// `PUT /candidate/:id` — body: `{"party_id": <int>}`.
///
/// The only mutation candidates support. `changes` is `0` when the id
/// does not exist (not an error).
pub async fn update_party<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<Map<String, Value>>,
) -> Result<Json<UpdateResponse>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let errors = input_check(&body, &["party_id"]);
  if !errors.is_empty() {
    return Err(ApiError::Validation(errors));
  }

  let party_id = body
    .get("party_id")
    .and_then(Value::as_i64)
    .ok_or_else(|| {
      ApiError::Validation(vec!["party_id must be a number".to_string()])
    })?;

  let outcome = store
    .set_candidate_party(id, party_id)
    .await
    .map_err(ApiError::store)?;

  Ok(Json(UpdateResponse {
    message: "success",
    data:    Value::Object(body),
    changes: outcome.rows_affected,
  }))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /candidate` — body: `first_name`, `last_name`, `industry_connected`.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Map<String, Value>>,
) -> Result<Json<CreateResponse>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let errors =
    input_check(&body, &["first_name", "last_name", "industry_connected"]);
  if !errors.is_empty() {
    return Err(ApiError::Validation(errors));
  }

  let input = NewCandidate {
    first_name:         require_str(&body, "first_name")?,
    last_name:          require_str(&body, "last_name")?,
    // input_check guarantees a boolean here.
    industry_connected: body
      .get("industry_connected")
      .and_then(Value::as_bool)
      .unwrap_or_default(),
  };

  let outcome = store
    .create_candidate(input)
    .await
    .map_err(ApiError::store)?;

  Ok(Json(CreateResponse {
    message: "candidate created",
    data:    Value::Object(body),
    id:      outcome.inserted_id,
  }))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /candidate/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let outcome = store.delete_candidate(id).await.map_err(ApiError::store)?;
  Ok(Json(DeleteResponse {
    message: "candidate deleted",
    changes: outcome.rows_affected,
  }))
}
