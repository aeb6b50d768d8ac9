//! Handlers for the party endpoints.
//!
//! Parties are read-and-delete only; they are seeded out-of-band, so no
//! create or update operation is exposed here.
//!
//! | Method   | Path         | Notes |
//! |----------|--------------|-------|
//! | `GET`    | `/parties`   | All parties |
//! | `GET`    | `/party/:id` | `data` is `null` when the id is absent |
//! | `DELETE` | `/party/:id` | Referencing candidates are left untouched |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use rollcall_core::{party::Party, store::ElectionStore};

use crate::{
  error::ApiError,
  response::{DataResponse, DeleteResponse},
};

/// `GET /parties`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<DataResponse<Vec<Party>>>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let parties = store.list_parties().await.map_err(ApiError::store_list)?;
  Ok(Json(DataResponse {
    message: "success",
    data:    parties,
  }))
}

/// `GET /party/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<DataResponse<Option<Party>>>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let party = store.get_party(id).await.map_err(ApiError::store)?;
  Ok(Json(DataResponse {
    message: "success",
    data:    party,
  }))
}

/// `DELETE /party/:id` — referencing candidates keep their `party_id`.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError>
where
  S: ElectionStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let outcome = store.delete_party(id).await.map_err(ApiError::store)?;
  Ok(Json(DeleteResponse {
    message: "party deleted",
    changes: outcome.rows_affected,
  }))
}
