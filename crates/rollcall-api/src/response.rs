//! Success-response envelopes.
//!
//! Every successful operation returns HTTP 200 with a `message` field;
//! reads add `data`, writes add `changes` and/or the inserted `id`.

use serde::Serialize;
use serde_json::Value;

/// Envelope for reads: the full collection, or a single record. For a
/// targeted read, `data` is `null` when the id does not exist (a soft
/// miss, not an error).
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
  pub message: &'static str,
  pub data:    T,
}

/// Envelope for the candidate-party update: echoes the accepted body and
/// reports the row-mutation count (`0` when the id did not exist).
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
  pub message: &'static str,
  pub data:    Value,
  pub changes: u64,
}

/// Envelope for candidate creation: echoes the accepted body and carries
/// the store-assigned id.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
  pub message: &'static str,
  pub data:    Value,
  pub id:      Option<i64>,
}

/// Envelope for deletes: the row-mutation count signals whether the
/// targeted id existed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
  pub message: &'static str,
  pub changes: u64,
}
