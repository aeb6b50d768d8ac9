//! The `ElectionStore` trait and the structured write result.
//!
//! The trait is implemented by storage backends (e.g.
//! `rollcall-store-sqlite`). The API layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  candidate::{CandidateRecord, NewCandidate},
  party::Party,
};

// ─── Write result ────────────────────────────────────────────────────────────

/// The result of every write statement.
///
/// `rows_affected` signals whether a targeted id existed: a targeted update
/// or delete that matched no row reports `0` here rather than an error.
/// `inserted_id` is set only by inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
  pub rows_affected: u64,
  pub inserted_id:   Option<i64>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a rollcall election store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ElectionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Candidates ────────────────────────────────────────────────────────

  /// List every candidate with its party name resolved (LEFT JOIN).
  fn list_candidates(
    &self,
  ) -> impl Future<Output = Result<Vec<CandidateRecord>, Self::Error>> + Send + '_;

  /// Retrieve one candidate by id, party name resolved. Returns `None` if
  /// not found.
  fn get_candidate(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<CandidateRecord>, Self::Error>> + Send + '_;

  /// Insert a new candidate. `inserted_id` carries the store-assigned id.
  fn create_candidate(
    &self,
    input: NewCandidate,
  ) -> impl Future<Output = Result<WriteOutcome, Self::Error>> + Send + '_;

  /// Set the party affiliation of the candidate matching `id`, the only
  /// mutation candidates support. `rows_affected` is `0` when the id does
  /// not exist.
  fn set_candidate_party(
    &self,
    id: i64,
    party_id: i64,
  ) -> impl Future<Output = Result<WriteOutcome, Self::Error>> + Send + '_;

  /// Hard-delete the candidate matching `id`. `rows_affected` is `0` when
  /// the id does not exist.
  fn delete_candidate(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<WriteOutcome, Self::Error>> + Send + '_;

  // ── Parties ───────────────────────────────────────────────────────────

  /// List every party.
  fn list_parties(
    &self,
  ) -> impl Future<Output = Result<Vec<Party>, Self::Error>> + Send + '_;

  /// Retrieve one party by id. Returns `None` if not found.
  fn get_party(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Party>, Self::Error>> + Send + '_;

  /// Hard-delete the party matching `id`. Candidates referencing it keep
  /// their `party_id`; no cascade, no reassignment.
  fn delete_party(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<WriteOutcome, Self::Error>> + Send + '_;
}
