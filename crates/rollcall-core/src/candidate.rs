//! Candidate types — the central records of the rollcall store.

use serde::{Deserialize, Serialize};

/// The read model for a candidate: the row's own columns plus the party
/// name resolved by a LEFT JOIN against `parties`.
///
/// `id` is store-assigned and immutable once created; `party_id` is the
/// only field mutable after creation (via the update operation).
/// `party_name` is `None` when the candidate has no party, or when its
/// `party_id` references a party that has since been deleted (the dangling
/// reference is tolerated; the join is LEFT JOIN).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
  pub id:                 i64,
  pub first_name:         String,
  pub last_name:          String,
  pub industry_connected: bool,
  pub party_id:           Option<i64>,
  pub party_name:         Option<String>,
}

/// Input to [`crate::store::ElectionStore::create_candidate`].
/// `id` is always assigned by the store. A new candidate starts with no
/// party; affiliation is set afterwards via the update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
  pub first_name:         String,
  pub last_name:          String,
  pub industry_connected: bool,
}
