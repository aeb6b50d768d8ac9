//! Party — the entity candidates affiliate with.
//!
//! Parties are seeded out-of-band; the HTTP surface exposes no create or
//! update operation for them.

use serde::{Deserialize, Serialize};

/// A row in the `parties` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
  pub id:   i64,
  pub name: String,
}
