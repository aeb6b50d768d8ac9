//! [`SqliteStore`] — the SQLite implementation of [`ElectionStore`].

use std::path::Path;

use rollcall_core::{
  candidate::{CandidateRecord, NewCandidate},
  party::Party,
  store::{ElectionStore, WriteOutcome},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  schema::{DEFAULT_PARTIES, SCHEMA},
};

/// Shared SELECT for the candidate read model. The LEFT JOIN keeps
/// candidates with no party (or a dangling `party_id`) in the result set,
/// with `party_name` NULL.
const CANDIDATE_SELECT: &str = "SELECT candidates.id, candidates.first_name,
     candidates.last_name, candidates.industry_connected, candidates.party_id,
     parties.name AS party_name
   FROM candidates
   LEFT JOIN parties ON candidates.party_id = parties.id";

fn candidate_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<CandidateRecord> {
  Ok(CandidateRecord {
    id:                 row.get(0)?,
    first_name:         row.get(1)?,
    last_name:          row.get(2)?,
    industry_connected: row.get(3)?,
    party_id:           row.get(4)?,
    party_name:         row.get(5)?,
  })
}

fn party_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Party> {
  Ok(Party {
    id:   row.get(0)?,
    name: row.get(1)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A rollcall election store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a party row and return its store-assigned id.
  ///
  /// Parties have no HTTP create operation; this is the out-of-band seeding
  /// entry point used by the server's `--seed` flag and by tests.
  pub async fn seed_party(&self, name: &str) -> Result<i64> {
    let name = name.to_owned();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO parties (name) VALUES (?1)",
          rusqlite::params![name],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  /// Seed [`DEFAULT_PARTIES`] if the `parties` table is empty. Returns the
  /// number of parties inserted (zero when the table already has rows).
  pub async fn seed_default_parties(&self) -> Result<usize> {
    let inserted = self
      .conn
      .call(|conn| {
        let existing: i64 =
          conn.query_row("SELECT COUNT(*) FROM parties", [], |r| r.get(0))?;
        if existing > 0 {
          return Ok(0);
        }
        for name in DEFAULT_PARTIES {
          conn.execute(
            "INSERT INTO parties (name) VALUES (?1)",
            rusqlite::params![name],
          )?;
        }
        Ok(DEFAULT_PARTIES.len())
      })
      .await?;
    Ok(inserted)
  }
}

// ─── ElectionStore impl ──────────────────────────────────────────────────────

impl ElectionStore for SqliteStore {
  type Error = Error;

  // ── Candidates ────────────────────────────────────────────────────────────

  async fn list_candidates(&self) -> Result<Vec<CandidateRecord>> {
    let records = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(CANDIDATE_SELECT)?;
        let rows = stmt
          .query_map([], candidate_record)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(records)
  }

  async fn get_candidate(&self, id: i64) -> Result<Option<CandidateRecord>> {
    let record = self
      .conn
      .call(move |conn| {
        let sql = format!("{CANDIDATE_SELECT} WHERE candidates.id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], candidate_record)
            .optional()?,
        )
      })
      .await?;
    Ok(record)
  }

  async fn create_candidate(&self, input: NewCandidate) -> Result<WriteOutcome> {
    let outcome = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "INSERT INTO candidates (first_name, last_name, industry_connected)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![
            input.first_name,
            input.last_name,
            input.industry_connected,
          ],
        )?;
        Ok(WriteOutcome {
          rows_affected: changed as u64,
          inserted_id:   Some(conn.last_insert_rowid()),
        })
      })
      .await?;
    Ok(outcome)
  }

  async fn set_candidate_party(
    &self,
    id: i64,
    party_id: i64,
  ) -> Result<WriteOutcome> {
    let outcome = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE candidates SET party_id = ?1 WHERE id = ?2",
          rusqlite::params![party_id, id],
        )?;
        Ok(WriteOutcome {
          rows_affected: changed as u64,
          inserted_id:   None,
        })
      })
      .await?;
    Ok(outcome)
  }

  async fn delete_candidate(&self, id: i64) -> Result<WriteOutcome> {
    let outcome = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "DELETE FROM candidates WHERE id = ?1",
          rusqlite::params![id],
        )?;
        Ok(WriteOutcome {
          rows_affected: changed as u64,
          inserted_id:   None,
        })
      })
      .await?;
    Ok(outcome)
  }

  // ── Parties ───────────────────────────────────────────────────────────────

  async fn list_parties(&self) -> Result<Vec<Party>> {
    let parties = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, name FROM parties")?;
        let rows = stmt
          .query_map([], party_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(parties)
  }

  async fn get_party(&self, id: i64) -> Result<Option<Party>> {
    let party = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name FROM parties WHERE id = ?1",
              rusqlite::params![id],
              party_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(party)
  }

  async fn delete_party(&self, id: i64) -> Result<WriteOutcome> {
    let outcome = self
      .conn
      .call(move |conn| {
        let changed = conn
          .execute("DELETE FROM parties WHERE id = ?1", rusqlite::params![id])?;
        Ok(WriteOutcome {
          rows_affected: changed as u64,
          inserted_id:   None,
        })
      })
      .await?;
    Ok(outcome)
  }
}
