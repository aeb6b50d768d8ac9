//! SQL schema for the rollcall SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `candidates.party_id` is intentionally not an enforced foreign key:
/// deleting a party leaves referencing candidates untouched, and the
/// dangling id resolves to a NULL `party_name` through the LEFT JOIN.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS parties (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS candidates (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name         TEXT NOT NULL,
    last_name          TEXT NOT NULL,
    industry_connected INTEGER NOT NULL,   -- boolean stored as 0/1
    party_id           INTEGER             -- unenforced reference to parties.id
);

CREATE INDEX IF NOT EXISTS candidates_party_idx ON candidates(party_id);

PRAGMA user_version = 1;
";

/// Parties inserted by out-of-band seeding when the table is empty.
pub const DEFAULT_PARTIES: &[&str] =
  &["Republican", "Democrat", "Independent", "Libertarian", "Green"];
