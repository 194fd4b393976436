//! SQL schema for the fun-fact store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One document per state. The facts column holds the whole ordered list as
-- a JSON array; reads and writes are always whole-document.
CREATE TABLE IF NOT EXISTS funfact_docs (
    state_code TEXT PRIMARY KEY,          -- 2-letter uppercase postal code
    facts      TEXT NOT NULL DEFAULT '[]' -- JSON array of fact strings
);

PRAGMA user_version = 1;
";
