//! SQL schema for the folio SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS clients (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    active      INTEGER NOT NULL,   -- 0 | 1
    created_at  TEXT NOT NULL       -- ISO 8601 UTC; server-assigned
);

-- Assets are write-once: INSERT and DELETE only, never UPDATE.
-- Deleting a client removes its assets via the cascade.
CREATE TABLE IF NOT EXISTS assets (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    value       REAL NOT NULL,
    client_id   INTEGER NOT NULL REFERENCES clients(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS assets_client_idx ON assets(client_id);

PRAGMA user_version = 1;
";
