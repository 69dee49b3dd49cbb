//! SQL schema for the roster SQLite store.
//!
//! Applied at connection startup; `PRAGMA user_version` marks the schema
//! revision so later migrations can gate on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Reference data; rows are never updated or deleted.
-- The UNIQUE constraint backstops the check-then-insert in add_country.
CREATE TABLE IF NOT EXISTS countries (
    country_id  TEXT PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS persons (
    person_id          TEXT PRIMARY KEY,
    name               TEXT NOT NULL,
    email              TEXT NOT NULL,
    date_of_birth      TEXT,            -- ISO 8601 calendar date or NULL
    gender             TEXT,            -- 'male' | 'female' | 'other' | NULL
    country_id         TEXT,            -- may be orphaned; no FK on purpose
    address            TEXT,
    receive_newsletter INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS persons_country_idx ON persons(country_id);

PRAGMA user_version = 1;
";
