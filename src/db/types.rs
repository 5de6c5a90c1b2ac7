//! Shared type definitions for the database layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors specific to database operations.
///
/// Anything raised while opening the database or applying migrations is
/// fatal to startup; callers above `AppState::new` do not recover from it.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Failed to create database directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Schema migration failed: {0}")]
    Migration(String),
}

/// A row from the `users` table — one registered person.
///
/// `id` is assigned by SQLite (AUTOINCREMENT) and never supplied by the
/// caller. `fingerprint_path` stores the full path as selected; only its
/// basename is significant at verification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUser {
    pub id: i64,
    pub name: String,
    pub emp_id: String,
    pub phone: String,
    pub fingerprint_path: String,
}
