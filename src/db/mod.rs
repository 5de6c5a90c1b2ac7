//! SQLite-based local state for registered users.
//!
//! The database lives at `~/.veriprint/veriprint.db` and is the only
//! persistent store in the system. One table, `users`, holds everything;
//! the schema is applied through the numbered-migration framework in
//! `crate::migrations` so it is safe to open on every startup.

use std::path::PathBuf;

use rusqlite::Connection;

pub mod types;
pub mod users;
pub use types::*;

/// SQLite connection wrapper for the users table.
///
/// This is intentionally NOT `Clone` or `Sync`. It is held behind a
/// `std::sync::Mutex` in `AppState` so that synchronous calls from the
/// presentation layer can access it safely.
pub struct UserDb {
    conn: Connection,
}

impl UserDb {
    /// Borrow the underlying connection for ad-hoc queries.
    pub fn conn_ref(&self) -> &Connection {
        &self.conn
    }

    /// Open (or create) the database at `~/.veriprint/veriprint.db` and
    /// apply pending migrations.
    pub fn open() -> Result<Self, DbError> {
        let path = Self::db_path()?;
        Self::open_at(path)
    }

    /// Open a database at an explicit path. Used for config-overridden
    /// locations and for testing.
    pub fn open_at(path: PathBuf) -> Result<Self, DbError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(DbError::CreateDir)?;
            }
        }

        let conn = Connection::open(&path)?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        // Run schema migrations (idempotent)
        crate::migrations::run_migrations(&conn).map_err(DbError::Migration)?;

        Ok(Self { conn })
    }

    /// Resolve the default database path: `~/.veriprint/veriprint.db`.
    fn db_path() -> Result<PathBuf, DbError> {
        let home = dirs::home_dir().ok_or(DbError::HomeDirNotFound)?;
        Ok(home.join(".veriprint").join("veriprint.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_at_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("veriprint.db");
        let db = UserDb::open_at(path.clone()).expect("open");
        assert!(path.exists());
        drop(db);

        // Reopening an existing database is a no-op for the schema
        UserDb::open_at(path).expect("reopen");
    }
}
