//! Queries against the `users` table.

use rusqlite::params;

use super::{DbError, DbUser, UserDb};

impl DbError {
    /// True when the underlying SQLite error is a constraint violation.
    /// The only constraint on `users` is the UNIQUE index on `emp_id`, so
    /// this is how a duplicate employee ID surfaces from an insert.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::Sqlite(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

impl UserDb {
    /// Insert a new user row and return it with the freshly assigned `id`.
    ///
    /// The UNIQUE constraint on `emp_id` makes the insert all-or-nothing:
    /// a duplicate employee ID fails the statement and leaves the table
    /// unchanged.
    pub fn insert_user(
        &self,
        name: &str,
        emp_id: &str,
        phone: &str,
        fingerprint_path: &str,
    ) -> Result<DbUser, DbError> {
        self.conn.execute(
            "INSERT INTO users (name, emp_id, phone, fingerprint_path)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, emp_id, phone, fingerprint_path],
        )?;

        Ok(DbUser {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            emp_id: emp_id.to_string(),
            phone: phone.to_string(),
            fingerprint_path: fingerprint_path.to_string(),
        })
    }

    /// Load every registered user in insertion order.
    ///
    /// SQLite does not guarantee row order without an ORDER BY, and the
    /// verification scan's first-match semantics depend on it, so order by
    /// the AUTOINCREMENT key explicitly.
    pub fn list_users(&self) -> Result<Vec<DbUser>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, emp_id, phone, fingerprint_path
             FROM users
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DbUser {
                id: row.get(0)?,
                name: row.get(1)?,
                emp_id: row.get(2)?,
                phone: row.get(3)?,
                fingerprint_path: row.get(4)?,
            })
        })?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    }

    /// Count registered users. Cheaper than `list_users` when only the
    /// total matters (e.g. asserting no mutation happened).
    pub fn count_users(&self) -> Result<i64, DbError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, UserDb) {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = UserDb::open_at(dir.path().join("test.db")).expect("open");
        (dir, db)
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let (_dir, db) = test_db();

        let a = db
            .insert_user("Alice", "E100", "555-1234", "/home/u/alice.png")
            .expect("insert");
        let b = db
            .insert_user("Bob", "E101", "555-5678", "/home/u/bob.png")
            .expect("insert");

        assert!(a.id > 0);
        assert!(b.id > a.id);
        assert_eq!(a.name, "Alice");
        assert_eq!(a.emp_id, "E100");
    }

    #[test]
    fn test_duplicate_emp_id_is_constraint_violation() {
        let (_dir, db) = test_db();

        db.insert_user("Alice", "E100", "555-1234", "/a.png")
            .expect("first insert");
        let err = db
            .insert_user("Mallory", "E100", "555-0000", "/m.png")
            .expect_err("duplicate emp_id must fail");

        assert!(err.is_constraint_violation());
        // All-or-nothing: only the first row made it in
        assert_eq!(db.count_users().expect("count"), 1);
        assert_eq!(db.list_users().expect("list")[0].name, "Alice");
    }

    #[test]
    fn test_list_users_returns_insertion_order() {
        let (_dir, db) = test_db();

        for (i, name) in ["First", "Second", "Third"].into_iter().enumerate() {
            db.insert_user(name, &format!("E{i}"), "555", "/fp.png")
                .expect("insert");
        }

        let users = db.list_users().expect("list");
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }
}
