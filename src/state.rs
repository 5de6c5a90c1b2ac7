//! Application state: the context object handed to the presentation layer.
//!
//! The presentation layer (forms, dialogs, file pickers) owns one
//! `AppState` and calls in synchronously once the operator's input is
//! finalized. There is no process-wide singleton and no "currently
//! selected file" living here — selections arrive as arguments.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::db::{DbError, DbUser, UserDb};
use crate::error::RegisterError;
use crate::types::{Config, RegistrationInput, VerifyOutcome};

/// Shared application state. Construction opens (or creates) the
/// database and applies migrations; failure there is fatal to startup.
pub struct AppState {
    pub config: Config,
    pub db: Mutex<UserDb>,
}

impl AppState {
    pub fn new() -> Result<Self, DbError> {
        let config = load_config().unwrap_or_else(|e| {
            log::warn!("Config unavailable, using defaults: {e}");
            Config::default()
        });
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self, DbError> {
        let db = match &config.db_path {
            Some(path) => UserDb::open_at(PathBuf::from(path))?,
            None => UserDb::open()?,
        };

        Ok(Self {
            config,
            db: Mutex::new(db),
        })
    }

    /// Register a new user with the configured fingerprint policy.
    pub fn register_user(&self, input: &RegistrationInput) -> Result<DbUser, RegisterError> {
        // Recover the guard on poison; the connection itself is still valid
        let db = self.db.lock().unwrap_or_else(PoisonError::into_inner);
        crate::registry::register_user(&db, input, self.config.fingerprint_policy())
    }

    /// Verify a presented fingerprint image path.
    pub fn verify_fingerprint(&self, selected_path: Option<&str>) -> VerifyOutcome {
        let db = self.db.lock().unwrap_or_else(PoisonError::into_inner);
        crate::verify::verify_fingerprint(&db, selected_path)
    }
}

/// Load configuration from `~/.veriprint/config.json`.
///
/// A missing file is not an error — every field has a default. Unreadable
/// or malformed JSON is reported so a typo doesn't silently flip policy.
pub fn load_config() -> Result<Config, String> {
    let home = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home.join(".veriprint").join("config.json");

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content =
        fs::read_to_string(&config_path).map_err(|e| format!("Failed to read config: {}", e))?;

    serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VerifyOutcome;

    fn test_state(require_fingerprint: bool) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            db_path: Some(dir.path().join("test.db").to_string_lossy().into_owned()),
            require_fingerprint,
        };
        let state = AppState::with_config(config).expect("state");
        (dir, state)
    }

    #[test]
    fn test_register_then_verify_through_state() {
        let (_dir, state) = test_state(true);

        state
            .register_user(&RegistrationInput {
                name: "Alice".to_string(),
                emp_id: "E100".to_string(),
                phone: "555-1234".to_string(),
                fingerprint_path: Some("/home/u/alice.png".to_string()),
            })
            .expect("register");

        match state.verify_fingerprint(Some("/tmp/alice.png")) {
            VerifyOutcome::Granted { name, emp_id, .. } => {
                assert_eq!(name, "Alice");
                assert_eq!(emp_id, "E100");
            }
            other => panic!("expected Granted, got {other:?}"),
        }

        assert!(matches!(
            state.verify_fingerprint(Some("/tmp/bob.png")),
            VerifyOutcome::Denied { .. }
        ));
    }

    #[test]
    fn test_state_applies_configured_policy() {
        let (_dir, state) = test_state(false);

        // Optional policy: no fingerprint selection required
        state
            .register_user(&RegistrationInput {
                name: "Bob".to_string(),
                emp_id: "E200".to_string(),
                phone: "555-5678".to_string(),
                fingerprint_path: None,
            })
            .expect("register without fingerprint");
    }
}
