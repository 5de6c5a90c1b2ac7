//! Veriprint: local fingerprint enrollment and verification core.
//!
//! An operator registers employees (name, employee ID, phone, selected
//! fingerprint image) into a single local SQLite table, and later
//! "verifies" a presented image by basename comparison against stored
//! paths. The presentation layer — forms, dialogs, file pickers — lives
//! outside this crate and calls in through [`state::AppState`] once the
//! operator's input is finalized.

pub mod db;
pub mod error;
mod migrations;
pub mod registry;
pub mod state;
pub mod types;
pub mod verify;

pub use db::{DbError, DbUser, UserDb};
pub use error::{RegisterError, RegisterErrorKind, RegisterFailure};
pub use registry::register_user;
pub use state::AppState;
pub use types::{Config, FingerprintPolicy, RegistrationInput, VerifyOutcome};
pub use verify::verify_fingerprint;
