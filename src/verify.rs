//! Verification handler: match a presented image against stored ones.
//!
//! There is no biometric matching here. A presented file "verifies" when
//! its basename equals a stored fingerprint path's basename, byte for
//! byte. The directory portion of either path is ignored. This mirrors
//! the enrollment tooling this system ships with, where the image file is
//! named after the capture; it is a stand-in for a real matcher.

use std::path::Path;

use chrono::Local;

use crate::db::UserDb;
use crate::types::VerifyOutcome;

/// Timestamp format carried on granted/denied decisions.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Extract the basename (final path component) of a path string.
///
/// Returns an empty string for paths with no final component (`/`, `..`),
/// which can never match a stored non-empty basename.
pub fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decide access for a presented fingerprint image path.
///
/// Scans all registered users in insertion order; the first stored
/// fingerprint whose basename equals the presented one (case-sensitive)
/// wins. Duplicate stored basenames therefore resolve to the earliest
/// registration — a known weakness of basename matching, preserved for
/// behavioral parity with the enrollment tooling. Users enrolled without
/// a fingerprint image never match anything.
///
/// Never returns an error: a storage failure maps to
/// `VerifyOutcome::Error` so the caller's process keeps running.
pub fn verify_fingerprint(db: &UserDb, selected_path: Option<&str>) -> VerifyOutcome {
    let selected = match selected_path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => path,
        None => return VerifyOutcome::NoSelection,
    };

    let presented = basename(selected);

    let users = match db.list_users() {
        Ok(users) => users,
        Err(e) => {
            log::warn!("Verification aborted, storage read failed: {e}");
            return VerifyOutcome::Error {
                message: e.to_string(),
            };
        }
    };

    let matched = users.into_iter().find(|u| {
        // Records enrolled without a fingerprint store an empty path. An
        // empty stored basename must never match: paths like "/" or ".."
        // also reduce to an empty basename and would verify as that user.
        let stored = basename(&u.fingerprint_path);
        !stored.is_empty() && stored == presented
    });

    // Captured at the moment of decision, after the scan
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

    match matched {
        Some(user) => {
            log::info!("Access granted to {} (emp_id {})", user.name, user.emp_id);
            VerifyOutcome::Granted {
                name: user.name,
                emp_id: user.emp_id,
                timestamp,
            }
        }
        None => {
            log::info!("Access denied, no match for {presented}");
            VerifyOutcome::Denied { timestamp }
        }
    }
}
