//! Registration handler: validate the enrollment form, insert one row.

use crate::db::{DbUser, UserDb};
use crate::error::RegisterError;
use crate::types::{FingerprintPolicy, RegistrationInput};

/// Register a new user.
///
/// All text fields must be non-empty after trimming; under
/// `FingerprintPolicy::Required` the same goes for the selected
/// fingerprint path. Validation failures and duplicate employee IDs leave
/// the table untouched — exactly one row is inserted on success, zero on
/// any failure path.
pub fn register_user(
    db: &UserDb,
    input: &RegistrationInput,
    policy: FingerprintPolicy,
) -> Result<DbUser, RegisterError> {
    let name = input.name.trim();
    let emp_id = input.emp_id.trim();
    let phone = input.phone.trim();
    let fingerprint_path = input
        .fingerprint_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    if name.is_empty() {
        return Err(RegisterError::MissingField("name"));
    }
    if emp_id.is_empty() {
        return Err(RegisterError::MissingField("employee ID"));
    }
    if phone.is_empty() {
        return Err(RegisterError::MissingField("phone"));
    }
    if policy == FingerprintPolicy::Required && fingerprint_path.is_none() {
        return Err(RegisterError::MissingField("fingerprint image"));
    }

    let user = db
        .insert_user(name, emp_id, phone, fingerprint_path.unwrap_or_default())
        .map_err(|e| {
            if e.is_constraint_violation() {
                RegisterError::DuplicateEmpId(emp_id.to_string())
            } else {
                RegisterError::Db(e)
            }
        })?;

    log::info!("Registered user {} (emp_id {})", user.name, user.emp_id);
    Ok(user)
}
