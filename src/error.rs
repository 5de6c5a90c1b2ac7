//! Error types for the registration path.
//!
//! Errors are classified by what the operator can do about them:
//! - MissingField: fix the form and resubmit
//! - DuplicateEmpId: the employee is already registered
//! - Db: storage trouble; nothing the operator can fix from the form

use thiserror::Error;

use crate::db::DbError;

/// Errors raised by the registration handler.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Employee ID already exists: {0}")]
    DuplicateEmpId(String),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Serializable error representation for the presentation layer.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFailure {
    pub message: String,
    pub kind: RegisterErrorKind,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegisterErrorKind {
    Validation,
    Duplicate,
    Storage,
}

impl From<&RegisterError> for RegisterFailure {
    fn from(err: &RegisterError) -> Self {
        let kind = match err {
            RegisterError::MissingField(_) => RegisterErrorKind::Validation,
            RegisterError::DuplicateEmpId(_) => RegisterErrorKind::Duplicate,
            RegisterError::Db(_) => RegisterErrorKind::Storage,
        };

        RegisterFailure {
            message: err.to_string(),
            kind,
        }
    }
}
