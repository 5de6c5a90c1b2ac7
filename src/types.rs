//! Types crossing the presentation boundary.
//!
//! Everything here serializes with camelCase keys so the UI layer can
//! render results without field-name translation.

use serde::{Deserialize, Serialize};

/// Application configuration, loaded from `~/.veriprint/config.json`.
/// A missing config file means defaults; nothing here is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Override for the database location. Default:
    /// `~/.veriprint/veriprint.db`.
    pub db_path: Option<String>,
    /// Whether registration requires a selected fingerprint image.
    /// Deployments that enroll the image later set this to false.
    pub require_fingerprint: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            require_fingerprint: true,
        }
    }
}

impl Config {
    pub fn fingerprint_policy(&self) -> FingerprintPolicy {
        if self.require_fingerprint {
            FingerprintPolicy::Required
        } else {
            FingerprintPolicy::Optional
        }
    }
}

/// Whether a fingerprint image selection is a required registration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintPolicy {
    Required,
    Optional,
}

/// Operator-entered registration form data, as handed over by the
/// presentation layer. Surrounding whitespace is trimmed by the handler;
/// no other validation applies (phone and employee ID are opaque strings).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub name: String,
    pub emp_id: String,
    pub phone: String,
    #[serde(default)]
    pub fingerprint_path: Option<String>,
}

/// Result of a verification attempt.
///
/// Storage failures are carried as the `Error` variant rather than a
/// `Result::Err` — verification is indeterminate then, and the host
/// process must keep running either way.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum VerifyOutcome {
    /// No file was selected; storage was not touched.
    NoSelection,
    /// A stored fingerprint basename matched the presented one.
    Granted {
        name: String,
        #[serde(rename = "empId")]
        emp_id: String,
        timestamp: String,
    },
    /// No stored basename matched.
    Denied { timestamp: String },
    /// Storage could not be read; the decision is indeterminate.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_when_fields_missing() {
        let config: Config = serde_json::from_str("{}").expect("parse");
        assert!(config.db_path.is_none());
        assert!(config.require_fingerprint);
        assert_eq!(config.fingerprint_policy(), FingerprintPolicy::Required);
    }

    #[test]
    fn test_config_camel_case_keys() {
        let config: Config = serde_json::from_str(
            r#"{ "dbPath": "/tmp/x.db", "requireFingerprint": false }"#,
        )
        .expect("parse");
        assert_eq!(config.db_path.as_deref(), Some("/tmp/x.db"));
        assert_eq!(config.fingerprint_policy(), FingerprintPolicy::Optional);
    }

    #[test]
    fn test_verify_outcome_serializes_with_status_tag() {
        let outcome = VerifyOutcome::Granted {
            name: "Alice".to_string(),
            emp_id: "E100".to_string(),
            timestamp: "2026-08-30 09:00:00".to_string(),
        };
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["status"], "granted");
        assert_eq!(json["empId"], "E100");

        let json = serde_json::to_value(VerifyOutcome::NoSelection).expect("serialize");
        assert_eq!(json["status"], "noSelection");
    }
}
