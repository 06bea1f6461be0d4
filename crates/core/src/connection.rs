use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// Outcome of the database connectivity probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConnectionResult {
    NotTested { message: String },
    Success { message: String },
    Error { message: String },
}

impl ConnectionResult {
    /// The probe was not attempted
    pub fn skipped() -> Self {
        ConnectionResult::NotTested {
            message: "Connection test skipped".to_string(),
        }
    }

    pub fn success() -> Self {
        ConnectionResult::Success {
            message: "Database connection successful!".to_string(),
        }
    }

    pub fn failed(err: &ProbeError) -> Self {
        ConnectionResult::Error {
            message: format!("Database connection failed: {}", err),
        }
    }
}

impl From<Result<(), ProbeError>> for ConnectionResult {
    fn from(result: Result<(), ProbeError>) -> Self {
        match result {
            Ok(()) => ConnectionResult::success(),
            Err(err) => ConnectionResult::failed(&err),
        }
    }
}
