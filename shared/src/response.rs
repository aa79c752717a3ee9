//! API Response types
//!
//! Wire shapes that are not employee records.

use serde::{Deserialize, Serialize};

/// Returned by create when a required field is absent or blank
pub const MSG_REQUIRED_FIELDS: &str = "Name, email, and position are required";

/// Returned for unknown (or unparseable) employee ids
pub const MSG_EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Returned by a successful delete
pub const MSG_EMPLOYEE_DELETED: &str = "Employee deleted successfully";

/// Body of every error response
///
/// ```json
/// { "error": "Employee not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body of a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: i64,
}

impl DeleteResponse {
    pub fn deleted(id: i64) -> Self {
        Self {
            message: MSG_EMPLOYEE_DELETED.to_string(),
            id,
        }
    }
}
