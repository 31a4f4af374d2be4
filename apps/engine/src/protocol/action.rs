use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Outcome of one submitted intent, as returned to the submitting client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            reason_code: None,
            detail: None,
        }
    }

    pub fn rejected(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            reason_code: Some(code),
            detail: Some(detail.into()),
        }
    }
}

impl From<&DomainError> for ActionResult {
    fn from(err: &DomainError) -> Self {
        Self::rejected(err.code(), err.to_string())
    }
}
