//! The outcome every check produces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one value against one rule
///
/// `is_valid` is true exactly when `message` is `None`. The fields are
/// private so the only way to build one is through [`valid`](Self::valid)
/// and [`invalid`](Self::invalid), which keep that pairing intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawResult")]
pub struct ValidationResult {
    is_valid: bool,
    message: Option<String>,
}

impl ValidationResult {
    /// A passing result with no message
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// A failing result carrying its reason
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_valid { "valid" } else { "invalid" };
        write!(f, "[ {} ] | {}", status, self.message().unwrap_or("null"))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    is_valid: bool,
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<RawResult> for ValidationResult {
    type Error = String;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        match (raw.is_valid, raw.message) {
            (true, None) => Ok(Self::valid()),
            (false, Some(message)) => Ok(Self::invalid(message)),
            (true, Some(_)) => Err("a valid result cannot carry a message".to_string()),
            (false, None) => Err("an invalid result must carry a message".to_string()),
        }
    }
}
