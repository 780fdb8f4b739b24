//! Validation error types

/// Errors that cross the library boundary
///
/// Rule failures are never errors; they are invalid [`ValidationResult`]s.
///
/// [`ValidationResult`]: super::ValidationResult
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// An async validator failed instead of resolving to a result
    #[error("Validator contract violation: {0}")]
    ContractViolation(String),

    /// Configuration could not be interpreted
    #[error("Invalid validator config: {0}")]
    InvalidConfig(String),

    /// Writing a report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidationError {
    /// Create a contract violation error
    pub fn contract_violation(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for fallible validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
