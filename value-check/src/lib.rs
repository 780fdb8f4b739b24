//! # Value Check
//!
//! Composable synchronous and asynchronous value validators, the runners
//! that fan a value out over them, and a reporter that summarizes a batch
//! of outcomes.

pub mod reporter;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use types::*;

// Re-export validation functionality
pub use validation::{
    async_validate, check_async, check_number_value, check_string_length, check_type,
    sync_validate, to_number, AsyncCheck, AsyncCheckConfig, AsyncValidator, NumberValueCheck,
    StringLengthCheck, TypeCheck, ValidationError, ValidationResult, Validator,
};

// Re-export reporter functionality
pub use reporter::{ReportSummary, Reporter, StdoutReporter};
