//! Validation system for arbitrary values
//!
//! Checks are built from plain configuration and produce a
//! [`ValidationResult`]; they never fail with an error. The runners fan a
//! single value out over many checks and keep results in input order.

pub mod async_check;
pub mod errors;
pub mod result;
pub mod runner;
pub mod sync_check;
pub mod traits;

// Re-export main validation types
pub use async_check::{check_async, to_number, AsyncCheck, AsyncCheckConfig};
pub use errors::ValidationError;
pub use result::ValidationResult;
pub use runner::{async_validate, sync_validate};
pub use sync_check::{
    check_number_value, check_string_length, check_type, NumberValueCheck, StringLengthCheck,
    TypeCheck,
};
pub use traits::{AsyncValidator, Validator};
