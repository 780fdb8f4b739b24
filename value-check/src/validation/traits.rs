//! Core validation traits and interfaces

use async_trait::async_trait;
use serde_json::Value;

use super::errors::Result;
use super::ValidationResult;

/// Synchronous check of a single value
pub trait Validator {
    fn validate(&self, value: &Value) -> ValidationResult;
}

impl<F> Validator for F
where
    F: Fn(&Value) -> ValidationResult,
{
    fn validate(&self, value: &Value) -> ValidationResult {
        self(value)
    }
}

/// Asynchronous check of a single value
///
/// Well-behaved validators always resolve to `Ok`; the `Err` arm is reserved
/// for implementations that cannot produce a result at all, and it fails the
/// whole [`async_validate`](super::async_validate) call.
#[async_trait]
pub trait AsyncValidator: Send + Sync {
    async fn validate(&self, value: &Value) -> Result<ValidationResult>;
}
