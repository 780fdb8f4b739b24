//! Fan a single value out over many validators

use futures::future::try_join_all;
use serde_json::Value;
use tracing::debug;

use super::errors::Result;
use super::{AsyncValidator, ValidationResult, Validator};

/// Apply every validator to `value` in order
///
/// The returned results are index-aligned with `validators`.
pub fn sync_validate(value: &Value, validators: &[&dyn Validator]) -> Vec<ValidationResult> {
    let results: Vec<ValidationResult> = validators
        .iter()
        .map(|validator| validator.validate(value))
        .collect();

    debug!(
        "Ran {} sync validators, {} invalid",
        results.len(),
        results.iter().filter(|r| r.is_invalid()).count()
    );
    results
}

/// Run every async validator on `value` concurrently
///
/// Results keep the order of `validators` no matter which finishes first.
/// The first validator that returns `Err` fails the whole call.
pub async fn async_validate(
    value: &Value,
    validators: &[&dyn AsyncValidator],
) -> Result<Vec<ValidationResult>> {
    let results = try_join_all(validators.iter().map(|validator| validator.validate(value)))
        .await
        .map_err(|e| {
            debug!("Async validation aborted: {}", e);
            e
        })?;

    debug!(
        "Ran {} async validators, {} invalid",
        results.len(),
        results.iter().filter(|r| r.is_invalid()).count()
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LengthRange, NumberRange, TypeConfig, ValueType};
    use crate::validation::{
        check_async, check_number_value, check_string_length, check_type, AsyncCheckConfig,
        ValidationError,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;

    struct RejectingValidator;

    #[async_trait]
    impl AsyncValidator for RejectingValidator {
        async fn validate(&self, _value: &Value) -> Result<ValidationResult> {
            Err(ValidationError::contract_violation("refused to check"))
        }
    }

    fn delayed(ms: u64, fail_with: Option<&'static str>) -> AsyncCheckConfig {
        AsyncCheckConfig::new(move |_| async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            match fail_with {
                Some(reason) => Err(reason),
                None => Ok(()),
            }
        })
    }

    #[test]
    fn test_sync_validate_preserves_order_and_length() {
        let is_string = check_type(TypeConfig::new(ValueType::String));
        let in_range = check_number_value(NumberRange::new(0.0, 1.0));
        let short = check_string_length(LengthRange::new(0, 3));
        let value = json!("abc");

        let results = sync_validate(&value, &[&is_string, &in_range, &short]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], is_string.validate(&value));
        assert_eq!(results[1], ValidationResult::invalid("Value is not a number"));
        assert_eq!(results[2], ValidationResult::valid());
    }

    #[test]
    fn test_sync_validate_accepts_closures() {
        let non_empty = |value: &Value| match value.as_str() {
            Some(s) if !s.is_empty() => ValidationResult::valid(),
            _ => ValidationResult::invalid("Value is empty"),
        };

        let results = sync_validate(&json!(""), &[&non_empty]);
        assert_eq!(results, vec![ValidationResult::invalid("Value is empty")]);
    }

    #[test]
    fn test_sync_validate_with_no_validators() {
        assert!(sync_validate(&json!(1), &[]).is_empty());
    }

    #[tokio::test]
    async fn test_async_validate_preserves_order_when_completion_differs() {
        let slow = check_async(delayed(60, Some("slow failed")));
        let fast = check_async(delayed(5, None));
        let timed_out =
            check_async(delayed(1000, None).with_timeout(Duration::from_millis(20)));

        let results = async_validate(&json!(3), &[&slow, &fast, &timed_out])
            .await
            .unwrap();

        assert_eq!(
            results,
            vec![
                ValidationResult::invalid("slow failed"),
                ValidationResult::valid(),
                ValidationResult::invalid("Timeout"),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_validate_runs_concurrently() {
        let validators: Vec<_> = (0..5).map(|_| check_async(delayed(50, None))).collect();
        let refs: Vec<&dyn AsyncValidator> =
            validators.iter().map(|v| v as &dyn AsyncValidator).collect();

        let started = tokio::time::Instant::now();
        let results = async_validate(&json!(null), &refs).await.unwrap();

        assert_eq!(results.len(), 5);
        assert!(results.iter().all(ValidationResult::is_valid));
        // Sequential execution would need five delays
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_async_validate_fails_on_contract_violation() {
        let fine = check_async(delayed(1, None));
        let result = async_validate(&json!(1), &[&fine, &RejectingValidator]).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ValidationError::ContractViolation(_)));
        assert!(err.to_string().contains("refused to check"));
    }

    #[tokio::test]
    async fn test_async_validate_with_no_validators() {
        let results = async_validate(&json!(1), &[]).await.unwrap();
        assert!(results.is_empty());
    }
}
