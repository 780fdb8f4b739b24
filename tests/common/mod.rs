use std::time::Duration;
use value_check::{
    check_async, check_number_value, check_string_length, check_type, AsyncCheck,
    AsyncCheckConfig, LengthRange, NumberRange, NumberValueCheck, StringLengthCheck, TypeCheck,
    TypeConfig, ValueType,
};

/// Test utilities and common setup functions

pub struct TestHelper;

impl TestHelper {
    /// Type check for strings
    pub fn string_type() -> TypeCheck {
        check_type(TypeConfig::new(ValueType::String))
    }

    /// Type check for numbers
    pub fn number_type() -> TypeCheck {
        check_type(TypeConfig::new(ValueType::Number))
    }

    /// Number range typical for a percentage
    pub fn percentage() -> NumberValueCheck {
        check_number_value(NumberRange::new(0.0, 100.0))
    }

    /// Username-style length limit
    pub fn username_length() -> StringLengthCheck {
        check_string_length(LengthRange::new(3, 16))
    }

    /// Async check that succeeds after `delay`
    pub fn succeeds_after(delay: Duration, timeout: Option<Duration>) -> AsyncCheck {
        let config = AsyncCheckConfig::new(move |_| async move {
            tokio::time::sleep(delay).await;
            Ok::<(), String>(())
        });
        Self::with_optional_timeout(config, timeout)
    }

    /// Async check that fails with `reason` after `delay`
    pub fn fails_after(delay: Duration, reason: &'static str) -> AsyncCheck {
        check_async(AsyncCheckConfig::new(move |_| async move {
            tokio::time::sleep(delay).await;
            Err::<(), _>(reason)
        }))
    }

    /// Async check that only accepts even inputs
    pub fn even_number(timeout: Option<Duration>) -> AsyncCheck {
        let config = AsyncCheckConfig::new(|n: f64| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            if n % 2.0 == 0.0 {
                Ok(())
            } else {
                Err(format!("{} is odd", n))
            }
        });
        Self::with_optional_timeout(config, timeout)
    }

    fn with_optional_timeout(config: AsyncCheckConfig, timeout: Option<Duration>) -> AsyncCheck {
        match timeout {
            Some(limit) => check_async(config.with_timeout(limit)),
            None => check_async(config),
        }
    }
}
