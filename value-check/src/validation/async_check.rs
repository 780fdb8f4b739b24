//! Asynchronous check racing a user callback against an optional timeout

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::errors::Result;
use super::{AsyncValidator, ValidationResult};

/// Message of a result whose callback lost the race against the timer
pub const TIMEOUT_MESSAGE: &str = "Timeout";

const EMPTY_FAILURE_MESSAGE: &str = "Callback failed";
const PANIC_MESSAGE: &str = "Callback panicked";
const CANCELLED_MESSAGE: &str = "Callback cancelled";

type Callback =
    Arc<dyn Fn(f64) -> BoxFuture<'static, std::result::Result<(), String>> + Send + Sync>;

/// Configuration for [`check_async`]
///
/// The callback receives the checked value coerced with [`to_number`]. It
/// succeeds by returning `Ok(())`; any `Err` becomes an invalid result whose
/// message is the error's `Display` output.
#[derive(Clone)]
pub struct AsyncCheckConfig {
    callback: Callback,
    timeout: Option<Duration>,
}

impl AsyncCheckConfig {
    /// Wrap a callback with no timeout
    pub fn new<F, Fut, E>(callback: F) -> Self
    where
        F: Fn(f64) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(), E>> + Send + 'static,
        E: fmt::Display + Send + 'static,
    {
        let callback: Callback = Arc::new(move |n| {
            let fut = callback(n);
            async move { fut.await.map_err(|e| e.to_string()) }.boxed()
        });

        Self {
            callback,
            timeout: None,
        }
    }

    /// Fail with [`TIMEOUT_MESSAGE`] if the callback has not settled within `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for AsyncCheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncCheckConfig")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Async validator built by [`check_async`]
///
/// Each call spawns the callback on the tokio runtime and waits for it, or
/// for the timer when one is configured, whichever settles first. Losing the
/// race abandons the wait only; the callback task keeps running detached.
/// The timer belongs to the race future and is dropped on every exit path.
#[derive(Debug, Clone)]
pub struct AsyncCheck {
    config: AsyncCheckConfig,
}

impl AsyncCheck {
    pub fn new(config: AsyncCheckConfig) -> Self {
        Self { config }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Run the check to completion; never fails
    pub async fn check(&self, value: &Value) -> ValidationResult {
        let input = to_number(value);
        let task = tokio::spawn((self.config.callback)(input));

        let joined = match self.config.timeout {
            Some(limit) => match tokio::time::timeout(limit, task).await {
                Ok(joined) => joined,
                Err(_) => {
                    debug!("Async check timed out after {:?}", limit);
                    return ValidationResult::invalid(TIMEOUT_MESSAGE);
                }
            },
            None => task.await,
        };

        match joined {
            Ok(Ok(())) => ValidationResult::valid(),
            Ok(Err(reason)) => {
                debug!("Async check callback failed: {}", reason);
                if reason.is_empty() {
                    ValidationResult::invalid(EMPTY_FAILURE_MESSAGE)
                } else {
                    ValidationResult::invalid(reason)
                }
            }
            Err(e) if e.is_panic() => {
                warn!("Async check callback panicked: {}", e);
                ValidationResult::invalid(PANIC_MESSAGE)
            }
            Err(e) => {
                warn!("Async check callback was cancelled: {}", e);
                ValidationResult::invalid(CANCELLED_MESSAGE)
            }
        }
    }
}

#[async_trait]
impl AsyncValidator for AsyncCheck {
    async fn validate(&self, value: &Value) -> Result<ValidationResult> {
        Ok(self.check(value).await)
    }
}

/// Build an [`AsyncCheck`] from its config
pub fn check_async(config: AsyncCheckConfig) -> AsyncCheck {
    AsyncCheck::new(config)
}

/// Coerce a value to a number the way host-language `Number(value)` does
///
/// `null` becomes `0`, booleans `0`/`1`, strings are parsed after trimming
/// (empty is `0`, garbage is NaN) and arrays go through their joined string
/// form. Objects are always NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => match single {
                // Joining a lone null yields an empty string
                Value::Null => 0.0,
                Value::Bool(_) | Value::Object(_) => f64::NAN,
                other => to_number(other),
            },
            // The joined form always contains a comma
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_digits_to_number(&trimmed[2..], radix);
    }

    // f64::from_str also accepts "inf" and "nan", which must stay NaN here
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

// Unsigned digits only; wide literals round to a finite float instead of overflowing
fn radix_digits_to_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}
