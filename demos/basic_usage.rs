//! Basic usage example
//!
//! Builds a handful of sync and async validators, runs a value through both
//! runners and prints the combined report to stdout. Set `RUST_LOG=debug`
//! to also see the runner logs.

use anyhow::Result;
use serde_json::json;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use value_check::{
    async_validate, check_async, check_number_value, check_string_length, check_type,
    sync_validate, AsyncCheckConfig, LengthRange, NumberRange, Reporter, StdoutReporter,
    TypeConfig, ValueType,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let is_number = check_type(TypeConfig::new(ValueType::Number));
    let is_string = check_type(TypeConfig::new(ValueType::String));
    let percentage = check_number_value(NumberRange::new(0.0, 100.0));
    let short_text = check_string_length(LengthRange::new(1, 8));

    let value = json!(42);
    let mut results = sync_validate(&value, &[&is_number, &is_string, &percentage, &short_text]);

    // Pretend lookup against a slow backend
    let quota = check_async(
        AsyncCheckConfig::new(|n: f64| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            if n <= 50.0 {
                Ok(())
            } else {
                Err(format!("quota of 50 exceeded by {}", n - 50.0))
            }
        })
        .with_timeout(Duration::from_millis(500)),
    );
    let stalled = check_async(
        AsyncCheckConfig::new(|_| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<(), String>(())
        })
        .with_timeout(Duration::from_millis(50)),
    );

    results.extend(async_validate(&value, &[&quota, &stalled]).await?);

    let reporter = StdoutReporter::new(results);
    reporter.report()?;

    let summary = reporter.summary();
    info!(
        "{} checks, {} valid, {} invalid",
        summary.total, summary.valid, summary.invalid
    );
    info!("Summary JSON: {}", serde_json::to_string(&summary)?);

    Ok(())
}
