//! Summaries and renderings of a batch of validation results

use serde::Serialize;
use std::io::{self, Write};

use crate::validation::errors::Result;
use crate::validation::ValidationResult;

/// Read-only view over a fixed batch of results
pub trait Reporter {
    /// True when every result passed; vacuously true for an empty batch
    fn is_valid(&self) -> bool;

    /// Failing results in their original order
    fn pick_invalid(&self) -> Vec<&ValidationResult>;

    /// Passing results in their original order
    fn pick_valid(&self) -> Vec<&ValidationResult>;

    /// Emit one line per result
    fn report(&self) -> Result<()>;
}

/// Counts over a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Reporter that prints to standard output
///
/// Each line has the form `[#{index}][ valid ] | {message}` (or `invalid`),
/// with `null` standing in for an absent message. Tooling parses this
/// format, so it must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdoutReporter {
    results: Vec<ValidationResult>,
}

impl StdoutReporter {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn summary(&self) -> ReportSummary {
        let valid = self.results.iter().filter(|r| r.is_valid()).count();
        ReportSummary {
            total: self.results.len(),
            valid,
            invalid: self.results.len() - valid,
        }
    }

    /// Render the report lines into any writer
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (index, result) in self.results.iter().enumerate() {
            writeln!(out, "[#{}]{}", index, result)?;
        }
        out.flush()
    }
}

impl From<Vec<ValidationResult>> for StdoutReporter {
    fn from(results: Vec<ValidationResult>) -> Self {
        Self::new(results)
    }
}

impl Reporter for StdoutReporter {
    fn is_valid(&self) -> bool {
        self.results.iter().all(ValidationResult::is_valid)
    }

    fn pick_invalid(&self) -> Vec<&ValidationResult> {
        self.results.iter().filter(|r| r.is_invalid()).collect()
    }

    fn pick_valid(&self) -> Vec<&ValidationResult> {
        self.results.iter().filter(|r| r.is_valid()).collect()
    }

    fn report(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_report(&mut handle)?;
        Ok(())
    }
}
