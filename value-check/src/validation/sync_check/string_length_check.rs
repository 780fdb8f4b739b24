//! Inclusive string length check

use serde_json::Value;

use crate::types::LengthRange;
use crate::validation::{ValidationResult, Validator};

/// Passes when the value is a string whose length lies within `[min, max]`
///
/// Length is measured in the range's [`LengthUnit`](crate::LengthUnit),
/// which defaults to Unicode scalar values. No normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLengthCheck {
    range: LengthRange,
}

impl StringLengthCheck {
    pub fn new(range: LengthRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> &LengthRange {
        &self.range
    }
}

impl Validator for StringLengthCheck {
    fn validate(&self, value: &Value) -> ValidationResult {
        let Some(s) = value.as_str() else {
            return ValidationResult::invalid("Value is not a string");
        };

        if self.range.contains(self.range.unit.measure(s)) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(format!(
                "Length should be between {} and {}",
                self.range.min, self.range.max
            ))
        }
    }
}

/// Build a [`StringLengthCheck`] from its bounds
pub fn check_string_length(range: LengthRange) -> StringLengthCheck {
    StringLengthCheck::new(range)
}
