//! Inclusive numeric range check

use serde_json::Value;

use crate::types::NumberRange;
use crate::validation::{ValidationResult, Validator};

/// Passes when the value is a number within `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberValueCheck {
    range: NumberRange,
}

impl NumberValueCheck {
    pub fn new(range: NumberRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> &NumberRange {
        &self.range
    }
}

impl Validator for NumberValueCheck {
    fn validate(&self, value: &Value) -> ValidationResult {
        let Some(n) = value.as_f64() else {
            return ValidationResult::invalid("Value is not a number");
        };

        if self.range.contains(n) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(format!(
                "Value should be between {} and {}",
                format_number(self.range.min),
                format_number(self.range.max)
            ))
        }
    }
}

/// Render a number the way host-language string interpolation does
///
/// Infinities are spelled out, zero is always `0`, and magnitudes at or above
/// `1e21` or below `1e-6` switch to exponent form with an explicit sign.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            format!("{}e+{}", mantissa, power)
        }
        _ => exp,
    }
}

/// Build a [`NumberValueCheck`] from its bounds
pub fn check_number_value(range: NumberRange) -> NumberValueCheck {
    NumberValueCheck::new(range)
}
