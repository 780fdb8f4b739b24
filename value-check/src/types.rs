use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Runtime kind of a [`serde_json::Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    /// Classify a value by its runtime kind
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Lowercase name used in validation messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(ValueType::Null),
            "boolean" => Ok(ValueType::Boolean),
            "number" => Ok(ValueType::Number),
            "string" => Ok(ValueType::String),
            "array" => Ok(ValueType::Array),
            "object" => Ok(ValueType::Object),
            other => Err(ValidationError::invalid_config(format!(
                "Unknown value type '{}'",
                other
            ))),
        }
    }
}

/// Unit in which string length is measured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-16 code units, the way host strings in browsers count
    Utf16,
    /// UTF-8 encoded bytes
    Bytes,
}

impl LengthUnit {
    /// Length of `s` in this unit
    pub fn measure(&self, s: &str) -> usize {
        match self {
            LengthUnit::Chars => s.chars().count(),
            LengthUnit::Utf16 => s.encode_utf16().count(),
            LengthUnit::Bytes => s.len(),
        }
    }
}

/// Configuration for [`check_type`](crate::check_type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfig {
    pub target_type: ValueType,
}

impl TypeConfig {
    pub fn new(target_type: ValueType) -> Self {
        Self { target_type }
    }
}

/// Inclusive numeric bounds for [`check_number_value`](crate::check_number_value)
///
/// `min > max` is accepted and simply makes every number invalid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

impl NumberRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `n` lies within both bounds
    pub fn contains(&self, n: f64) -> bool {
        self.min <= n && n <= self.max
    }
}

/// Inclusive length bounds for [`check_string_length`](crate::check_string_length)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl LengthRange {
    /// Bounds measured in [`LengthUnit::Chars`]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            unit: LengthUnit::default(),
        }
    }

    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}
