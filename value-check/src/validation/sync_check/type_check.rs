//! Runtime type check

use serde_json::Value;

use crate::types::{TypeConfig, ValueType};
use crate::validation::{ValidationResult, Validator};

/// Passes when the value's runtime kind equals the configured target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCheck {
    config: TypeConfig,
}

impl TypeCheck {
    pub fn new(config: TypeConfig) -> Self {
        Self { config }
    }

    pub fn target_type(&self) -> ValueType {
        self.config.target_type
    }
}

impl Validator for TypeCheck {
    fn validate(&self, value: &Value) -> ValidationResult {
        if ValueType::of(value) == self.config.target_type {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(format!("Value is not a {}", self.config.target_type))
        }
    }
}

/// Build a [`TypeCheck`] from its config
pub fn check_type(config: TypeConfig) -> TypeCheck {
    TypeCheck::new(config)
}
