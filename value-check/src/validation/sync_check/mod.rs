//! Pure synchronous checks
//!
//! Each check is built from its config once and can then be applied to any
//! number of values.

mod number_check;
mod string_length_check;
mod type_check;

pub use number_check::{check_number_value, NumberValueCheck};
pub use string_length_check::{check_string_length, StringLengthCheck};
pub use type_check::{check_type, TypeCheck};
