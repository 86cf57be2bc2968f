//! Category predicates over [`Value`] nodes.
//!
//! Each predicate is total and side-effect free; exactly one of them holds
//! for any value.

use super::enums::Value;

pub fn is_boolean_value(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

pub fn is_string_value(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_float_value(value: &Value) -> bool {
    matches!(value, Value::Float(_))
}

pub fn is_integer_value(value: &Value) -> bool {
    matches!(value, Value::Integer(_))
}

pub fn is_enumeration_literal_value(value: &Value) -> bool {
    matches!(value, Value::EnumerationLiteral(_))
}

pub fn is_array_value(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}
