//! Variant tags for declared types and literal values.

use std::fmt;

use crate::syntax::{AttributeType, Value};

/// Category of a declared attribute type that has a literal value form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Boolean,
    String,
    Float,
    Integer,
    Enumeration,
}

/// Runtime category of a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Boolean,
    String,
    Float,
    Integer,
    EnumerationLiteral,
    Array,
}

impl ValueCategory {
    /// Label used in diagnostics, e.g. `IntegerValue`.
    pub fn label(self) -> &'static str {
        match self {
            ValueCategory::Boolean => "BooleanValue",
            ValueCategory::String => "StringValue",
            ValueCategory::Float => "FloatValue",
            ValueCategory::Integer => "IntegerValue",
            ValueCategory::EnumerationLiteral => "EnumerationLiteralValue",
            ValueCategory::Array => "ArrayValue",
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl AttributeType {
    /// The category of this type, or `None` for types without literal values.
    pub fn category(&self) -> Option<TypeCategory> {
        match self {
            AttributeType::Boolean => Some(TypeCategory::Boolean),
            AttributeType::String => Some(TypeCategory::String),
            AttributeType::Float => Some(TypeCategory::Float),
            AttributeType::Integer => Some(TypeCategory::Integer),
            AttributeType::Enumeration(_) => Some(TypeCategory::Enumeration),
            AttributeType::Reference(_) => None,
        }
    }
}

impl Value {
    pub fn category(&self) -> ValueCategory {
        match self {
            Value::Boolean(_) => ValueCategory::Boolean,
            Value::String(_) => ValueCategory::String,
            Value::Float(_) => ValueCategory::Float,
            Value::Integer(_) => ValueCategory::Integer,
            Value::EnumerationLiteral(_) => ValueCategory::EnumerationLiteral,
            Value::Array(_) => ValueCategory::Array,
        }
    }
}
