use smol_str::SmolStr;

use super::types::{
    ArrayValue, BooleanValue, EnumerationLiteralValue, FloatValue, IntegerValue, StringValue,
};
use crate::syntax::Span;

/// The declared type of an attribute.
///
/// `Reference` covers attributes typed by a class; it has no literal value
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Boolean,
    String,
    Float,
    Integer,
    /// Typed by the named enumeration.
    Enumeration(SmolStr),
    /// Typed by the named class.
    Reference(SmolStr),
}

impl AttributeType {
    pub fn enumeration(name: impl Into<SmolStr>) -> Self {
        Self::Enumeration(name.into())
    }

    pub fn reference(name: impl Into<SmolStr>) -> Self {
        Self::Reference(name.into())
    }

    /// Name of the type as written in source.
    pub fn name(&self) -> &str {
        match self {
            AttributeType::Boolean => "boolean",
            AttributeType::String => "string",
            AttributeType::Float => "float",
            AttributeType::Integer => "integer",
            AttributeType::Enumeration(name) | AttributeType::Reference(name) => name,
        }
    }
}

/// A literal value produced by parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(BooleanValue),
    String(StringValue),
    Float(FloatValue),
    Integer(IntegerValue),
    EnumerationLiteral(EnumerationLiteralValue),
    Array(ArrayValue),
}

impl Value {
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(BooleanValue {
            value,
            span: Span::default(),
        })
    }

    pub fn string(value: impl Into<SmolStr>) -> Self {
        Self::String(StringValue {
            value: value.into(),
            span: Span::default(),
        })
    }

    pub fn float(value: f64) -> Self {
        Self::Float(FloatValue {
            value,
            span: Span::default(),
        })
    }

    pub fn integer(value: i64) -> Self {
        Self::Integer(IntegerValue {
            value,
            span: Span::default(),
        })
    }

    pub fn enumeration_literal(literal: impl Into<SmolStr>) -> Self {
        Self::EnumerationLiteral(EnumerationLiteralValue {
            literal: literal.into(),
            span: Span::default(),
        })
    }

    pub fn array(values: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(ArrayValue {
            values: values.into_iter().collect(),
            span: Span::default(),
        })
    }

    /// Replace the source span of this node.
    pub fn with_span(mut self, span: Span) -> Self {
        *self.span_mut() = span;
        self
    }

    pub fn span(&self) -> Span {
        match self {
            Value::Boolean(v) => v.span,
            Value::String(v) => v.span,
            Value::Float(v) => v.span,
            Value::Integer(v) => v.span,
            Value::EnumerationLiteral(v) => v.span,
            Value::Array(v) => v.span,
        }
    }

    fn span_mut(&mut self) -> &mut Span {
        match self {
            Value::Boolean(v) => &mut v.span,
            Value::String(v) => &mut v.span,
            Value::Float(v) => &mut v.span,
            Value::Integer(v) => &mut v.span,
            Value::EnumerationLiteral(v) => &mut v.span,
            Value::Array(v) => &mut v.span,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }
}
