//! Syntax definitions for the Kerno metamodel language.
//!
//! Parsing lives in the host language workbench; this module only declares
//! the typed nodes it hands to the semantic core.

pub mod ast;

pub use ast::{
    ArrayValue, Attribute, AttributeType, BooleanValue, Class, Enumeration,
    EnumerationLiteralValue, FloatValue, IntegerValue, Metamodel, StringValue, Value,
};

// Re-export Position and Span from base for convenience
pub use crate::base::{Position, Span};
