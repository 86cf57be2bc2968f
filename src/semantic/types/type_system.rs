//! Type system — Conformance of literal values to declared attribute types.
//!
//! Every supported type category is paired with exactly one value category
//! in [`CORRESPONDENCE_TABLE`]. The table is a plain `static`, built at
//! compile time and never mutated, so every query here is a pure function
//! that may be called from any number of validation passes at once.
//!
//! ## Queries
//!
//! - [`check_value_type`] — does a single value conform to a type?
//! - [`check_array_value_types`] — which elements of an array do not?
//! - [`value_checker_for_type`] — the value predicate for a type
//! - [`value_type_name_for_type`] — the value category label for a type

use super::category::TypeCategory;
use crate::syntax::ast::{
    is_boolean_value, is_enumeration_literal_value, is_float_value, is_integer_value,
    is_string_value,
};
use crate::syntax::{AttributeType, Value};

// ============================================================================
// CORRESPONDENCE TABLE
// ============================================================================

/// Predicate deciding whether a value belongs to a value category.
pub type ValueChecker = fn(&Value) -> bool;

/// One row of the correspondence table.
#[derive(Debug, Clone, Copy)]
pub struct Correspondence {
    /// The declared type category this row applies to.
    pub type_category: TypeCategory,
    /// Accepts values of the category legal for `type_category`.
    pub value_checker: ValueChecker,
    /// Label of the legal value category.
    pub value_type: &'static str,
}

/// Type category to value category mapping, one row per supported category.
pub static CORRESPONDENCE_TABLE: [Correspondence; 5] = [
    Correspondence {
        type_category: TypeCategory::Boolean,
        value_checker: is_boolean_value,
        value_type: "BooleanValue",
    },
    Correspondence {
        type_category: TypeCategory::String,
        value_checker: is_string_value,
        value_type: "StringValue",
    },
    Correspondence {
        type_category: TypeCategory::Float,
        value_checker: is_float_value,
        value_type: "FloatValue",
    },
    Correspondence {
        type_category: TypeCategory::Integer,
        value_checker: is_integer_value,
        value_type: "IntegerValue",
    },
    Correspondence {
        type_category: TypeCategory::Enumeration,
        value_checker: is_enumeration_literal_value,
        value_type: "EnumerationLiteralValue",
    },
];

/// Find the table row for a declared type.
fn correspondence(ty: &AttributeType) -> Option<&'static Correspondence> {
    let category = ty.category()?;
    CORRESPONDENCE_TABLE
        .iter()
        .find(|row| row.type_category == category)
}

// ============================================================================
// ARRAY CHECK RESULT
// ============================================================================

/// Outcome of checking an array value element by element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ArrayCheck {
    /// The value is not an array at all.
    NotArray,
    /// Every element conforms (including the empty array).
    AllValid,
    /// 0-based positions of non-conforming elements, ascending.
    Invalid(Vec<usize>),
}

impl ArrayCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, ArrayCheck::AllValid)
    }

    /// Positions of failing elements; empty unless [`ArrayCheck::Invalid`].
    pub fn invalid_positions(&self) -> &[usize] {
        match self {
            ArrayCheck::Invalid(positions) => positions,
            ArrayCheck::NotArray | ArrayCheck::AllValid => &[],
        }
    }
}

// ============================================================================
// QUERIES
// ============================================================================

/// Check if the value is of the expected type.
///
/// Returns `false` both for a category mismatch and for types that have no
/// literal value category.
pub fn check_value_type(expected_type: &AttributeType, value: &Value) -> bool {
    correspondence(expected_type).is_some_and(|row| (row.value_checker)(value))
}

/// Check every element of an array value against the element type.
///
/// Nested arrays are not descended into: an array element never conforms
/// to a primitive element type and is reported at its own position.
pub fn check_array_value_types(expected_type: &AttributeType, values: &Value) -> ArrayCheck {
    let Value::Array(array) = values else {
        return ArrayCheck::NotArray;
    };

    let wrong: Vec<usize> = array
        .values
        .iter()
        .enumerate()
        .filter(|(_, value)| !check_value_type(expected_type, value))
        .map(|(pos, _)| pos)
        .collect();

    if wrong.is_empty() {
        ArrayCheck::AllValid
    } else {
        ArrayCheck::Invalid(wrong)
    }
}

/// Get the value checker for a type, `None` if the type has no literal form.
pub fn value_checker_for_type(ty: &AttributeType) -> Option<ValueChecker> {
    correspondence(ty).map(|row| row.value_checker)
}

/// Get the value category label for a type, `None` if the type has no
/// literal form.
pub fn value_type_name_for_type(ty: &AttributeType) -> Option<&'static str> {
    correspondence(ty).map(|row| row.value_type)
}
