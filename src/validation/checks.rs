//! Built-in validation checks.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use super::diagnostics::{Diagnostic, RelatedInfo, codes};
use super::registry::{CheckContext, ValidationCheck};
use crate::semantic::{
    ArrayCheck, check_array_value_types, value_checker_for_type, value_type_name_for_type,
};
use crate::syntax::ast::is_array_value;
use crate::syntax::{ArrayValue, Attribute, Class, Value};

// ============================================================================
// DEFAULT VALUES
// ============================================================================

/// Checks that attribute default values conform to the declared type.
///
/// For `attribute sizes : integer[] = [1, "x"]` the mismatch is reported on
/// the `"x"` element rather than on the whole assignment.
pub struct DefaultValueCheck;

impl ValidationCheck for DefaultValueCheck {
    fn name(&self) -> &'static str {
        "attribute-default-value"
    }

    fn check_class(&self, cx: &mut CheckContext<'_>, class: &Class) {
        for attribute in &class.attributes {
            let Some(value) = &attribute.default else {
                continue;
            };
            trace!(
                class = %class.name,
                attribute = %attribute.name,
                many = attribute.many,
                "checking default value"
            );

            if value_type_name_for_type(&attribute.ty).is_none() {
                cx.collector.add(
                    Diagnostic::error(
                        cx.file,
                        value.span(),
                        format!(
                            "attribute '{}' of type '{}' cannot have a default value",
                            attribute.name,
                            attribute.ty.name()
                        ),
                    )
                    .with_code(codes::UNSUPPORTED_DEFAULT),
                );
                continue;
            }

            if attribute.many {
                check_many(cx, attribute, value);
            } else {
                check_single(cx, attribute, value);
            }
        }
    }
}

fn check_single(cx: &mut CheckContext<'_>, attribute: &Attribute, value: &Value) {
    let (Some(checker), Some(expected)) = (
        value_checker_for_type(&attribute.ty),
        value_type_name_for_type(&attribute.ty),
    ) else {
        return;
    };

    if is_array_value(value) {
        cx.collector.add(
            Diagnostic::error(
                cx.file,
                value.span(),
                format!(
                    "attribute '{}' is not an array: expected '{}', found an array",
                    attribute.name, expected
                ),
            )
            .with_code(codes::UNEXPECTED_ARRAY),
        );
    } else if !checker(value) {
        cx.collector.add(
            Diagnostic::error(
                cx.file,
                value.span(),
                format!(
                    "type mismatch: expected '{}', found '{}'",
                    expected,
                    value.category()
                ),
            )
            .with_code(codes::TYPE_MISMATCH),
        );
    }
}

fn check_many(cx: &mut CheckContext<'_>, attribute: &Attribute, value: &Value) {
    let Some(expected) = value_type_name_for_type(&attribute.ty) else {
        return;
    };

    match check_array_value_types(&attribute.ty, value) {
        ArrayCheck::AllValid => {}
        ArrayCheck::NotArray => {
            cx.collector.add(
                Diagnostic::error(
                    cx.file,
                    value.span(),
                    format!(
                        "attribute '{}' is an array: expected an array of '{}', found '{}'",
                        attribute.name,
                        expected,
                        value.category()
                    ),
                )
                .with_code(codes::EXPECTED_ARRAY),
            );
        }
        ArrayCheck::Invalid(positions) => {
            if let Value::Array(array) = value {
                report_elements(cx, array, &positions, expected);
            }
        }
    }
}

fn report_elements(
    cx: &mut CheckContext<'_>,
    array: &ArrayValue,
    positions: &[usize],
    expected: &str,
) {
    let limit = cx
        .options
        .max_element_diagnostics()
        .unwrap_or(positions.len());

    for &pos in positions.iter().take(limit) {
        let Some(element) = array.values.get(pos) else {
            continue;
        };
        cx.collector.add(
            Diagnostic::error(
                cx.file,
                element.span(),
                format!(
                    "type mismatch at position {}: expected '{}', found '{}'",
                    pos,
                    expected,
                    element.category()
                ),
            )
            .with_code(codes::ARRAY_ELEMENT_MISMATCH),
        );
    }

    let remaining = positions.len().saturating_sub(limit);
    if remaining > 0 {
        cx.collector.add(
            Diagnostic::error(
                cx.file,
                array.span,
                format!(
                    "{} more array element(s) do not match '{}'",
                    remaining, expected
                ),
            )
            .with_code(codes::ARRAY_ELEMENT_MISMATCH),
        );
    }
}

// ============================================================================
// DUPLICATES
// ============================================================================

/// Reports attributes declared more than once in the same class.
pub struct DuplicateAttributeCheck;

impl ValidationCheck for DuplicateAttributeCheck {
    fn name(&self) -> &'static str {
        "duplicate-attribute"
    }

    fn check_class(&self, cx: &mut CheckContext<'_>, class: &Class) {
        let mut first_by_name: FxHashMap<&str, &Attribute> = FxHashMap::default();

        for attribute in &class.attributes {
            let Some(existing) = first_by_name.get(attribute.name.as_str()).copied() else {
                first_by_name.insert(attribute.name.as_str(), attribute);
                continue;
            };

            cx.collector.add(
                Diagnostic::error(
                    cx.file,
                    attribute.span,
                    format!(
                        "duplicate attribute: '{}' is already declared in '{}'",
                        attribute.name, class.name
                    ),
                )
                .with_code(codes::DUPLICATE_ATTRIBUTE)
                .with_related(RelatedInfo {
                    file: cx.file,
                    span: existing.span,
                    message: Arc::from(format!("previous declaration of '{}'", existing.name)),
                }),
            );
        }
    }
}
