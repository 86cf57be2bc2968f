//! Default value tests for the validation layer.

use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;
use kerno::syntax::{Attribute, AttributeType, Value};
use kerno::validation::codes;

// =============================================================================
// SINGLE-VALUED ATTRIBUTES
// =============================================================================

#[rstest]
#[case(AttributeType::Boolean, Value::boolean(false))]
#[case(AttributeType::String, Value::string("sedan"))]
#[case(AttributeType::Float, Value::float(1.25))]
#[case(AttributeType::Integer, Value::integer(4))]
#[case(AttributeType::enumeration("Color"), Value::enumeration_literal("red"))]
fn test_conforming_default_is_accepted(#[case] ty: AttributeType, #[case] value: Value) {
    let model = model_with([Attribute::new("a", ty).with_default(value)]);
    assert_no_errors(&model);
}

#[test]
fn test_type_mismatch_reported_on_value() {
    let model = model_with([Attribute::new("wheels", AttributeType::Integer)
        .with_span(at(2, 4, 30))
        .with_default(Value::string("4").with_span(at(2, 26, 29)))]);

    let errors = errors_for(&model);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code.as_deref(), Some(codes::TYPE_MISMATCH));
    assert_eq!(errors[0].span, at(2, 26, 29));
    assert_eq!(
        &*errors[0].message,
        "type mismatch: expected 'IntegerValue', found 'StringValue'"
    );
}

#[test]
fn test_attribute_without_default_is_ignored() {
    let model = model_with([
        Attribute::new("wheels", AttributeType::Integer),
        Attribute::new("engine", AttributeType::reference("Engine")),
    ]);
    assert_no_errors(&model);
}

#[test]
fn test_array_assigned_to_single_attribute() {
    let model = model_with([Attribute::new("wheels", AttributeType::Integer)
        .with_default(Value::array([Value::integer(4)]))]);

    let errors = errors_for(&model);
    assert_eq!(with_code(&errors, codes::UNEXPECTED_ARRAY).len(), 1);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_unsupported_type_with_default() {
    let model = model_with([Attribute::new("engine", AttributeType::reference("Engine"))
        .with_default(Value::string("v8"))]);

    let errors = errors_for(&model);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code.as_deref(), Some(codes::UNSUPPORTED_DEFAULT));
    assert!(errors[0].message.contains("Engine"));
}

// =============================================================================
// ARRAY ATTRIBUTES
// =============================================================================

#[test]
fn test_array_element_mismatches_reported_per_element() {
    let model = model_with([Attribute::new("sizes", AttributeType::Integer)
        .many()
        .with_default(
            Value::array([
                Value::integer(1).with_span(at(5, 20, 21)),
                Value::string("x").with_span(at(5, 23, 26)),
                Value::integer(3).with_span(at(5, 28, 29)),
                Value::float(4.0).with_span(at(5, 31, 34)),
            ])
            .with_span(at(5, 19, 35)),
        )]);

    let errors = errors_for(&model);
    let mismatches = with_code(&errors, codes::ARRAY_ELEMENT_MISMATCH);
    assert_eq!(mismatches.len(), 2);
    assert_eq!(mismatches[0].span, at(5, 23, 26));
    assert!(mismatches[0].message.contains("position 1"));
    assert!(mismatches[0].message.contains("'StringValue'"));
    assert_eq!(mismatches[1].span, at(5, 31, 34));
    assert!(mismatches[1].message.contains("position 3"));
}

#[test]
fn test_scalar_assigned_to_array_attribute() {
    let model = model_with([Attribute::new("sizes", AttributeType::Integer)
        .many()
        .with_default(Value::integer(1))]);

    let errors = errors_for(&model);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code.as_deref(), Some(codes::EXPECTED_ARRAY));
    assert!(errors[0].message.contains("'IntegerValue'"));
}

#[rstest]
#[case(Value::array(Vec::<Value>::new()))]
#[case(Value::array([Value::enumeration_literal("red")]))]
#[case(Value::array([Value::enumeration_literal("red"), Value::enumeration_literal("blue")]))]
fn test_conforming_arrays_are_accepted(#[case] value: Value) {
    let model = model_with([Attribute::new("palette", AttributeType::enumeration("Color"))
        .many()
        .with_default(value)]);
    assert_no_errors(&model);
}

#[test]
fn test_nested_array_element_is_reported() {
    let model = model_with([Attribute::new("grid", AttributeType::Integer)
        .many()
        .with_default(Value::array([
            Value::integer(1),
            Value::array([Value::integer(2)]),
        ]))]);

    let errors = errors_for(&model);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("'ArrayValue'"));
}

#[test]
fn test_unsupported_element_type_reported_once() {
    let model = model_with([Attribute::new("engines", AttributeType::reference("Engine"))
        .many()
        .with_default(Value::array([Value::string("a"), Value::string("b")]))]);

    let errors = errors_for(&model);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code.as_deref(), Some(codes::UNSUPPORTED_DEFAULT));
}
