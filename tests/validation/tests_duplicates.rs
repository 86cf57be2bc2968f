//! Duplicate attribute tests.

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;
use kerno::syntax::{Attribute, AttributeType, Class, Metamodel};
use kerno::validation::codes;

#[test]
fn test_duplicate_attribute_points_at_first_declaration() {
    let model = model_with([
        Attribute::new("mass", AttributeType::Float).with_span(at(1, 4, 20)),
        Attribute::new("mass", AttributeType::Integer).with_span(at(2, 4, 22)),
    ]);

    let errors = errors_for(&model);
    let duplicates = with_code(&errors, codes::DUPLICATE_ATTRIBUTE);
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].span, at(2, 4, 22));
    assert_eq!(duplicates[0].related.len(), 1);
    assert_eq!(duplicates[0].related[0].span, at(1, 4, 20));
}

#[test]
fn test_every_repeat_is_reported() {
    let model = model_with([
        Attribute::new("mass", AttributeType::Float).with_span(at(1, 0, 1)),
        Attribute::new("mass", AttributeType::Float).with_span(at(2, 0, 1)),
        Attribute::new("mass", AttributeType::Float).with_span(at(3, 0, 1)),
    ]);

    assert_eq!(errors_for(&model).len(), 2);
}

#[test]
fn test_same_name_in_different_classes_is_fine() {
    let model = Metamodel::new("M")
        .with_class(Class::new("Car").with_attribute(Attribute::new("mass", AttributeType::Float)))
        .with_class(
            Class::new("Truck").with_attribute(Attribute::new("mass", AttributeType::Float)),
        );

    assert_no_errors(&model);
}
