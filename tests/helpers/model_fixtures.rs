//! Small metamodels shared by validation tests.

use kerno::Span;
use kerno::syntax::{Attribute, Class, Enumeration, Metamodel};

/// Wrap attributes in a single class `Vehicle` of model `Fixtures`.
pub fn model_with(attributes: impl IntoIterator<Item = Attribute>) -> Metamodel {
    let class = attributes
        .into_iter()
        .fold(Class::new("Vehicle"), Class::with_attribute);
    Metamodel::new("Fixtures")
        .with_class(class)
        .with_enumeration(Enumeration::new("Color", ["red", "green", "blue"]))
}

/// Span on `line` covering columns `start..end`.
pub fn at(line: usize, start: usize, end: usize) -> Span {
    Span::from_coords(line, start, line, end)
}
