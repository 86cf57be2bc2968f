use smol_str::SmolStr;

use super::enums::{AttributeType, Value};
use crate::syntax::Span;

// ============================================================================
// VALUE NODES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringValue {
    pub value: SmolStr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatValue {
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerValue {
    pub value: i64,
    pub span: Span,
}

/// A reference to an enumeration literal, e.g. `Color::red` or `red`.
///
/// The literal is kept unresolved; scope resolution belongs to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationLiteralValue {
    pub literal: SmolStr,
    pub span: Span,
}

/// A bracketed list of values, e.g. `[1, 2, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    /// Elements in declaration order.
    pub values: Vec<Value>,
    pub span: Span,
}

impl ArrayValue {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// An attribute declaration, e.g. `attribute sizes : integer[] = [1, 2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: SmolStr,
    pub ty: AttributeType,
    /// Declared with array multiplicity (`[]`).
    pub many: bool,
    /// The default value assignment, if any.
    pub default: Option<Value>,
    pub span: Span,
}

impl Attribute {
    pub fn new(name: impl Into<SmolStr>, ty: AttributeType) -> Self {
        Self {
            name: name.into(),
            ty,
            many: false,
            default: None,
            span: Span::default(),
        }
    }

    /// Mark the attribute as array-typed.
    pub fn many(mut self) -> Self {
        self.many = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: SmolStr,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

impl Class {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            span: Span::default(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    pub name: SmolStr,
    pub literals: Vec<SmolStr>,
    pub span: Span,
}

impl Enumeration {
    pub fn new(
        name: impl Into<SmolStr>,
        literals: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        Self {
            name: name.into(),
            literals: literals.into_iter().map(Into::into).collect(),
            span: Span::default(),
        }
    }
}

/// Root node of a parsed metamodel document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metamodel {
    pub name: SmolStr,
    pub classes: Vec<Class>,
    pub enumerations: Vec<Enumeration>,
}

impl Metamodel {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumerations.push(enumeration);
        self
    }

    pub fn find_class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }
}
