//! Registry of validation checks.
//!
//! Checks are kept in registration order so diagnostics come out in a
//! stable order across runs.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::checks::{DefaultValueCheck, DuplicateAttributeCheck};
use super::diagnostics::DiagnosticCollector;
use super::error::{ValidationError, ValidationResult};
use super::options::ValidationOptions;
use crate::base::FileId;
use crate::syntax::{Class, Metamodel};

/// State shared with a check while it inspects one class.
pub struct CheckContext<'a> {
    pub file: FileId,
    pub model: &'a Metamodel,
    pub options: &'a ValidationOptions,
    pub collector: &'a mut DiagnosticCollector,
}

/// A validation pass over the classes of a metamodel.
pub trait ValidationCheck: Send + Sync {
    /// Unique name, used in [`ValidationOptions::disable`].
    fn name(&self) -> &'static str;

    fn check_class(&self, cx: &mut CheckContext<'_>, class: &Class);
}

#[derive(Default)]
pub struct ValidationRegistry {
    checks: IndexMap<SmolStr, Box<dyn ValidationCheck>>,
}

impl ValidationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in checks.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for check in builtin_checks() {
            registry.checks.insert(SmolStr::new(check.name()), check);
        }
        registry
    }

    /// Register a check; names must be unique.
    pub fn register(&mut self, check: impl ValidationCheck + 'static) -> ValidationResult<()> {
        self.register_boxed(Box::new(check))
    }

    fn register_boxed(&mut self, check: Box<dyn ValidationCheck>) -> ValidationResult<()> {
        let name = SmolStr::new(check.name());
        if self.checks.contains_key(&name) {
            return Err(ValidationError::duplicate_check(name));
        }
        self.checks.insert(name, check);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &dyn ValidationCheck> {
        self.checks.values().map(|check| &**check)
    }
}

fn builtin_checks() -> Vec<Box<dyn ValidationCheck>> {
    vec![Box::new(DefaultValueCheck), Box::new(DuplicateAttributeCheck)]
}

/// Register the built-in checks into an existing registry.
pub fn register_validation_checks(registry: &mut ValidationRegistry) -> ValidationResult<()> {
    for check in builtin_checks() {
        registry.register_boxed(check)?;
    }
    Ok(())
}
