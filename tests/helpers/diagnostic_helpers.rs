//! Diagnostic assertion helpers for validation tests.

use kerno::FileId;
use kerno::syntax::Metamodel;
use kerno::validation::{Diagnostic, Severity, validate_metamodel};

/// Validate a model as file 0.
pub fn diagnostics_for(model: &Metamodel) -> Vec<Diagnostic> {
    validate_metamodel(model, FileId::new(0))
}

/// Get only error-level diagnostics.
pub fn errors_for(model: &Metamodel) -> Vec<Diagnostic> {
    diagnostics_for(model)
        .into_iter()
        .filter(|d| d.severity == Severity::Error)
        .collect()
}

/// Diagnostics carrying the given code.
pub fn with_code<'a>(diagnostics: &'a [Diagnostic], code: &str) -> Vec<&'a Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.code.as_deref() == Some(code))
        .collect()
}

/// Assert a model has no errors.
pub fn assert_no_errors(model: &Metamodel) {
    let errors = errors_for(model);
    assert!(
        errors.is_empty(),
        "Expected no errors, got {} error(s):\n{}",
        errors.len(),
        errors
            .iter()
            .map(|e| format!("  Line {}: {}", e.span.start.line + 1, e.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
