//! Diagnostics — Semantic error reporting.
//!
//! Diagnostic values produced by validation passes. The host decides how
//! to present them; nothing here speaks an editor protocol.

use std::collections::HashSet;
use std::sync::Arc;

use crate::base::{FileId, Span};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: FileId,
    /// Source range to highlight.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0101").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Optional related information.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub struct RelatedInfo {
    /// The file containing this info.
    pub file: FileId,
    pub span: Span,
    /// The message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(file: FileId, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self::new(file, span, Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(file: FileId, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self::new(file, span, Severity::Warning, message)
    }

    fn new(file: FileId, span: Span, severity: Severity, message: impl Into<Arc<str>>) -> Self {
        Self {
            file,
            span,
            severity,
            code: None,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes for attribute validation.
///
/// ## Error Code Ranges
///
/// - **E0101-E0199**: Attribute value and declaration errors
pub mod codes {
    /// Default value category does not match the declared type.
    pub const TYPE_MISMATCH: &str = "E0101";
    /// Array attribute assigned a non-array value.
    pub const EXPECTED_ARRAY: &str = "E0102";
    /// Array element category does not match the element type.
    pub const ARRAY_ELEMENT_MISMATCH: &str = "E0103";
    /// Single-valued attribute assigned an array.
    pub const UNEXPECTED_ARRAY: &str = "E0104";
    /// Declared type has no literal value form.
    pub const UNSUPPORTED_DEFAULT: &str = "E0105";
    /// Attribute declared twice in one class.
    pub const DUPLICATE_ATTRIBUTE: &str = "E0106";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during validation.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics for a specific file.
    pub fn diagnostics_for_file(&self, file: FileId) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.file == file).collect()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Take all diagnostics with duplicates removed, keeping first occurrences.
    pub fn take_deduplicated(&mut self) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        self.take()
            .into_iter()
            .filter(|d| seen.insert((d.file, d.span, d.message.clone())))
            .collect()
    }

    /// Clear all diagnostics.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
