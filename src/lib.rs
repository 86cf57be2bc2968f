//! # kerno-base
//!
//! Core library for semantic validation of Kerno metamodels: checking that
//! attribute values conform to their declared types.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! validation → Checks, registry, diagnostics
//!   ↓
//! semantic   → Type/value correspondence and conformance queries
//!   ↓
//! syntax     → AST node types handed over by the host parser
//!   ↓
//! base       → Primitives (FileId, Position, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → semantic → validation)
// ============================================================================

/// Foundation types: FileId, Position, Span
pub mod base;

/// Syntax: AST node types for attributes and literal values
pub mod syntax;

/// Semantic analysis: type/value conformance
pub mod semantic;

/// Validation passes producing diagnostics
pub mod validation;

// Re-export foundation types
pub use base::{FileId, Position, Span};

// Re-export the conformance queries
pub use semantic::{
    ArrayCheck, check_array_value_types, check_value_type, value_checker_for_type,
    value_type_name_for_type,
};
