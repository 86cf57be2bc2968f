//! Validation — Attribute checks over a parsed metamodel.
//!
//! The host calls [`Validator::validate`] during its validation pass and
//! renders the returned [`Diagnostic`]s however it likes.
//!
//! ## Built-in checks
//!
//! - `attribute-default-value` — default values conform to declared types
//! - `duplicate-attribute` — attribute names are unique per class

mod checks;
mod diagnostics;
mod error;
mod options;
mod registry;
mod validator;

pub use checks::{DefaultValueCheck, DuplicateAttributeCheck};
pub use diagnostics::{Diagnostic, DiagnosticCollector, RelatedInfo, Severity, codes};
pub use error::{ValidationError, ValidationResult};
pub use options::ValidationOptions;
pub use registry::{CheckContext, ValidationCheck, ValidationRegistry, register_validation_checks};
pub use validator::{Validator, validate_metamodel};
