//! Validation layer tests
//!
//! Tests for the attribute checks run over a metamodel:
//! - Default value conformance for single and array attributes
//! - Duplicate attribute detection
//! - Validator options

pub mod tests_default_values;
pub mod tests_duplicates;
