//! # Semantic Analysis
//!
//! This module answers the semantic questions the validator asks about a
//! parsed metamodel. Today that is type/value conformance of attribute
//! default values.

pub mod types;

pub use types::{
    ArrayCheck, CORRESPONDENCE_TABLE, Correspondence, TypeCategory, ValueCategory, ValueChecker,
    check_array_value_types, check_value_type, value_checker_for_type, value_type_name_for_type,
};
