//! Error types for validator setup.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while assembling a [`Validator`](super::Validator).
///
/// Validation itself never fails; problems in the model are reported as
/// diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A check with this name is already registered.
    #[error("Duplicate validation check: {0}")]
    DuplicateCheck(SmolStr),

    /// Options refer to a check that is not registered.
    #[error("Unknown validation check: {0}")]
    UnknownCheck(SmolStr),
}

impl ValidationError {
    pub fn duplicate_check(name: impl Into<SmolStr>) -> Self {
        Self::DuplicateCheck(name.into())
    }

    pub fn unknown_check(name: impl Into<SmolStr>) -> Self {
        Self::UnknownCheck(name.into())
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
