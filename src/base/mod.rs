//! Foundation types for the Kerno toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Opaque source file identifiers
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//!
//! This module has NO dependencies on other kerno modules.

mod file_id;
mod position;

pub use file_id::FileId;
pub use position::{Position, Span};
