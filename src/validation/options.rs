//! Validator configuration.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// Options controlling which checks run and how their output is shaped.
#[derive(Clone, Debug)]
pub struct ValidationOptions {
    disabled_checks: FxHashSet<SmolStr>,
    deduplicate: bool,
    max_element_diagnostics: Option<usize>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            disabled_checks: FxHashSet::default(),
            deduplicate: true,
            max_element_diagnostics: None,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the check registered under `name`.
    pub fn disable(mut self, name: impl Into<SmolStr>) -> Self {
        self.disabled_checks.insert(name.into());
        self
    }

    /// Drop diagnostics repeating the same (file, span, message).
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Report at most `max` mismatching elements per array attribute,
    /// followed by one summary diagnostic for the rest.
    pub fn with_max_element_diagnostics(mut self, max: usize) -> Self {
        self.max_element_diagnostics = Some(max);
        self
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled_checks.contains(name)
    }

    pub fn disabled_checks(&self) -> impl Iterator<Item = &SmolStr> {
        self.disabled_checks.iter()
    }

    pub fn deduplicate(&self) -> bool {
        self.deduplicate
    }

    pub fn max_element_diagnostics(&self) -> Option<usize> {
        self.max_element_diagnostics
    }
}
