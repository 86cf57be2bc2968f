//! Validator — runs registered checks over a metamodel.

use tracing::{debug, trace};

use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::error::{ValidationError, ValidationResult};
use super::options::ValidationOptions;
use super::registry::{CheckContext, ValidationRegistry};
use crate::base::FileId;
use crate::syntax::Metamodel;

/// Runs the enabled checks of a registry over every class of a model.
///
/// A validator holds no per-run state, so one instance can serve any number
/// of files, including concurrently.
pub struct Validator {
    registry: ValidationRegistry,
    options: ValidationOptions,
}

impl Validator {
    /// Create a validator, rejecting options that disable unknown checks.
    pub fn new(registry: ValidationRegistry, options: ValidationOptions) -> ValidationResult<Self> {
        if let Some(unknown) = options
            .disabled_checks()
            .find(|name| !registry.contains(name))
        {
            return Err(ValidationError::unknown_check(unknown.clone()));
        }
        Ok(Self { registry, options })
    }

    /// A validator running the built-in checks with the given options.
    pub fn with_builtin_checks(options: ValidationOptions) -> ValidationResult<Self> {
        Self::new(ValidationRegistry::builtin(), options)
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    pub fn registry(&self) -> &ValidationRegistry {
        &self.registry
    }

    /// Validate a metamodel parsed from `file`.
    pub fn validate(&self, model: &Metamodel, file: FileId) -> Vec<Diagnostic> {
        debug!(
            model = %model.name,
            classes = model.classes.len(),
            "validating metamodel"
        );

        let mut collector = DiagnosticCollector::new();
        for check in self.registry.iter() {
            if !self.options.is_enabled(check.name()) {
                trace!(check = check.name(), "check disabled");
                continue;
            }

            let mut cx = CheckContext {
                file,
                model,
                options: &self.options,
                collector: &mut collector,
            };
            for class in &model.classes {
                check.check_class(&mut cx, class);
            }
        }

        let diagnostics = if self.options.deduplicate() {
            collector.take_deduplicated()
        } else {
            collector.take()
        };

        debug!(
            model = %model.name,
            diagnostics = diagnostics.len(),
            "validation finished"
        );
        diagnostics
    }
}

/// Validate a metamodel with the built-in checks and default options.
pub fn validate_metamodel(model: &Metamodel, file: FileId) -> Vec<Diagnostic> {
    let validator = Validator {
        registry: ValidationRegistry::builtin(),
        options: ValidationOptions::default(),
    };
    validator.validate(model, file)
}
