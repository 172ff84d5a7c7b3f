//! The validation engine: ordered rule chains with exhaustive error collection

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::rule::{Rule, RuleOutcome};

/// Which rules apply to one named field, and in what order.
///
/// Built once by the caller and reused for the lifetime of the request;
/// never mutated during validation.
pub struct FieldValidation {
    name: String,
    rules: Vec<Box<dyn Rule>>,
}

impl FieldValidation {
    /// Start an empty rule chain for the named field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule to the chain.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// The field name this chain applies to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

/// Input to [`Validator::validate`].
///
/// An absent key in `values` reaches the field's first rule as
/// [`Value::Null`]; rules decide whether missing input is acceptable.
pub struct ValidationRequest {
    /// Named input values.
    pub values: HashMap<String, Value>,
    /// Per-field rule chains, in reporting order.
    pub validations: Vec<FieldValidation>,
    /// Forwarded unchanged to every rule invocation.
    pub strict: bool,
}

impl ValidationRequest {
    /// Create a lenient request over the given values with no fields yet.
    pub fn new(values: HashMap<String, Value>) -> Self {
        Self {
            values,
            validations: Vec::new(),
            strict: false,
        }
    }

    /// Add a field's rule chain.
    pub fn field(mut self, validation: FieldValidation) -> Self {
        self.validations.push(validation);
        self
    }

    /// Set strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// The validation engine.
///
/// Applies every field's rule chain in order. Within one field the chain
/// short-circuits on the first failure, because later rules assume the
/// earlier normalization succeeded; across fields processing always
/// continues, so a single call reports every invalid field at once.
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate `request`, returning the normalized value mapping.
    ///
    /// On success the mapping holds, for every field named in
    /// `request.validations`, the value produced by its last rule. On
    /// failure no output is returned; the error carries one
    /// `"<field>: <message>"` entry per failing field.
    pub fn validate(&self, request: &ValidationRequest) -> Result<HashMap<String, Value>> {
        let mut errors = Vec::new();
        let mut normalized = HashMap::with_capacity(request.validations.len());

        for validation in &request.validations {
            let mut current = request
                .values
                .get(validation.name())
                .cloned()
                .unwrap_or(Value::Null);

            for rule in validation.rules() {
                match rule.apply(&current, request.strict) {
                    RuleOutcome::Pass(next) => current = next,
                    RuleOutcome::Fail(message) => {
                        errors.push(format!("{}: {message}", validation.name()));
                        break;
                    }
                }
            }

            // On an early break this is the pre-failure value; it is only
            // reachable by callers when every field passed.
            normalized.insert(validation.name().to_string(), current);
        }

        debug!(
            fields = request.validations.len(),
            errors = errors.len(),
            strict = request.strict,
            "validated parameters"
        );

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
