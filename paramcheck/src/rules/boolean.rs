//! Boolean parameter rules at two levels of tolerance

use serde_json::Value;

use super::display_value;
use crate::rule::{Rule, RuleOutcome};

/// Accepts exactly boolean `true` or `false`, in either mode.
pub struct StrictBoolean;

impl Rule for StrictBoolean {
    fn apply(&self, value: &Value, _strict: bool) -> RuleOutcome {
        match value.as_bool() {
            Some(b) => RuleOutcome::pass(b),
            None => RuleOutcome::fail(format!(
                "'{}' did not match true or false.",
                display_value(value)
            )),
        }
    }
}

/// Parses boolean-ish values into a real boolean.
///
/// Booleans and the numbers 0/1 always pass; anything else must be a
/// string. `"true"`/`"false"` parse case-insensitively in both modes;
/// lenient mode additionally accepts `"t"`, `"1"`, `"yes"` and `"f"`,
/// `"0"`, `"no"`.
pub struct SemanticBoolean;

impl Rule for SemanticBoolean {
    fn apply(&self, value: &Value, strict: bool) -> RuleOutcome {
        if let Some(b) = value.as_bool() {
            return RuleOutcome::pass(b);
        }
        if let Some(n) = value.as_f64() {
            if n == 0.0 || n == 1.0 {
                return RuleOutcome::pass(n == 1.0);
            }
        }
        let Some(text) = value.as_str() else {
            return RuleOutcome::fail(format!(
                "'{}' is not a boolean or string.",
                display_value(value)
            ));
        };

        let lowered = text.to_lowercase();
        let truthy: &[&str] = if strict {
            &["true"]
        } else {
            &["true", "t", "1", "yes"]
        };
        let falsy: &[&str] = if strict {
            &["false"]
        } else {
            &["false", "f", "0", "no"]
        };

        if truthy.contains(&lowered.as_str()) {
            RuleOutcome::pass(true)
        } else if falsy.contains(&lowered.as_str()) {
            RuleOutcome::pass(false)
        } else {
            RuleOutcome::fail(format!(
                "'{}' did not match a boolean value.",
                display_value(value)
            ))
        }
    }
}
