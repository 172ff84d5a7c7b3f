//! Location-code format rule

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::display_value;
use crate::rule::{Rule, RuleOutcome};

static UPPERCASE_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Z]+$").expect("static pattern compiles"));

/// Accepts IATA-style codes: exactly 3 uppercase letters.
///
/// In lenient mode the value is first trimmed and uppercased, so `" mia "`
/// normalizes to `"MIA"`. In strict mode the value must already be in
/// canonical form. Passes the normalized string.
pub struct IataCode;

impl Rule for IataCode {
    fn apply(&self, value: &Value, strict: bool) -> RuleOutcome {
        let Some(raw) = value.as_str() else {
            return RuleOutcome::fail(format!("'{}' is not a string", display_value(value)));
        };

        let candidate = if strict {
            raw.to_string()
        } else {
            raw.trim().to_uppercase()
        };

        if candidate.chars().count() != 3 {
            return RuleOutcome::fail(format!("'{}' is not 3 characters", display_value(value)));
        }
        if !UPPERCASE_LETTERS.is_match(&candidate) {
            return RuleOutcome::fail(format!(
                "'{}' can only be uppercase letters",
                display_value(value)
            ));
        }

        RuleOutcome::pass(candidate)
    }
}
