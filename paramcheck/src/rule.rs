//! The rule contract: pure, strict-aware checks over dynamic values
//!
//! A rule receives a field's current value and the request's strict flag,
//! and either passes back a (possibly transformed) replacement value or
//! fails with a message. The validation engine is agnostic to what rules
//! check or how they word their messages.

use serde_json::Value;

/// Outcome of applying one rule to a field value.
///
/// Exactly one variant is populated by construction; `Pass` carries the
/// value the next rule in the chain (or the final output) will see.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// The value to carry forward, possibly transformed.
    Pass(Value),
    /// Human-readable reason the value was rejected.
    Fail(String),
}

impl RuleOutcome {
    /// Accept the value, possibly transformed.
    pub fn pass(value: impl Into<Value>) -> Self {
        RuleOutcome::Pass(value.into())
    }

    /// Reject the value with a message.
    pub fn fail(message: impl Into<String>) -> Self {
        RuleOutcome::Fail(message.into())
    }

    /// Check if this outcome accepts the value.
    pub fn is_pass(&self) -> bool {
        matches!(self, RuleOutcome::Pass(_))
    }

    /// Check if this outcome rejects the value.
    pub fn is_fail(&self) -> bool {
        matches!(self, RuleOutcome::Fail(_))
    }
}

/// One validation step in a field's rule chain.
///
/// Rules must be pure and synchronous: same inputs, same outcome, no I/O.
/// Invalid user input is always a `Fail` outcome, never a panic.
pub trait Rule {
    /// Apply this rule to `value` under the given strict mode.
    fn apply(&self, value: &Value, strict: bool) -> RuleOutcome;
}

/// Plain closures with the rule signature are rules.
impl<F> Rule for F
where
    F: Fn(&Value, bool) -> RuleOutcome,
{
    fn apply(&self, value: &Value, strict: bool) -> RuleOutcome {
        self(value, strict)
    }
}
