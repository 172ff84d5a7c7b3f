//! United States domestic airport whitelist rule

use serde_json::Value;

use super::display_value;
use crate::rule::{Rule, RuleOutcome};

// In a real deployment this list would come from a data source, not a
// hard-coded array.
const DOMESTIC_AIRPORTS: &[&str] = &["MIA", "NYC", "JFK", "LAX", "IAD", "SEA"];

/// Accepts airport codes served domestically within the US.
///
/// Membership is exact: `"NYC"`, never `"nyc"` or `" NYC "`. Normalization
/// is an upstream rule's job — chain this after
/// [`IataCode`](super::IataCode).
pub struct DomesticUsAirport;

impl Rule for DomesticUsAirport {
    fn apply(&self, value: &Value, _strict: bool) -> RuleOutcome {
        match value.as_str() {
            Some(code) if DOMESTIC_AIRPORTS.contains(&code) => RuleOutcome::pass(code.to_string()),
            _ => RuleOutcome::fail(format!(
                "'{}' is not a domestic airport for US.",
                display_value(value)
            )),
        }
    }
}
