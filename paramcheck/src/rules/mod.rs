//! Bundled rules for common parameter shapes
//!
//! Sample rules that conform to the [`Rule`](crate::rule::Rule) contract:
//! format checks that normalize in lenient mode, boolean parsing at two
//! levels of tolerance, and whitelist membership. Applications are expected
//! to mix these with their own rules.

pub mod airport;
pub mod boolean;
pub mod code;

pub use airport::DomesticUsAirport;
pub use boolean::{SemanticBoolean, StrictBoolean};
pub use code::IataCode;

use serde_json::Value;

/// Render a value for interpolation into a rule message: strings bare,
/// everything else in its compact JSON form.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
