//! Declarative parameter validation with chainable, strict-aware rules
//!
//! `paramcheck` validates a mapping of named input values against ordered
//! per-field rule chains. Rules may replace the value they check, so a chain
//! can normalize as it validates (trim-and-uppercase, then whitelist-check).
//! A single call either returns the fully normalized mapping or fails with
//! every violation collected across all fields.
//!
//! # Architecture
//!
//! - **Rule contract**: a rule is `(value, strict) -> RuleOutcome` — pure,
//!   synchronous, no I/O. The engine only inspects pass/fail.
//! - **Per-field short-circuit**: within one field, rules after a failure are
//!   skipped, because later rules assume the earlier normalization succeeded.
//! - **Cross-field aggregation**: processing always continues to the next
//!   field, so one call surfaces every invalid field at once.
//! - **Strict mode**: a flag forwarded unchanged to every rule. By convention
//!   `true` rejects anything not already canonical; `false` permits coercion.
//!
//! ```rust
//! use paramcheck::rules::{DomesticUsAirport, IataCode};
//! use paramcheck::{FieldValidation, ValidationRequest, Validator};
//! use serde_json::json;
//!
//! let values = [("origin".to_string(), json!(" mia "))].into();
//! let request = ValidationRequest::new(values).field(
//!     FieldValidation::new("origin")
//!         .rule(IataCode)
//!         .rule(DomesticUsAirport),
//! );
//!
//! let normalized = Validator::new().validate(&request).unwrap();
//! assert_eq!(normalized["origin"], json!("MIA"));
//! ```

pub mod error;
pub mod rule;
pub mod rules;
pub mod validator;

pub use error::{Result, ValidationError};
pub use rule::{Rule, RuleOutcome};
pub use validator::{FieldValidation, ValidationRequest, Validator};
