//! Validating round-trip booking parameters
//!
//! Shows the typical call site: build the per-field rule chains once, then
//! validate incoming parameters in lenient mode so messy but recoverable
//! input (lowercase codes, "yes"/"no" flags) is normalized instead of
//! rejected.

use std::collections::HashMap;

use anyhow::Result;
use paramcheck::rules::{DomesticUsAirport, IataCode, SemanticBoolean, StrictBoolean};
use paramcheck::{FieldValidation, ValidationRequest, Validator};
use serde_json::{json, Value};

fn params(value: Value) -> HashMap<String, Value> {
    value
        .as_object()
        .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

fn booking_request(values: HashMap<String, Value>) -> ValidationRequest {
    ValidationRequest::new(values)
        .field(
            FieldValidation::new("o")
                .rule(IataCode)
                .rule(DomesticUsAirport),
        )
        .field(
            FieldValidation::new("d")
                .rule(IataCode)
                .rule(DomesticUsAirport),
        )
        .field(FieldValidation::new("isRoundTrip").rule(SemanticBoolean))
        .field(FieldValidation::new("isTestingEnv").rule(StrictBoolean))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let validator = Validator::new();

    // Messy but recoverable input: lenient mode normalizes it.
    let messy = params(json!({
        "o": "mia", "d": "  nyc ", "isRoundTrip": "yes", "isTestingEnv": false
    }));
    let booked = validator.validate(&booking_request(messy))?;
    println!("normalized booking: {}", serde_json::to_string(&booked)?);
    if booked["isRoundTrip"] == json!(true) {
        println!("quoting a round trip from {} to {}", booked["o"], booked["d"]);
    }

    // Several fields are wrong at once; all of them are reported together.
    let invalid = params(json!({
        "o": "MIAMIA", "d": "YYZ", "isRoundTrip": "maybe", "isTestingEnv": false
    }));
    match validator.validate(&booking_request(invalid)) {
        Ok(_) => println!("unexpectedly valid"),
        Err(err) => {
            println!("rejected with {} problems:", err.messages().len());
            for message in err.messages() {
                println!("  - {message}");
            }
        }
    }

    Ok(())
}
