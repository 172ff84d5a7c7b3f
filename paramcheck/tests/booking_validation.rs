//! End-to-end validation of a round-trip booking parameter set
//!
//! Exercises the full pipeline — coercing format rules chained into a
//! whitelist check, boolean parsing at two tolerance levels — across both
//! lenient and strict modes.

use std::collections::HashMap;

use paramcheck::rules::{DomesticUsAirport, IataCode, SemanticBoolean, StrictBoolean};
use paramcheck::{FieldValidation, ValidationRequest, Validator};
use serde_json::{json, Value};

fn params(value: Value) -> HashMap<String, Value> {
    value
        .as_object()
        .expect("test fixture must be a JSON object")
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// The booking parameter set: origin and destination must be domestic
/// 3-letter codes, `isRoundTrip` tolerates boolean-ish input, and
/// `isTestingEnv` must be a real boolean.
fn booking_request(values: HashMap<String, Value>, strict: bool) -> ValidationRequest {
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
        .strict(strict)
}

#[test]
fn clean_input_passes_through_unchanged() {
    let values = params(json!({
        "o": "MIA", "d": "NYC", "isRoundTrip": true, "isTestingEnv": false
    }));
    let out = Validator::new()
        .validate(&booking_request(values.clone(), false))
        .unwrap();
    assert_eq!(out, values);
}

#[test]
fn lenient_mode_coerces_messy_input() {
    let out = Validator::new()
        .validate(&booking_request(
            params(json!({
                "o": "mia", "d": "  nyc ", "isRoundTrip": "1", "isTestingEnv": false
            })),
            false,
        ))
        .unwrap();
    assert_eq!(
        out,
        params(json!({
            "o": "MIA", "d": "NYC", "isRoundTrip": true, "isTestingEnv": false
        }))
    );
}

#[test]
fn lenient_mode_parses_the_informal_boolean_vocabulary() {
    for (raw, parsed) in [
        (json!("true"), true),
        (json!("1"), true),
        (json!(1), true),
        (json!("0"), false),
        (json!("NO"), false),
    ] {
        let out = Validator::new()
            .validate(&booking_request(
                params(json!({
                    "o": "MIA", "d": "NYC", "isRoundTrip": raw, "isTestingEnv": false
                })),
                false,
            ))
            .unwrap();
        assert_eq!(out["isRoundTrip"], json!(parsed));
    }
}

#[test]
fn foreign_destination_is_rejected() {
    let err = Validator::new()
        .validate(&booking_request(
            params(json!({
                "o": "MIA", "d": "YYZ", "isRoundTrip": true, "isTestingEnv": false
            })),
            false,
        ))
        .unwrap_err();
    assert_eq!(
        err.messages(),
        ["d: 'YYZ' is not a domestic airport for US."]
    );
}

#[test]
fn normalization_happens_before_the_whitelist_check() {
    // 'yyz' uppercases cleanly but is still not domestic.
    let err = Validator::new()
        .validate(&booking_request(
            params(json!({
                "o": "mia", "d": "yyz", "isRoundTrip": true, "isTestingEnv": false
            })),
            false,
        ))
        .unwrap_err();
    assert_eq!(
        err.messages(),
        ["d: 'yyz' is not a domestic airport for US."]
    );
}

#[test]
fn non_boolean_round_trip_values_are_rejected() {
    for bad in [json!(25), json!({}), json!("maybe")] {
        let err = Validator::new()
            .validate(&booking_request(
                params(json!({
                    "o": "MIA", "d": "NYC", "isRoundTrip": bad, "isTestingEnv": false
                })),
                false,
            ))
            .unwrap_err();
        assert_eq!(err.messages().len(), 1);
        assert!(err.messages()[0].starts_with("isRoundTrip: "));
    }
}

#[test]
fn string_false_is_not_a_strict_boolean() {
    let err = Validator::new()
        .validate(&booking_request(
            params(json!({
                "o": "MIA", "d": "NYC", "isRoundTrip": true, "isTestingEnv": "false"
            })),
            false,
        ))
        .unwrap_err();
    assert_eq!(
        err.messages(),
        ["isTestingEnv: 'false' did not match true or false."]
    );
}

#[test]
fn every_invalid_field_is_reported_at_once() {
    let err = Validator::new()
        .validate(&booking_request(
            params(json!({
                "o": "MIAMIA", "d": "NYCNYC", "isRoundTrip": true, "isTestingEnv": false
            })),
            false,
        ))
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "o: 'MIAMIA' is not 3 characters",
            "d: 'NYCNYC' is not 3 characters",
        ]
    );
}

#[test]
fn strict_mode_rejects_coercible_input() {
    let err = Validator::new()
        .validate(&booking_request(
            params(json!({
                "o": "mia", "d": "    NYC", "isRoundTrip": "yes", "isTestingEnv": true
            })),
            true,
        ))
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "o: 'mia' can only be uppercase letters",
            "d: '    NYC' is not 3 characters",
            "isRoundTrip: 'yes' did not match a boolean value.",
        ]
    );
}

#[test]
fn strict_mode_still_parses_canonical_boolean_strings() {
    let out = Validator::new()
        .validate(&booking_request(
            params(json!({
                "o": "MIA", "d": "NYC", "isRoundTrip": "true", "isTestingEnv": true
            })),
            true,
        ))
        .unwrap();
    assert_eq!(
        out,
        params(json!({
            "o": "MIA", "d": "NYC", "isRoundTrip": true, "isTestingEnv": true
        }))
    );
}

#[test]
fn missing_fields_fail_their_first_rule() {
    let err = Validator::new()
        .validate(&booking_request(params(json!({"o": "MIA"})), false))
        .unwrap_err();
    // d, isRoundTrip and isTestingEnv are all absent.
    assert_eq!(err.messages().len(), 3);
    assert_eq!(err.messages()[0], "d: 'null' is not a string");
}
