//! Wire compatibility: the envelope shapes must serialize bit-exact.

use faultline::codes::{CourseCode, ErrorCode, RateCode};
use faultline::{create_error_response, create_success_response};
use serde_json::json;

#[test]
fn error_envelope_matches_the_wire_contract() {
    let resp = create_error_response(ErrorCode::Rate(RateCode::LimitExceeded), None);
    assert_eq!(resp.status, 429);
    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        json!({
            "success": false,
            "error": {
                "code": "FL-RATE-001",
                "message": "You are doing that too often. Please slow down and try again.",
                "retryable": true,
            }
        })
    );
}

#[test]
fn success_envelope_allows_extra_top_level_fields() {
    let resp = create_success_response(json!({"courses": []}))
        .with_extra("total", json!(0))
        .with_extra("cursor", json!(null));
    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        json!({
            "success": true,
            "data": {"courses": []},
            "total": 0,
            "cursor": null,
        })
    );
}

#[test]
fn the_discriminant_is_the_only_shape_signal() {
    let error = serde_json::to_value(create_error_response(
        ErrorCode::Course(CourseCode::NotFound),
        None,
    ))
    .unwrap();
    let success = serde_json::to_value(create_success_response(json!(1))).unwrap();

    assert_eq!(error["success"], false);
    assert_eq!(success["success"], true);
    assert!(error.get("data").is_none());
    assert!(success.get("error").is_none());
    // Exactly the two envelope shapes; no third.
    assert_eq!(error.as_object().unwrap().len(), 2);
    assert_eq!(success.as_object().unwrap().len(), 2);
}

#[test]
fn every_code_produces_a_serializable_envelope() {
    for code in ErrorCode::all() {
        let resp = create_error_response(*code, None);
        let wire = serde_json::to_value(&resp).unwrap();
        assert_eq!(wire["error"]["code"], code.code());
        assert_eq!(wire["error"]["retryable"], code.is_retryable());
        assert!(resp.status >= 400);
    }
}
