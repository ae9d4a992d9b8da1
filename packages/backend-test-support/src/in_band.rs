//! Assertions for the in-band error contract.
//!
//! Failures are reported with HTTP 200 and a body of the form
//! `{ "success": false, "error": <u16>, "message": <title>, "detail": .., "trace_id": .. }`.
//! These helpers only know the wire shape, not backend types.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct FailureLike {
    success: bool,
    error: u16,
    message: String,
    detail: String,
    trace_id: String,
}

/// Read a response that must be a success payload and return its JSON body.
pub async fn expect_success<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["success"],
        Value::Bool(true),
        "expected success payload, got {body}"
    );
    body
}

/// Assert that a response is an in-band failure with the given classification.
///
/// Checks the transport status stays 200, the body carries `success: false`,
/// and the `x-trace-id` header matches the body. Returns the parsed body.
pub async fn assert_in_band_failure<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_error: u16,
    expected_message: &str,
) -> Value {
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "in-band failures must keep transport status 200"
    );

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-trace-id header should be present");

    let body = test::read_body(resp).await;
    let raw: Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "failure body is not JSON: {}",
            String::from_utf8_lossy(&body)
        )
    });
    let failure: FailureLike = serde_json::from_value(raw.clone())
        .unwrap_or_else(|e| panic!("failure body has wrong shape ({e}): {raw}"));

    assert!(!failure.success, "expected success=false, got {raw}");
    assert_eq!(failure.error, expected_error, "error classification: {raw}");
    assert_eq!(failure.message, expected_message, "message: {raw}");
    assert!(!failure.detail.is_empty(), "detail should not be empty");
    assert_eq!(failure.trace_id, trace_header, "trace_id must match header");

    raw
}
