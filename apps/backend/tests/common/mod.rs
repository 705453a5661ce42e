#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

pub use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a success status and parse the JSON body.
pub async fn json_body(resp: ServiceResponse<BoxBody>, expected: StatusCode) -> Value {
    let status = resp.status();
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).expect("Response body should be valid UTF-8");
    assert_eq!(status, expected, "unexpected status, body: {text}");
    serde_json::from_str(text).unwrap_or_else(|_| panic!("Body is not JSON: {text}"))
}

/// Shorthand for the problem document assertions with no detail check.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike {
    assert_problem_details_from_service_response(resp, expected_code, expected_status, None).await
}

/// Card names of a reading view, in position order.
pub fn card_names(reading: &Value) -> Vec<String> {
    reading["cards"]
        .as_array()
        .expect("cards should be an array")
        .iter()
        .map(|c| c["name"].as_str().expect("card name").to_string())
        .collect()
}
