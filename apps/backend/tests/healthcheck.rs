mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use tarot_backend::test_support::{create_test_app_builder, create_test_state};

#[actix_web::test]
async fn test_health_endpoint() {
    let state = create_test_state().build().expect("build test state");
    let app = create_test_app_builder(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("x-trace-id"));
    let body = common::json_body(resp, StatusCode::OK).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["spreads"], 8);
    assert_eq!(body["interpreter"], "static");
    assert!(body["app_version"].is_string());
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
}
