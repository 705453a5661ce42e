mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use tarot_backend::test_support::{create_test_app_builder, create_test_state};
use tarot_backend::{AppError, ErrorCode};

async fn failing_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::UnknownSpread, "Example failure"))
}

async fn internal_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("database password is hunter2"))
}

#[actix_web::test]
async fn test_error_shape() {
    let state = create_test_state().build().expect("build test state");
    let app = create_test_app_builder(state)
        .with_routes(|cfg| {
            cfg.route("/_test/error", web::get().to(failing_handler));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = common::assert_problem_details_from_service_response(
        resp,
        "UNKNOWN_SPREAD",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("Example failure"),
    )
    .await;
    assert_eq!(problem.title, "Unknown Spread");
    assert_eq!(problem.type_, "https://tarot.local/errors/unknown_spread");
}

#[actix_web::test]
async fn internal_errors_hide_their_cause() {
    let state = create_test_state().build().expect("build test state");
    let app = create_test_app_builder(state)
        .with_routes(|cfg| {
            cfg.route("/_test/internal", web::get().to(internal_handler));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/internal").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = common::assert_problem(resp, StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL").await;
    assert!(!problem.detail.contains("hunter2"));
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request_problem() {
    let state = create_test_state().build().expect("build test state");
    let app = create_test_app_builder(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/readings")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    common::assert_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}
