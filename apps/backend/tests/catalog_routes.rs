mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use tarot_backend::config::ReadingConfig;
use tarot_backend::domain::{DeckVariant, SpreadDefinition};
use tarot_backend::test_support::{create_test_app_builder, create_test_state};

#[actix_web::test]
async fn lists_builtin_spreads_in_order() {
    let state = create_test_state().build().expect("build test state");
    let app = create_test_app_builder(state).build().await;

    let req = test::TestRequest::get().uri("/api/spreads").to_request();
    let body = common::json_body(test::call_service(&app, req).await, StatusCode::OK).await;

    let spreads = body.as_array().expect("array of spreads");
    let ids: Vec<&str> = spreads.iter().filter_map(|s| s["id"].as_str()).collect();
    assert_eq!(
        ids,
        [
            "one",
            "three",
            "mind-body-spirit",
            "career",
            "love",
            "horseshoe",
            "nine",
            "celtic-cross"
        ]
    );
    let celtic = &spreads[7];
    assert_eq!(celtic["required_count"], 10);
    assert_eq!(celtic["position_labels"].as_array().map(Vec::len), Some(10));
}

#[actix_web::test]
async fn lists_personas_and_decks() {
    let state = create_test_state().build().expect("build test state");
    let app = create_test_app_builder(state).build().await;

    let req = test::TestRequest::get().uri("/api/personas").to_request();
    let personas = common::json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let ids: Vec<&str> = personas
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, ["classic", "goth", "anime", "direct"]);

    let req = test::TestRequest::get().uri("/api/decks").to_request();
    let decks = common::json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let decks = decks.as_array().expect("array");
    assert_eq!(decks.len(), 3);
    assert_eq!(decks[0]["id"], "full");
    assert_eq!(decks[0]["size"], 78);
    assert_eq!(decks[0]["default"], true);
    assert_eq!(decks[1]["size"], 22);
    assert_eq!(decks[2]["size"], 26);
}

#[actix_web::test]
async fn configured_spreads_replace_the_builtin_table() {
    let config = ReadingConfig {
        reentry_window_ms: 0,
        default_deck: DeckVariant::MajorArcana,
        spreads: Some(vec![SpreadDefinition::new(
            "two",
            "Two Paths",
            &["Left", "Right"],
        )]),
        ..ReadingConfig::default()
    };
    let state = create_test_state()
        .with_reading_config(config)
        .build()
        .expect("build test state");
    let app = create_test_app_builder(state).build().await;

    let req = test::TestRequest::get().uri("/api/spreads").to_request();
    let body = common::json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], "two");

    let req = test::TestRequest::get().uri("/api/decks").to_request();
    let decks = common::json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(decks[1]["id"], "major-arcana");
    assert_eq!(decks[1]["default"], true);
}
