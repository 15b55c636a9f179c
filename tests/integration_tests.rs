mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use secrecy::ExposeSecret;

use common::{config, ScriptedModel, BRIEF_JSON, PHYSICS_JSON};
use open_brilliant_server::{
    app_state::AppState,
    config::GenerationMode,
    constants::{prompts::PROMPT_GENERATOR_SYSTEM, sample_questions::SAMPLE_QUESTIONS},
    errors::AppError,
    handlers,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    services::http_helpers::json_config,
};

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(json_config())
                .wrap(RequestIdMiddleware)
                .configure(handlers::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn empty_body_is_rejected_with_fixed_message() {
    let model = Arc::new(ScriptedModel::new(vec![]));
    let app = app!(AppState::with_model(config(GenerationMode::TwoStage), model.clone()));

    let req = test::TestRequest::post()
        .uri("/api/generate-physics")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Question is required" }));
    assert!(model.calls.lock().await.is_empty());
}

#[actix_web::test]
async fn malformed_body_is_a_client_error() {
    let model = Arc::new(ScriptedModel::new(vec![]));
    let app = app!(AppState::with_model(config(GenerationMode::Text), model));

    let req = test::TestRequest::post()
        .uri("/api/generate-physics")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn upstream_failure_is_reported_as_500() {
    let model = Arc::new(ScriptedModel::new(vec![Err(AppError::UpstreamError(
        "Invalid API key provided".to_string(),
    ))]));
    let app = app!(AppState::with_model(config(GenerationMode::Structured), model));

    let req = test::TestRequest::post()
        .uri("/api/generate-physics")
        .set_json(serde_json::json!({ "question": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid API key provided");
}

#[actix_web::test]
async fn two_stage_generation_returns_result_and_brief() {
    let model = Arc::new(ScriptedModel::new(vec![
        Ok(BRIEF_JSON.to_string()),
        Ok(PHYSICS_JSON.to_string()),
    ]));
    let app = app!(AppState::with_model(config(GenerationMode::TwoStage), model.clone()));

    let req = test::TestRequest::post()
        .uri("/api/generate-physics")
        .set_json(serde_json::json!({
            "question": "A ball is dropped from 30m height",
            "apiKey": "csk-client"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["code"], "<html></html>");
    assert_eq!(body["concepts"], serde_json::json!(["gravity"]));
    assert_eq!(body["generatedPrompt"]["topic"], "Free Fall");

    let calls = model.calls.lock().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].system, PROMPT_GENERATOR_SYSTEM);
    assert!(calls[1].prompt.contains("Animation Prompt: Drop a ball"));
    assert!(calls
        .iter()
        .all(|c| c.api_key.expose_secret() == "csk-client"));
}

#[actix_web::test]
async fn unreadable_output_is_served_as_fallback() {
    let model = Arc::new(ScriptedModel::new(vec![Ok(
        "I cannot produce JSON today".to_string()
    )]));
    let app = app!(AppState::with_model(config(GenerationMode::Text), model));

    let req = test::TestRequest::post()
        .uri("/api/generate-physics")
        .set_json(serde_json::json!({ "question": "pendulum" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["concepts"], serde_json::json!(["general physics"]));
    assert!(body.get("generatedPrompt").is_none());
}

#[actix_web::test]
async fn missing_key_is_a_client_error() {
    let mut config = config(GenerationMode::Structured);
    config.require_client_api_key = true;
    let app = app!(AppState::with_model(
        config,
        Arc::new(ScriptedModel::new(vec![]))
    ));

    let req = test::TestRequest::post()
        .uri("/api/generate-physics")
        .set_json(serde_json::json!({ "question": "pendulum" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("API key"));
}

#[actix_web::test]
async fn sample_questions_are_listed() {
    let app = app!(AppState::with_model(
        config(GenerationMode::TwoStage),
        Arc::new(ScriptedModel::new(vec![]))
    ));

    let req = test::TestRequest::get()
        .uri("/api/sample-questions")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), SAMPLE_QUESTIONS.len());
}
