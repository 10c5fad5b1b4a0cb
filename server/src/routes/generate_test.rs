use std::sync::Arc;

use axum::body::to_bytes;

use super::*;
use crate::state::test_helpers::{self, MockLlm};

async fn call(state: AppState, prompt: &str) -> (StatusCode, serde_json::Value) {
    let response = generate(State(state), Json(GenerateRequest { prompt: prompt.into() })).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn status_mapping() {
    assert_eq!(generate_error_to_status(&GenerateError::BlankPrompt), StatusCode::BAD_REQUEST);
    assert_eq!(generate_error_to_status(&GenerateError::LlmNotConfigured), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(generate_error_to_status(&GenerateError::EmptyResponse), StatusCode::BAD_GATEWAY);
    let limited = GenerateError::Llm(LlmError::ApiResponse { status: 429, body: String::new() });
    assert_eq!(generate_error_to_status(&limited), StatusCode::TOO_MANY_REQUESTS);
    let upstream = GenerateError::Llm(LlmError::ApiResponse { status: 500, body: String::new() });
    assert_eq!(generate_error_to_status(&upstream), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn success_returns_raw_text_and_model() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(MockLlm::replying("Sure!\n<html></html>")));
    let (status, body) = call(state, "a portfolio").await;
    assert_eq!(status, StatusCode::OK);
    let decoded: GenerateResponse = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.text, "Sure!\n<html></html>");
    assert_eq!(decoded.model, "mock-model");
}

#[tokio::test]
async fn blank_prompt_is_bad_request() {
    let (status, body) = call(test_helpers::test_app_state(), "  ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E_BLANK_PROMPT");
    assert_eq!(body["retryable"], false);
}

#[tokio::test]
async fn unconfigured_llm_is_service_unavailable() {
    let (status, body) = call(test_helpers::test_app_state(), "a blog").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let decoded: ErrorBody = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.code, "E_LLM_NOT_CONFIGURED");
    assert_eq!(decoded.message, "LLM not configured");
}

#[tokio::test]
async fn provider_failure_surfaces_provider_message() {
    let body = r#"{"error":{"message":"Resource has been exhausted"}}"#;
    let mock = MockLlm::new(vec![Err(LlmError::ApiResponse { status: 429, body: body.into() })]);
    let state = test_helpers::test_app_state_with_llm(Arc::new(mock));
    let (status, body) = call(state, "a blog").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["message"], "Resource has been exhausted");
    assert_eq!(body["retryable"], true);
}

#[tokio::test]
async fn error_body_decodes_to_generation_error_message() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(MockLlm::replying("")));
    let response = generate(State(state), Json(GenerateRequest { prompt: "x".into() })).await;
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let err = sitegen::wire::decode_generate_response(status, std::str::from_utf8(&bytes).unwrap()).unwrap_err();
    assert_eq!(err.user_message(), "model returned an empty response");
}

#[tokio::test]
async fn healthz_ok() {
    assert_eq!(super::super::healthz().await, StatusCode::OK);
}
