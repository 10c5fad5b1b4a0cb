use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{self, MockLlm, text_response};

fn prompt(description: &str) -> String {
    sitegen::prompt::compose(description).into_text()
}

// =========================================================================
// validation
// =========================================================================

#[tokio::test]
async fn blank_prompt_rejected_without_calling_llm() {
    let mock = Arc::new(MockLlm::replying("<html></html>"));
    let state = test_helpers::test_app_state_with_llm(mock.clone());
    for input in [String::new(), "   \n".into(), prompt(""), prompt("  \t")] {
        let err = generate(&state, &input).await.unwrap_err();
        assert!(matches!(err, GenerateError::BlankPrompt));
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn missing_llm_reports_not_configured() {
    let state = test_helpers::test_app_state();
    let err = generate(&state, &prompt("a bakery")).await.unwrap_err();
    assert!(matches!(err, GenerateError::LlmNotConfigured));
    assert_eq!(err.error_code(), "E_LLM_NOT_CONFIGURED");
    assert!(!err.retryable());
}

// =========================================================================
// success
// =========================================================================

#[tokio::test]
async fn forwards_prompt_as_single_user_message() {
    let mock = Arc::new(MockLlm::replying("```html\n<html></html>\n```"));
    let state = test_helpers::test_app_state_with_llm(mock.clone());
    let input = prompt("a bakery landing page");

    let generated = generate(&state, &input).await.unwrap();
    assert_eq!(generated.text, "```html\n<html></html>\n```");
    assert_eq!(generated.model, "mock-model");

    let calls = mock.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, state.max_tokens);
    assert_eq!(calls[0].1, vec![Message::user(input)]);
}

#[tokio::test]
async fn configured_token_limit_is_forwarded() {
    let mock = Arc::new(MockLlm::replying("<html></html>"));
    let state = AppState::new(Some(mock.clone()), Some(32_000));
    generate(&state, &prompt("x")).await.unwrap();
    assert_eq!(mock.calls.lock().unwrap()[0].0, Some(32_000));
}

#[tokio::test]
async fn default_state_leaves_token_limit_to_provider() {
    let mock = Arc::new(MockLlm::replying("<html></html>"));
    let state = test_helpers::test_app_state_with_llm(mock.clone());
    generate(&state, &prompt("x")).await.unwrap();
    assert_eq!(mock.calls.lock().unwrap()[0].0, None);
}

#[tokio::test]
async fn provider_model_name_wins_over_configured() {
    let mut response = text_response("<html></html>");
    response.model = "gemini-2.5-flash-001".into();
    let mock = Arc::new(MockLlm::new(vec![Ok(response)]));
    let state = test_helpers::test_app_state_with_llm(mock);
    let generated = generate(&state, &prompt("x")).await.unwrap();
    assert_eq!(generated.model, "gemini-2.5-flash-001");
}

// =========================================================================
// failures
// =========================================================================

#[tokio::test]
async fn empty_text_is_an_error() {
    let mock = Arc::new(MockLlm::replying("  \n "));
    let state = test_helpers::test_app_state_with_llm(mock);
    let err = generate(&state, &prompt("x")).await.unwrap_err();
    assert!(matches!(err, GenerateError::EmptyResponse));
    assert!(err.retryable());
}

#[tokio::test]
async fn provider_error_carries_provider_message() {
    let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
    let mock = Arc::new(MockLlm::new(vec![Err(LlmError::ApiResponse { status: 400, body: body.into() })]));
    let state = test_helpers::test_app_state_with_llm(mock);
    let err = generate(&state, &prompt("x")).await.unwrap_err();
    assert_eq!(err.error_code(), "E_API_RESPONSE");
    assert_eq!(err.user_message(), "API key not valid.");
    assert!(!err.retryable());
}

#[tokio::test]
async fn transport_error_falls_back_to_display() {
    let mock = Arc::new(MockLlm::new(vec![Err(LlmError::ApiRequest("connection reset".into()))]));
    let state = test_helpers::test_app_state_with_llm(mock);
    let err = generate(&state, &prompt("x")).await.unwrap_err();
    assert_eq!(err.user_message(), "API request failed: connection reset");
    assert!(err.retryable());
}

#[test]
fn is_blank_ignores_preamble() {
    assert!(is_blank(sitegen::prompt::PREAMBLE));
    assert!(!is_blank(&prompt("portfolio")));
    assert!(!is_blank("just a description"));
}
