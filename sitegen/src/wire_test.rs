use super::*;

#[test]
fn generate_request_serializes_prompt_field() {
    let json = serde_json::to_value(GenerateRequest { prompt: "hi".into() }).unwrap();
    assert_eq!(json, serde_json::json!({ "prompt": "hi" }));
}

#[test]
fn error_body_retryable_defaults_to_false() {
    let body: ErrorBody = serde_json::from_str(r#"{"code":"E_X","message":"nope"}"#).unwrap();
    assert!(!body.retryable);
}

#[test]
fn decode_success() {
    let resp = decode_generate_response(200, r#"{"text":"<html></html>","model":"gemini-2.5-flash"}"#).unwrap();
    assert_eq!(resp.text, "<html></html>");
    assert_eq!(resp.model, "gemini-2.5-flash");
}

#[test]
fn decode_error_body_keeps_service_message() {
    let err = decode_generate_response(
        429,
        r#"{"code":"E_API_RESPONSE","message":"quota exceeded","retryable":true}"#,
    )
    .unwrap_err();
    assert_eq!(err, GenerationError::Service { status: Some(429), message: Some("quota exceeded".into()) });
    assert_eq!(err.user_message(), "quota exceeded");
}

#[test]
fn decode_non_json_error_uses_fallback_message() {
    let err = decode_generate_response(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, GenerationError::Service { status: Some(502), message: None });
    assert_eq!(err.user_message(), crate::generate::FALLBACK_FAILURE_MESSAGE);
}

#[test]
fn decode_malformed_success_body_is_service_error() {
    let err = decode_generate_response(200, "not json").unwrap_err();
    assert!(matches!(err, GenerationError::Service { status: Some(200), message: Some(_) }));
}

#[test]
fn decode_blank_text_is_empty_response() {
    let err = decode_generate_response(200, r#"{"text":"   ","model":"m"}"#).unwrap_err();
    assert_eq!(err, GenerationError::EmptyResponse);
}
