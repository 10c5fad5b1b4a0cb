use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_to_gemini() {
    let cfg = LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "secret")])).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Gemini);
    assert_eq!(cfg.model, "gemini-2.5-flash");
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(cfg.openai_mode, OpenAiApiMode::Responses);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn api_key_env_names_the_key_variable() {
    let cfg = LlmConfig::from_lookup(lookup(&[
        ("LLM_PROVIDER", "anthropic"),
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "sk-ant"),
    ]))
    .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
    assert_eq!(cfg.api_key, "sk-ant");
}

#[test]
fn parses_openai_overrides() {
    let cfg = LlmConfig::from_lookup(lookup(&[
        ("LLM_PROVIDER", "openai"),
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_OPENAI_MODE", "chat_completions"),
        ("LLM_OPENAI_BASE_URL", "https://example.test/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::OpenAi);
    assert_eq!(cfg.model, "gpt-4o");
    assert_eq!(cfg.openai_mode, OpenAiApiMode::ChatCompletions);
    assert_eq!(cfg.openai_base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn model_override_wins() {
    let cfg = LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k"), ("LLM_MODEL", "gemini-2.5-pro")])).unwrap();
    assert_eq!(cfg.model, "gemini-2.5-pro");
}

#[test]
fn gemini_base_url_trailing_slash_trimmed() {
    let cfg =
        LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k"), ("LLM_GEMINI_BASE_URL", "http://localhost:9/v1/")]))
            .unwrap();
    assert_eq!(cfg.gemini_base_url, "http://localhost:9/v1");
}

#[test]
fn invalid_timeout_falls_back_to_default() {
    let cfg = LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k"), ("LLM_REQUEST_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}

#[test]
fn missing_key_errors_with_variable_name() {
    let err = LlmConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "GEMINI_API_KEY"));
}

#[test]
fn blank_key_counts_as_missing() {
    let err = LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[test]
fn unknown_provider_errors() {
    let err = LlmConfig::from_lookup(lookup(&[("LLM_PROVIDER", "bad"), ("GEMINI_API_KEY", "k")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("unknown LLM_PROVIDER"));
}

#[test]
fn unknown_openai_mode_errors() {
    let err = LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k"), ("LLM_OPENAI_MODE", "bad_mode")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("unsupported openai_api mode"));
}
