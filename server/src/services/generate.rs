//! Generate service — composed prompt → raw model text.
//!
//! DESIGN
//! ======
//! The browser composes the prompt (preamble + description) and the server
//! forwards it as a single user message. One attempt per request, no retry.
//! Extraction of the HTML document happens in the browser so the raw text is
//! returned untouched.

use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::llm::types::{LlmError, Message};
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("prompt is blank")]
    BlankPrompt,
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("model returned an empty response")]
    EmptyResponse,
}

impl ErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BlankPrompt => "E_BLANK_PROMPT",
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::Llm(e) => e.error_code(),
            Self::EmptyResponse => "E_EMPTY_RESPONSE",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Llm(e) => e.retryable(),
            Self::EmptyResponse => true,
            Self::BlankPrompt | Self::LlmNotConfigured => false,
        }
    }
}

impl GenerateError {
    /// Message safe to show to the user. Prefers the provider's own wording.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Llm(e) => e.provider_message().unwrap_or_else(|| e.to_string()),
            other => other.to_string(),
        }
    }
}

/// Raw model output for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    pub model: String,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Whether `prompt` carries no description, with or without the preamble.
fn is_blank(prompt: &str) -> bool {
    prompt
        .strip_prefix(sitegen::prompt::PREAMBLE)
        .unwrap_or(prompt)
        .trim()
        .is_empty()
}

/// Send `prompt` to the configured model and return its text.
///
/// # Errors
///
/// Blank prompts, a missing LLM client, provider failures, and empty replies
/// are all reported as [`GenerateError`].
pub async fn generate(state: &AppState, prompt: &str) -> Result<Generated, GenerateError> {
    if is_blank(prompt) {
        return Err(GenerateError::BlankPrompt);
    }
    let llm = state.llm.as_ref().ok_or(GenerateError::LlmNotConfigured)?;

    info!(model = llm.model(), prompt_len = prompt.len(), "generate: calling LLM");
    let messages = [Message::user(prompt)];
    let response = llm
        .chat(state.max_tokens, "", &messages)
        .await
        .inspect_err(|e| warn!(error = %e, "generate: LLM call failed"))?;

    info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "generate: LLM response"
    );
    if response.stop_reason == "max_tokens" {
        warn!(max_tokens = ?state.max_tokens, "generate: output truncated at token limit");
    }

    let text = response.text();
    if text.trim().is_empty() {
        warn!("generate: empty response");
        return Err(GenerateError::EmptyResponse);
    }

    let model = if response.model.is_empty() { llm.model().to_string() } else { response.model };
    Ok(Generated { text, model })
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
