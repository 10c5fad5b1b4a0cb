//! Anthropic Messages API client (`/v1/messages`).

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http;
use super::types::{ChatResponse, ContentBlock, LlmError, Message};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The Messages API requires a limit; used when the caller sets none.
pub const DEFAULT_MAX_TOKENS: u32 = 16_384;

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: http::build_client(timeouts)?, api_key })
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, non-200 status, or unparseable body.
    pub async fn chat(
        &self,
        model: &str,
        max_tokens: Option<u32>,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let request = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);
        let body = build_request(model, max_tokens, system, messages);
        parse_response(&http::post_json(request, &body).await?)
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    system: &'a str,
    messages: &'a [Message],
}

fn build_request<'a>(
    model: &'a str,
    max_tokens: Option<u32>,
    system: &'a str,
    messages: &'a [Message],
) -> MessagesRequest<'a> {
    MessagesRequest { model, max_tokens: max_tokens.unwrap_or(DEFAULT_MAX_TOKENS), system, messages }
}

#[derive(Deserialize)]
struct MessagesReply {
    content: Vec<ContentBlock>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    usage: TokenUsage,
}

#[derive(Deserialize)]
struct TokenUsage {
    input_tokens: u64,
    output_tokens: u64,
}

impl From<MessagesReply> for ChatResponse {
    fn from(reply: MessagesReply) -> Self {
        let MessagesReply { mut content, model, stop_reason, usage } = reply;
        content.retain(|block| !matches!(block, ContentBlock::Unknown));
        Self {
            content,
            model,
            stop_reason: stop_reason.unwrap_or_else(|| "end_turn".into()),
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }
    }
}

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    serde_json::from_str::<MessagesReply>(json)
        .map(ChatResponse::from)
        .map_err(|e| LlmError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
