//! OpenAI-compatible client. [`OpenAiApiMode`] picks `/chat/completions` or
//! `/responses`; either way the prompt goes out as text and comes back as
//! text blocks.

use serde::Deserialize;
use serde_json::{Value, json};

use super::config::{LlmTimeouts, OpenAiApiMode};
use super::http;
use super::types::{ChatResponse, ContentBlock, LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    mode: OpenAiApiMode,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, mode: OpenAiApiMode, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: http::build_client(timeouts)?, api_key, base_url, mode })
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
        let (path, body) = match self.mode {
            OpenAiApiMode::ChatCompletions => ("/chat/completions", completions_body(model, max_tokens, system, messages)),
            OpenAiApiMode::Responses => ("/responses", responses_body(model, max_tokens, system, messages)),
        };
        let request = self
            .http
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(&self.api_key);
        let text = http::post_json(request, &body).await?;
        match self.mode {
            OpenAiApiMode::ChatCompletions => parse_completion(&text),
            OpenAiApiMode::Responses => parse_reply(&text),
        }
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// A blank system prompt is left out rather than sent as an empty turn.
fn completions_body(model: &str, max_tokens: Option<u32>, system: &str, messages: &[Message]) -> Value {
    let mut turns = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        turns.push(json!({ "role": "system", "content": system }));
    }
    turns.extend(messages.iter().map(|m| json!({ "role": m.role, "content": m.content })));

    let mut body = json!({ "model": model, "messages": turns });
    if let Some(limit) = max_tokens {
        body["max_tokens"] = limit.into();
    }
    body
}

fn responses_body(model: &str, max_tokens: Option<u32>, system: &str, messages: &[Message]) -> Value {
    let input: Vec<Value> = messages
        .iter()
        .map(|m| {
            json!({
                "type": "message",
                "role": m.role,
                "content": [{ "type": "input_text", "text": m.content }],
            })
        })
        .collect();

    let mut body = json!({ "model": model, "input": input });
    if !system.is_empty() {
        body["instructions"] = system.into();
    }
    if let Some(limit) = max_tokens {
        body["max_output_tokens"] = limit.into();
    }
    body
}

// =============================================================================
// REPLIES
// =============================================================================

fn text_block(text: String) -> Option<ContentBlock> {
    (!text.is_empty()).then_some(ContentBlock::Text { text })
}

fn stop_reason(truncated: bool) -> String {
    let reason = if truncated { "max_tokens" } else { "end_turn" };
    reason.to_owned()
}

#[derive(Deserialize)]
struct Completion {
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: CompletionUsage,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Default)]
struct CompletionUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

fn parse_completion(json: &str) -> Result<ChatResponse, LlmError> {
    let completion: Completion = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let Some(choice) = completion.choices.into_iter().next() else {
        return Err(LlmError::ApiParse("chat completion has no choices".into()));
    };

    Ok(ChatResponse {
        content: choice.message.content.and_then(text_block).into_iter().collect(),
        model: completion.model,
        stop_reason: stop_reason(choice.finish_reason.as_deref() == Some("length")),
        input_tokens: completion.usage.prompt_tokens,
        output_tokens: completion.usage.completion_tokens,
    })
}

#[derive(Deserialize)]
struct Reply {
    #[serde(default)]
    model: String,
    #[serde(default)]
    output: Option<Vec<OutputItem>>,
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    incomplete_details: Option<Incomplete>,
    #[serde(default)]
    usage: ReplyUsage,
}

/// Only `message` items carry text; reasoning and tool items are skipped.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<OutputPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct OutputPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct Incomplete {
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Deserialize, Default)]
struct ReplyUsage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

fn parse_reply(json: &str) -> Result<ChatResponse, LlmError> {
    let reply: Reply = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let content = match reply.output {
        Some(items) => items
            .into_iter()
            .flat_map(|item| match item {
                OutputItem::Message { content } => content,
                OutputItem::Other => Vec::new(),
            })
            .filter(|part| matches!(part.kind.as_str(), "output_text" | "text"))
            .filter_map(|part| text_block(part.text))
            .collect(),
        None => reply.output_text.and_then(text_block).into_iter().collect(),
    };
    let truncated = reply.incomplete_details.and_then(|d| d.reason).as_deref() == Some("max_output_tokens");

    Ok(ChatResponse {
        content,
        model: reply.model,
        stop_reason: stop_reason(truncated),
        input_tokens: reply.usage.input_tokens,
        output_tokens: reply.usage.output_tokens,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
