//! HTTP plumbing shared by the provider clients.
//!
//! Every provider is a JSON POST that answers 200 with a body to parse, or
//! something else with an error body worth keeping for the user.

use std::time::Duration;

use serde::Serialize;

use super::config::LlmTimeouts;
use super::types::LlmError;

/// Build a `reqwest` client with the configured timeouts.
pub(crate) fn build_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

/// Send `body` as JSON on a prepared request and return the raw response text.
pub(crate) async fn post_json(request: reqwest::RequestBuilder, body: &impl Serialize) -> Result<String, LlmError> {
    let response = request
        .json(body)
        .send()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    check_status(status, text)
}

/// Only 200 carries a parseable reply; anything else keeps its body.
pub(crate) fn check_status(status: u16, body: String) -> Result<String, LlmError> {
    if status == 200 { Ok(body) } else { Err(LlmError::ApiResponse { status, body }) }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
