//! JSON bodies exchanged between the browser and `POST /api/generate`.

use serde::{Deserialize, Serialize};

use crate::generate::GenerationError;

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;

/// Route of the generation endpoint.
pub const GENERATE_PATH: &str = "/api/generate";

/// Browser → server: the composed prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Server → browser: raw model output, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    pub model: String,
}

/// Server → browser on any non-2xx answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Grepable code such as `E_API_RESPONSE`.
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub retryable: bool,
}

/// Classify a non-2xx answer. `body` is `None` when it was not an [`ErrorBody`].
#[must_use]
pub fn generation_error(status: u16, body: Option<ErrorBody>) -> GenerationError {
    GenerationError::Service { status: Some(status), message: body.map(|b| b.message) }
}

/// Parse a response body returned with `status`.
///
/// # Errors
///
/// Non-2xx statuses, undecodable bodies, and empty text are all reported as
/// [`GenerationError`]s.
pub fn decode_generate_response(status: u16, body: &str) -> Result<GenerateResponse, GenerationError> {
    if !(200..300).contains(&status) {
        return Err(generation_error(status, serde_json::from_str(body).ok()));
    }
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Service { status: Some(status), message: Some(format!("invalid response: {e}")) })?;
    if response.text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(response)
}
