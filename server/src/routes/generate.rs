//! `POST /api/generate` — protocol translation for the generate service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sitegen::wire::{ErrorBody, GenerateRequest, GenerateResponse};

use crate::error::ErrorCode;
use crate::llm::types::LlmError;
use crate::services::generate::{self as service, GenerateError};
use crate::state::AppState;

/// Map a service error to the HTTP status the browser sees.
pub(crate) fn generate_error_to_status(err: &GenerateError) -> StatusCode {
    match err {
        GenerateError::BlankPrompt => StatusCode::BAD_REQUEST,
        GenerateError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        GenerateError::Llm(LlmError::ApiResponse { status: 429, .. }) => StatusCode::TOO_MANY_REQUESTS,
        GenerateError::Llm(_) | GenerateError::EmptyResponse => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) fn error_response(err: &GenerateError) -> Response {
    let body = ErrorBody {
        code: err.error_code().to_string(),
        message: err.user_message(),
        retryable: err.retryable(),
    };
    (generate_error_to_status(err), Json(body)).into_response()
}

pub async fn generate(State(state): State<AppState>, Json(request): Json<GenerateRequest>) -> Response {
    match service::generate(&state, &request.prompt).await {
        Ok(generated) => Json(GenerateResponse { text: generated.text, model: generated.model }).into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
