//! The generation call seam.
//!
//! A [`GenerationClient`] performs exactly one attempt. There is no retry and
//! no timeout beyond what the transport provides; a failure ends the attempt
//! and the user may resubmit.

use crate::prompt::PromptRequest;

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;

/// Shown when a failure carries no usable message of its own.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to generate website. Please try again.";

/// Raw response text, or why there is none.
pub type GenerationResult = Result<String, GenerationError>;

/// Failure of a single generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with an error (auth, quota, model failure).
    #[error("generation service error (status {status:?}): {message:?}")]
    Service { status: Option<u16>, message: Option<String> },

    /// The service answered but the model produced no text.
    #[error("generation service returned an empty response")]
    EmptyResponse,
}

impl GenerationError {
    /// Message for the failure notice: the service's own wording when it
    /// gave one, otherwise [`FALLBACK_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        let provided = match self {
            Self::Transport(message) => Some(message.as_str()),
            Self::Service { message, .. } => message.as_deref(),
            Self::EmptyResponse => None,
        };
        provided
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_FAILURE_MESSAGE)
            .to_owned()
    }
}

/// Single-attempt call to a hosted text model.
///
/// Futures are not required to be `Send`: the browser transport is
/// single-threaded.
#[async_trait::async_trait(?Send)]
pub trait GenerationClient {
    /// Send the composed prompt and return the raw response text.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] for transport or service failures.
    async fn generate(&self, request: &PromptRequest) -> GenerationResult;
}

/// Run one generation attempt through `client`.
///
/// A blank response is reported as [`GenerationError::EmptyResponse`].
///
/// # Errors
///
/// Propagates the client's error.
pub async fn run<C>(client: &C, request: &PromptRequest) -> GenerationResult
where
    C: GenerationClient + ?Sized,
{
    log::info!("generate: dispatching prompt ({} bytes)", request.text().len());
    match client.generate(request).await {
        Ok(text) if text.trim().is_empty() => {
            log::warn!("generate: model returned empty text");
            Err(GenerationError::EmptyResponse)
        }
        Ok(text) => {
            log::debug!("generate: received {} bytes", text.len());
            Ok(text)
        }
        Err(e) => {
            log::warn!("generate: failed: {e}");
            Err(e)
        }
    }
}
