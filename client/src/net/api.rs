//! HTTP generation client.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): reports a transport error since generation is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a `GenerationError` so the workbench can settle and
//! show a toast instead of leaving the UI stuck in the generating state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use sitegen::prompt::PromptRequest;
use sitegen::{GenerationClient, GenerationError, GenerationResult};

#[cfg(any(test, not(feature = "hydrate")))]
const NOT_AVAILABLE: &str = "not available on server";

/// Calls the server's generation endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGenerationClient;

#[cfg(feature = "hydrate")]
fn transport(e: &gloo_net::Error) -> GenerationError {
    GenerationError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, request: &PromptRequest) -> GenerationResult {
        #[cfg(feature = "hydrate")]
        {
            let body = sitegen::wire::GenerateRequest { prompt: request.text().to_owned() };
            let resp = gloo_net::http::Request::post(sitegen::wire::GENERATE_PATH)
                .json(&body)
                .map_err(|e| transport(&e))?
                .send()
                .await
                .map_err(|e| transport(&e))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| transport(&e))?;
            let decoded = sitegen::wire::decode_generate_response(status, &text)?;
            log::info!("generate: {} bytes from {}", decoded.text.len(), decoded.model);
            Ok(decoded.text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(GenerationError::Transport(NOT_AVAILABLE.to_owned()))
        }
    }
}
