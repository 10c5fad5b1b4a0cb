//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only after start-up: the optional LLM client and the token ceiling.
//! Generation keeps no per-user state on the server.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Output token ceiling; `None` leaves it to the provider.
    pub max_tokens: Option<u32>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, max_tokens: Option<u32>) -> Self {
        Self { llm, max_tokens }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
