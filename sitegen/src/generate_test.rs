use std::cell::{Cell, RefCell};

use super::*;
use crate::prompt::compose;

// =========================================================================
// MockClient
// =========================================================================

struct MockClient {
    responses: RefCell<Vec<GenerationResult>>,
    calls: Cell<usize>,
    last_prompt: RefCell<Option<String>>,
}

impl MockClient {
    fn new(responses: Vec<GenerationResult>) -> Self {
        Self { responses: RefCell::new(responses), calls: Cell::new(0), last_prompt: RefCell::new(None) }
    }
}

#[async_trait::async_trait(?Send)]
impl GenerationClient for MockClient {
    async fn generate(&self, request: &PromptRequest) -> GenerationResult {
        self.calls.set(self.calls.get() + 1);
        *self.last_prompt.borrow_mut() = Some(request.text().to_owned());
        self.responses.borrow_mut().remove(0)
    }
}

// =========================================================================
// run
// =========================================================================

#[tokio::test]
async fn run_returns_response_text() {
    let client = MockClient::new(vec![Ok("<html></html>".into())]);
    let request = compose("a page");
    let text = run(&client, &request).await.unwrap();
    assert_eq!(text, "<html></html>");
    assert_eq!(client.calls.get(), 1);
    assert_eq!(client.last_prompt.borrow().as_deref(), Some(request.text()));
}

#[tokio::test]
async fn run_maps_blank_response_to_empty_error() {
    let client = MockClient::new(vec![Ok("  \n ".into())]);
    let err = run(&client, &compose("x")).await.unwrap_err();
    assert_eq!(err, GenerationError::EmptyResponse);
}

#[tokio::test]
async fn run_propagates_client_error() {
    let client = MockClient::new(vec![Err(GenerationError::Transport("offline".into()))]);
    let err = run(&client, &compose("x")).await.unwrap_err();
    assert_eq!(err, GenerationError::Transport("offline".into()));
    assert_eq!(client.calls.get(), 1);
}

#[tokio::test]
async fn run_works_through_trait_object() {
    let client: Box<dyn GenerationClient> = Box::new(MockClient::new(vec![Ok("ok".into())]));
    assert_eq!(run(client.as_ref(), &compose("x")).await.unwrap(), "ok");
}

// =========================================================================
// user_message
// =========================================================================

#[test]
fn service_message_is_used_verbatim() {
    let err = GenerationError::Service { status: Some(429), message: Some("quota exceeded".into()) };
    assert_eq!(err.user_message(), "quota exceeded");
}

#[test]
fn missing_service_message_falls_back() {
    let err = GenerationError::Service { status: Some(500), message: None };
    assert_eq!(err.user_message(), FALLBACK_FAILURE_MESSAGE);
}

#[test]
fn blank_service_message_falls_back() {
    let err = GenerationError::Service { status: None, message: Some("   ".into()) };
    assert_eq!(err.user_message(), FALLBACK_FAILURE_MESSAGE);
}

#[test]
fn transport_message_is_used() {
    assert_eq!(GenerationError::Transport("Failed to fetch".into()).user_message(), "Failed to fetch");
}

#[test]
fn empty_response_uses_fallback() {
    assert_eq!(GenerationError::EmptyResponse.user_message(), FALLBACK_FAILURE_MESSAGE);
}
