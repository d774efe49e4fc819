use async_trait::async_trait;
use chat_relay::{
    Error, Result,
    anthropic::{AnthropicClient, MessagesRequest, MessagesResponse},
};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Mock Anthropic client for testing: replays a scripted sequence of
/// results and records every request with its (virtual) call time.
pub struct MockAnthropicClient {
    pub results: Arc<Mutex<Vec<Result<MessagesResponse>>>>,
    pub requests: Arc<Mutex<Vec<MessagesRequest>>>,
    pub call_instants: Arc<Mutex<Vec<Instant>>>,
}

impl MockAnthropicClient {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            call_instants: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_results(self, results: Vec<Result<MessagesResponse>>) -> Self {
        *self.results.lock().unwrap() = results;
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<MessagesRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn get_call_instants(&self) -> Vec<Instant> {
        self.call_instants.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnthropicClient for MockAnthropicClient {
    async fn create_message(&self, request: &MessagesRequest) -> Result<MessagesResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.call_instants.lock().unwrap().push(Instant::now());

        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return Err(Error::upstream("No more mock results available"));
        }

        results.remove(0)
    }
}

impl Default for MockAnthropicClient {
    fn default() -> Self {
        Self::new()
    }
}
