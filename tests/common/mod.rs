pub mod mocks;

use axum::Router;
use chat_relay::{config::AnthropicConfig, server};
use mocks::MockAnthropicClient;
use std::sync::Arc;

/// Router wired to a scripted client, with the production defaults for
/// model, token limit and retry budget.
pub fn create_test_app(client: Arc<MockAnthropicClient>) -> Router {
    let state = server::handlers::AppState {
        client,
        config: Arc::new(AnthropicConfig::new("test-key".to_string())),
    };

    server::router(state)
}
