use super::types::{ChatRequest, ChatResponse, ErrorResponse};
use crate::{
    Error,
    anthropic::{AnthropicClient, Message, MessagesRequest, MessagesResponse},
    config::AnthropicConfig,
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::{sync::Arc, time::Duration};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn AnthropicClient>,
    pub config: Arc<AnthropicConfig>,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let message = match request.message.as_deref() {
        Some(message) if !message.is_empty() => message,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Message is required.")),
            ));
        }
    };

    info!("Received chat request ({} bytes)", message.len());

    let upstream_request = MessagesRequest {
        model: state.config.model.clone(),
        max_tokens: state.config.max_tokens,
        messages: vec![Message::user(message)],
    };

    let response = create_message_with_retry(
        state.client.as_ref(),
        &upstream_request,
        state.config.max_retry_attempts,
    )
    .await
    .map_err(handle_upstream_error)?;

    let text = match response.first_text() {
        Some(Some(text)) => text.to_string(),
        Some(None) => "No response generated".to_string(),
        None => return Err(handle_upstream_error(Error::MalformedResponse)),
    };

    Ok(Json(ChatResponse::from_text(text)))
}

/// Explicit retry loop with exponential backoff: 2^attempt seconds between
/// attempts, transport failures only.
async fn create_message_with_retry(
    client: &dyn AnthropicClient,
    request: &MessagesRequest,
    max_retry_attempts: u32,
) -> crate::Result<MessagesResponse> {
    let mut attempt = 0;
    loop {
        match client.create_message(request).await {
            Ok(response) => return Ok(response),
            Err(err) if err.is_transport() && attempt < max_retry_attempts => {
                let wait = Duration::from_secs(1 << attempt);
                warn!(
                    "Upstream attempt {} failed ({}), retrying in {:?}",
                    attempt + 1,
                    err,
                    wait
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

fn handle_upstream_error(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    error!("Error communicating with Anthropic API: {}", err);

    let body = match err {
        Error::Timeout => ErrorResponse::with_details(
            "Request timed out",
            "The AI service took too long to respond",
        ),
        Error::MalformedResponse => {
            ErrorResponse::new("Invalid response format from AI service")
        }
        other => ErrorResponse::with_details(
            "Failed to fetch response from Anthropic API",
            other.to_string(),
        ),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}
