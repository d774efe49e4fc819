use super::types::{MessagesRequest, MessagesResponse};
use crate::{Error, Result, config::AnthropicConfig};
use async_trait::async_trait;
use tracing::debug;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[async_trait]
pub trait AnthropicClient: Send + Sync {
    async fn create_message(&self, request: &MessagesRequest) -> Result<MessagesResponse>;
}

pub struct HttpAnthropicClient {
    client: reqwest::Client,
    api_key: String,
    messages_url: String,
}

impl HttpAnthropicClient {
    pub fn new(config: &AnthropicConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            messages_url: format!("{}/v1/messages", config.base_url.trim_end_matches('/')),
        })
    }

    fn normalize(error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout
        } else {
            Error::upstream(error.to_string())
        }
    }
}

#[async_trait]
impl AnthropicClient for HttpAnthropicClient {
    async fn create_message(&self, request: &MessagesRequest) -> Result<MessagesResponse> {
        debug!("Sending message request for model {}", request.model);

        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await
            .map_err(Self::normalize)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(format!(
                "Anthropic API returned {status}: {body}"
            )));
        }

        // A 2xx body that does not parse is a provider contract violation,
        // not a transport failure.
        response
            .json::<MessagesResponse>()
            .await
            .map_err(|_| Error::MalformedResponse)
    }
}
