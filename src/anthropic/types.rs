use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Provider response. Only `content` is consumed; every other field the API
/// returns (id, model, usage, stop_reason) is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Option<Vec<ContentBlock>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MessagesResponse {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(vec![ContentBlock {
                text: Some(text.into()),
            }]),
        }
    }

    /// First content block's text, if the response has the expected shape.
    /// `Some(None)` means the block exists but carries no usable text.
    pub fn first_text(&self) -> Option<Option<&str>> {
        let block = self.content.as_deref()?.first()?;
        Some(block.text.as_deref().filter(|text| !text.is_empty()))
    }
}
