use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: Reply,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Reply {
    pub content: Vec<ReplyBlock>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyBlock {
    pub text: String,
}

impl ChatResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            reply: Reply {
                content: vec![ReplyBlock { text: text.into() }],
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
