use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic: AnthropicConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream call parameters. Model, token limit, timeout and retry budget
/// are fixed per deployment; only the credential and base URL come from the
/// environment.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub max_retry_attempts: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AnthropicConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout: default_timeout(),
            max_retry_attempts: default_max_retry_attempts(),
        }
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

// Close to Vercel's edge function limit.
fn default_timeout() -> Duration {
    Duration::from_secs(25)
}

fn default_max_retry_attempts() -> u32 {
    2
}
