mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub fn load() -> Result<Config> {
    let api_key = env::var("ANTHROPIC_API_KEY")
        .map_err(|_| Error::config("ANTHROPIC_API_KEY must be set"))?;

    let mut anthropic = AnthropicConfig::new(api_key);
    if let Ok(base_url) = env::var("ANTHROPIC_BASE_URL") {
        anthropic.base_url = base_url;
    }

    let host = env::var("HOST").unwrap_or_else(|_| types::default_host());
    let port = match env::var("PORT") {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: {value}")))?,
        Err(_) => types::default_port(),
    };

    debug!("Configuration loaded for upstream {}", anthropic.base_url);

    Ok(Config {
        anthropic,
        server: ServerConfig { host, port },
    })
}
