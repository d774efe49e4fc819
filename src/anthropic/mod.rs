mod client;
mod types;

pub use client::{AnthropicClient, HttpAnthropicClient};
pub use types::*;
