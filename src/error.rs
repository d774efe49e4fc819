use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid response format from AI service")]
    MalformedResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Transport-level failures are the only retryable ones; a malformed
    /// body from a 2xx response is surfaced immediately.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout | Self::Upstream(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(Error::Timeout.is_transport());
        assert!(Error::upstream("connection reset").is_transport());
    }

    #[test]
    fn test_non_transport_errors_are_not_retryable() {
        assert!(!Error::MalformedResponse.is_transport());
        assert!(!Error::config("missing key").is_transport());
    }
}
