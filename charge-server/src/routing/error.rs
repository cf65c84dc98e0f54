//! Routing provider error types.

use std::fmt;

/// Errors from a routing provider.
///
/// Messages never include request URLs, which carry the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Network or protocol failure before a response arrived
    Transport(String),

    /// The request exceeded the client timeout
    Timeout,

    /// HTTP error status from the provider endpoint
    Status { status: u16, message: String },

    /// Response body could not be decoded
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider answered but the payload is missing required fields
    InvalidResponse(String),

    /// Provider refused the request (bad or missing key, API disabled)
    Denied(String),

    /// Quota exhausted
    RateLimited,

    /// Provider-level status other than success, e.g. `INVALID_REQUEST`
    Api { status: String, message: String },

    /// Provider not configured (e.g., no API key)
    NotConfigured(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Transport(msg) => write!(f, "transport error: {msg}"),
            ProviderError::Timeout => write!(f, "request to routing provider timed out"),
            ProviderError::Status { status, message } => {
                write!(f, "HTTP error {status}: {message}")
            }
            ProviderError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ProviderError::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
            ProviderError::Denied(msg) => write!(f, "REQUEST_DENIED: {msg}"),
            ProviderError::RateLimited => write!(f, "OVER_QUERY_LIMIT: quota exceeded"),
            ProviderError::Api { status, message } => {
                if message.is_empty() {
                    write!(f, "{status}")
                } else {
                    write!(f, "{status}: {message}")
                }
            }
            ProviderError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ProviderError::Timeout;
        }
        ProviderError::Transport(err.without_url().to_string())
    }
}
