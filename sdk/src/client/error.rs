//! Client error types.
//!
//! Provides error types for BetsAPI client operations.

use std::fmt;

use super::config::ConfigError;
use super::endpoint::redact_token;
use super::transport::TransportError;

/// Client errors.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration was missing or malformed.
    Config(ConfigError),

    /// The HTTP client could not be built.
    Request(reqwest::Error),

    /// Every attempt of a call failed.
    CallFailed {
        /// Endpoint that was called.
        endpoint: String,
        /// Number of attempts made.
        attempts: u32,
        /// Failure of the last attempt.
        last_error: TransportError,
    },

    /// A response body could not be decoded.
    Decode(serde_json::Error),
}

impl ClientError {
    /// Returns the body of the last response seen before a call failed.
    #[must_use]
    pub fn last_response_body(&self) -> Option<&str> {
        match self {
            Self::CallFailed { last_error, .. } => last_error.response_body(),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {}", e),
            Self::Request(e) => write!(f, "HTTP client error: {}", e),
            Self::CallFailed {
                endpoint,
                attempts,
                last_error,
            } => {
                write!(
                    f,
                    "BetsApi call has failed after {} attempt(s). Endpoint: {} Error: {}",
                    attempts,
                    redact_token(endpoint),
                    last_error
                )?;
                if let Some(body) = last_error.response_body() {
                    write!(f, " Response: {}", body)?;
                }
                Ok(())
            }
            Self::Decode(e) => write!(f, "failed to decode response: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Request(e) => Some(e),
            Self::CallFailed { last_error, .. } => Some(last_error),
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ClientError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}
