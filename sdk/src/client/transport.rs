//! HTTP transport.
//!
//! The client only needs one capability from the network: a GET that either
//! completes with a status and a body or fails at the transport level.
//! [`HttpTransport`] captures that, and [`ReqwestTransport`] is the default
//! implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::config::ClientConfig;
use super::error::ClientError;

/// A completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: String,
}

impl TransportResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Kind of transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Could not connect.
    Connect,
    /// Request or body read timed out.
    Timeout,
    /// Response body could not be read.
    Body,
    /// A completed response with a non-success status, when the client is
    /// configured to treat those as failures.
    Status,
    /// Any other request failure.
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Body => "body",
            Self::Status => "status",
            Self::Other => "request",
        };
        f.write_str(name)
    }
}

/// A failed GET attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    /// Failure kind.
    pub kind: TransportErrorKind,

    /// Human readable description.
    pub message: String,

    /// Response received before the failure, if any.
    pub response: Option<TransportResponse>,
}

impl TransportError {
    /// Creates an error without a response.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            response: None,
        }
    }

    /// Creates an error for a response with a non-success status.
    #[must_use]
    pub fn status(response: TransportResponse) -> Self {
        Self {
            kind: TransportErrorKind::Status,
            message: format!("HTTP status {}", response.status),
            response: Some(response),
        }
    }

    /// Returns the body of the last known response, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        self.response.as_ref().map(|r| r.body.as_str())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Other
        };

        Self::new(kind, err.to_string())
    }
}

/// Pluggable HTTP GET capability.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request to `url`.
    ///
    /// Completed responses are returned whatever their status. Only failures
    /// to obtain a response are errors.
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        (**self).get(url).await
    }
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http })
    }

    /// Creates a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(config.timeout, &config.user_agent)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        assert!(TransportResponse::ok("{}").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::new(TransportErrorKind::Timeout, "operation timed out");
        assert_eq!(err.to_string(), "timeout error: operation timed out");
        assert!(err.response_body().is_none());
    }

    #[test]
    fn test_transport_error_status() {
        let err = TransportError::status(TransportResponse::new(503, "down"));
        assert_eq!(err.kind, TransportErrorKind::Status);
        assert_eq!(err.to_string(), "status error: HTTP status 503");
        assert_eq!(err.response_body(), Some("down"));
    }

    #[test]
    fn test_reqwest_transport_new() {
        let transport = ReqwestTransport::new(Duration::from_secs(5), "betsapi-sdk/test");
        assert!(transport.is_ok());
    }

    #[test]
    fn test_reqwest_transport_from_config() {
        let transport = ReqwestTransport::from_config(&ClientConfig::new("TOK"));
        assert!(transport.is_ok());
    }
}
